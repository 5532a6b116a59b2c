//! # params 子命令 CLI 定义
//!
//! 由三个基矢（行向量 va, vb, vc）反推晶格参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/params.rs`

use clap::Args;

/// params 子命令参数
#[derive(Args, Debug)]
pub struct ParamsArgs {
    /// Basis vectors "ax,ay,az,bx,by,bz,cx,cy,cz"
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub vectors: Vec<f64>,
}
