//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `export.rs`, `utils/`
//! - 子模块: matrix, params, build

pub mod build;
pub mod matrix;
pub mod params;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::LatticeParameters;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands, strict: bool) -> Result<()> {
    match cmd {
        Commands::Matrix(args) => matrix::execute(args, strict),
        Commands::Params(args) => params::execute(args, strict),
        Commands::Build(args) => build::execute(args, strict),
    }
}

/// 几何合理性检查：严格模式下返回错误，否则只打印警告
fn check_geometry(params: &LatticeParameters, strict: bool) -> Result<()> {
    match params.validate() {
        Ok(()) => Ok(()),
        Err(e) if strict => Err(e),
        Err(e) => {
            output::print_warning(&format!("{} (continuing, use --strict to abort)", e));
            Ok(())
        }
    }
}
