//! # build 子命令 CLI 定义
//!
//! 构建单一元素的立方晶格并列出原子坐标，可导出为 CSV。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/build.rs`

use crate::models::CubicKind;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 立方晶格类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LatticeKind {
    /// Simple cubic
    Sc,
    /// Face-centered cubic
    Fcc,
    /// Body-centered cubic
    Bcc,
}

impl From<LatticeKind> for CubicKind {
    fn from(kind: LatticeKind) -> Self {
        match kind {
            LatticeKind::Sc => CubicKind::Simple,
            LatticeKind::Fcc => CubicKind::FaceCentered,
            LatticeKind::Bcc => CubicKind::BodyCentered,
        }
    }
}

/// build 子命令参数
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Lattice type
    #[arg(short, long, value_enum)]
    pub kind: LatticeKind,

    /// Element symbol (e.g., Fe, Cu)
    #[arg(short, long)]
    pub element: String,

    /// Lattice constant
    #[arg(short = 'a', long = "lattice-constant")]
    pub a: f64,

    /// Write the atom table (fractional + Cartesian) to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
