//! # matrix 子命令 CLI 定义
//!
//! 由六个晶格参数计算正格子矩阵、倒格子矩阵与晶胞体积。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/matrix.rs`

use crate::models::ReciprocalConvention;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 倒格子约定
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Convention {
    /// a*·a = 1 (no 2π factor)
    #[default]
    Crystallographic,
    /// a*·a = 2π
    Physics,
}

impl From<Convention> for ReciprocalConvention {
    fn from(convention: Convention) -> Self {
        match convention {
            Convention::Crystallographic => ReciprocalConvention::Crystallographic,
            Convention::Physics => ReciprocalConvention::Physics,
        }
    }
}

/// matrix 子命令参数
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Lattice parameters "a,b,c,alpha,beta,gamma" (angles in degrees)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub cell: Vec<f64>,

    /// Reciprocal lattice convention
    #[arg(long, value_enum, default_value = "crystallographic", env = "LATTICEKIT_CONVENTION")]
    pub convention: Convention,

    /// Also write the parameter report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}
