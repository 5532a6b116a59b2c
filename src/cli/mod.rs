//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `matrix`: 由晶格参数计算正格子、倒格子矩阵
//! - `params`: 由三个基矢反推晶格参数
//! - `build`: 构建立方晶格（sc/fcc/bcc）并输出原子坐标
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: matrix, params, build

pub mod build;
pub mod matrix;
pub mod params;

use clap::{Parser, Subcommand};

/// latticekit - 晶格参数与正/倒格子矩阵工具
#[derive(Parser, Debug)]
#[command(name = "latticekit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Crystallographic lattice parameters, direct/reciprocal matrices and cubic lattices", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging (debug level; RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Reject geometrically invalid lattice parameters instead of warning
    #[arg(long, global = true, env = "LATTICEKIT_STRICT", default_value_t = false)]
    pub strict: bool,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute direct and reciprocal matrices from a, b, c, alpha, beta, gamma
    Matrix(matrix::MatrixArgs),

    /// Derive lattice parameters from three basis vectors
    Params(params::ParamsArgs),

    /// Build a cubic lattice (sc, fcc, bcc) and list its atoms
    Build(build::BuildArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_matrix() {
        let cli = Cli::try_parse_from([
            "latticekit",
            "matrix",
            "--cell",
            "4,5,6,90,90,120",
            "--convention",
            "physics",
        ])
        .unwrap();

        match cli.command {
            Commands::Matrix(args) => {
                assert_eq!(args.cell, vec![4.0, 5.0, 6.0, 90.0, 90.0, 120.0]);
                assert_eq!(args.convention, matrix::Convention::Physics);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_params_with_negative_components() {
        let cli = Cli::try_parse_from([
            "latticekit",
            "params",
            "--vectors",
            "-1.5,2.598,0,3,0,0,0,0,5",
        ])
        .unwrap();

        match cli.command {
            Commands::Params(args) => {
                assert_eq!(args.vectors.len(), 9);
                assert_eq!(args.vectors[0], -1.5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_build_with_global_flags() {
        let cli = Cli::try_parse_from([
            "latticekit",
            "build",
            "--kind",
            "fcc",
            "--element",
            "Cu",
            "-a",
            "3.615",
            "--strict",
            "-v",
        ])
        .unwrap();

        assert!(cli.strict);
        assert!(cli.verbose);
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.kind, build::LatticeKind::Fcc);
                assert_eq!(args.element, "Cu");
                assert!((args.a - 3.615).abs() < 1e-12);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from([
            "latticekit",
            "build",
            "--kind",
            "hcp",
            "--element",
            "Mg",
            "-a",
            "3.2",
        ])
        .is_err());
    }
}
