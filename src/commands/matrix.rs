//! # matrix 子命令实现
//!
//! 由 (a, b, c, α, β, γ) 计算正格子矩阵、倒格子矩阵与晶胞体积。
//!
//! ## 依赖关系
//! - 使用 `cli/matrix.rs` 定义的 MatrixArgs
//! - 使用 `models/lattice.rs` 进行计算

use crate::cli::matrix::MatrixArgs;
use crate::error::{LatticeError, Result};
use crate::models::{LatticeParameters, ReciprocalConvention};
use crate::utils::output;

use std::fs::File;
use std::io;
use std::path::Path;

/// 执行 matrix 命令
pub fn execute(args: MatrixArgs, strict: bool) -> Result<()> {
    output::print_header("Lattice Parameters");

    let params = LatticeParameters::try_from_slice(&args.cell)?;
    super::check_geometry(&params, strict)?;

    params
        .report(&mut io::stdout().lock())
        .map_err(|e| LatticeError::FileWriteError {
            path: "<stdout>".to_string(),
            source: e,
        })?;

    if let Some(path) = &args.report {
        write_report(&params, path)?;
        output::print_success(&format!("Report saved to '{}'", path.display()));
    }

    let direct = params.direct_matrix()?;
    output::print_matrix("Direct Matrix", &direct, ["a", "b", "c"]);

    let convention = ReciprocalConvention::from(args.convention);
    let reciprocal = params.reciprocal_matrix_with(convention)?;
    output::print_matrix(
        &format!("Reciprocal Matrix ({})", convention),
        &reciprocal,
        ["a*", "b*", "c*"],
    );

    output::print_separator();
    output::print_info(&format!("Cell volume: {:.6}", params.volume()?));

    Ok(())
}

/// 将参数报告写入文件
fn write_report(params: &LatticeParameters, path: &Path) -> Result<()> {
    let to_err = |e: io::Error| LatticeError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let mut file = File::create(path).map_err(to_err)?;
    params.report(&mut file).map_err(to_err)
}
