//! # params 子命令实现
//!
//! 由三个基矢计算晶格参数，并给出标准取向下的正格子矩阵。
//!
//! ## 依赖关系
//! - 使用 `cli/params.rs` 定义的 ParamsArgs
//! - 使用 `models/lattice.rs` 与 `utils/vector.rs`

use crate::cli::params::ParamsArgs;
use crate::error::{LatticeError, Result};
use crate::models::LatticeParameters;
use crate::utils::output;
use crate::utils::vector::{self, Mat3};

use std::io;

/// 执行 params 命令
pub fn execute(args: ParamsArgs, strict: bool) -> Result<()> {
    output::print_header("Lattice Parameters from Basis Vectors");

    let matrix = parse_vectors(&args.vectors)?;
    output::print_matrix("Input Vectors", &matrix, ["va", "vb", "vc"]);

    if vector::determinant(&matrix) < 0.0 {
        output::print_warning("Input basis is left-handed; the rebuilt matrix is right-handed");
    }

    let params = LatticeParameters::from_vectors(matrix);
    super::check_geometry(&params, strict)?;

    output::print_header("Lattice Parameters");
    params
        .report(&mut io::stdout().lock())
        .map_err(|e| LatticeError::FileWriteError {
            path: "<stdout>".to_string(),
            source: e,
        })?;

    let direct = params.direct_matrix()?;
    output::print_matrix("Standard Orientation", &direct, ["a", "b", "c"]);

    Ok(())
}

/// 九个分量按行组装为基矢矩阵
fn parse_vectors(values: &[f64]) -> Result<Mat3> {
    match values {
        &[ax, ay, az, bx, by, bz, cx, cy, cz] => Ok([[ax, ay, az], [bx, by, bz], [cx, cy, cz]]),
        _ => Err(LatticeError::InvalidDimension {
            expected: 9,
            found: values.len(),
        }),
    }
}
