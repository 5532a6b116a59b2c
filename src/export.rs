//! # 原子坐标导出
//!
//! 将晶格中的原子（分数坐标与笛卡尔坐标）导出为 CSV 表格。
//!
//! ## 依赖关系
//! - 被 `commands/build.rs` 调用
//! - 使用 `models/structure.rs` 的 Lattice 结构
//! - 使用 `csv` 与 `serde` 写入记录

use crate::error::{LatticeError, Result};
use crate::models::Lattice;

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Serialize)]
struct AtomRecord<'a> {
    index: usize,
    element: &'a str,
    label: &'a str,
    frac_x: f64,
    frac_y: f64,
    frac_z: f64,
    cart_x: f64,
    cart_y: f64,
    cart_z: f64,
}

/// 写出原子表到任意输出
pub fn write_atoms_csv<W: Write>(lattice: &Lattice, writer: W) -> Result<()> {
    let cartesian = lattice.cartesian_positions()?;
    let mut wtr = csv::Writer::from_writer(writer);

    for (index, (atom, cart)) in lattice.atoms().iter().zip(&cartesian).enumerate() {
        let frac = atom.position.as_array();
        wtr.serialize(AtomRecord {
            index: index + 1,
            element: atom.element.symbol,
            label: atom.label.as_deref().unwrap_or(""),
            frac_x: frac[0],
            frac_y: frac[1],
            frac_z: frac[2],
            cart_x: cart[0],
            cart_y: cart[1],
            cart_z: cart[2],
        })?;
    }

    wtr.flush().map_err(|e| LatticeError::CsvError(e.into()))?;
    Ok(())
}

/// 导出原子表为 CSV 文件
pub fn atoms_to_csv(lattice: &Lattice, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| LatticeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_atoms_csv(lattice, file)
}
