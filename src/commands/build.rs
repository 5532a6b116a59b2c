//! # build 子命令实现
//!
//! 构建立方晶格（简单立方/面心/体心），打印原子坐标表，可选导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/build.rs` 定义的 BuildArgs
//! - 使用 `models/structure.rs` 构建晶格
//! - 使用 `export.rs` 导出 CSV

use crate::cli::build::BuildArgs;
use crate::error::{LatticeError, Result};
use crate::export;
use crate::models::{CubicKind, Lattice, PeriodicTable};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行 build 命令
pub fn execute(args: BuildArgs, strict: bool) -> Result<()> {
    let kind = CubicKind::from(args.kind);
    output::print_header(&format!("Build {} Lattice", kind.to_string().to_uppercase()));

    if let Some(path) = &args.output {
        if path.exists() && !args.overwrite {
            return Err(LatticeError::FileExists {
                path: path.display().to_string(),
            });
        }
    }

    let lattice = Lattice::cubic(kind, &PeriodicTable, &args.element, args.a)?;
    super::check_geometry(lattice.parameters(), strict)?;

    if let Some(atom) = lattice.atoms().first() {
        output::print_info(&format!(
            "Element: {} ({}), mass {:.3} u",
            atom.element.symbol, atom.element.name, atom.element.mass
        ));
    }
    output::print_info(&format!("Lattice parameters: {}", lattice.parameters()));

    print_atom_table(&lattice)?;

    output::print_separator();
    output::print_info(&format!(
        "Formula: {}, cell mass {:.3} u, volume {:.6}",
        lattice.formula(),
        lattice.cell_mass(),
        lattice.parameters().volume()?
    ));

    if let Some(path) = &args.output {
        export::atoms_to_csv(&lattice, path)?;
        output::print_success(&format!("Atoms saved to '{}'", path.display()));
    }

    Ok(())
}

/// 打印原子坐标表
fn print_atom_table(lattice: &Lattice) -> Result<()> {
    #[derive(Tabled)]
    struct AtomRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Element")]
        element: String,
        #[tabled(rename = "Fractional")]
        fractional: String,
        #[tabled(rename = "Cartesian")]
        cartesian: String,
    }

    let cartesian = lattice.cartesian_positions()?;
    let rows: Vec<AtomRow> = lattice
        .atoms()
        .iter()
        .zip(&cartesian)
        .enumerate()
        .map(|(i, (atom, cart))| AtomRow {
            index: i + 1,
            element: atom.element.symbol.to_string(),
            fractional: format!(
                "{:.4} {:.4} {:.4}",
                atom.position.x(),
                atom.position.y(),
                atom.position.z()
            ),
            cartesian: format!("{:.4} {:.4} {:.4}", cart[0], cart[1], cart[2]),
        })
        .collect();

    output::print_header(&format!("{} Atoms", rows.len()));
    println!("{}", Table::new(&rows));
    Ok(())
}
