//! # 数据模型模块
//!
//! 晶格参数、元素与晶格结构的数据模型。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `export.rs` 使用
//! - 子模块: lattice, element, structure

pub mod element;
pub mod lattice;
pub mod structure;

pub use element::{Element, ElementLookup, PeriodicTable};
pub use lattice::{LatticeParameters, ReciprocalConvention};
pub use structure::{Atom, CubicKind, FracCoord, Lattice};
