//! # latticekit 库入口
//!
//! 晶格参数模型、元素数据库与立方晶格结构，供命令行和其他结构组装代码使用。
//!
//! ## 模块
//! - `models`: 晶格参数、元素、晶格结构
//! - `utils`: 向量运算与终端输出
//! - `export`: CSV 导出
//! - `cli` / `commands`: 命令行定义与执行
//! - `error`: 统一错误类型

pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod models;
pub mod utils;

pub use error::{LatticeError, Result};
pub use models::{
    Atom, CubicKind, Element, ElementLookup, FracCoord, Lattice, LatticeParameters, PeriodicTable,
    ReciprocalConvention,
};
