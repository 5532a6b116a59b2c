//! # 统一错误处理模块
//!
//! 定义 latticekit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 几何无效（长度非正、角度越界）：由 `validate()` 报告，构造本身不失败
//! - 角度组合不自洽、γ 退化、基矢共面：矩阵计算时的硬错误
//! - 输入维度错误：构造时直接拒绝
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// latticekit 统一错误类型
#[derive(Error, Debug)]
pub enum LatticeError {
    // ─────────────────────────────────────────────────────────────
    // 几何错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid lattice geometry: {parameter} = {value}")]
    InvalidGeometry { parameter: &'static str, value: f64 },

    #[error("Degenerate lattice: gamma = {gamma}° makes sin(gamma) vanish")]
    DegenerateGamma { gamma: f64 },

    #[error(
        "Inconsistent angles: alpha = {alpha}°, beta = {beta}°, gamma = {gamma}° \
         (1 - cx^2 - cy^2 = {radicand})"
    )]
    InconsistentAngles {
        alpha: f64,
        beta: f64,
        gamma: f64,
        radicand: f64,
    },

    #[error("Singular basis: unit-cell volume {volume} is too close to zero")]
    SingularBasis { volume: f64 },

    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Expected {expected} values, found {found}")]
    InvalidDimension { expected: usize, found: usize },

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output file already exists: {path} (use --overwrite)")]
    FileExists { path: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LatticeError>;
