//! # 工具函数模块
//!
//! 提供向量运算与美化输出工具。
//!
//! ## 依赖关系
//! - 被 `models/` 和 `commands/` 模块使用
//! - 子模块: output, vector

pub mod output;
pub mod vector;
