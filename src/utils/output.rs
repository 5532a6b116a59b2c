//! # 美化输出工具
//!
//! 提供统一的终端输出样式与矩阵表格。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` 与 `tabled` crate

use crate::utils::vector::Mat3;

use colored::Colorize;
use tabled::{Table, Tabled};

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

#[derive(Tabled)]
struct MatrixRow {
    #[tabled(rename = "")]
    name: String,
    x: String,
    y: String,
    z: String,
}

/// 将 3x3 矩阵渲染为表格，`names` 为每一行的标签
pub fn matrix_table(m: &Mat3, names: [&str; 3]) -> String {
    let rows: Vec<MatrixRow> = m
        .iter()
        .zip(names)
        .map(|(row, name)| MatrixRow {
            name: name.to_string(),
            x: format!("{:.6}", row[0]),
            y: format!("{:.6}", row[1]),
            z: format!("{:.6}", row[2]),
        })
        .collect();

    Table::new(&rows).to_string()
}

/// 打印带标题的 3x3 矩阵
pub fn print_matrix(title: &str, m: &Mat3, names: [&str; 3]) {
    print_header(title);
    println!("{}", matrix_table(m, names));
}
