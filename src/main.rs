//! # latticekit - 晶格参数与正/倒格子矩阵工具
//!
//! 在晶格参数 (a, b, c, α, β, γ)、基矢矩阵和倒格子矩阵之间转换，
//! 并构建简单立方、面心立方、体心立方晶格的原子坐标。
//!
//! ## 子命令
//! - `matrix` - 晶格参数 -> 正格子/倒格子矩阵
//! - `params` - 基矢 -> 晶格参数
//! - `build`  - 构建立方晶格并导出原子坐标
//!
//! ## 依赖关系
//! ```text
//! main.rs -> lib.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── models/    (晶格参数、元素、结构)
//!   │     └── export.rs  (CSV 导出)
//!   ├── utils/      (向量运算、输出工具)
//!   └── error.rs    (错误处理)
//! ```

use clap::Parser;
use latticekit::cli::Cli;
use latticekit::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = commands::run(cli.command, cli.strict) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
