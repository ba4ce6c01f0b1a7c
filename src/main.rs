//! # bulk-rename - 批量文件重命名工具
//!
//! 一次性重命名一批文件：改写扩展名，或把基本名换成同一个新名字并自动编号。
//!
//! ## 模式
//! - 扩展名模式 (`-ext`) - 替换 / 追加 / 删除扩展名
//! - 文件名模式（默认）- 替换基本名，可保留原扩展名，重名时追加 `_N`
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (两种重命名模式)
//!   │     ├── batch/     (文件收集、重命名执行、顺序执行器)
//!   │     └── models/    (选项与计数表)
//!   ├── utils/      (终端输出)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse_args();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.wants_usage() {
        cli::print_usage();
        return;
    }

    if let Err(e) = commands::run(&cli.into_options()) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
