//! # 终端输出工具
//!
//! 统一的彩色消息输出。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `batch/`, `commands/` 使用
//! - 使用 `colored`, `tabled` crate

use colored::Colorize;
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印带模式前缀的单文件诊断 (`ext:` / `name:`)
pub fn print_diagnostic(prefix: &str, msg: &str) {
    println!("{} {}", format!("{}:", prefix).yellow().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印重命名成功消息
pub fn print_conversion(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to
    );
}

#[derive(Tabled)]
struct RenameRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
}

/// 打印重命名汇总表
pub fn print_rename_table(renamed: &[(PathBuf, PathBuf)]) {
    let rows: Vec<RenameRow> = renamed
        .iter()
        .enumerate()
        .map(|(i, (from, to))| RenameRow {
            index: i + 1,
            from: from.display().to_string(),
            to: to.display().to_string(),
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);
}
