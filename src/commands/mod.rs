//! # 命令执行模块
//!
//! 根据模式选择重命名器并汇报批次结果。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `batch/`, `models/`, `utils/`
//! - 子模块: extension, filename

pub mod extension;
pub mod filename;

use crate::batch::{BatchResult, OsFileSystem};
use crate::error::Result;
use crate::models::{RenameMode, RenameOptions};
use crate::utils::{os_str, output};

use std::ffi::OsStr;
use std::path::MAIN_SEPARATOR;

/// 执行命令
pub fn run(options: &RenameOptions) -> Result<()> {
    let fs = OsFileSystem;
    let result = match options.mode {
        RenameMode::Extension => extension::execute(&fs, options)?,
        RenameMode::Filename => filename::execute(&fs, options)?,
    };

    if let Some(result) = result {
        report(options, &result);
    }
    Ok(())
}

/// 打印批次汇总
fn report(options: &RenameOptions, result: &BatchResult) {
    if options.summary && !result.renamed.is_empty() {
        output::print_rename_table(&result.renamed);
    }

    let mut msg = format!(
        "Renamed {} file(s) ({} skipped)",
        result.renamed.len(),
        result.skipped
    );
    if let Some(dir) = &result.aborted_at {
        msg.push_str(&format!(" (batch stopped at {})", dir.display()));
    }
    output::print_done(&msg);
}

/// 拆分为目录前缀（含末尾分隔符）和基本文件名
pub(crate) fn split_base(path: &OsStr) -> (&OsStr, &OsStr) {
    os_str::split_after_last(path, MAIN_SEPARATOR as u8)
}
