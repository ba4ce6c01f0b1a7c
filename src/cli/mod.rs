//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `-ext`: 扩展名模式（默认文件名模式）
//! - `-files`: 逗号分隔的文件列表，或 `dir/*`
//! - `-new`: 新扩展名 / 新文件名
//! - `-append`: 扩展名模式下追加而非替换
//! - `-keep-ext`: 文件名模式下保留原扩展名
//!
//! 参数沿用单横线长选项写法，解析前由 `normalize_args` 改写成 clap 的 `--name`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 产出 `models::RenameOptions`

use crate::models::{RenameMode, RenameOptions};

use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;

const EXAMPLES: &str = "\
examples:
  bulk-rename -files \"./*\" -new \"new-name\"
  bulk-rename -files \"./*\" -new \"new-name\" -keep-ext
  bulk-rename -files \"./file1,./file2\" -new \"new-name\"

  bulk-rename -ext -files \"./*\" -new \"go\"
  bulk-rename -ext -files \"./*\" -new \"go\" -append
  bulk-rename -ext -files \"./file1.cpp,./file2.cpp\" -new \"go\"";

/// 可以写成单横线形式的长选项
const LONG_FLAGS: &[&str] = &[
    "ext", "files", "new", "append", "keep-ext", "verbose", "summary", "no-color", "help",
    "version",
];

/// bulk-rename - 批量重命名文件
///
/// 布尔开关既可以单独出现（`-append`），也可以写成 `-append=false`。
#[derive(Parser, Debug)]
#[command(name = "bulk-rename")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Rename batches of files: swap extensions or give them a new base name", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Rename file extensions instead of filenames
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub ext: bool,

    /// Files to be renamed: comma-separated paths, or a single "dir/*"
    #[arg(long, default_value = "")]
    pub files: OsString,

    /// New extension (with -ext) or new filename
    #[arg(long, default_value = "")]
    pub new: OsString,

    /// Append the new extension instead of replacing the current one (-ext only)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub append: bool,

    /// Keep the original file extension when renaming filenames
    #[arg(
        long = "keep-ext",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub keep_ext: bool,

    /// Print every successful rename
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Print a table of all renames after the batch
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub summary: bool,

    /// Disable colored output
    #[arg(
        long,
        env = "BULK_RENAME_NO_COLOR",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub no_color: bool,
}

impl Cli {
    /// 解析进程参数（先做单横线改写）
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }

    /// `-files` 和 `-new` 都为空时只打印用法
    pub fn wants_usage(&self) -> bool {
        self.files.is_empty() && self.new.is_empty()
    }

    pub fn into_options(self) -> RenameOptions {
        let mode = if self.ext {
            RenameMode::Extension
        } else {
            RenameMode::Filename
        };

        RenameOptions {
            verbose: self.verbose,
            summary: self.summary,
            ..RenameOptions::new(mode, self.files, self.new)
                .with_append(self.append)
                .with_keep_extension(self.keep_ext)
        }
    }
}

/// 打印用法
pub fn print_usage() {
    Cli::command().print_help().ok();
}

/// 把 `-files x` / `-files=x` 这类单横线长选项改写为 `--files`
///
/// 按字节匹配，参数值不是 UTF-8 时同样改写。
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            normalized.push(arg);
            continue;
        }

        let bytes = arg.as_encoded_bytes();
        if bytes == b"--" {
            passthrough = true;
        } else if bytes.starts_with(b"-") && !bytes.starts_with(b"--") {
            let name = bytes[1..].split(|b| *b == b'=').next().unwrap_or_default();
            if LONG_FLAGS.iter().any(|flag| flag.as_bytes() == name) {
                let mut rewritten = OsString::from("-");
                rewritten.push(&arg);
                normalized.push(rewritten);
                continue;
            }
        }

        normalized.push(arg);
    }

    normalized
}
