//! # 统一错误处理模块
//!
//! 定义 bulk-rename 的所有错误类型，使用 `thiserror` 派生。
//!
//! 致命错误（目录展开失败）通过 `Result` 向上传递并终止整个调用；
//! 单文件错误只随 `ProcessResult::Skipped` 传给批量执行器打印，不中断批次。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::PathBuf;
use thiserror::Error;

/// bulk-rename 统一错误类型
#[derive(Error, Debug)]
pub enum RenameError {
    // ─────────────────────────────────────────────────────────────
    // 致命错误（终止整个调用）
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to list directory {}: {source}", path.display())]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // 单文件错误（打印后继续处理下一个文件）
    // ─────────────────────────────────────────────────────────────
    #[error("stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no extension to remove", path.display())]
    NoExtension { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // 重命名错误
    // ─────────────────────────────────────────────────────────────
    #[error("{} not exists", path.display())]
    NotExists { path: PathBuf },

    #[error("rename {} {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RenameError>;
