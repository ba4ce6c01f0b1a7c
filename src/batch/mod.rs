//! # 批量处理模块
//!
//! 两种重命名模式共用的批量处理能力。
//!
//! ## 功能
//! - 解析文件列表并展开目录通配符
//! - 文件系统能力抽象与重命名执行
//! - 顺序执行与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `walkdir` 列出目录

pub mod collector;
pub mod executor;
pub mod runner;

pub use collector::{expand, FileList};
pub use executor::{execute_rename, FileKind, FileSystem, OsFileSystem};
pub use runner::{BatchResult, BatchRunner, ProcessResult};
