//! # 工具函数模块
//!
//! 提供美化输出和不经 UTF-8 转换的 `OsStr` 切分工具。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `batch/`, `commands/`, `models/` 使用
//! - 子模块: output, os_str

pub mod os_str;
pub mod output;
