//! # 数据模型模块
//!
//! 定义重命名选项和消歧计数表。
//!
//! ## 依赖关系
//! - 被 `cli/`, `commands/` 使用
//! - 子模块: options, counter

pub mod counter;
pub mod options;

pub use counter::ExtensionCounters;
pub use options::{RenameMode, RenameOptions};
