//! # 消歧计数表
//!
//! 文件名模式下，多个源文件会落到同一个目标名上，
//! 用按扩展名分组的计数器追加 `_N` 后缀区分。
//!
//! ## 规则
//! - 不保留扩展名时所有文件共用键 `"."`
//! - 保留扩展名时按扩展名分组，无扩展名的文件使用键 `"."`
//! - 每个键从 0 开始，每次尝试重命名后加一（失败的重命名也占用一个序号）

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// 无扩展名 / 不区分扩展名时使用的键
const SHARED_KEY: &str = ".";

/// 按扩展名分组的计数表，只存活于一次重命名调用
#[derive(Debug, Clone)]
pub struct ExtensionCounters {
    counters: HashMap<OsString, usize>,
    keep_extension: bool,
}

impl ExtensionCounters {
    pub fn new(keep_extension: bool) -> Self {
        let mut counters = HashMap::new();
        counters.insert(OsString::from(SHARED_KEY), 0);
        Self {
            counters,
            keep_extension,
        }
    }

    fn key<'a>(&self, extension: &'a OsStr) -> &'a OsStr {
        if !self.keep_extension || extension.is_empty() {
            OsStr::new(SHARED_KEY)
        } else {
            extension
        }
    }

    /// 当前计数
    pub fn current(&self, extension: &OsStr) -> usize {
        self.counters
            .get(self.key(extension))
            .copied()
            .unwrap_or(0)
    }

    /// 计数非零时返回 `_N` 后缀
    pub fn suffix(&self, extension: &OsStr) -> Option<String> {
        match self.current(extension) {
            0 => None,
            n => Some(format!("_{}", n)),
        }
    }

    /// 记录一次重命名尝试
    pub fn bump(&mut self, extension: &OsStr) {
        let key = self.key(extension).to_os_string();
        *self.counters.entry(key).or_insert(0) += 1;
    }
}
