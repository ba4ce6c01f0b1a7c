//! # 重命名选项
//!
//! CLI 解析完成后交给重命名器的配置。

use std::ffi::OsString;

/// 重命名模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameMode {
    /// 只改写扩展名
    Extension,
    /// 改写文件基本名
    Filename,
}

impl RenameMode {
    /// 诊断输出前缀 (`ext` / `name`)
    pub fn prefix(&self) -> &'static str {
        match self {
            RenameMode::Extension => "ext",
            RenameMode::Filename => "name",
        }
    }
}

/// 一次调用的完整选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    pub mode: RenameMode,
    /// 逗号分隔的文件列表，或以 `*` 结尾的单个目录通配符
    pub files: OsString,
    /// 新扩展名（扩展名模式）或新文件名（文件名模式）
    pub new_value: OsString,
    /// 仅扩展名模式：追加而不是替换
    pub append: bool,
    /// 仅文件名模式：保留原扩展名
    pub keep_extension: bool,
    /// 逐个打印成功的重命名
    pub verbose: bool,
    /// 批次结束后打印重命名表
    pub summary: bool,
}

impl RenameOptions {
    /// 以默认开关创建选项
    pub fn new(
        mode: RenameMode,
        files: impl Into<OsString>,
        new_value: impl Into<OsString>,
    ) -> Self {
        RenameOptions {
            mode,
            files: files.into(),
            new_value: new_value.into(),
            append: false,
            keep_extension: false,
            verbose: false,
            summary: false,
        }
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn with_keep_extension(mut self, keep: bool) -> Self {
        self.keep_extension = keep;
        self
    }
}
