//! # 批量执行器
//!
//! 按列表顺序逐个处理文件，汇总结果。
//!
//! ## 功能
//! - 严格顺序执行（计数器和诊断输出都依赖顺序）
//! - 单文件失败打印诊断后继续
//! - 遇到目录时取消剩余文件
//! - 结果统计
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `utils/output.rs` 打印诊断

use crate::batch::collector::FileList;
use crate::error::RenameError;
use crate::models::RenameMode;
use crate::utils::output;

use std::ffi::OsStr;
use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug)]
pub enum ProcessResult {
    /// 重命名成功
    Renamed { from: PathBuf, to: PathBuf },
    /// 打印诊断后跳过
    Skipped(RenameError),
    /// 路径是目录，取消本批次剩余文件
    AbortBatch { path: PathBuf },
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功的重命名 (原路径, 新路径)
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// 跳过数量
    pub skipped: usize,
    /// 导致批次中止的目录
    pub aborted_at: Option<PathBuf>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Renamed { from, to } => self.renamed.push((from, to)),
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::AbortBatch { path } => self.aborted_at = Some(path),
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    mode: RenameMode,
    verbose: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(mode: RenameMode) -> Self {
        Self {
            mode,
            verbose: false,
        }
    }

    /// 是否逐个打印成功的重命名
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 顺序处理文件列表
    pub fn run<F>(&self, files: &FileList, mut processor: F) -> BatchResult
    where
        F: FnMut(&OsStr) -> ProcessResult,
    {
        let mut batch_result = BatchResult::default();

        for file in files.iter() {
            let result = processor(file);

            match &result {
                ProcessResult::Renamed { from, to } => {
                    if self.verbose {
                        output::print_conversion(
                            &from.display().to_string(),
                            &to.display().to_string(),
                        );
                    }
                }
                ProcessResult::Skipped(err) => {
                    output::print_diagnostic(self.mode.prefix(), &err.to_string());
                }
                ProcessResult::AbortBatch { .. } => {}
            }

            let stop = matches!(result, ProcessResult::AbortBatch { .. });
            batch_result.merge(result);
            if stop {
                break;
            }
        }

        batch_result
    }
}
