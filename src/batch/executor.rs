//! # 文件系统能力与重命名执行器
//!
//! 把重命名器需要的三个文件系统调用（列目录、stat、rename）收拢到
//! `FileSystem` trait 中，真实实现走 `std::fs` + `walkdir`，
//! 单元测试注入内存实现。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 和 `commands/` 使用
//! - 使用 `walkdir` 列出目录

use crate::error::RenameError;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// stat 结果中关心的文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
}

/// 重命名器使用的文件系统能力
pub trait FileSystem {
    /// 列出目录的直接子项名称，按文件名排序
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// 查询路径类型
    fn stat(&self, path: &Path) -> io::Result<FileKind>;

    /// 移动 / 重命名
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// 基于操作系统的实现
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        // WalkDir 对普通文件根节点不报错，先确认确实是目录
        if !fs::metadata(dir)?.is_dir() {
            return Err(io::Error::other(format!(
                "{}: not a directory",
                dir.display()
            )));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            names.push(entry.file_name().to_os_string());
        }
        Ok(names)
    }

    fn stat(&self, path: &Path) -> io::Result<FileKind> {
        let meta = fs::metadata(path)?;
        if meta.is_dir() {
            Ok(FileKind::Directory)
        } else {
            Ok(FileKind::File)
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

/// 执行重命名并把失败归类为 "不存在" 或通用错误
pub fn execute_rename(fs: &dyn FileSystem, from: &Path, to: &Path) -> Result<(), RenameError> {
    fs.rename(from, to)
        .map_err(|e| classify_rename_error(from, to, e))
}

fn classify_rename_error(from: &Path, to: &Path, err: io::Error) -> RenameError {
    if err.kind() == io::ErrorKind::NotFound {
        RenameError::NotExists {
            path: from.to_path_buf(),
        }
    } else {
        RenameError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: err,
        }
    }
}
