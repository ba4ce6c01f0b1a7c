//! # 扩展名模式
//!
//! 替换、追加或删除每个文件的扩展名。
//!
//! ## 功能
//! - 替换：`report.csv` + `txt` -> `report.txt`
//! - 追加：`report.csv` + `bak` -> `report.csv.bak`
//! - 删除（新扩展名为空）：`report.csv` -> `report`
//! - 点文件（`.gitignore`）和无扩展名文件在替换模式下追加新扩展名，
//!   不会吃掉开头的点
//!
//! 扩展名只从基本文件名中取，目录名里的点不参与计算。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/` 展开、执行、统计

use super::split_base;
use crate::batch::{
    execute_rename, expand, BatchResult, BatchRunner, FileKind, FileList, FileSystem,
    ProcessResult,
};
use crate::error::{RenameError, Result};
use crate::models::{RenameMode, RenameOptions};
use crate::utils::{os_str, output};

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// 执行扩展名重命名；缺少文件参数时打印提示并返回 `None`
pub fn execute(fs: &dyn FileSystem, options: &RenameOptions) -> Result<Option<BatchResult>> {
    let mode = RenameMode::Extension;
    if os_str::trim(&options.files).is_empty() {
        output::print_diagnostic(
            mode.prefix(),
            "the names of the files whose extensions will be renamed are required",
        );
        return Ok(None);
    }

    let files = expand(fs, FileList::parse(&options.files))?;
    let new_ext = os_str::trim(&options.new_value);

    let result = BatchRunner::new(mode)
        .verbose(options.verbose)
        .run(&files, |file| rename_one(fs, file, new_ext, options.append));

    Ok(Some(result))
}

fn rename_one(
    fs: &dyn FileSystem,
    file: &OsStr,
    new_ext: &OsStr,
    append: bool,
) -> ProcessResult {
    let file = os_str::trim(file);
    let path = Path::new(file);

    match fs.stat(path) {
        Err(e) => {
            return ProcessResult::Skipped(RenameError::Stat {
                path: path.to_path_buf(),
                source: e,
            })
        }
        Ok(FileKind::Directory) => {
            return ProcessResult::AbortBatch {
                path: path.to_path_buf(),
            }
        }
        Ok(FileKind::File) => {}
    }

    let Some(target) = target_name(file, new_ext, append) else {
        return ProcessResult::Skipped(RenameError::NoExtension {
            path: path.to_path_buf(),
        });
    };
    let target = PathBuf::from(target);

    match execute_rename(fs, path, &target) {
        Ok(()) => ProcessResult::Renamed {
            from: path.to_path_buf(),
            to: target,
        },
        Err(e) => ProcessResult::Skipped(e),
    }
}

/// 基本文件名是否带扩展名（点文件和不含点的名字都不算）
fn has_extension(base: &OsStr) -> bool {
    let dots = os_str::count(base, b'.');
    let is_dotfile = base.as_encoded_bytes().starts_with(b".") && dots == 1;
    dots > 0 && !is_dotfile
}

fn stem(base: &OsStr) -> &OsStr {
    os_str::rsplit_once(base, b'.').map_or(base, |(stem, _)| stem)
}

/// 计算新路径；删除扩展名但文件没有扩展名时返回 `None`
pub fn target_name(path: &OsStr, new_ext: &OsStr, append: bool) -> Option<OsString> {
    let (dir, base) = split_base(path);

    if new_ext.is_empty() {
        if !has_extension(base) {
            return None;
        }
        let mut target = dir.to_os_string();
        target.push(stem(base));
        return Some(target);
    }

    let mut target = if append || !has_extension(base) {
        path.to_os_string()
    } else {
        let mut target = dir.to_os_string();
        target.push(stem(base));
        target
    };
    target.push(".");
    target.push(new_ext);
    Some(target)
}
