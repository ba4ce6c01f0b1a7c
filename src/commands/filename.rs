//! # 文件名模式
//!
//! 把每个文件的基本名换成同一个新名字，目录不变。
//! 重名时按顺序追加 `_1`, `_2`, ... 后缀。
//!
//! ## 功能
//! - 默认丢弃原扩展名，所有文件共用一个计数器
//! - `keep-ext` 时保留原扩展名，每种扩展名各自计数
//! - 计数器在每次尝试重命名后递增，失败的重命名同样占用序号
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/` 展开、执行、统计
//! - 使用 `models/counter.rs` 的计数表

use super::split_base;
use crate::batch::{
    execute_rename, expand, BatchResult, BatchRunner, FileKind, FileList, FileSystem,
    ProcessResult,
};
use crate::error::{RenameError, Result};
use crate::models::{ExtensionCounters, RenameMode, RenameOptions};
use crate::utils::{os_str, output};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// 执行文件名重命名；缺少参数时打印提示并返回 `None`
pub fn execute(fs: &dyn FileSystem, options: &RenameOptions) -> Result<Option<BatchResult>> {
    let mode = RenameMode::Filename;
    if os_str::trim(&options.files).is_empty() {
        output::print_diagnostic(mode.prefix(), "files to be renamed are required");
        return Ok(None);
    }
    if os_str::trim(&options.new_value).is_empty() {
        output::print_diagnostic(mode.prefix(), "new filename is required");
        return Ok(None);
    }

    let files = expand(fs, FileList::parse(&options.files))?;
    let mut counters = ExtensionCounters::new(options.keep_extension);

    let result = BatchRunner::new(mode)
        .verbose(options.verbose)
        .run(&files, |file| {
            rename_one(fs, file, &options.new_value, options.keep_extension, &mut counters)
        });

    Ok(Some(result))
}

fn rename_one(
    fs: &dyn FileSystem,
    file: &OsStr,
    new_name: &OsStr,
    keep_extension: bool,
    counters: &mut ExtensionCounters,
) -> ProcessResult {
    let file = os_str::trim(file);
    let path = Path::new(file);
    let (dir, base) = split_base(file);
    let extension = extension_of(base);

    let mut target = dir.to_os_string();
    target.push(new_name);
    if let Some(suffix) = counters.suffix(extension) {
        target.push(suffix);
    }

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

    if keep_extension && !extension.is_empty() {
        target.push(".");
        target.push(extension);
    }
    let target = PathBuf::from(target);

    let result = execute_rename(fs, path, &target);
    counters.bump(extension);

    match result {
        Ok(()) => ProcessResult::Renamed {
            from: path.to_path_buf(),
            to: target,
        },
        Err(e) => ProcessResult::Skipped(e),
    }
}

/// 基本文件名的扩展名；点文件和不含点的名字没有扩展名
pub fn extension_of(base: &OsStr) -> &OsStr {
    match (os_str::split_once(base, b'.'), os_str::rsplit_once(base, b'.')) {
        (Some((first, _)), Some((_, last))) if !first.is_empty() => os_str::trim(last),
        _ => OsStr::new(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::executor::memory::MemoryFileSystem;

    fn options(files: &str, new_name: &str) -> RenameOptions {
        RenameOptions::new(RenameMode::Filename, files, new_name)
    }

    fn extension(base: &str) -> &OsStr {
        extension_of(OsStr::new(base))
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension("a.txt"), "txt");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("README"), "");
        assert_eq!(extension(".env"), "");
        assert_eq!(extension(".env.local"), "");
    }

    #[test]
    fn test_shared_counter_drops_extensions() {
        let fs = MemoryFileSystem::with_files(&["d/a.txt", "d/b.txt", "d/c.txt"]);
        execute(&fs, &options("d/a.txt,d/b.txt,d/c.txt", "x")).unwrap();
        assert_eq!(fs.rename_targets(), vec!["d/x", "d/x_1", "d/x_2"]);
    }

    #[test]
    fn test_keep_extension_counts_per_extension() {
        let fs = MemoryFileSystem::with_files(&["d/a.txt", "d/b.log", "d/c.txt"]);
        execute(
            &fs,
            &options("d/a.txt,d/b.log,d/c.txt", "x").with_keep_extension(true),
        )
        .unwrap();
        assert_eq!(fs.rename_targets(), vec!["d/x.txt", "d/x.log", "d/x_1.txt"]);
    }

    #[test]
    fn test_keep_extension_without_extension() {
        let fs = MemoryFileSystem::with_files(&["d/README", "d/.env", "d/a.txt"]);
        execute(
            &fs,
            &options("d/README,d/.env,d/a.txt", "x").with_keep_extension(true),
        )
        .unwrap();
        assert_eq!(fs.rename_targets(), vec!["d/x", "d/x_1", "d/x.txt"]);
    }

    #[test]
    fn test_failed_rename_consumes_counter() {
        let fs = MemoryFileSystem::with_files(&["d/a.txt", "d/b.txt"]).read_only("d/a.txt");
        let result = execute(&fs, &options("d/a.txt,d/b.txt", "x")).unwrap().unwrap();
        assert_eq!(result.skipped, 1);
        assert_eq!(fs.rename_targets(), vec!["d/x_1"]);
    }

    #[test]
    fn test_missing_file_does_not_consume_counter() {
        let fs = MemoryFileSystem::with_files(&["d/b.txt", "d/c.txt"]);
        let result = execute(&fs, &options("d/ghost.txt, d/b.txt, d/c.txt", "x"))
            .unwrap()
            .unwrap();
        assert_eq!(result.skipped, 1);
        assert_eq!(fs.rename_targets(), vec!["d/x", "d/x_1"]);
    }

    #[test]
    fn test_directory_aborts_batch() {
        let fs = MemoryFileSystem::with_files(&["d/a.txt", "d/c.txt"]).add_dir("d/sub");
        let result = execute(&fs, &options("d/a.txt,d/sub,d/c.txt", "x"))
            .unwrap()
            .unwrap();
        assert_eq!(fs.rename_targets(), vec!["d/x"]);
        assert!(fs.exists("d/c.txt"));
        assert_eq!(result.aborted_at.as_deref(), Some(Path::new("d/sub")));
    }

    #[test]
    fn test_wildcard_uses_listing_order() {
        let fs = MemoryFileSystem::with_files(&["d/b.txt", "d/a.txt"]).add_dir("d");
        execute(&fs, &options("d/*", "x").with_keep_extension(true)).unwrap();
        assert_eq!(
            *fs.renames.borrow(),
            vec![
                ("d/a.txt".to_string(), "d/x.txt".to_string()),
                ("d/b.txt".to_string(), "d/x_1.txt".to_string()),
            ]
        );
    }

    #[test]
    fn test_path_without_directory_stays_local() {
        let fs = MemoryFileSystem::with_files(&["a.txt"]);
        execute(&fs, &options("a.txt", "x")).unwrap();
        assert_eq!(fs.rename_targets(), vec!["x"]);
    }

    #[test]
    fn test_missing_arguments() {
        let fs = MemoryFileSystem::with_files(&["d/a.txt"]);
        assert!(execute(&fs, &options("", "x")).unwrap().is_none());
        assert!(execute(&fs, &options("d/a.txt", " ")).unwrap().is_none());
        assert!(fs.rename_targets().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_keep_extension_with_non_utf8_name() {
        use crate::batch::OsFileSystem;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join(OsStr::from_bytes(b"caf\xE9.csv"));
        std::fs::write(&source, "x").unwrap();

        let options = RenameOptions::new(RenameMode::Filename, source.as_os_str(), "x")
            .with_keep_extension(true);
        let result = execute(&OsFileSystem, &options).unwrap().unwrap();

        let renamed = tmp.path().join("x.csv");
        assert_eq!(result.skipped, 0);
        assert_eq!(result.renamed, vec![(source.clone(), renamed.clone())]);
        assert!(renamed.exists());
        assert!(!source.exists());
    }
}
