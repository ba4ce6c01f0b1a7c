//! # 文件收集器
//!
//! 把 `-files` 参数解析成待处理的文件列表。
//!
//! ## 功能
//! - 逗号分隔的显式列表，保持输入顺序
//! - 单个以 `*` 结尾的条目展开为其父目录下的全部直接子项（不递归）
//! - 目录无法列出时返回致命错误
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 通过 `batch/executor.rs` 的 `FileSystem` 列目录

use crate::batch::executor::{FileKind, FileSystem};
use crate::error::{RenameError, Result};
use crate::utils::os_str;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

const SEP: u8 = MAIN_SEPARATOR as u8;

/// 有序的待处理路径列表，路径按原始字节保存
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<OsString>,
}

impl FileList {
    /// 按逗号拆分原始参数（条目在处理时才去除空白）
    pub fn parse(raw: impl AsRef<OsStr>) -> Self {
        os_str::split(raw.as_ref(), b',')
            .map(OsStr::to_os_string)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.entries.iter().map(|s| s.as_os_str())
    }

    /// 单个条目且以 `*` 结尾时返回该通配符
    fn wildcard(&self) -> Option<&OsStr> {
        match self.entries.as_slice() {
            [only] => {
                let token = os_str::trim(only);
                token.as_encoded_bytes().ends_with(b"*").then_some(token)
            }
            _ => None,
        }
    }
}

impl FromIterator<OsString> for FileList {
    fn from_iter<I: IntoIterator<Item = OsString>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// 展开目录通配符；非通配符列表原样返回
pub fn expand(fs: &dyn FileSystem, files: FileList) -> Result<FileList> {
    let token = match files.wildcard() {
        Some(token) => token.to_os_string(),
        None => return Ok(files),
    };

    // 去掉最后一段；`*` 指当前目录，`/*` 的前缀为空，列的是根目录
    let (dir, listing_dir) = match os_str::rsplit_once(&token, SEP) {
        None => (OsString::from("."), PathBuf::from(".")),
        Some((dir, _)) if dir.is_empty() => (OsString::new(), PathBuf::from(MAIN_SEPARATOR_STR)),
        Some((dir, _)) => (dir.to_os_string(), PathBuf::from(dir)),
    };

    let names = fs
        .list_dir(&listing_dir)
        .map_err(|e| listing_error(fs, &listing_dir, e))?;

    Ok(names
        .into_iter()
        .map(|name| {
            let mut path = dir.clone();
            path.push(MAIN_SEPARATOR_STR);
            path.push(name);
            path
        })
        .collect())
}

fn listing_error(fs: &dyn FileSystem, dir: &Path, err: std::io::Error) -> RenameError {
    match fs.stat(dir) {
        Ok(FileKind::File) => RenameError::NotADirectory {
            path: dir.to_path_buf(),
        },
        _ => RenameError::DirectoryListing {
            path: dir.to_path_buf(),
            source: err,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::executor::memory::MemoryFileSystem;
    use crate::batch::executor::OsFileSystem;

    fn entries(list: &FileList) -> Vec<&OsStr> {
        list.iter().collect()
    }

    #[test]
    fn test_parse_keeps_order() {
        let list = FileList::parse("b.txt, a.txt ,c.txt");
        assert_eq!(entries(&list), vec!["b.txt", " a.txt ", "c.txt"]);
    }

    #[test]
    fn test_literal_list_not_expanded() {
        let fs = MemoryFileSystem::default();
        let list = expand(&fs, FileList::parse("dir/a*,dir/b")).unwrap();
        assert_eq!(entries(&list), vec!["dir/a*", "dir/b"]);

        let list = expand(&fs, FileList::parse("dir/a.txt")).unwrap();
        assert_eq!(entries(&list), vec!["dir/a.txt"]);
    }

    #[test]
    fn test_wildcard_lists_parent_directory() {
        let fs = MemoryFileSystem::with_files(&["dir/b.txt", "dir/a.txt", "dir/sub/deep.txt"])
            .add_dir("dir")
            .add_dir("dir/sub");
        let list = expand(&fs, FileList::parse(" dir/* ")).unwrap();
        assert_eq!(entries(&list), vec!["dir/a.txt", "dir/b.txt", "dir/sub"]);
    }

    #[test]
    fn test_wildcard_drops_whole_last_segment() {
        let fs = MemoryFileSystem::with_files(&["dir/a.txt", "dir/report.csv"]).add_dir("dir");
        let list = expand(&fs, FileList::parse("dir/rep*")).unwrap();
        assert_eq!(entries(&list), vec!["dir/a.txt", "dir/report.csv"]);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let fs = MemoryFileSystem::default();
        let err = expand(&fs, FileList::parse("nowhere/*")).unwrap_err();
        assert!(matches!(err, RenameError::DirectoryListing { ref path, .. } if path == Path::new("nowhere")));
    }

    #[test]
    fn test_wildcard_on_file_is_fatal() {
        let fs = MemoryFileSystem::with_files(&["notes.txt"]);
        let err = expand(&fs, FileList::parse("notes.txt/*")).unwrap_err();
        assert!(matches!(err, RenameError::NotADirectory { ref path } if path == Path::new("notes.txt")));
    }

    #[test]
    fn test_os_wildcard_expansion() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["z.md", "a.md", ".hidden"] {
            std::fs::write(tmp.path().join(name), "").unwrap();
        }
        let token = format!("{}{}*", tmp.path().display(), MAIN_SEPARATOR_STR);
        let list = expand(&OsFileSystem, FileList::parse(&token)).unwrap();

        let expected: FileList = [".hidden", "a.md", "z.md"]
            .iter()
            .map(|n| tmp.path().join(n).into_os_string())
            .collect();
        assert_eq!(list, expected);
    }

    #[test]
    fn test_os_wildcard_on_file_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain.txt");
        std::fs::write(&file, "").unwrap();

        let token = format!("{}{}*", file.display(), MAIN_SEPARATOR_STR);
        let err = expand(&OsFileSystem, FileList::parse(&token)).unwrap_err();
        assert!(matches!(err, RenameError::NotADirectory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_os_wildcard_keeps_non_utf8_names() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let tmp = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"caf\xE9.csv");
        std::fs::write(tmp.path().join(name), "").unwrap();

        let mut token = tmp.path().as_os_str().to_os_string();
        token.push("/*");
        let list = expand(&OsFileSystem, FileList::parse(&token)).unwrap();

        let expected = tmp.path().join(name).into_os_string().into_vec();
        let found: Vec<Vec<u8>> = list.iter().map(|p| p.as_bytes().to_vec()).collect();
        assert_eq!(found, vec![expected]);
    }
}
