//! # OsStr 字节切分
//!
//! 文件名不一定是合法 UTF-8，这里按编码字节切分 `OsStr`，不做有损转换。
//!
//! 切分点只落在 ASCII 字节上（`.` `,` 路径分隔符、ASCII 空白），
//! 切出的片段仍满足 `OsStr::from_encoded_bytes_unchecked` 的要求。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs`, `commands/`, `models/counter.rs` 使用

use std::ffi::OsStr;

fn from_bytes(bytes: &[u8]) -> &OsStr {
    // SAFETY: 所有调用方只在 ASCII 字节两侧切分，来源是 `as_encoded_bytes`
    unsafe { OsStr::from_encoded_bytes_unchecked(bytes) }
}

/// 按单个 ASCII 字节拆分
pub fn split(s: &OsStr, sep: u8) -> impl Iterator<Item = &OsStr> {
    s.as_encoded_bytes()
        .split(move |b| *b == sep)
        .map(from_bytes)
}

/// 在第一个 `sep` 处拆成两段
pub fn split_once(s: &OsStr, sep: u8) -> Option<(&OsStr, &OsStr)> {
    let bytes = s.as_encoded_bytes();
    let idx = bytes.iter().position(|b| *b == sep)?;
    Some((from_bytes(&bytes[..idx]), from_bytes(&bytes[idx + 1..])))
}

/// 在最后一个 `sep` 处拆成两段
pub fn rsplit_once(s: &OsStr, sep: u8) -> Option<(&OsStr, &OsStr)> {
    let bytes = s.as_encoded_bytes();
    let idx = bytes.iter().rposition(|b| *b == sep)?;
    Some((from_bytes(&bytes[..idx]), from_bytes(&bytes[idx + 1..])))
}

/// 在最后一个 `sep` 之后拆开，`sep` 留在前一段；没有 `sep` 时前一段为空
pub fn split_after_last(s: &OsStr, sep: u8) -> (&OsStr, &OsStr) {
    let bytes = s.as_encoded_bytes();
    let idx = bytes.iter().rposition(|b| *b == sep).map_or(0, |i| i + 1);
    (from_bytes(&bytes[..idx]), from_bytes(&bytes[idx..]))
}

/// 去掉首尾 ASCII 空白
pub fn trim(s: &OsStr) -> &OsStr {
    let bytes = s.as_encoded_bytes();
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    from_bytes(&bytes[start..end])
}

/// `sep` 出现的次数
pub fn count(s: &OsStr, sep: u8) -> usize {
    s.as_encoded_bytes().iter().filter(|b| **b == sep).count()
}
