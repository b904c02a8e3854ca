use std::cmp::Ordering;

use super::utf8::{
    RUNE_ERROR, RUNE_SELF, Rune, decode_last_rune, encode_char, rune_count, runes, to_char,
};

pub fn compare(a: &[u8], b: &[u8]) -> i64 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn has_prefix(s: &[u8], prefix: &[u8]) -> bool {
    s.starts_with(prefix)
}

pub fn has_suffix(s: &[u8], suffix: &[u8]) -> bool {
    s.ends_with(suffix)
}

/// Byte offset of the first occurrence of `substr`; an empty needle matches
/// at 0.
pub fn index(s: &[u8], substr: &[u8]) -> Option<usize> {
    if substr.is_empty() {
        return Some(0);
    }
    if substr.len() > s.len() {
        return None;
    }
    s.windows(substr.len()).position(|window| window == substr)
}

/// Byte offset of the last occurrence of `substr`; an empty needle matches
/// at `s.len()`.
pub fn last_index(s: &[u8], substr: &[u8]) -> Option<usize> {
    if substr.is_empty() {
        return Some(s.len());
    }
    if substr.len() > s.len() {
        return None;
    }
    s.windows(substr.len()).rposition(|window| window == substr)
}

pub fn index_byte(s: &[u8], c: u8) -> Option<usize> {
    s.iter().position(|&b| b == c)
}

pub fn last_index_byte(s: &[u8], c: u8) -> Option<usize> {
    s.iter().rposition(|&b| b == c)
}

/// Offset of the first occurrence of code point `r`.
///
/// Searching for [`RUNE_ERROR`] matches both an encoded U+FFFD and any
/// invalid byte sequence. Negative values, surrogates and values past
/// U+10FFFF never match.
pub fn index_rune(s: &[u8], r: Rune) -> Option<usize> {
    let ch = to_char(r)?;
    if (ch as u32) < u32::from(RUNE_SELF) {
        return index_byte(s, ch as u8);
    }
    if ch == RUNE_ERROR {
        return runes(s).find(|&(_, c)| c == RUNE_ERROR).map(|(at, _)| at);
    }
    index(s, &encode_char(ch))
}

pub fn contains_char(s: &[u8], ch: char) -> bool {
    index_rune(s, ch as Rune).is_some()
}

/// Offset of the first code point of `s` that also appears in `chars`.
pub fn index_any(s: &[u8], chars: &[u8]) -> Option<usize> {
    if chars.is_empty() {
        return None;
    }
    runes(s)
        .find(|&(_, ch)| contains_char(chars, ch))
        .map(|(at, _)| at)
}

/// Offset of the last code point of `s` that also appears in `chars`.
pub fn last_index_any(s: &[u8], chars: &[u8]) -> Option<usize> {
    if chars.is_empty() {
        return None;
    }
    let mut end = s.len();
    while end > 0 {
        let (ch, width) = decode_last_rune(&s[..end]);
        end -= width;
        if contains_char(chars, ch) {
            return Some(end);
        }
    }
    None
}

pub fn contains(s: &[u8], substr: &[u8]) -> bool {
    index(s, substr).is_some()
}

pub fn contains_any(s: &[u8], chars: &[u8]) -> bool {
    index_any(s, chars).is_some()
}

pub fn contains_rune(s: &[u8], r: Rune) -> bool {
    index_rune(s, r).is_some()
}

/// Number of non-overlapping occurrences of `substr`; an empty needle counts
/// one more than the number of code points.
pub fn count(s: &[u8], substr: &[u8]) -> usize {
    if substr.is_empty() {
        return rune_count(s) + 1;
    }
    let mut n = 0;
    let mut rest = s;
    while let Some(at) = index(rest, substr) {
        n += 1;
        rest = &rest[at + substr.len()..];
    }
    n
}

/// Offset of the first code point for which `f` returns `truth`.
///
/// `f` is called once per code point, left to right, until it matches or
/// fails; its first error aborts the scan.
pub(crate) fn index_func_truth<E>(
    s: &[u8],
    mut f: impl FnMut(char) -> Result<bool, E>,
    truth: bool,
) -> Result<Option<usize>, E> {
    for (at, ch) in runes(s) {
        if f(ch)? == truth {
            return Ok(Some(at));
        }
    }
    Ok(None)
}

/// Backward counterpart of [`index_func_truth`], calling `f` right to left.
pub(crate) fn last_index_func_truth<E>(
    s: &[u8],
    mut f: impl FnMut(char) -> Result<bool, E>,
    truth: bool,
) -> Result<Option<usize>, E> {
    let mut end = s.len();
    while end > 0 {
        let (ch, width) = decode_last_rune(&s[..end]);
        end -= width;
        if f(ch)? == truth {
            return Ok(Some(end));
        }
    }
    Ok(None)
}

pub fn index_func<E>(
    s: &[u8],
    f: impl FnMut(char) -> Result<bool, E>,
) -> Result<Option<usize>, E> {
    index_func_truth(s, f, true)
}

pub fn last_index_func<E>(
    s: &[u8],
    f: impl FnMut(char) -> Result<bool, E>,
) -> Result<Option<usize>, E> {
    last_index_func_truth(s, f, true)
}
