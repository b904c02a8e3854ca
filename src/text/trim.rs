use std::convert::Infallible;

use super::search::{contains_char, index_func_truth, last_index_func_truth};
use super::split::is_space;
use super::utf8::{RUNE_SELF, decode_last_rune, decode_rune};

/// Removes leading code points contained in `cutset`.
pub fn trim_left<'a>(s: &'a [u8], cutset: &[u8]) -> &'a [u8] {
    if s.is_empty() || cutset.is_empty() {
        return s;
    }
    let mut rest = s;
    while !rest.is_empty() {
        let (ch, width) = decode_rune(rest);
        if !contains_char(cutset, ch) {
            break;
        }
        rest = &rest[width..];
    }
    rest
}

/// Removes trailing code points contained in `cutset`.
pub fn trim_right<'a>(s: &'a [u8], cutset: &[u8]) -> &'a [u8] {
    if s.is_empty() || cutset.is_empty() {
        return s;
    }
    let mut rest = s;
    while !rest.is_empty() {
        let (ch, width) = decode_last_rune(rest);
        if !contains_char(cutset, ch) {
            break;
        }
        rest = &rest[..rest.len() - width];
    }
    rest
}

pub fn trim<'a>(s: &'a [u8], cutset: &[u8]) -> &'a [u8] {
    trim_right(trim_left(s, cutset), cutset)
}

pub fn trim_prefix<'a>(s: &'a [u8], prefix: &[u8]) -> &'a [u8] {
    s.strip_prefix(prefix).unwrap_or(s)
}

pub fn trim_suffix<'a>(s: &'a [u8], suffix: &[u8]) -> &'a [u8] {
    s.strip_suffix(suffix).unwrap_or(s)
}

/// Drops the leading code points satisfying `f`, calling it left to right
/// until the first one that does not.
pub fn trim_left_func<E>(
    s: &[u8],
    f: impl FnMut(char) -> Result<bool, E>,
) -> Result<&[u8], E> {
    Ok(match index_func_truth(s, f, false)? {
        Some(at) => &s[at..],
        None => &s[s.len()..],
    })
}

/// Drops the trailing code points satisfying `f`, calling it right to left
/// until the first one that does not.
pub fn trim_right_func<E>(
    s: &[u8],
    f: impl FnMut(char) -> Result<bool, E>,
) -> Result<&[u8], E> {
    let end = match last_index_func_truth(s, f, false)? {
        Some(at) if s[at] >= RUNE_SELF => at + decode_rune(&s[at..]).1,
        Some(at) => at + 1,
        None => 0,
    };
    Ok(&s[..end])
}

pub fn trim_func<E>(
    s: &[u8],
    mut f: impl FnMut(char) -> Result<bool, E>,
) -> Result<&[u8], E> {
    let left = trim_left_func(s, &mut f)?;
    trim_right_func(left, f)
}

pub fn trim_space(s: &[u8]) -> &[u8] {
    match trim_func(s, |ch| Ok::<_, Infallible>(is_space(ch))) {
        Ok(trimmed) => trimmed,
        Err(never) => match never {},
    }
}
