use super::search::{count, index};
use super::utf8::{decode_rune, rune_count, runes};

/// Splits `s` into at most `n` code-point pieces, the last taking the rest.
/// Invalid bytes become single-byte pieces.
fn explode(s: &[u8], n: i64) -> Vec<&[u8]> {
    let total = rune_count(s);
    let n = if n < 0 || n as u64 > total as u64 {
        total
    } else {
        n as usize
    };
    let mut parts = Vec::with_capacity(n);
    let mut rest = s;
    for _ in 0..n.saturating_sub(1) {
        let (_, width) = decode_rune(rest);
        parts.push(&rest[..width]);
        rest = &rest[width..];
    }
    if n > 0 {
        parts.push(rest);
    }
    parts
}

/// Shared driver for the `Split*` family. `keep` is the number of separator
/// bytes retained at the end of each piece (0 or `sep.len()`).
fn gen_split<'a>(s: &'a [u8], sep: &[u8], keep: usize, n: i64) -> Vec<&'a [u8]> {
    if n == 0 {
        return Vec::new();
    }
    if sep.is_empty() {
        return explode(s, n);
    }
    let mut n = if n < 0 {
        count(s, sep) as u64 + 1
    } else {
        n as u64
    };
    if n > s.len() as u64 + 1 {
        n = s.len() as u64 + 1;
    }
    let n = n as usize;

    let mut parts = Vec::with_capacity(n);
    let mut rest = s;
    while parts.len() < n - 1 {
        let Some(at) = index(rest, sep) else {
            break;
        };
        parts.push(&rest[..at + keep]);
        rest = &rest[at + sep.len()..];
    }
    parts.push(rest);
    parts
}

/// Slices `s` into all substrings separated by `sep`.
///
/// An empty separator splits after each code point.
pub fn split<'a>(s: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
    gen_split(s, sep, 0, -1)
}

/// Like [`split`], but each piece keeps its trailing separator.
pub fn split_after<'a>(s: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
    gen_split(s, sep, sep.len(), -1)
}

/// Returns at most `n` pieces; `n == 0` yields none and `n < 0` all of them.
pub fn split_n<'a>(s: &'a [u8], sep: &[u8], n: i64) -> Vec<&'a [u8]> {
    gen_split(s, sep, 0, n)
}

pub fn split_after_n<'a>(s: &'a [u8], sep: &[u8], n: i64) -> Vec<&'a [u8]> {
    gen_split(s, sep, sep.len(), n)
}

/// Whitespace test used by `Fields` and `TrimSpace`: the Unicode
/// `White_Space` property.
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Splits around runs of whitespace. Only whitespace yields an empty list.
pub fn fields(s: &[u8]) -> Vec<&[u8]> {
    match fields_func(s, |ch| Ok::<_, std::convert::Infallible>(is_space(ch))) {
        Ok(parts) => parts,
        Err(never) => match never {},
    }
}

/// Splits around runs of code points satisfying `f`.
///
/// `f` is called exactly once per code point, left to right.
pub fn fields_func<E>(
    s: &[u8],
    mut f: impl FnMut(char) -> Result<bool, E>,
) -> Result<Vec<&[u8]>, E> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    for (at, ch) in runes(s) {
        if f(ch)? {
            if let Some(from) = start.take() {
                spans.push(&s[from..at]);
            }
        } else if start.is_none() {
            start = Some(at);
        }
    }
    if let Some(from) = start {
        spans.push(&s[from..]);
    }
    Ok(spans)
}

pub fn join<T: AsRef<[u8]>>(elems: &[T], sep: &[u8]) -> Vec<u8> {
    let Some((first, rest)) = elems.split_first() else {
        return Vec::new();
    };
    let len = elems.iter().map(|e| e.as_ref().len()).sum::<usize>() + sep.len() * rest.len();
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(first.as_ref());
    for elem in rest {
        out.extend_from_slice(sep);
        out.extend_from_slice(elem.as_ref());
    }
    out
}
