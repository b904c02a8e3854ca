use std::borrow::Cow;

use super::TextError;
use super::search::{count, index};
use super::utf8::decode_rune;

/// Replaces the first `n` non-overlapping occurrences of `old` with `new`;
/// `n < 0` replaces all of them.
///
/// An empty `old` matches at the start and after each code point.
pub fn replace<'a>(s: &'a [u8], old: &[u8], new: &[u8], n: i64) -> Cow<'a, [u8]> {
    if old == new || n == 0 {
        return Cow::Borrowed(s);
    }
    let matches = count(s, old);
    if matches == 0 {
        return Cow::Borrowed(s);
    }
    let n = if n < 0 || matches as u64 <= n as u64 {
        matches
    } else {
        n as usize
    };

    let mut out = Vec::with_capacity(s.len() + n * new.len().saturating_sub(old.len()));
    let mut start = 0;
    for i in 0..n {
        let mut at = start;
        if old.is_empty() {
            if i > 0 {
                at += decode_rune(&s[start..]).1;
            }
        } else if let Some(offset) = index(&s[start..], old) {
            at += offset;
        }
        out.extend_from_slice(&s[start..at]);
        out.extend_from_slice(new);
        start = at + old.len();
    }
    out.extend_from_slice(&s[start..]);
    Cow::Owned(out)
}

/// Concatenates `count` copies of `s`.
///
/// The output buffer is reserved up front; a length the allocator refuses is
/// reported as [`TextError::RepeatAllocation`].
pub fn repeat(s: &[u8], count: i64) -> Result<Vec<u8>, TextError> {
    if count < 0 {
        return Err(TextError::NegativeRepeatCount);
    }
    let count = usize::try_from(count).map_err(|_| TextError::RepeatOverflow)?;
    let len = s
        .len()
        .checked_mul(count)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(TextError::RepeatOverflow)?;
    if len == 0 {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| TextError::RepeatAllocation { len })?;
    for _ in 0..count {
        out.extend_from_slice(s);
    }
    Ok(out)
}
