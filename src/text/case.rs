//! Case mapping and per-code-point rewriting.
//!
//! Case conversions use simple (one-to-one) Unicode mappings: a code point
//! whose full mapping expands to several code points is left unchanged.

use std::borrow::Cow;
use std::convert::Infallible;

use super::utf8::{RUNE_ERROR, RUNE_SELF, Rune, decode_rune, push_rune, runes};

/// Rewrites every code point of `s` through `mapping`.
///
/// A negative result drops the code point; an invalid one encodes as
/// U+FFFD. `mapping` is called exactly once per code point, left to right.
/// An invalid byte always counts as a change and comes out as an encoded
/// U+FFFD; input without changes is returned borrowed.
pub fn map<'a, E>(
    mut mapping: impl FnMut(char) -> Result<Rune, E>,
    s: &'a [u8],
) -> Result<Cow<'a, [u8]>, E> {
    let mut iter = runes(s);
    let mut out: Option<Vec<u8>> = None;
    for (at, ch) in iter.by_ref() {
        let r = mapping(ch)?;
        if r == ch as Rune && ch != RUNE_ERROR {
            continue;
        }
        let (decoded, width) = decode_rune(&s[at..]);
        if ch == RUNE_ERROR && width != 1 && r == decoded as Rune {
            continue;
        }
        let mut buf = Vec::with_capacity(s.len() + 4);
        buf.extend_from_slice(&s[..at]);
        if r >= 0 {
            push_rune(&mut buf, r);
        }
        out = Some(buf);
        break;
    }
    let Some(mut buf) = out else {
        return Ok(Cow::Borrowed(s));
    };
    for (_, ch) in iter {
        let r = mapping(ch)?;
        if r >= 0 {
            push_rune(&mut buf, r);
        }
    }
    Ok(Cow::Owned(buf))
}

fn map_infallible(mapping: impl Fn(char) -> char, s: &[u8]) -> Cow<'_, [u8]> {
    match map(|ch| Ok::<_, Infallible>(mapping(ch) as Rune), s) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

fn single<I: Iterator<Item = char>>(mut iter: I) -> Option<char> {
    let first = iter.next()?;
    match iter.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Greek letters with ypogegrammeni: the simple uppercase mapping is the
/// prosgegrammeni form, eight code points up, which is also its own upper.
fn iota_subscript_upper(ch: char) -> Option<char> {
    let cp = ch as u32;
    let lower = matches!(cp, 0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7);
    let title = matches!(cp, 0x1F88..=0x1F8F | 0x1F98..=0x1F9F | 0x1FA8..=0x1FAF);
    if lower {
        return char::from_u32(cp + 8);
    }
    match cp {
        0x1FB3 => Some('\u{1FBC}'),
        0x1FC3 => Some('\u{1FCC}'),
        0x1FF3 => Some('\u{1FFC}'),
        0x1FBC | 0x1FCC | 0x1FFC => Some(ch),
        _ if title => Some(ch),
        _ => None,
    }
}

pub fn upper_char(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_uppercase();
    }
    if let Some(upper) = iota_subscript_upper(ch) {
        return upper;
    }
    single(ch.to_uppercase()).unwrap_or(ch)
}

pub fn lower_char(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    if ch == '\u{0130}' {
        return 'i';
    }
    single(ch.to_lowercase()).unwrap_or(ch)
}

/// Title case differs from upper case for the Latin digraphs and for
/// Georgian Mkhedruli, which has no title form.
pub fn title_char(ch: char) -> char {
    match ch {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => ch,
        _ => upper_char(ch),
    }
}

pub fn to_upper(s: &[u8]) -> Cow<'_, [u8]> {
    if s.is_ascii() {
        if !s.iter().any(u8::is_ascii_lowercase) {
            return Cow::Borrowed(s);
        }
        return Cow::Owned(s.to_ascii_uppercase());
    }
    map_infallible(upper_char, s)
}

pub fn to_lower(s: &[u8]) -> Cow<'_, [u8]> {
    if s.is_ascii() {
        if !s.iter().any(u8::is_ascii_uppercase) {
            return Cow::Borrowed(s);
        }
        return Cow::Owned(s.to_ascii_lowercase());
    }
    map_infallible(lower_char, s)
}

pub fn to_title(s: &[u8]) -> Cow<'_, [u8]> {
    map_infallible(title_char, s)
}

/// Word boundary test for [`title`].
fn is_separator(ch: char) -> bool {
    if (ch as u32) < u32::from(RUNE_SELF) {
        return !(ch.is_ascii_alphanumeric() || ch == '_');
    }
    if ch.is_alphanumeric() {
        return false;
    }
    ch.is_whitespace()
}

/// Title-cases the first code point of every word.
pub fn title(s: &[u8]) -> Cow<'_, [u8]> {
    let mut prev = ' ';
    let result = map(
        |ch| {
            let mapped = if is_separator(prev) { title_char(ch) } else { ch };
            prev = ch;
            Ok::<_, Infallible>(mapped as Rune)
        },
        s,
    );
    match result {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

/// Representative of the simple case-folding orbit of `ch`: two code points
/// fold together exactly when their keys match.
///
/// Dotted and dotless I have no simple folding and form orbits of one.
fn fold_key(ch: char) -> char {
    match ch {
        '\u{0130}' | '\u{0131}' => ch,
        _ => lower_char(upper_char(ch)),
    }
}

fn fold_equal(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(&b);
    }
    fold_key(a) == fold_key(b)
}

/// Reports whether `s` and `t` are equal under simple Unicode case folding.
pub fn equal_fold(s: &[u8], t: &[u8]) -> bool {
    let mut left = runes(s);
    let mut right = runes(t);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some((_, a)), Some((_, b))) => {
                if !fold_equal(a, b) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
