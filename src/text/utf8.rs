//! UTF-8 decoding with replacement semantics.
//!
//! Strings are arbitrary bytes. Wherever a routine iterates code points, an
//! invalid or truncated sequence decodes as [`RUNE_ERROR`] with a width of one
//! byte, so every byte of the input is visited exactly once.

/// The replacement character produced for invalid input.
pub const RUNE_ERROR: char = '\u{FFFD}';

/// Bytes below this value encode themselves.
pub const RUNE_SELF: u8 = 0x80;

/// Code point as a signed 32-bit value, the type mapping callbacks produce.
pub type Rune = i32;

/// Decodes the first code point of `s`, returning it with its byte width.
///
/// An empty slice yields `(RUNE_ERROR, 0)`.
pub fn decode_rune(s: &[u8]) -> (char, usize) {
    let Some(&first) = s.first() else {
        return (RUNE_ERROR, 0);
    };
    if first < RUNE_SELF {
        return (first as char, 1);
    }
    let chunk = &s[..s.len().min(4)];
    let valid = match std::str::from_utf8(chunk) {
        Ok(text) => text,
        Err(err) => match std::str::from_utf8(&chunk[..err.valid_up_to()]) {
            Ok(text) => text,
            Err(_) => "",
        },
    };
    match valid.chars().next() {
        Some(ch) => (ch, ch.len_utf8()),
        None => (RUNE_ERROR, 1),
    }
}

/// Decodes the last code point of `s`, returning it with its byte width.
pub fn decode_last_rune(s: &[u8]) -> (char, usize) {
    let Some(&last) = s.last() else {
        return (RUNE_ERROR, 0);
    };
    if last < RUNE_SELF {
        return (last as char, 1);
    }
    let end = s.len();
    let lim = end.saturating_sub(4);
    let mut start = end - 1;
    while start > lim && !is_rune_start(s[start]) {
        start -= 1;
    }
    let (ch, width) = decode_rune(&s[start..end]);
    if start + width != end {
        return (RUNE_ERROR, 1);
    }
    (ch, width)
}

fn is_rune_start(b: u8) -> bool {
    b & 0xC0 != 0x80
}

/// Iterator over `(byte_offset, code_point)` pairs.
pub struct Runes<'a> {
    s: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Runes<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.s.len() {
            return None;
        }
        let (ch, width) = decode_rune(&self.s[self.pos..]);
        let at = self.pos;
        self.pos += width;
        Some((at, ch))
    }
}

pub fn runes(s: &[u8]) -> Runes<'_> {
    Runes { s, pos: 0 }
}

pub fn rune_count(s: &[u8]) -> usize {
    runes(s).count()
}

/// Converts a signed code point, mapping surrogates, negatives and values
/// past U+10FFFF to `None`.
pub fn to_char(r: Rune) -> Option<char> {
    u32::try_from(r).ok().and_then(char::from_u32)
}

/// Appends the UTF-8 encoding of `r`; invalid code points encode as
/// [`RUNE_ERROR`].
pub fn push_rune(out: &mut Vec<u8>, r: Rune) {
    let ch = to_char(r).unwrap_or(RUNE_ERROR);
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

/// Encodes a code point into a fresh byte vector.
pub fn encode_char(ch: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf).as_bytes().to_vec()
}
