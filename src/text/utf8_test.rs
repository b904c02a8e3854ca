use super::utf8::{RUNE_ERROR, decode_last_rune, decode_rune, push_rune, rune_count, runes};

#[test]
fn decode_rune_reads_valid_sequences() {
    assert_eq!(decode_rune(b"abc"), ('a', 1));
    assert_eq!(decode_rune("€uro".as_bytes()), ('€', 3));
    assert_eq!(decode_rune("𝄞".as_bytes()), ('𝄞', 4));
}

#[test]
fn decode_rune_replaces_invalid_bytes_one_at_a_time() {
    assert_eq!(decode_rune(b"\xff"), (RUNE_ERROR, 1));
    assert_eq!(decode_rune(b"\xe2\x82"), (RUNE_ERROR, 1));
    // UTF-16 surrogate half
    assert_eq!(decode_rune(b"\xed\xa0\x80"), (RUNE_ERROR, 1));
    assert_eq!(decode_rune(b""), (RUNE_ERROR, 0));
}

#[test]
fn decode_last_rune_reads_backwards() {
    assert_eq!(decode_last_rune("a€".as_bytes()), ('€', 3));
    assert_eq!(decode_last_rune(b"ab"), ('b', 1));
    assert_eq!(decode_last_rune(b"a\xe2\x82"), (RUNE_ERROR, 1));
    assert_eq!(decode_last_rune(b"\x80"), (RUNE_ERROR, 1));
    assert_eq!(decode_last_rune(b""), (RUNE_ERROR, 0));
}

#[test]
fn runes_visit_every_byte() {
    let collected: Vec<(usize, char)> = runes(b"a\xff\xc3\xa9").collect();
    assert_eq!(collected, vec![(0, 'a'), (1, RUNE_ERROR), (2, 'é')]);
    assert_eq!(rune_count(b"a\xff\xc3\xa9"), 3);
    assert_eq!(rune_count(b""), 0);
}

#[test]
fn push_rune_encodes_invalid_code_points_as_replacement() {
    let mut out = Vec::new();
    push_rune(&mut out, 'A' as i32);
    push_rune(&mut out, -1);
    push_rune(&mut out, 0xD800);
    push_rune(&mut out, 0x11_0000);
    assert_eq!(out, "A\u{FFFD}\u{FFFD}\u{FFFD}".as_bytes());
}
