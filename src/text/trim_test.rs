use std::convert::Infallible;

use super::{
    trim, trim_func, trim_left, trim_left_func, trim_prefix, trim_right, trim_right_func,
    trim_space, trim_suffix,
};

fn digits(ch: char) -> Result<bool, Infallible> {
    Ok(ch.is_ascii_digit())
}

#[test]
fn cutset_trims() {
    assert_eq!(trim(b"xxhixx", b"x"), b"hi");
    assert_eq!(trim(b"  hi  ", b""), b"  hi  ");
    assert_eq!(trim(b"", b"x"), b"");
    assert_eq!(trim_left(b"xyhixy", b"yx"), b"hixy");
    assert_eq!(trim_right(b"xyhixy", b"yx"), b"xyhi");
    assert_eq!(trim("¡¡hola!!".as_bytes(), "!¡".as_bytes()), b"hola");
    assert_eq!(trim(b"xxxx", b"x"), b"");
}

#[test]
fn cutset_with_invalid_byte_trims_replacement() {
    assert_eq!(trim(b"\xffhi\xfe", b"\x80"), b"hi");
    assert_eq!(trim_right("hi\u{FFFD}".as_bytes(), b"\xff"), b"hi");
}

#[test]
fn trim_left_of_trim_right_is_trim() {
    let cases: [(&[u8], &[u8]); 5] = [
        (b"xxhixx", b"x"),
        (b"abcba", b"ab"),
        (b"", b"a"),
        (b"aaaa", b"a"),
        ("¡¡x!!".as_bytes(), "!¡".as_bytes()),
    ];
    for (s, cut) in cases {
        assert_eq!(trim_left(trim_right(s, cut), cut), trim(s, cut));
    }
}

#[test]
fn prefix_suffix_trims() {
    assert_eq!(trim_prefix(b"prefix-body", b"prefix-"), b"body");
    assert_eq!(trim_prefix(b"body", b"prefix-"), b"body");
    assert_eq!(trim_suffix(b"body.txt", b".txt"), b"body");
    assert_eq!(trim_suffix(b"body", b".txt"), b"body");
}

#[test]
fn predicate_trims() {
    assert_eq!(trim_func(b"123abc456", digits), Ok(&b"abc"[..]));
    assert_eq!(trim_left_func(b"123abc456", digits), Ok(&b"abc456"[..]));
    assert_eq!(trim_right_func(b"123abc456", digits), Ok(&b"123abc"[..]));
    assert_eq!(trim_func(b"123", digits), Ok(&b""[..]));
    assert_eq!(trim_right_func("12é34".as_bytes(), digits), Ok("12é".as_bytes()));
}

#[test]
fn predicate_trims_stop_at_first_kept_code_point() {
    let mut seen = Vec::new();
    let trimmed = trim_left_func(b"aab", |ch| {
        seen.push(ch);
        Ok::<_, Infallible>(ch == 'a')
    });
    assert_eq!(trimmed, Ok(&b"b"[..]));
    assert_eq!(seen, vec!['a', 'a', 'b']);
}

#[test]
fn space_trim() {
    assert_eq!(trim_space(b"  hi  "), b"hi");
    assert_eq!(trim_space(b"\t\n hello world \r\n"), b"hello world");
    assert_eq!(trim_space("\u{3000}x\u{A0}".as_bytes()), b"x");
    assert_eq!(trim_space(b"   "), b"");
}
