use std::convert::Infallible;

use super::{
    compare, contains, contains_any, contains_rune, count, has_prefix, has_suffix, index,
    index_any, index_byte, index_func, index_rune, last_index, last_index_any, last_index_byte,
    last_index_func,
};

fn pred(f: impl Fn(char) -> bool) -> impl FnMut(char) -> Result<bool, Infallible> {
    move |ch| Ok(f(ch))
}

#[test]
fn compare_orders_bytes() {
    assert_eq!(compare(b"a", b"b"), -1);
    assert_eq!(compare(b"b", b"a"), 1);
    assert_eq!(compare(b"", b""), 0);
    assert_eq!(compare(b"hello", b"HELLO"), 1);
    assert_eq!(compare("αβ".as_bytes(), "αγ".as_bytes()), -1);
}

#[test]
fn prefix_and_suffix() {
    assert!(has_prefix(b"hello", b"he"));
    assert!(has_prefix(b"hello", b""));
    assert!(!has_prefix(b"he", b"hello"));
    assert!(has_suffix(b"hello", b"llo"));
    assert!(!has_suffix(b"hello", b"hel"));
}

#[test]
fn index_and_last_index() {
    assert_eq!(index(b"chicken", b"ken"), Some(4));
    assert_eq!(index(b"chicken", b"dmr"), None);
    assert_eq!(index(b"", b""), Some(0));
    assert_eq!(index(b"hello", b""), Some(0));
    assert_eq!(last_index(b"go gopher", b"go"), Some(3));
    assert_eq!(last_index(b"hello", b""), Some(5));
    assert_eq!(last_index(b"aaa", b"aa"), Some(1));
    assert_eq!(last_index("你好世界世界".as_bytes(), "世界".as_bytes()), Some(12));
    assert!(contains(b"seafood", b"foo"));
    assert!(contains(b"", b""));
    assert!(!contains(b"", b"a"));
}

#[test]
fn byte_search() {
    assert_eq!(index_byte(b"golang", b'g'), Some(0));
    assert_eq!(index_byte(b"golang", b'x'), None);
    assert_eq!(last_index_byte(b"golang", b'g'), Some(5));
    assert_eq!(index_byte(b"a\x00b", 0), Some(1));
}

#[test]
fn rune_search() {
    assert_eq!(index_rune(b"chicken", 'k' as i32), Some(4));
    assert_eq!(index_rune("chicken".as_bytes(), 'd' as i32), None);
    assert_eq!(index_rune("a世界".as_bytes(), '界' as i32), Some(4));
    assert_eq!(index_rune(b"abc", -1), None);
    assert_eq!(index_rune(b"abc", 0xD800), None);
    assert_eq!(index_rune(b"a\xffb", 0xFFFD), Some(1));
    assert_eq!(index_rune("a\u{FFFD}".as_bytes(), 0xFFFD), Some(1));
    assert!(contains_rune(b"aardvark", 97));
    assert!(!contains_rune(b"timeout", 97));
}

#[test]
fn any_of_set_search() {
    assert_eq!(index_any(b"golang", b"y"), None);
    assert_eq!(index_any(b"chicken", b"kmr"), Some(4));
    assert_eq!(index_any(b"chicken", b""), None);
    assert_eq!(index_any("niño".as_bytes(), "ñ".as_bytes()), Some(2));
    assert_eq!(index_any(b"ab\xff", b"\xfe"), Some(2));
    assert_eq!(last_index_any(b"go gopher", b"go"), Some(4));
    assert_eq!(last_index_any(b"go gopher", b"rodent"), Some(8));
    assert_eq!(last_index_any(b"go gopher", b"fail"), None);
    assert_eq!(last_index_any(b"x", b""), None);
    assert!(contains_any(b"failure", b"ui"));
    assert!(!contains_any(b"", b""));
}

#[test]
fn count_occurrences() {
    assert_eq!(count(b"cheese", b"e"), 3);
    assert_eq!(count(b"five", b""), 5);
    assert_eq!(count(b"aaaa", b"aa"), 2);
    assert_eq!(count("世界".as_bytes(), b""), 3);
    assert_eq!(count(b"", b"a"), 0);
}

#[test]
fn predicate_search() {
    let digit = || pred(|ch| ch.is_ascii_digit());
    assert_eq!(index_func(b"hello123", digit()), Ok(Some(5)));
    assert_eq!(last_index_func(b"123hello123", digit()), Ok(Some(10)));
    assert_eq!(index_func(b"hello", digit()), Ok(None));
    assert_eq!(
        last_index_func("世界你好世界".as_bytes(), pred(|ch| ch == '世')),
        Ok(Some(12))
    );
}

#[test]
fn predicate_error_stops_scan() {
    let mut seen = Vec::new();
    let result = index_func(b"abcdef", |ch| {
        seen.push(ch);
        if ch == 'c' { Err("boom") } else { Ok(false) }
    });
    assert_eq!(result, Err("boom"));
    assert_eq!(seen, vec!['a', 'b', 'c']);
}

#[test]
fn backward_scan_calls_right_to_left() {
    let mut seen = Vec::new();
    let result = last_index_func(b"abc", |ch| {
        seen.push(ch);
        Ok::<_, Infallible>(false)
    });
    assert_eq!(result, Ok(None));
    assert_eq!(seen, vec!['c', 'b', 'a']);
}
