use mlua::Value;

use crate::error::StringsError;
use crate::marshal::{Args, ret_bool, ret_index, ret_int};
use crate::text;

pub(super) fn op_compare(args: &Args<'_>) -> Result<Value, StringsError> {
    let a = args.string(0)?;
    let b = args.string(1)?;
    Ok(ret_int(text::compare(&a, &b)))
}

pub(super) fn op_contains(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let substr = args.string(1)?;
    Ok(ret_bool(text::contains(&s, &substr)))
}

pub(super) fn op_contains_any(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let chars = args.string(1)?;
    Ok(ret_bool(text::contains_any(&s, &chars)))
}

pub(super) fn op_contains_rune(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let r = args.rune(1)?;
    Ok(ret_bool(text::contains_rune(&s, r)))
}

pub(super) fn op_count(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let substr = args.string(1)?;
    Ok(ret_int(text::count(&s, &substr) as i64))
}

pub(super) fn op_has_prefix(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let prefix = args.string(1)?;
    Ok(ret_bool(text::has_prefix(&s, &prefix)))
}

pub(super) fn op_has_suffix(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let suffix = args.string(1)?;
    Ok(ret_bool(text::has_suffix(&s, &suffix)))
}

pub(super) fn op_index(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let substr = args.string(1)?;
    Ok(ret_index(text::index(&s, &substr)))
}

pub(super) fn op_index_any(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let chars = args.string(1)?;
    Ok(ret_index(text::index_any(&s, &chars)))
}

pub(super) fn op_index_byte(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let c = args.byte(1)?;
    Ok(ret_index(text::index_byte(&s, c)))
}

/// IndexFunc(s, f) - offset of the first code point where `f(r)` is true
///
/// `f` runs once per code point, left to right, stopping at the first match.
pub(super) fn op_index_func(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let f = args.callable(1)?;
    Ok(ret_index(text::index_func(&s, |r| f.predicate(r))?))
}

pub(super) fn op_index_rune(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let r = args.rune(1)?;
    Ok(ret_index(text::index_rune(&s, r)))
}

pub(super) fn op_last_index(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let substr = args.string(1)?;
    Ok(ret_index(text::last_index(&s, &substr)))
}

pub(super) fn op_last_index_any(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let chars = args.string(1)?;
    Ok(ret_index(text::last_index_any(&s, &chars)))
}

pub(super) fn op_last_index_byte(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let c = args.byte(1)?;
    Ok(ret_index(text::last_index_byte(&s, c)))
}

/// LastIndexFunc(s, f) - offset of the last code point where `f(r)` is true
///
/// `f` runs right to left, stopping at the first match.
pub(super) fn op_last_index_func(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let f = args.callable(1)?;
    Ok(ret_index(text::last_index_func(&s, |r| f.predicate(r))?))
}
