use mlua::Value;

use crate::error::StringsError;
use crate::marshal::{Args, ret_bool, ret_string};
use crate::text;

pub(super) fn op_equal_fold(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let t = args.string(1)?;
    Ok(ret_bool(text::equal_fold(&s, &t)))
}

/// Map(mapping, s) - rewrite each code point through `mapping(r)`
///
/// Note the argument order: the function comes first. A negative result
/// drops the code point.
pub(super) fn op_map(args: &Args<'_>) -> Result<Value, StringsError> {
    let mapping = args.callable(0)?;
    let s = args.string(1)?;
    let mapped = text::map(|r| mapping.mapping(r), &s)?;
    ret_string(args.lua(), &mapped)
}

pub(super) fn op_title(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    ret_string(args.lua(), &text::title(&s))
}

pub(super) fn op_to_lower(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    ret_string(args.lua(), &text::to_lower(&s))
}

pub(super) fn op_to_title(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    ret_string(args.lua(), &text::to_title(&s))
}

pub(super) fn op_to_upper(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    ret_string(args.lua(), &text::to_upper(&s))
}
