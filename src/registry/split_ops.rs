use mlua::Value;

use crate::error::StringsError;
use crate::marshal::{Args, ret_string, ret_string_list};
use crate::text;

pub(super) fn op_fields(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    ret_string_list(args.lua(), &text::fields(&s))
}

/// FieldsFunc(s, f) - split around runs of code points where `f(r)` is true
///
/// `f` runs exactly once per code point, left to right.
pub(super) fn op_fields_func(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let f = args.callable(1)?;
    let fields = text::fields_func(&s, |r| f.predicate(r))?;
    ret_string_list(args.lua(), &fields)
}

pub(super) fn op_join(args: &Args<'_>) -> Result<Value, StringsError> {
    let elems = args.string_list(0)?;
    let sep = args.string(1)?;
    ret_string(args.lua(), &text::join(&elems, &sep))
}

pub(super) fn op_repeat(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let count = args.integer(1)?;
    let repeated = text::repeat(&s, count).map_err(|err| StringsError::HostFault {
        op: args.op(),
        message: err.to_string(),
    })?;
    ret_string(args.lua(), &repeated)
}

pub(super) fn op_replace(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let old = args.string(1)?;
    let new = args.string(2)?;
    let n = args.integer(3)?;
    ret_string(args.lua(), &text::replace(&s, &old, &new, n))
}

pub(super) fn op_split(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let sep = args.string(1)?;
    ret_string_list(args.lua(), &text::split(&s, &sep))
}

pub(super) fn op_split_after(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let sep = args.string(1)?;
    ret_string_list(args.lua(), &text::split_after(&s, &sep))
}

pub(super) fn op_split_after_n(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let sep = args.string(1)?;
    let n = args.integer(2)?;
    ret_string_list(args.lua(), &text::split_after_n(&s, &sep, n))
}

pub(super) fn op_split_n(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let sep = args.string(1)?;
    let n = args.integer(2)?;
    ret_string_list(args.lua(), &text::split_n(&s, &sep, n))
}
