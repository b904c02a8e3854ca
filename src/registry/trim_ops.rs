use mlua::Value;

use crate::error::StringsError;
use crate::marshal::{Args, ret_string};
use crate::text;

pub(super) fn op_trim(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let cutset = args.string(1)?;
    ret_string(args.lua(), text::trim(&s, &cutset))
}

pub(super) fn op_trim_func(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let f = args.callable(1)?;
    let trimmed = text::trim_func(&s, |r| f.predicate(r))?;
    ret_string(args.lua(), trimmed)
}

pub(super) fn op_trim_left(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let cutset = args.string(1)?;
    ret_string(args.lua(), text::trim_left(&s, &cutset))
}

pub(super) fn op_trim_left_func(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let f = args.callable(1)?;
    let trimmed = text::trim_left_func(&s, |r| f.predicate(r))?;
    ret_string(args.lua(), trimmed)
}

pub(super) fn op_trim_prefix(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let prefix = args.string(1)?;
    ret_string(args.lua(), text::trim_prefix(&s, &prefix))
}

pub(super) fn op_trim_right(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let cutset = args.string(1)?;
    ret_string(args.lua(), text::trim_right(&s, &cutset))
}

pub(super) fn op_trim_right_func(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let f = args.callable(1)?;
    let trimmed = text::trim_right_func(&s, |r| f.predicate(r))?;
    ret_string(args.lua(), trimmed)
}

pub(super) fn op_trim_space(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    ret_string(args.lua(), text::trim_space(&s))
}

pub(super) fn op_trim_suffix(args: &Args<'_>) -> Result<Value, StringsError> {
    let s = args.string(0)?;
    let suffix = args.string(1)?;
    ret_string(args.lua(), text::trim_suffix(&s, &suffix))
}
