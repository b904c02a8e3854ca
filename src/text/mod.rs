//! Byte-string routines with Go `strings` package semantics.
//!
//! Every routine takes arbitrary bytes. Routines that look at code points
//! decode UTF-8 with replacement (see [`utf8`]). Offsets are byte offsets.
//! Routines driven by a caller closure take a fallible closure and stop at
//! its first error, returning it unchanged.
//!
//! Nothing here knows about Lua; the registry forwards to these functions.

mod case;
mod replace;
mod search;
mod split;
mod trim;
pub mod utf8;

use thiserror::Error;

pub use case::{
    equal_fold, lower_char, map, title, title_char, to_lower, to_title, to_upper, upper_char,
};
pub use replace::{repeat, replace};
pub use search::{
    compare, contains, contains_any, contains_rune, count, has_prefix, has_suffix, index,
    index_any, index_byte, index_func, index_rune, last_index, last_index_any, last_index_byte,
    last_index_func,
};
pub use split::{fields, fields_func, is_space, join, split, split_after, split_after_n, split_n};
pub use trim::{
    trim, trim_func, trim_left, trim_left_func, trim_prefix, trim_right, trim_right_func,
    trim_space, trim_suffix,
};

/// Inputs a routine refuses outright.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("negative Repeat count")]
    NegativeRepeatCount,
    #[error("Repeat output length overflow")]
    RepeatOverflow,
    #[error("Repeat output of {len} bytes cannot be allocated")]
    RepeatAllocation { len: usize },
}

#[cfg(test)]
mod search_test;
#[cfg(test)]
mod trim_test;
#[cfg(test)]
mod utf8_test;
