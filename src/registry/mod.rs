//! The `strings` module table.
//!
//! [`OPERATIONS`] is fixed at compile time. [`loader`] turns it into a Lua
//! table; [`preload`] registers that loader with `require`.

use std::fmt;

use mlua::{Function, Lua, MultiValue, Table, Value, Variadic};

use crate::config::StringsConfig;
use crate::error::StringsError;
use crate::marshal::{Args, render_signature};

mod case_ops;
mod search_ops;
mod split_ops;
mod trim_ops;

use case_ops::{op_equal_fold, op_map, op_title, op_to_lower, op_to_title, op_to_upper};
use search_ops::{
    op_compare, op_contains, op_contains_any, op_contains_rune, op_count, op_has_prefix,
    op_has_suffix, op_index, op_index_any, op_index_byte, op_index_func, op_index_rune,
    op_last_index, op_last_index_any, op_last_index_byte, op_last_index_func,
};
use split_ops::{
    op_fields, op_fields_func, op_join, op_repeat, op_replace, op_split, op_split_after,
    op_split_after_n, op_split_n,
};
use trim_ops::{
    op_trim, op_trim_func, op_trim_left, op_trim_left_func, op_trim_prefix, op_trim_right,
    op_trim_right_func, op_trim_space, op_trim_suffix,
};

pub type OperationFn = fn(&Args<'_>) -> Result<Value, StringsError>;

/// One named binding: its published parameters and its handler.
#[derive(Clone)]
pub struct Operation {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub func: OperationFn,
}

impl Operation {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn signature(&self) -> String {
        render_signature(self.name, self.params)
    }

    /// Checks arity, then runs the handler.
    pub fn call(&'static self, lua: &Lua, values: &[Value]) -> Result<Value, StringsError> {
        let args = Args::new(lua, self.name, self.params, values)?;
        tracing::trace!(op = self.name, "call");
        (self.func)(&args)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation({})", self.signature())
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

const S_T: &[&str] = &["s", "t"];
const S_SUBSTR: &[&str] = &["s", "substr"];
const S_CHARS: &[&str] = &["s", "chars"];
const S_R: &[&str] = &["s", "r"];
const S_C: &[&str] = &["s", "c"];
const S_F: &[&str] = &["s", "f"];
const S_SEP: &[&str] = &["s", "sep"];
const S_SEP_N: &[&str] = &["s", "sep", "n"];
const S_CUTSET: &[&str] = &["s", "cutset"];
const S: &[&str] = &["s"];

/// Every binding, sorted by name.
pub static OPERATIONS: &[Operation] = &[
    Operation { name: "Compare", params: &["a", "b"], func: op_compare },
    Operation { name: "Contains", params: S_SUBSTR, func: op_contains },
    Operation { name: "ContainsAny", params: S_CHARS, func: op_contains_any },
    Operation { name: "ContainsRune", params: S_R, func: op_contains_rune },
    Operation { name: "Count", params: S_SUBSTR, func: op_count },
    Operation { name: "EqualFold", params: S_T, func: op_equal_fold },
    Operation { name: "Fields", params: S, func: op_fields },
    Operation { name: "FieldsFunc", params: S_F, func: op_fields_func },
    Operation { name: "HasPrefix", params: &["s", "prefix"], func: op_has_prefix },
    Operation { name: "HasSuffix", params: &["s", "suffix"], func: op_has_suffix },
    Operation { name: "Index", params: S_SUBSTR, func: op_index },
    Operation { name: "IndexAny", params: S_CHARS, func: op_index_any },
    Operation { name: "IndexByte", params: S_C, func: op_index_byte },
    Operation { name: "IndexFunc", params: S_F, func: op_index_func },
    Operation { name: "IndexRune", params: S_R, func: op_index_rune },
    Operation { name: "Join", params: &["elems", "sep"], func: op_join },
    Operation { name: "LastIndex", params: S_SUBSTR, func: op_last_index },
    Operation { name: "LastIndexAny", params: S_CHARS, func: op_last_index_any },
    Operation { name: "LastIndexByte", params: S_C, func: op_last_index_byte },
    Operation { name: "LastIndexFunc", params: S_F, func: op_last_index_func },
    Operation { name: "Map", params: &["mapping", "s"], func: op_map },
    Operation { name: "Repeat", params: &["s", "count"], func: op_repeat },
    Operation { name: "Replace", params: &["s", "old", "new", "n"], func: op_replace },
    Operation { name: "Split", params: S_SEP, func: op_split },
    Operation { name: "SplitAfter", params: S_SEP, func: op_split_after },
    Operation { name: "SplitAfterN", params: S_SEP_N, func: op_split_after_n },
    Operation { name: "SplitN", params: S_SEP_N, func: op_split_n },
    Operation { name: "Title", params: S, func: op_title },
    Operation { name: "ToLower", params: S, func: op_to_lower },
    Operation { name: "ToTitle", params: S, func: op_to_title },
    Operation { name: "ToUpper", params: S, func: op_to_upper },
    Operation { name: "Trim", params: S_CUTSET, func: op_trim },
    Operation { name: "TrimFunc", params: S_F, func: op_trim_func },
    Operation { name: "TrimLeft", params: S_CUTSET, func: op_trim_left },
    Operation { name: "TrimLeftFunc", params: S_F, func: op_trim_left_func },
    Operation { name: "TrimPrefix", params: &["s", "prefix"], func: op_trim_prefix },
    Operation { name: "TrimRight", params: S_CUTSET, func: op_trim_right },
    Operation { name: "TrimRightFunc", params: S_F, func: op_trim_right_func },
    Operation { name: "TrimSpace", params: S, func: op_trim_space },
    Operation { name: "TrimSuffix", params: &["s", "suffix"], func: op_trim_suffix },
];

pub fn find_operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// Builds the module table: one Lua function per [`Operation`].
pub fn loader(lua: &Lua) -> mlua::Result<Table> {
    let module = lua.create_table_with_capacity(0, OPERATIONS.len())?;
    for op in OPERATIONS {
        let func = lua.create_function(move |lua, values: Variadic<Value>| {
            op.call(lua, &values).map_err(mlua::Error::from)
        })?;
        module.raw_set(op.name, func)?;
    }
    tracing::debug!(operations = OPERATIONS.len(), "built strings module table");
    Ok(module)
}

/// Registers [`loader`] as `package.preload["strings"]`. The table is only
/// built once a script requires it.
pub fn preload(lua: &Lua) -> mlua::Result<()> {
    preload_with(lua, &StringsConfig::default())
}

/// Like [`preload`], under the configured module name, and optionally
/// installs the table as a global as well.
pub fn preload_with(lua: &Lua, config: &StringsConfig) -> mlua::Result<()> {
    let package: Table = lua.globals().get("package")?;
    let preload: Table = package.get("preload")?;
    let load = lua.create_function(|lua, _: MultiValue| loader(lua))?;
    preload.set(config.module_name.as_str(), load)?;
    tracing::debug!(module = %config.module_name, "preloaded strings module");

    if let Some(global) = &config.global {
        let require: Function = lua.globals().get("require")?;
        let module: Table = require.call(config.module_name.as_str())?;
        lua.globals().set(global.as_str(), module)?;
        tracing::debug!(global = %global, "installed strings module as global");
    }
    Ok(())
}
