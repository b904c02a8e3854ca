//! Conversion between Lua values and host types.
//!
//! Inbound, [`Args`] validates one call's arguments and turns each into an
//! owned host value: bytes, integers, string lists, or a [`Callback`] for
//! script closures. Outbound, the `ret_*` helpers build fresh Lua values.
//! `mlua::Value` never travels past this module into the text routines.

mod args;
mod callback;
mod ret;

use mlua::Value;

pub use args::Args;
pub use callback::{Callback, callback_depth};
pub use ret::{ret_bool, ret_index, ret_int, ret_string, ret_string_list};

/// Lua's name for the type of `value`, folding integer and float into
/// `number` as `type()` does.
pub fn lua_type_name(value: &Value) -> &'static str {
    match value {
        Value::Nil => "nil",
        Value::Boolean(_) => "boolean",
        Value::Integer(_) | Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Table(_) => "table",
        Value::Function(_) => "function",
        Value::Thread(_) => "thread",
        Value::LightUserData(_) | Value::UserData(_) => "userdata",
        _ => value.type_name(),
    }
}

/// Renders a published signature, e.g. `Split(s, sep)`.
pub fn render_signature(name: &str, params: &[&str]) -> String {
    format!("{}({})", name, params.join(", "))
}
