use mlua::{Lua, Value};

use crate::error::Result;

pub fn ret_bool(v: bool) -> Value {
    Value::Boolean(v)
}

pub fn ret_int(v: i64) -> Value {
    Value::Integer(v)
}

/// Byte offset, or `-1` when absent.
pub fn ret_index(v: Option<usize>) -> Value {
    Value::Integer(v.map_or(-1, |at| at as i64))
}

pub fn ret_string(lua: &Lua, bytes: &[u8]) -> Result<Value> {
    Ok(Value::String(lua.create_string(bytes)?))
}

/// Fresh table holding every item at `1..=n`, empty strings included.
pub fn ret_string_list<T: AsRef<[u8]>>(lua: &Lua, items: &[T]) -> Result<Value> {
    let table = lua.create_table_with_capacity(items.len(), 0)?;
    for (i, item) in items.iter().enumerate() {
        table.raw_set(i + 1, lua.create_string(item.as_ref())?)?;
    }
    Ok(Value::Table(table))
}
