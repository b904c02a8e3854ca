use mlua::{Lua, Value};

use crate::error::{Result, StringsError};
use crate::text::utf8::Rune;

use super::{Callback, lua_type_name, render_signature};

/// The arguments of one operation call, checked against its published
/// parameter list.
pub struct Args<'a> {
    lua: &'a Lua,
    op: &'static str,
    params: &'static [&'static str],
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Fails with an argument-count error unless exactly `params.len()`
    /// values were passed.
    pub fn new(
        lua: &'a Lua,
        op: &'static str,
        params: &'static [&'static str],
        values: &'a [Value],
    ) -> Result<Self> {
        if values.len() != params.len() {
            return Err(StringsError::ArgumentCount {
                op,
                signature: render_signature(op, params),
                expected: params.len(),
                got: values.len(),
            });
        }
        Ok(Self {
            lua,
            op,
            params,
            values,
        })
    }

    pub fn lua(&self) -> &'a Lua {
        self.lua
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    fn type_error(
        &self,
        index: usize,
        label: String,
        expected: &'static str,
        got: &Value,
    ) -> StringsError {
        StringsError::ArgumentType {
            op: self.op,
            signature: render_signature(self.op, self.params),
            position: index + 1,
            label,
            expected,
            got: lua_type_name(got),
        }
    }

    fn param_error(&self, index: usize, expected: &'static str) -> StringsError {
        self.type_error(index, self.params[index].to_string(), expected, &self.values[index])
    }

    /// String argument; numbers are accepted through Lua's own coercion.
    pub fn string(&self, index: usize) -> Result<Vec<u8>> {
        let value = &self.values[index];
        match value {
            Value::String(s) => Ok(s.as_bytes().to_vec()),
            Value::Integer(_) | Value::Number(_) => match self.lua.coerce_string(value.clone())? {
                Some(s) => Ok(s.as_bytes().to_vec()),
                None => Err(self.param_error(index, "string")),
            },
            _ => Err(self.param_error(index, "string")),
        }
    }

    /// Integer argument. Floats truncate toward zero; out-of-range values
    /// pass through for the host routine to judge.
    pub fn integer(&self, index: usize) -> Result<i64> {
        match &self.values[index] {
            Value::Integer(i) => Ok(*i),
            Value::Number(n) => Ok(*n as i64),
            _ => Err(self.param_error(index, "number")),
        }
    }

    /// Integer narrowed to its low byte.
    pub fn byte(&self, index: usize) -> Result<u8> {
        Ok(self.integer(index)? as u8)
    }

    /// Integer narrowed to a 32-bit code point.
    pub fn rune(&self, index: usize) -> Result<Rune> {
        Ok(self.integer(index)? as Rune)
    }

    /// Table read as the sequence `t[1] .. t[#t]`, each element coerced to a
    /// string the way `table.concat` does.
    pub fn string_list(&self, index: usize) -> Result<Vec<Vec<u8>>> {
        let Value::Table(table) = &self.values[index] else {
            return Err(self.param_error(index, "table"));
        };
        let len = table.raw_len();
        let mut items = Vec::with_capacity(len);
        for position in 1..=len {
            let item: Value = table.raw_get(position)?;
            let bytes = match &item {
                Value::String(s) => Some(s.as_bytes().to_vec()),
                Value::Integer(_) | Value::Number(_) => self
                    .lua
                    .coerce_string(item.clone())?
                    .map(|s| s.as_bytes().to_vec()),
                _ => None,
            };
            match bytes {
                Some(bytes) => items.push(bytes),
                None => {
                    let label = format!("{}[{}]", self.params[index], position);
                    return Err(self.type_error(index, label, "string", &item));
                }
            }
        }
        Ok(items)
    }

    /// Function argument, wrapped for invocation from host code.
    pub fn callable(&self, index: usize) -> Result<Callback<'a>> {
        match &self.values[index] {
            Value::Function(func) => Ok(Callback::new(self.lua, self.op, func.clone())),
            _ => Err(self.param_error(index, "function")),
        }
    }
}
