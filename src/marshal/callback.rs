use std::cell::Cell;

use mlua::{Function, Lua, Value};

use crate::error::{CallbackCause, Result, StringsError};
use crate::text::utf8::Rune;

use super::lua_type_name;

/// Per-state count of callback invocations currently on the stack.
#[derive(Default)]
struct CallbackDepth(Cell<usize>);

/// Number of script callbacks the host is currently inside of, on this
/// state. Zero whenever no operation is running.
pub fn callback_depth(lua: &Lua) -> usize {
    lua.app_data_ref::<CallbackDepth>()
        .map(|depth| depth.0.get())
        .unwrap_or(0)
}

/// Holds one slot of callback depth for the duration of an invocation and
/// gives it back on drop, whichever way the invocation ends.
struct DepthGuard<'a> {
    lua: &'a Lua,
}

impl<'a> DepthGuard<'a> {
    fn enter(lua: &'a Lua) -> Self {
        if lua.app_data_ref::<CallbackDepth>().is_none() {
            lua.set_app_data(CallbackDepth::default());
        }
        if let Some(depth) = lua.app_data_ref::<CallbackDepth>() {
            depth.0.set(depth.0.get() + 1);
        }
        Self { lua }
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        if let Some(depth) = self.lua.app_data_ref::<CallbackDepth>() {
            depth.0.set(depth.0.get().saturating_sub(1));
        }
    }
}

/// A script closure invoked from inside a host text routine.
///
/// Each invocation is a protected call that reads exactly one result. Any
/// failure becomes a [`StringsError::CallbackFault`] for the enclosing
/// operation.
pub struct Callback<'a> {
    lua: &'a Lua,
    op: &'static str,
    func: Function,
}

impl<'a> Callback<'a> {
    pub(crate) fn new(lua: &'a Lua, op: &'static str, func: Function) -> Self {
        Self { lua, op, func }
    }

    fn fault(&self, rune: char, cause: CallbackCause) -> StringsError {
        tracing::debug!(op = self.op, rune = rune as u32, cause = %cause, "callback fault");
        StringsError::CallbackFault {
            op: self.op,
            rune,
            cause,
        }
    }

    /// Calls the closure with the code point as a Lua integer and hands the
    /// single result to `convert`. The result handle is dropped before this
    /// returns.
    fn invoke<T>(
        &self,
        rune: char,
        convert: impl FnOnce(&Value) -> std::result::Result<T, CallbackCause>,
    ) -> Result<T> {
        let _guard = DepthGuard::enter(self.lua);
        let result: Value = self
            .func
            .call(i64::from(u32::from(rune)))
            .map_err(|err| self.fault(rune, CallbackCause::Raised(err)))?;
        convert(&result).map_err(|cause| self.fault(rune, cause))
    }

    /// `func(r) -> boolean`
    pub fn predicate(&self, rune: char) -> Result<bool> {
        self.invoke(rune, |value| match value {
            Value::Boolean(b) => Ok(*b),
            other => Err(CallbackCause::BadReturn {
                expected: "boolean",
                got: lua_type_name(other),
            }),
        })
    }

    /// `func(r) -> number`, narrowed to a 32-bit code point. Negative
    /// results mean "drop".
    pub fn mapping(&self, rune: char) -> Result<Rune> {
        self.invoke(rune, |value| match value {
            Value::Integer(i) => Ok(*i as Rune),
            Value::Number(n) => Ok(*n as i64 as Rune),
            other => Err(CallbackCause::BadReturn {
                expected: "number",
                got: lua_type_name(other),
            }),
        })
    }
}
