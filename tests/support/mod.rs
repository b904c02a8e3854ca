#![allow(dead_code)]

use mlua::{FromLuaMulti, Lua};

/// Fresh state with the module preloaded and bound to the local `strings`.
pub fn state() -> Lua {
    let lua = Lua::new();
    lua_strings::preload(&lua).unwrap_or_else(|err| panic!("preload failed: {}", err));
    lua.load("strings = require('strings')")
        .exec()
        .unwrap_or_else(|err| panic!("require failed: {}", err));
    lua
}

pub fn eval<T: FromLuaMulti>(lua: &Lua, source: &str) -> T {
    lua.load(source)
        .eval()
        .unwrap_or_else(|err| panic!("script failed: {}\n--- source ---\n{}", err, source))
}

pub fn run(source: &str) {
    let lua = state();
    lua.load(source)
        .exec()
        .unwrap_or_else(|err| panic!("script failed: {}\n--- source ---\n{}", err, source));
}

pub fn run_err(source: &str) -> String {
    let lua = state();
    match lua.load(source).exec() {
        Ok(()) => panic!("expected script to fail:\n{}", source),
        Err(err) => err.to_string(),
    }
}
