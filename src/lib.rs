//! Go's `strings` package for embedded Lua.
//!
//! ```no_run
//! let lua = mlua::Lua::new();
//! lua_strings::preload(&lua)?;
//! lua.load(r#"
//!     local strings = require("strings")
//!     assert(strings.ToUpper("abc") == "ABC")
//! "#).exec()?;
//! # Ok::<(), mlua::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod marshal;
pub mod registry;
pub mod text;

pub use config::StringsConfig;
pub use error::{CallbackCause, StringsError};
pub use registry::{OPERATIONS, Operation, find_operation, loader, preload, preload_with};
