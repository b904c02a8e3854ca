use std::fmt;

use thiserror::Error;

pub(crate) fn format_hint(signature: &str) -> String {
    format!("\n\nHint:\n  strings.{}", signature)
}

fn code_point(ch: &char) -> u32 {
    *ch as u32
}

/// What went wrong inside a script-supplied callback.
#[derive(Debug, Clone)]
pub enum CallbackCause {
    /// The closure raised an error.
    Raised(mlua::Error),
    /// The closure returned a value of the wrong type.
    BadReturn {
        expected: &'static str,
        got: &'static str,
    },
}

impl fmt::Display for CallbackCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackCause::Raised(err) => write!(f, "{}", err),
            CallbackCause::BadReturn { expected, got } => {
                write!(f, "expected callback to return {}, got {}", expected, got)
            }
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum StringsError {
    #[error(
        "wrong number of arguments\n\n  function: {op}/{expected}\n  expected: {expected}\n  got: {got}{}",
        format_hint(.signature)
    )]
    ArgumentCount {
        op: &'static str,
        signature: String,
        expected: usize,
        got: usize,
    },

    #[error(
        "{op} expected argument #{position} ({label}) to be {expected}, got {got}{}",
        format_hint(.signature)
    )]
    ArgumentType {
        op: &'static str,
        signature: String,
        /// 1-based, as Lua reports argument positions.
        position: usize,
        label: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("{op}: callback failed on U+{:04X}: {cause}", code_point(.rune))]
    CallbackFault {
        op: &'static str,
        rune: char,
        cause: CallbackCause,
    },

    #[error("{op}: {message}")]
    HostFault { op: &'static str, message: String },

    #[error("invalid strings configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Lua(#[from] mlua::Error),
}

impl StringsError {
    /// Argument count or type mismatch, raised before the host routine runs.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            StringsError::ArgumentCount { .. } | StringsError::ArgumentType { .. }
        )
    }

    pub fn is_callback_fault(&self) -> bool {
        matches!(self, StringsError::CallbackFault { .. })
    }
}

impl From<StringsError> for mlua::Error {
    fn from(err: StringsError) -> Self {
        match err {
            StringsError::Lua(inner) => inner,
            other => mlua::Error::external(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, StringsError>;
