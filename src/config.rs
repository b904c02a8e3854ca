use serde::Deserialize;

use crate::error::{Result, StringsError};

pub const DEFAULT_MODULE_NAME: &str = "strings";

/// How the module is exposed to scripts.
///
/// ```json
/// { "module_name": "gostrings", "global": "strings" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringsConfig {
    /// Name scripts pass to `require`.
    pub module_name: String,
    /// When set, the module table is also stored in this global.
    pub global: Option<String>,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            global: None,
        }
    }
}

impl StringsConfig {
    pub fn from_json(source: &str) -> Result<Self> {
        let config: StringsConfig =
            serde_json::from_str(source).map_err(|err| StringsError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.module_name.is_empty() {
            return Err(StringsError::Config("module_name must not be empty".to_string()));
        }
        if matches!(&self.global, Some(name) if name.is_empty()) {
            return Err(StringsError::Config("global must not be empty".to_string()));
        }
        Ok(())
    }
}
