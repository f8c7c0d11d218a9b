//! Defines the configuration for a `TimePicker`.
//!
//! The struct is designed to be deserialized from a configuration file (a TOML
//! file) using `serde`, with `TIMEPICKER_*` environment variables layered on
//! top. Intervals are kept raw here and validated when a picker is built from
//! the config, so a bad value is reported as a `PickerError` rather than
//! silently clamped.

use crate::error::PickerError;
use crate::value::DisabledValues;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const ENV_PREFIX: &str = "TIMEPICKER";

/// Everything a host can configure on a picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerConfig {
    /// The display template, e.g. `"hh:mm A"`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Step between selectable minutes. Must be greater than 0.
    #[serde(default = "default_interval")]
    pub minute_interval: i64,

    /// Step between selectable seconds. Must be greater than 0.
    #[serde(default = "default_interval")]
    pub second_interval: i64,

    /// A disabled picker cannot be opened, selected in, or cleared.
    #[serde(default)]
    pub disabled: bool,

    /// Hides the clear button even when there is something to clear.
    #[serde(default)]
    pub hide_clear_button: bool,

    /// Values to grey out in each column. Passed through untouched.
    #[serde(default)]
    pub disabled_values: DisabledValues,
}

impl PickerConfig {
    /// Loads a config from an optional TOML file plus `TIMEPICKER_*` overrides.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PickerError> {
        Self::load_with_env_prefix(path.as_ref(), ENV_PREFIX)
    }

    fn load_with_env_prefix(path: &Path, env_prefix: &str) -> Result<Self, PickerError> {
        debug!(path = %path.display(), env_prefix, "loading picker configuration");
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(env_prefix))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Parses a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, PickerError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            minute_interval: default_interval(),
            second_interval: default_interval(),
            disabled: false,
            hide_clear_button: false,
            disabled_values: DisabledValues::default(),
        }
    }
}

// --- Default value functions for serde ---

fn default_format() -> String {
    "HH:mm".to_string()
}

fn default_interval() -> i64 {
    1
}
