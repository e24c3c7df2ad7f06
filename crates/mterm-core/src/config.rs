//! Terminal configuration: dimensions and resource bounds.
//!
//! Values can be overridden from the environment:
//!
//! | variable | field | default |
//! |----------|-------|---------|
//! | `MTERM_ROWS` | `rows` | 24 |
//! | `MTERM_COLS` | `cols` | 80 |
//! | `MTERM_MAX_OSC_LEN` | `max_osc_len` | 4096 |

use std::env;
use std::fmt;

pub const ENV_ROWS: &str = "MTERM_ROWS";
pub const ENV_COLS: &str = "MTERM_COLS";
pub const ENV_MAX_OSC_LEN: &str = "MTERM_MAX_OSC_LEN";

/// Settings fixed at terminal construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    pub rows: u16,
    pub cols: u16,
    /// Longest OSC string kept, in runes. Extra input is dropped.
    pub max_osc_len: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            rows: 24,
            cols: 80,
            max_osc_len: 4096,
        }
    }
}

/// Result of reading the environment: the config plus any rejected values.
#[derive(Debug, Clone)]
pub struct TerminalConfigParse {
    pub config: TerminalConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl TerminalConfig {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env_with_diagnostics() -> TerminalConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Read overrides through `get`. Unparsable values keep the default and
    /// are reported in `errors`.
    pub fn from_env_with<F>(mut get: F) -> TerminalConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_ROWS) {
            match value.trim().parse::<u16>() {
                Ok(parsed) => config.rows = parsed,
                Err(_) => errors.push(ConfigError::new("rows", value, "expected integer 1-65535")),
            }
        }

        if let Some(value) = get(ENV_COLS) {
            match value.trim().parse::<u16>() {
                Ok(parsed) => config.cols = parsed,
                Err(_) => errors.push(ConfigError::new("cols", value, "expected integer 1-65535")),
            }
        }

        if let Some(value) = get(ENV_MAX_OSC_LEN) {
            match value.trim().parse::<usize>() {
                Ok(parsed) => config.max_osc_len = parsed,
                Err(_) => errors.push(ConfigError::new(
                    "max_osc_len",
                    value,
                    "expected positive integer",
                )),
            }
        }

        TerminalConfigParse { config, errors }
    }

    /// Check constraints and return every violation.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        validate_positive("rows", usize::from(self.rows), &mut errors);
        validate_positive("cols", usize::from(self.cols), &mut errors);
        validate_positive("max_osc_len", self.max_osc_len, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_positive(field: &'static str, value: usize, errors: &mut Vec<ConfigError>) {
    if value == 0 {
        errors.push(ConfigError::new(field, value.to_string(), "must be >= 1"));
    }
}
