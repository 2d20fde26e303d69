// Runtime configuration, read from environment variables only. There is no
// config file: the calculator has two knobs and both have sane defaults.

use std::env;

pub const PLAIN_VAR: &str = "CALC_PLAIN";
pub const LOG_VAR: &str = "CALC_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Use the plain line console even on a terminal.
    pub plain: bool,
    /// Log filter applied when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            plain: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from `CALC_PLAIN` and `CALC_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Config {
            plain: lookup(PLAIN_VAR).map(|v| is_truthy(&v)).unwrap_or(defaults.plain),
            log_filter: lookup(LOG_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
