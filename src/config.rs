/// Startup configuration passed in by the extension loader
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

pub const DEFAULT_BANNER: &str = "hello....";

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Background script settings
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Line written to the console at the start of every click
    pub banner: String,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            banner: DEFAULT_BANNER.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Decode from a JS object or JSON string; `undefined` and `null` yield
    /// the defaults
    pub fn from_js(value: JsValue) -> Result<Config, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Config::default());
        }
        if let Some(text) = value.as_string() {
            return Config::from_json(&text);
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Js(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Config, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.banner, "hello....");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"logLevel": "debug"}"#).unwrap();

        assert_eq!(config.banner, DEFAULT_BANNER);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_from_json_full() {
        let config = Config::from_json(r#"{"banner": "clicked", "logLevel": "warn"}"#).unwrap();

        assert_eq!(config.banner, "clicked");
        assert_eq!(log::Level::from(config.log_level), log::Level::Warn);
    }

    #[test]
    fn test_from_json_empty_is_default() {
        assert_eq!(Config::from_json("  ").unwrap(), Config::default());
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_from_json_rejects_bad_level() {
        let err = Config::from_json(r#"{"logLevel": "loud"}"#).unwrap_err();

        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("Invalid config JSON"));
    }
}
