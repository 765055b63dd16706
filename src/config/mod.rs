//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so `Config::from_env` works out of the box. Values that cannot be used
//! (an unparseable margin, an unknown locale) are reported as `ConfigError`
//! instead of silently falling back.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::transformer::{Locale, TransformConfig, pricing::DEFAULT_MARGIN};

/// Environment variable names.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_SOURCE_BASE_URL: &str = "SOURCE_BASE_URL";
pub const ENV_PROFIT_MARGIN: &str = "PROFIT_MARGIN";
pub const ENV_LISTING_LOCALE: &str = "LISTING_LOCALE";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SOURCE_BASE_URL: &str = "https://www.amazon.co.jp";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    bind_addr: String,
    source_base_url: String,
    margin: f64,
    locale: Locale,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        source_base_url: impl Into<String>,
        margin: f64,
        locale: Locale,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: bind_addr.into(),
            source_base_url: source_base_url.into(),
            margin: validate_margin(margin)?,
            locale,
        })
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let source_base_url = env::var(ENV_SOURCE_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_SOURCE_BASE_URL.to_string());

        let margin = match env::var(ENV_PROFIT_MARGIN) {
            Ok(raw) => raw.trim().parse::<f64>().map_err(|err| ConfigError::InvalidValue {
                field: ENV_PROFIT_MARGIN,
                reason: err.to_string(),
            })?,
            Err(_) => DEFAULT_MARGIN,
        };

        let locale = match env::var(ENV_LISTING_LOCALE) {
            Ok(raw) => raw
                .parse::<Locale>()
                .map_err(|reason| ConfigError::InvalidValue {
                    field: ENV_LISTING_LOCALE,
                    reason,
                })?,
            Err(_) => Locale::default(),
        };

        Self::new(bind_addr, source_base_url, margin, locale)
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Origin product pages are fetched from.
    pub fn source_base_url(&self) -> &str {
        &self.source_base_url
    }
    pub fn margin(&self) -> f64 {
        self.margin
    }
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn transform_config(&self) -> TransformConfig {
        TransformConfig {
            margin: self.margin,
            locale: self.locale,
        }
    }
}

impl Default for Config {
    /// Development defaults (mirrors `from_env` with no env overrides).
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            source_base_url: DEFAULT_SOURCE_BASE_URL.to_string(),
            margin: DEFAULT_MARGIN,
            locale: Locale::default(),
        }
    }
}

fn validate_margin(margin: f64) -> Result<f64, ConfigError> {
    if margin.is_finite() && margin > 0.0 {
        Ok(margin)
    } else {
        Err(ConfigError::InvalidValue {
            field: ENV_PROFIT_MARGIN,
            reason: format!("must be a positive number, got {margin}"),
        })
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
