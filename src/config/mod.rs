use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Shape of the paginated response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStyle {
    /// Nested `links` / `meta` envelope.
    #[default]
    #[serde(alias = "jsonapi")]
    JsonApi,
    /// Flat `next` / `next_link` / `page` / ... keys beside `results`.
    #[serde(alias = "ember")]
    Legacy,
}

impl FromStr for PaginationStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json_api" | "jsonapi" => Ok(Self::JsonApi),
            "legacy" | "ember" => Ok(Self::Legacy),
            _ => Err(ConfigError::InvalidValue {
                key: "PAGINATION_STYLE",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaginationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonApi => f.write_str("json_api"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

/// Settings consumed by the envelope builder.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub style: PaginationStyle,
    pub page_query_param: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            style: PaginationStyle::JsonApi,
            page_query_param: "page".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub public_scheme: String,
    pub pagination: PaginationConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup; missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let style = match lookup("PAGINATION_STYLE") {
            Some(value) => value.parse()?,
            None => PaginationStyle::default(),
        };

        let page_query_param = lookup("PAGE_QUERY_PARAM").unwrap_or_else(|| "page".to_string());
        let page_query_param = page_query_param.trim();
        if page_query_param.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "PAGE_QUERY_PARAM",
                value: page_query_param.to_string(),
            });
        }

        Ok(Self {
            host: lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("BACKEND_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            public_scheme: lookup("APP_PUBLIC_SCHEME").unwrap_or_else(|| "http".to_string()),
            pagination: PaginationConfig {
                style,
                page_query_param: page_query_param.to_string(),
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_scheme: "http".to_string(),
            pagination: PaginationConfig::default(),
        }
    }
}
