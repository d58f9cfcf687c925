//! Runtime configuration loaded from environment variables.
//!
//! Every setting is optional and falls back to a default suited to a local
//! backend. Values are validated when loaded so that a bad setting fails at
//! startup rather than on the first request.
//!
//! | Variable                | Meaning                               | Default                     |
//! |-------------------------|---------------------------------------|-----------------------------|
//! | `TASKDESK_API_BASE`     | Base URL of the task API              | `http://localhost:4000/api` |
//! | `TASKDESK_TIMEOUT_SECS` | Whole-request timeout in seconds      | none                        |
//! | `TASKDESK_TRANSITIONS`  | `enforce` or `advisory`               | `enforce`                   |
//! | `TASKDESK_PAGE_SIZE`    | Rows per page in list views           | `10`                        |
//! | `TASKDESK_TITLE_MAX`    | Maximum title length in characters    | `200`                       |

use crate::task::{
    adapters::http::HttpClientConfig,
    domain::{TransitionEnforcement, TransitionPolicy},
    ports::ValidationConfig,
};
use std::env;
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable naming the API base URL.
pub const API_BASE_VAR: &str = "TASKDESK_API_BASE";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "TASKDESK_TIMEOUT_SECS";
/// Environment variable selecting the transition enforcement mode.
pub const TRANSITIONS_VAR: &str = "TASKDESK_TRANSITIONS";
/// Environment variable holding the list page size.
pub const PAGE_SIZE_VAR: &str = "TASKDESK_PAGE_SIZE";
/// Environment variable holding the maximum title length.
pub const TITLE_MAX_VAR: &str = "TASKDESK_TITLE_MAX";

/// API base used when none is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:4000/api";
/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Name of the offending variable.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the task API.
    pub api_base: Url,
    /// Whole-request timeout, if any.
    pub timeout: Option<Duration>,
    /// Whether out-of-table status changes are rejected or only logged.
    pub transitions: TransitionEnforcement,
    /// Rows per page in list views. Always at least one.
    pub page_size: usize,
    /// Form validation limits.
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set to a value
    /// that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_base = parse_api_base(read(API_BASE_VAR).as_deref().unwrap_or(DEFAULT_API_BASE))?;

        let timeout = read(TIMEOUT_VAR)
            .map(|raw| parse_positive::<u64>(TIMEOUT_VAR, &raw))
            .transpose()?
            .map(Duration::from_secs);

        let transitions = read(TRANSITIONS_VAR)
            .map(|raw| {
                TransitionEnforcement::parse(&raw).ok_or_else(|| {
                    ConfigError::invalid(
                        TRANSITIONS_VAR,
                        format!("expected 'enforce' or 'advisory', got '{raw}'"),
                    )
                })
            })
            .transpose()?
            .unwrap_or_default();

        let page_size = read(PAGE_SIZE_VAR)
            .map(|raw| parse_positive(PAGE_SIZE_VAR, &raw))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let mut validation = ValidationConfig::default();
        if let Some(raw) = read(TITLE_MAX_VAR) {
            let max = parse_positive(TITLE_MAX_VAR, &raw)?;
            if max < validation.title_min_length {
                return Err(ConfigError::invalid(
                    TITLE_MAX_VAR,
                    format!("must be at least {}", validation.title_min_length),
                ));
            }
            validation = validation.with_title_max_length(max);
        }

        Ok(Self {
            api_base,
            timeout,
            transitions,
            page_size,
            validation,
        })
    }

    /// Replaces the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = api_base;
        self
    }

    /// Returns the HTTP adapter settings.
    #[must_use]
    pub fn http_client(&self) -> HttpClientConfig {
        HttpClientConfig {
            api_base: self.api_base.clone(),
            timeout: self.timeout,
        }
    }

    /// Returns the transition policy for the configured enforcement mode.
    #[must_use]
    pub const fn transition_policy(&self) -> TransitionPolicy {
        TransitionPolicy::new(self.transitions)
    }
}

/// Parses an absolute `http` or `https` URL.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for malformed URLs and other schemes.
pub fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| ConfigError::invalid(API_BASE_VAR, format!("'{raw}' is not a URL: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::invalid(
            API_BASE_VAR,
            format!("unsupported scheme '{other}'"),
        )),
    }
}

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError> + PartialEq + From<u8>,
{
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|err| ConfigError::invalid(key, format!("'{raw}' is not a number: {err}")))?;
    if value == T::from(0) {
        return Err(ConfigError::invalid(key, "must be greater than zero"));
    }
    Ok(value)
}
