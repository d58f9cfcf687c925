//! Tracing subscriber installation.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Filter used when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_FILTER: &str = "warn,taskdesk=info";

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    Filter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser error.
        #[source]
        source: ParseError,
    },
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Builds the event filter.
///
/// An explicit `level` wins; otherwise `RUST_LOG` is consulted, and
/// [`DEFAULT_FILTER`] applies when neither is set.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the explicit directive is invalid.
pub fn filter(level: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    level.map_or_else(
        || Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        |directive| {
            EnvFilter::try_new(directive).map_err(|source| TelemetryError::Filter {
                directive: directive.to_owned(),
                source,
            })
        },
    )
}

/// Installs a formatting subscriber that writes to standard error, leaving
/// standard output free for command results.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(level: Option<&str>) -> Result<(), TelemetryError> {
    tracing_subscriber::registry()
        .with(filter(level)?)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;
    Ok(())
}
