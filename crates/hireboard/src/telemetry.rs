use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("APP_LOG_LEVEL '{value}' is not a valid log directive")]
    InvalidLogLevel {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("log subscriber could not be installed")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global subscriber on stderr. `RUST_LOG` wins over the
/// configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(directives.as_deref(), &config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}

/// Valid `RUST_LOG` directives take precedence; anything else falls back to
/// the configured level, which must parse.
fn log_filter(directives: Option<&str>, level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = directives.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidLogLevel {
        value: level.to_string(),
        source,
    })
}
