use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PREFERENCES_PATH: &str = ".hireboard/preferences.json";
const DEFAULT_SAVE_LATENCY_MS: u64 = 1000;

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub storage: StorageConfig,
    pub submissions: SubmissionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let preferences_path = env::var("APP_PREFERENCES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PREFERENCES_PATH));

        let save_latency_ms = match env::var("APP_SAVE_LATENCY_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSaveLatency { value: raw })?,
            Err(_) => DEFAULT_SAVE_LATENCY_MS,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            storage: StorageConfig { preferences_path },
            submissions: SubmissionConfig { save_latency_ms },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where user preferences (theme) are persisted.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub preferences_path: PathBuf,
}

/// Simulated round-trip applied to draft saves and publishes.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionConfig {
    pub save_latency_ms: u64,
}

impl SubmissionConfig {
    pub fn save_latency(&self) -> Duration {
        Duration::from_millis(self.save_latency_ms)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            save_latency_ms: DEFAULT_SAVE_LATENCY_MS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSaveLatency { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSaveLatency { value } => write!(
                f,
                "APP_SAVE_LATENCY_MS must be a whole number of milliseconds (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_PREFERENCES_PATH");
        env::remove_var("APP_SAVE_LATENCY_MS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.storage.preferences_path,
            PathBuf::from(DEFAULT_PREFERENCES_PATH)
        );
        assert_eq!(
            config.submissions.save_latency(),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "CI");
        env::set_var("APP_SAVE_LATENCY_MS", " 25 ");
        env::set_var("APP_PREFERENCES_PATH", "/tmp/prefs.json");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.submissions.save_latency_ms, 25);
        assert_eq!(
            config.storage.preferences_path,
            PathBuf::from("/tmp/prefs.json")
        );
    }

    #[test]
    fn rejects_non_numeric_latency() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SAVE_LATENCY_MS", "soon");
        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidSaveLatency { value }) => assert_eq!(value, "soon"),
            other => panic!("expected latency error, got {other:?}"),
        }
    }
}
