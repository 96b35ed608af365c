use crate::config::ConfigError;
use crate::navigation::NavigationError;
use crate::records::RosterImportError;
use crate::submissions::SubmissionError;
use crate::telemetry::TelemetryError;
use crate::theme::ThemeError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Roster(RosterImportError),
    Submission(SubmissionError),
    Theme(ThemeError),
    Navigation(NavigationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Roster(err) => write!(f, "roster import error: {}", err),
            AppError::Submission(err) => write!(f, "submission error: {}", err),
            AppError::Theme(err) => write!(f, "theme error: {}", err),
            AppError::Navigation(err) => write!(f, "navigation error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Roster(err) => Some(err),
            AppError::Submission(err) => Some(err),
            AppError::Theme(err) => Some(err),
            AppError::Navigation(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RosterImportError> for AppError {
    fn from(value: RosterImportError) -> Self {
        Self::Roster(value)
    }
}

impl From<SubmissionError> for AppError {
    fn from(value: SubmissionError) -> Self {
        Self::Submission(value)
    }
}

impl From<ThemeError> for AppError {
    fn from(value: ThemeError) -> Self {
        Self::Theme(value)
    }
}

impl From<NavigationError> for AppError {
    fn from(value: NavigationError) -> Self {
        Self::Navigation(value)
    }
}
