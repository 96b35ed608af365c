pub mod config;
pub mod error;
pub mod listing;
pub mod navigation;
pub mod records;
pub mod submissions;
pub mod telemetry;
pub mod theme;
pub mod wizard;

pub use error::AppError;
