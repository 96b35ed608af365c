use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Draft,
    Published,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Published => "published",
        }
    }
}

/// Saved form payload with its lifecycle metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord<T> {
    pub id: RecordId,
    pub status: SubmissionStatus,
    pub payload: T,
    pub saved_at: DateTime<Utc>,
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait RecordRepository<T>: Send + Sync {
    fn upsert(&self, record: StoredRecord<T>) -> Result<StoredRecord<T>, RepositoryError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<StoredRecord<T>>, RepositoryError>;
    fn list(&self) -> Result<Vec<StoredRecord<T>>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
