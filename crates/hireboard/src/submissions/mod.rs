//! Draft and publish flows for wizard forms, backed by a pluggable repository.

pub mod repository;
pub mod service;


pub use repository::{RecordId, RecordRepository, RepositoryError, StoredRecord, SubmissionStatus};
pub use service::{Notice, NoticeKind, SaveAction, SubmissionError, SubmissionService};
