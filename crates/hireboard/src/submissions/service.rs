use chrono::Utc;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::repository::{
    RecordId, RecordRepository, RepositoryError, StoredRecord, SubmissionStatus,
};
use crate::config::SubmissionConfig;
use crate::wizard::{StepForm, Wizard, WizardError};

/// Saves wizard forms as drafts or published records after the configured
/// round-trip delay.
pub struct SubmissionService<R, T> {
    repository: Arc<R>,
    prefix: &'static str,
    latency: Duration,
    sequence: AtomicU64,
    saving: AtomicUsize,
    _payload: PhantomData<fn() -> T>,
}

impl<R, T> SubmissionService<R, T>
where
    R: RecordRepository<T> + 'static,
    T: Clone + Send + Sync,
{
    pub fn new(repository: Arc<R>, prefix: &'static str, config: SubmissionConfig) -> Self {
        Self {
            repository,
            prefix,
            latency: config.save_latency(),
            sequence: AtomicU64::new(1),
            saving: AtomicUsize::new(0),
            _payload: PhantomData,
        }
    }

    /// Loading indicator: true while any save is in flight.
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire) > 0
    }

    /// Stores `payload` without validation. `None` creates a new record.
    pub async fn save_draft(
        &self,
        id: Option<RecordId>,
        payload: T,
    ) -> Result<StoredRecord<T>, SubmissionError> {
        self.store(id, SubmissionStatus::Draft, payload).await
    }

    /// Validates the wizard's final step and stores the form as published.
    pub async fn publish(
        &self,
        id: Option<RecordId>,
        wizard: &mut Wizard<T>,
    ) -> Result<StoredRecord<T>, SubmissionError>
    where
        T: StepForm,
    {
        let payload = wizard.publish(|form| form.clone())?;
        self.store(id, SubmissionStatus::Published, payload).await
    }

    pub fn get(&self, id: &RecordId) -> Result<StoredRecord<T>, SubmissionError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn records(&self) -> Result<Vec<StoredRecord<T>>, SubmissionError> {
        Ok(self.repository.list()?)
    }

    async fn store(
        &self,
        id: Option<RecordId>,
        status: SubmissionStatus,
        payload: T,
    ) -> Result<StoredRecord<T>, SubmissionError> {
        let _in_flight = InFlight::raise(&self.saving);
        tokio::time::sleep(self.latency).await;

        let id = match id {
            Some(id) => {
                if self.repository.fetch(&id)?.is_none() {
                    return Err(RepositoryError::NotFound.into());
                }
                id
            }
            None => self.next_id(),
        };

        let stored = self.repository.upsert(StoredRecord {
            id,
            status,
            payload,
            saved_at: Utc::now(),
        })?;
        tracing::info!(id = %stored.id, status = stored.status.label(), "record saved");
        Ok(stored)
    }

    fn next_id(&self) -> RecordId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        RecordId(format!("{}-{id:06}", self.prefix))
    }
}

/// Counts one running save; released when the save finishes, including on
/// errors.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn raise(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Draft,
    Publish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Toast shown after a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn from_result<T>(
        action: SaveAction,
        result: &Result<StoredRecord<T>, SubmissionError>,
    ) -> Self {
        match (action, result) {
            (SaveAction::Draft, Ok(record)) => Self {
                kind: NoticeKind::Success,
                message: format!("Draft {} saved", record.id),
            },
            (SaveAction::Publish, Ok(record)) => Self {
                kind: NoticeKind::Success,
                message: format!("{} published", record.id),
            },
            (SaveAction::Draft, Err(err)) => Self {
                kind: NoticeKind::Failure,
                message: format!("Could not save draft: {err}"),
            },
            (SaveAction::Publish, Err(err)) => Self {
                kind: NoticeKind::Failure,
                message: format!("Could not publish: {err}"),
            },
        }
    }
}
