use hireboard::submissions::{RecordId, RecordRepository, RepositoryError, StoredRecord};
use hireboard::theme::ThemePreference;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Process-local repository; records live as long as the command.
#[derive(Clone)]
pub(crate) struct InMemoryRecordRepository<T> {
    records: Arc<Mutex<BTreeMap<RecordId, StoredRecord<T>>>>,
}

impl<T> Default for InMemoryRecordRepository<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl<T> InMemoryRecordRepository<T> {
    fn guard(&self) -> Result<MutexGuard<'_, BTreeMap<RecordId, StoredRecord<T>>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl<T> RecordRepository<T> for InMemoryRecordRepository<T>
where
    T: Clone + Send,
{
    fn upsert(&self, record: StoredRecord<T>) -> Result<StoredRecord<T>, RepositoryError> {
        let mut guard = self.guard()?;
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<StoredRecord<T>>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<StoredRecord<T>>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.values().cloned().collect())
    }
}

pub(crate) fn parse_theme(value: &str) -> Result<ThemePreference, String> {
    value
        .parse::<ThemePreference>()
        .map_err(|err| err.to_string())
}
