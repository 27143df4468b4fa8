use border_checkpoint::workflows::checkpoint::shifts::{
    RepositoryError, ShiftId, ShiftRecord, ShiftRepository,
};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local shift storage; shifts do not survive a restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryShiftRepository {
    records: Arc<Mutex<HashMap<ShiftId, ShiftRecord>>>,
}

impl InMemoryShiftRepository {
    fn poisoned() -> RepositoryError {
        RepositoryError::Unavailable("shift store mutex poisoned".to_string())
    }
}

impl ShiftRepository for InMemoryShiftRepository {
    fn insert(&self, record: ShiftRecord) -> Result<ShiftRecord, RepositoryError> {
        let mut guard = self.records.lock().map_err(|_| Self::poisoned())?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ShiftRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().map_err(|_| Self::poisoned())?;
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ShiftId) -> Result<Option<ShiftRecord>, RepositoryError> {
        let guard = self.records.lock().map_err(|_| Self::poisoned())?;
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
