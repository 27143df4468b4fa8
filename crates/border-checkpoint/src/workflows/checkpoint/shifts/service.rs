use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::info;

use super::domain::{DocumentBundle, ShiftId, ShiftRecord};
use super::repository::{RepositoryError, ShiftRepository};
use crate::workflows::checkpoint::inspection::{
    InspectionConfig, Inspector, ParseError, RuleSnapshot, Verdict,
};

/// Service opening shifts and driving each shift's inspector through the repository.
pub struct ShiftService<R> {
    repository: Arc<R>,
    config: InspectionConfig,
    sequence: AtomicU64,
    writes: Mutex<()>,
}

impl<R> ShiftService<R>
where
    R: ShiftRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: InspectionConfig) -> Self {
        Self {
            repository,
            config,
            sequence: AtomicU64::new(1),
            writes: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &InspectionConfig {
        &self.config
    }

    fn next_shift_id(&self) -> ShiftId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ShiftId(format!("shift-{id:06}"))
    }

    /// Open a shift with a fresh inspector and empty rule tables.
    pub fn open(&self) -> Result<ShiftRecord, ShiftServiceError> {
        let record = ShiftRecord {
            id: self.next_shift_id(),
            inspector: Inspector::with_config(self.config.clone()),
        };

        let stored = self.repository.insert(record)?;
        info!(shift_id = %stored.id, "shift opened");
        Ok(stored)
    }

    /// Apply a bulletin batch to the shift's rule tables.
    ///
    /// A malformed line leaves the stored shift untouched.
    pub fn post_bulletin(
        &self,
        shift_id: &ShiftId,
        bulletin: &str,
    ) -> Result<ShiftRecord, ShiftServiceError> {
        let _guard = self
            .writes
            .lock()
            .map_err(|_| RepositoryError::Unavailable("shift write lock poisoned".to_string()))?;

        let mut record = self.get(shift_id)?;
        record.inspector.receive_bulletin(bulletin)?;
        self.repository.update(record.clone())?;

        info!(
            shift_id = %record.id,
            bulletins = record.inspector.bulletins().len(),
            "bulletin applied"
        );
        Ok(record)
    }

    /// Inspect one entrant against the shift's current rules.
    pub fn inspect(
        &self,
        shift_id: &ShiftId,
        documents: &DocumentBundle,
    ) -> Result<Verdict, ShiftServiceError> {
        let record = self.get(shift_id)?;
        let verdict = record.inspector.inspect(documents.iter())?;
        Ok(verdict)
    }

    pub fn rules(&self, shift_id: &ShiftId) -> Result<RuleSnapshot, ShiftServiceError> {
        Ok(self.get(shift_id)?.inspector.snapshot())
    }

    pub fn get(&self, shift_id: &ShiftId) -> Result<ShiftRecord, ShiftServiceError> {
        let record = self
            .repository
            .fetch(shift_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the shift service.
#[derive(Debug, thiserror::Error)]
pub enum ShiftServiceError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
