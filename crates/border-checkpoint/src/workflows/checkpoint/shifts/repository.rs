use super::domain::{ShiftId, ShiftRecord};

/// Storage abstraction so the service can run against any backing store.
pub trait ShiftRepository: Send + Sync {
    fn insert(&self, record: ShiftRecord) -> Result<ShiftRecord, RepositoryError>;
    fn update(&self, record: ShiftRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ShiftId) -> Result<Option<ShiftRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("shift already exists")]
    Conflict,
    #[error("shift not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
