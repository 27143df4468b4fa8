//! Inspection shifts: one [`Inspector`](super::Inspector) per booth, stored behind a
//! repository and exposed over HTTP.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{BulletinRequest, DocumentBundle, InspectionView, ShiftId, ShiftRecord, ShiftView};
pub use repository::{RepositoryError, ShiftRepository};
pub use router::shift_router;
pub use service::{ShiftService, ShiftServiceError};
