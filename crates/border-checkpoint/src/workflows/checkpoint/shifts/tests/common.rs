use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::checkpoint::inspection::InspectionConfig;
use crate::workflows::checkpoint::shifts::{
    shift_router, RepositoryError, ShiftId, ShiftRecord, ShiftRepository, ShiftService,
};

pub(super) const OPENING_BULLETIN: &str = "Entrants require passport\nAllow citizens of Arstotzka, Obristan";

pub(super) const JOSEF_PASSPORT: &str = "ID#: GC07D-FU8AR\nNATION: Arstotzka\nNAME: Costanza, Josef\nDOB: 1933.11.28\nSEX: M\nISS: East Grestin\nEXP: 1983.03.15";

pub(super) fn build_service() -> (ShiftService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ShiftService::new(repository.clone(), InspectionConfig::default());
    (service, repository)
}

pub(super) fn router_with_service(service: ShiftService<MemoryRepository>) -> axum::Router {
    shift_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ShiftId, ShiftRecord>>>,
}

impl ShiftRepository for MemoryRepository {
    fn insert(&self, record: ShiftRecord) -> Result<ShiftRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ShiftRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ShiftId) -> Result<Option<ShiftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl ShiftRepository for ConflictRepository {
    fn insert(&self, _record: ShiftRecord) -> Result<ShiftRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ShiftRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ShiftId) -> Result<Option<ShiftRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ShiftRepository for UnavailableRepository {
    fn insert(&self, _record: ShiftRecord) -> Result<ShiftRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ShiftRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ShiftId) -> Result<Option<ShiftRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
