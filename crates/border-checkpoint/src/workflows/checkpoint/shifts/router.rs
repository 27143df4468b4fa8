use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{BulletinRequest, DocumentBundle, InspectionView, ShiftId};
use super::repository::{RepositoryError, ShiftRepository};
use super::service::{ShiftService, ShiftServiceError};

/// Router builder exposing shift, bulletin, and inspection endpoints.
pub fn shift_router<R>(service: Arc<ShiftService<R>>) -> Router
where
    R: ShiftRepository + 'static,
{
    Router::new()
        .route("/api/v1/shifts", post(open_handler::<R>))
        .route(
            "/api/v1/shifts/:shift_id/bulletins",
            post(bulletin_handler::<R>),
        )
        .route(
            "/api/v1/shifts/:shift_id/inspections",
            post(inspection_handler::<R>),
        )
        .route("/api/v1/shifts/:shift_id/rules", get(rules_handler::<R>))
        .with_state(service)
}

pub(crate) async fn open_handler<R>(State(service): State<Arc<ShiftService<R>>>) -> Response
where
    R: ShiftRepository + 'static,
{
    match service.open() {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn bulletin_handler<R>(
    State(service): State<Arc<ShiftService<R>>>,
    Path(shift_id): Path<String>,
    axum::Json(request): axum::Json<BulletinRequest>,
) -> Response
where
    R: ShiftRepository + 'static,
{
    match service.post_bulletin(&ShiftId(shift_id), &request.bulletin) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn inspection_handler<R>(
    State(service): State<Arc<ShiftService<R>>>,
    Path(shift_id): Path<String>,
    axum::Json(documents): axum::Json<DocumentBundle>,
) -> Response
where
    R: ShiftRepository + 'static,
{
    let id = ShiftId(shift_id);
    match service.inspect(&id, &documents) {
        Ok(verdict) => {
            let view = InspectionView::new(id, &verdict);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rules_handler<R>(
    State(service): State<Arc<ShiftService<R>>>,
    Path(shift_id): Path<String>,
) -> Response
where
    R: ShiftRepository + 'static,
{
    match service.rules(&ShiftId(shift_id)) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ShiftServiceError) -> Response {
    let status = match &error {
        ShiftServiceError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ShiftServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ShiftServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ShiftServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
