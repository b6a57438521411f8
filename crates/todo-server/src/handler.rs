use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use todo_service::{EntryService, ServiceError};
use todo_types::Entry;

/// Service handle shared by every handler.
pub type SharedService = Arc<dyn EntryService>;

/// Body of `POST /api/entry`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEntryRequest {
    pub title: String,
    pub description: String,
}

/// Body of `PATCH /api/entry/:id`. Absent fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl EntryPatch {
    /// Merge onto `entry` and pin its id to `id`.
    pub fn apply(self, mut entry: Entry, id: &str) -> Entry {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(description) = self.description {
            entry.description = description;
        }
        if let Some(done) = self.done {
            entry.done = done;
        }
        entry.id = id.to_string();
        entry
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
    pub code: &'static str,
}

/// Handler failure rendered as an [`ErrorResponse`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn service(message: &str, err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            body: ErrorResponse {
                message: message.to_string(),
                error: err.to_string(),
                code: err.code(),
            },
        }
    }

    fn invalid_json(rejection: &JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                message: "failed to decode json body".to_string(),
                error: rejection.body_text(),
                code: "invalid_json",
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "todo-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn get_entry(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    let entry = service
        .get(&id)
        .map_err(|e| ApiError::service("failed to retrieve entry with given id", e))?;
    Ok(Json(entry))
}

pub async fn create_entry(
    State(service): State<SharedService>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<Json<Entry>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::invalid_json(&rejection))?;
    let entry = service
        .create(&request.title, &request.description)
        .map_err(|e| ApiError::service("failed to create to-do entry", e))?;
    tracing::info!(id = %entry.id, "entry created");
    Ok(Json(entry))
}

/// Fetch, merge, and write back.
///
/// The read and the write are separate service calls, so two concurrent
/// patches of the same entry can lose one of the merges.
pub async fn update_entry(
    State(service): State<SharedService>,
    Path(id): Path<String>,
    payload: Result<Json<EntryPatch>, JsonRejection>,
) -> Result<Json<Entry>, ApiError> {
    let current = service
        .get(&id)
        .map_err(|e| ApiError::service("failed to find entry with given id", e))?;
    let Json(patch) = payload.map_err(|rejection| ApiError::invalid_json(&rejection))?;

    let entry = patch.apply(current, &id);
    service
        .update(&id, &entry)
        .map_err(|e| ApiError::service("failed to update entry", e))?;
    Ok(Json(entry))
}

pub async fn delete_entry(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    service
        .delete(&id)
        .map_err(|e| ApiError::service("failed to delete entry with given id", e))?;
    Ok(Json(json!({ "id": id, "deleted": true })))
}
