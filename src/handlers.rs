//! HTTP request handlers.
//!
//! Every endpoint answers HTTP 200 with content-type application/json;
//! failure is signaled only in the body. Mutation endpoints reply with the
//! `{status, message}` envelope, the lookup endpoint with a raw JSON array.
//! This contract is load-bearing for existing clients; do not switch it to
//! status-code signaling.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::{
    CompatibilityMatrix, CompatibilityQuery, CompatibilityService, ReleaseService, YbaRelease,
    YbdbRelease,
};
use crate::router::AppState;

/// Uniform response body for mutation endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: ResponseStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Successful,
    Failed,
}

impl Envelope {
    pub fn successful() -> Self {
        Self {
            status: ResponseStatus::Successful,
            message: String::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failed,
            message: message.into(),
        }
    }
}

/// POST /yba
pub async fn insert_yba(
    State(state): State<AppState>,
    body: Result<Json<YbaRelease>, JsonRejection>,
) -> Json<Envelope> {
    let Json(release) = match body {
        Ok(body) => body,
        Err(rejection) => return Json(Envelope::failed(rejection.body_text())),
    };

    match ReleaseService::insert_yba(&state.pool, &release).await {
        Ok(()) => Json(Envelope::successful()),
        Err(e) => {
            error!("Failed to insert into yba: {}", e);
            Json(Envelope::failed(e.to_string()))
        }
    }
}

/// POST /ybdb
pub async fn insert_ybdb(
    State(state): State<AppState>,
    body: Result<Json<YbdbRelease>, JsonRejection>,
) -> Json<Envelope> {
    let Json(release) = match body {
        Ok(body) => body,
        Err(rejection) => return Json(Envelope::failed(rejection.body_text())),
    };

    match ReleaseService::insert_ybdb(&state.pool, &release).await {
        Ok(()) => Json(Envelope::successful()),
        Err(e) => {
            error!("Failed to insert into ybdb: {}", e);
            Json(Envelope::failed(e.to_string()))
        }
    }
}

/// POST /compatibility
///
/// On partial failure the envelope describes only the first failing pair;
/// earlier pairs stay committed (see `CompatibilityService::insert`).
pub async fn insert_compatibility(
    State(state): State<AppState>,
    body: Result<Json<CompatibilityMatrix>, JsonRejection>,
) -> Json<Envelope> {
    let Json(matrix) = match body {
        Ok(body) => body,
        Err(rejection) => return Json(Envelope::failed(rejection.body_text())),
    };

    match CompatibilityService::insert(&state.pool, &matrix).await {
        Ok(()) => Json(Envelope::successful()),
        Err(e) => {
            error!("Failed to insert into yba_ybdb_compatibility: {}", e);
            Json(Envelope::failed(e.to_string()))
        }
    }
}

/// POST /compatibility_list
///
/// Replies with the raw array of matching YBDB releases (possibly `[]`),
/// not the envelope.
pub async fn list_compatible_ybdb(
    State(state): State<AppState>,
    body: Result<Json<CompatibilityQuery>, JsonRejection>,
) -> Response {
    let Json(query) = match body {
        Ok(body) => body,
        Err(rejection) => return Json(Envelope::failed(rejection.body_text())).into_response(),
    };

    match CompatibilityService::compatible_ybdb(&state.pool, &query.yba_version).await {
        Ok(releases) => Json(releases).into_response(),
        Err(e) => {
            error!("Failed to query compatible ybdb versions: {}", e);
            Json(Envelope::failed(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope_wire_shape() {
        let json = serde_json::to_string(&Envelope::successful()).unwrap();
        assert_eq!(json, r#"{"status":"successful","message":""}"#);
    }

    #[test]
    fn failed_envelope_carries_message() {
        let json = serde_json::to_string(&Envelope::failed("boom")).unwrap();
        assert_eq!(json, r#"{"status":"failed","message":"boom"}"#);
    }

    #[test]
    fn envelope_status_parses_back() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"status":"failed","message":"x"}"#).unwrap();
        assert_eq!(envelope.status, ResponseStatus::Failed);
    }
}
