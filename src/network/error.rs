//! HTTP error mapping

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::MultiverseError;
use crate::protocol::CommandType;

/// Error returned by HTTP handlers, rendered as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Request body or query string rejected by an extractor
    Rejected(StatusCode, String),
    Internal(String),
}

impl ApiError {
    /// Map an engine error, phrasing lookups misses per command
    pub fn from_engine(kind: CommandType, err: MultiverseError) -> Self {
        match err {
            MultiverseError::CharacterNotFound(_) if kind == CommandType::Battle => {
                ApiError::NotFound("One or both characters do not exist".to_string())
            }
            MultiverseError::CharacterNotFound(_) => {
                ApiError::NotFound("Character not found".to_string())
            }
            e @ (MultiverseError::EmptyCollection | MultiverseError::NoData) => {
                ApiError::NotFound(e.to_string())
            }
            e @ MultiverseError::InvalidFilter(_) => ApiError::BadRequest(e.to_string()),
            e => {
                tracing::error!(command = kind.name(), error = %e, "Command failed");
                ApiError::Internal(e.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected(status, _) => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Rejected(_, msg) => msg,
            // Details stay in the server log
            ApiError::Internal(_) => "Internal error".to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}
