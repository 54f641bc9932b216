use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::indexer::FetchError;
use crate::providers::ProviderError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Address not linked: {0}")]
    AddressNotLinked(String),

    #[error("Indexer error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            SessionError::AddressNotLinked(_) => (StatusCode::NOT_FOUND, self.to_string()),
            SessionError::Fetch(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            SessionError::Provider(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            SessionError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
