use super::database::StoreError;
use axum::{
    extract::{Json, OriginalUri},
    http::{Method, StatusCode},
    response::IntoResponse,
};
use serde_json::json;

/// The error every route step reports through.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("Something went wrong!")]
    Internal,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store operation failed: {}", err);
        Self::Internal
    }
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> Error {
    Error::NotFound(format!("Path not found: {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Error {
    Error::MethodNotAllowed(format!("{} not allowed for {}", method, uri.path()))
}
