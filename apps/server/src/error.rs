//! Error types for the catalog server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{resource} not found: {id}")]
    ResourceNotFound { resource: &'static str, id: i64 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid page number: {0} (must be >= 1)")]
    InvalidPage(i64),

    #[error("Invalid page size: {0} (must be >= 1)")]
    InvalidPageSize(i64),

    #[error("Tag already exists: {0}")]
    DuplicateTag(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Error::ResourceNotFound { .. } | Error::NotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            Error::Validation(_) | Error::InvalidPage(_) | Error::InvalidPageSize(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Error::DuplicateTag(_) => (StatusCode::CONFLICT, self.to_string()),
            Error::Database(_) | Error::Internal(_) | Error::Other(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "status": status.as_u16(),
                "message": error_message
            }
        }));

        (status, body).into_response()
    }
}

impl Error {
    /// Map a sqlx error to `DuplicateTag` when it is a unique violation on the tag name.
    pub fn from_tag_insert(err: sqlx::Error, name: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.constraint() == Some("tag_name_key") {
                return Error::DuplicateTag(name.to_string());
            }
        }
        Error::Database(err)
    }
}
