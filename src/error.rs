use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::accounts::repo_types::StoreError;

/// Everything an account operation can fail with.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl AccountError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for AccountError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(field) => AccountError::Conflict(conflict_message(field)),
            StoreError::Backend(e) => AccountError::Internal(e),
        }
    }
}

pub(crate) fn conflict_message(field: &str) -> String {
    match field {
        "user_name" => "User name already taken.".into(),
        _ => "Email already registered.".into(),
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AccountError::Internal(cause) => {
                error!(error = %cause, "request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(MessageBody { message })).into_response()
    }
}
