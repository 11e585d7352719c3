//! HTTP mapping for `DelphiError`.
//!
//! Handlers return `ApiResult<T>`; the error side renders as
//! `{"error": CODE, "message": ...}` with a status chosen per variant.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use delphi_core::error::DelphiError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DelphiError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DelphiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            DelphiError::NotFound(_) => StatusCode::NOT_FOUND,
            DelphiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            DelphiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            DelphiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.detail(),
        }));
        (status, body).into_response()
    }
}
