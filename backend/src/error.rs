use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::form::{FieldError, FormError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("listing {0} not found")]
    NotFound(u64),
    #[error(transparent)]
    Form(#[from] FormError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Form(FormError::Closed) => StatusCode::CONFLICT,
            ApiError::Form(FormError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn fields(&self) -> &[FieldError] {
        match self {
            ApiError::Form(FormError::Invalid(e)) => &e.fields,
            _ => &[],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.to_string(),
            "fields": self.fields(),
        });
        (self.status(), Json(body)).into_response()
    }
}
