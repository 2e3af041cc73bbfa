//! # HTTP Error Mapping
//!
//! Wraps `tb_core::AppError` so handlers can use `?` and actix turns the
//! domain error into the right status code and a plain-text body.

use std::fmt;

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use tb_core::error::AppError;

#[derive(Debug)]
pub struct ApiError(pub AppError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::NotFound(_, _) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.0, AppError::Internal(_)) {
            log::error!("request failed: {}", self.0);
        }
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError(AppError::NotFound("thread".into(), "9".into()));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let bad = ApiError(AppError::Validation("nope".into()));
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

        let big = ApiError(AppError::PayloadTooLarge);
        assert_eq!(big.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
