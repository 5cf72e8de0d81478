use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

use crate::repositories::RepoError;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("not found")]
    NotFound,
    #[display("bad request: {}", _0)]
    BadRequest(String),
    #[display("database error: {}", _0)]
    Database(String),
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Database(msg) = self {
            tracing::error!(error = %msg, "store operation failed");
        }
        match self {
            // point lookups respond 404 with an empty body
            Self::NotFound => HttpResponse::NotFound().finish(),
            _ => HttpResponse::build(self.status_code()).json(ErrBody {
                error: self.to_string(),
            }),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::NotFound,
            other => Self::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn repo_not_found_converts_to_api_not_found() {
        let api: ApiError = RepoError::NotFound.into();
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn repo_serialization_error_converts_to_500() {
        let serde_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let api: ApiError = RepoError::from(serde_err).into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
