use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::RepositoryError;

/// Wire shape shared by every failure response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    // One variant for missing, malformed and unknown credentials alike, so
    // the response never betrays which check failed.
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn reason(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::Unauthorized => "Unauthorized",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Internal => "Internal Server Error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.reason().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

// Catch-all for repository faults a route has no specific answer for; the
// details go to the log, the client gets an opaque 500.
impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        error!("repository failure: {}", e);
        ApiError::Internal
    }
}

pub(crate) fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    error!("Error in request: {} \n Error: {}", req.full_url(), err);
    let body = ErrorBody {
        error: "Bad Request".to_string(),
        message: err.to_string(),
        status_code: 400,
    };
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}
