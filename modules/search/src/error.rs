use crate::render;
use actix_web::{HttpResponse, ResponseError, body::BoxBody, http::StatusCode};
use sea_orm::DbErr;

/// Rejected user input. No statement gets executed for a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("OUI search parameter {0} is too long.")]
    MacAddressTooLong(String),
    #[error("Company search parameter {0} is too long.")]
    CompanyTooLong(String),
    #[error("Device search parameter {0} is too long.")]
    DeviceTooLong(String),
    #[error("Date search parameter {0} is too long.")]
    DateTooLong(String),
    #[error("Number of results per page value {0} is invalid.")]
    InvalidPageSize(String),
    #[error("Page number {0} is invalid.")]
    InvalidPage(String),
    #[error("Sort order {0} is invalid.")]
    InvalidSort(String),
    #[error("Search parameters are invalid: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Error! Unable to connect to database server on {host} as {user}")]
    Connection { host: String, user: String },
    #[error(
        "ERROR! Could not bind to database, or query failed! Original error message, if any, follows: ###> {0} <### Giving up."
    )]
    Query(#[source] DbErr),
    #[error("failed to render page: {0}")]
    Render(#[from] tera::Error),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Connection { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Query(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        render::message(self.status_code(), &self.to_string())
    }
}
