use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bedside_instruments::error::InstrumentError;
use bedside_instruments::scoring::ValidationError;
use bedside_interval::error::IntervalError;
use bedside_lexicon::error::LexiconError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Well-formed input the tool refuses, e.g. an end time before the start.
    Unprocessable(String),
    /// Selections that failed instrument validation, listed individually.
    InvalidSelections(Vec<ValidationError>),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<ValidationError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, Vec::new()),
            ApiError::InvalidSelections(errors) => (
                StatusCode::BAD_REQUEST,
                format!("{} invalid selection(s)", errors.len()),
                errors,
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownInstrument(id) => {
                ApiError::NotFound(format!("instrument not found: {id}"))
            }
            InstrumentError::Invalid(errors) => ApiError::InvalidSelections(errors),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<IntervalError> for ApiError {
    fn from(e: IntervalError) -> Self {
        match e {
            IntervalError::EndBeforeStart { .. } => ApiError::Unprocessable(e.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<LexiconError> for ApiError {
    fn from(e: LexiconError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

/// Malformed or mistyped request bodies get the same JSON error shape as
/// every other failure instead of axum's plain-text rejection.
impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}
