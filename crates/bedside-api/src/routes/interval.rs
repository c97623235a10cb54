use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use bedside_interval::{Elapsed, Moment, elapsed_between_moments};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct IntervalRequest {
    pub start: Moment,
    pub end: Moment,
}

#[derive(Serialize)]
pub struct IntervalResponse {
    #[serde(flatten)]
    pub elapsed: Elapsed,
    pub total_minutes: i64,
    pub total_hours: f64,
    /// "1 days, 1 hours, 5 minutes"
    pub summary: String,
}

pub async fn compute_interval(
    body: Result<Json<IntervalRequest>, JsonRejection>,
) -> Result<Json<IntervalResponse>, ApiError> {
    let Json(req) = body?;
    let elapsed = elapsed_between_moments(&req.start, &req.end)?;
    Ok(Json(IntervalResponse {
        elapsed,
        total_minutes: elapsed.total_minutes(),
        total_hours: elapsed.total_hours(),
        summary: elapsed.to_string(),
    }))
}
