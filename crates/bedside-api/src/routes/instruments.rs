use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use bedside_instruments::scoring::{OrganSystem, RiskBand, ScoreResult, Selection};
use bedside_instruments::{all_instruments, require_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    max_total: u8,
    systems: Vec<OrganSystem>,
    bands: Vec<RiskBand>,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub selections: Vec<Selection>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = require_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        max_total: instrument.max_total(),
        systems: instrument.systems().to_vec(),
        bands: instrument.bands().to_vec(),
    }))
}

pub async fn score_instrument(
    Path(id): Path<String>,
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let Json(req) = body?;
    let instrument = require_instrument(&id)?;
    let result = instrument.score(&req.selections)?;
    Ok(Json(result))
}
