use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use bedside_core::models::notice::Notice;
use bedside_lexicon::{DrugEntry, DrugMatch, extract, filter_drugs};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct DrugFilter {
    pub class: Option<String>,
    pub indication: Option<String>,
}

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub matches: Vec<DrugMatch>,
    pub notice: Notice,
}

/// The drug table, optionally narrowed by class and/or indication text.
/// Empty query values (`?class=`) mean no filter.
pub async fn list_drugs(
    Query(filter): Query<DrugFilter>,
) -> Result<Json<Vec<DrugEntry>>, ApiError> {
    let drugs = filter_drugs(filter.class.as_deref(), filter.indication.as_deref())?;
    Ok(Json(drugs.into_iter().copied().collect()))
}

/// Run the extractor. Blank text is not an HTTP error: it comes back as a
/// warning notice with no matches, the same as the form shows it.
pub async fn extract_drugs(
    body: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Json(req) = body?;
    let response = match extract(&req.text) {
        Ok(extraction) => {
            let notice = extraction.notice();
            ExtractResponse {
                matches: extraction.matches,
                notice,
            }
        }
        Err(e) => ExtractResponse {
            matches: Vec::new(),
            notice: e.notice(),
        },
    };
    Ok(Json(response))
}
