use std::io::{BufRead, Read};

use serde_json::json;

use bedside_lexicon::filter_drugs;
use bedside_report::render::{render_drug_table, render_extraction};

use crate::output::{OutputFormat, Outcome, to_json};

pub fn extract(
    text: Option<String>,
    format: OutputFormat,
    input: &mut dyn BufRead,
) -> eyre::Result<Outcome> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            buf
        }
    };

    let extraction = match bedside_lexicon::extract(&text) {
        Ok(extraction) => extraction,
        Err(e) => return Ok(Outcome::rejected(e.notice())),
    };

    tracing::info!(matched = extraction.len(), "extracted drugs");

    let output = match format {
        OutputFormat::Text => render_extraction(&extraction)?,
        OutputFormat::Json => to_json(&json!({
            "matches": extraction.matches,
            "notice": extraction.notice(),
        }))?,
    };
    Ok(Outcome::output(output))
}

/// `--class ""` and `--indication ""` list the whole table.
pub fn list(
    class: Option<&str>,
    indication: Option<&str>,
    format: OutputFormat,
) -> eyre::Result<Outcome> {
    let drugs = match filter_drugs(class, indication) {
        Ok(drugs) => drugs,
        Err(e) => return Ok(Outcome::rejected(e.notice())),
    };

    let output = match format {
        OutputFormat::Text => render_drug_table(&drugs)?,
        OutputFormat::Json => to_json(&drugs)?,
    };
    Ok(Outcome::output(output))
}
