use serde::Serialize;
use serde_json::json;
use tera::{Context, Tera};

use bedside_core::models::tool::ToolInfo;
use bedside_instruments::Instrument;
use bedside_instruments::scoring::ScoreResult;
use bedside_interval::{Elapsed, Moment};
use bedside_lexicon::{DrugEntry, Extraction};

use crate::error::ReportError;
use crate::templates;

/// Render a Tera template against any serializable context.
///
/// `template_content` is the raw template string (Jinja2 syntax); the
/// fields of `data` become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

fn render_builtin<T: Serialize>(
    (name, content): (&str, &str),
    data: &T,
) -> Result<String, ReportError> {
    tracing::trace!(template = name, "rendering");
    render_template(name, content, data)
}

pub fn render_tools(tools: &[ToolInfo]) -> Result<String, ReportError> {
    render_builtin(templates::TOOLS, &json!({ "tools": tools }))
}

/// Notice line followed by the match table, when there are matches.
pub fn render_extraction(extraction: &Extraction) -> Result<String, ReportError> {
    render_builtin(
        templates::EXTRACTION,
        &json!({
            "notice": extraction.notice().to_string(),
            "matches": extraction.matches,
        }),
    )
}

pub fn render_drug_table(drugs: &[&DrugEntry]) -> Result<String, ReportError> {
    let rows: Vec<_> = drugs
        .iter()
        .map(|d| {
            json!({
                "name": d.name,
                "class": d.class.label(),
                "indication": d.indication,
            })
        })
        .collect();
    render_builtin(templates::DRUG_TABLE, &json!({ "drugs": rows }))
}

pub fn render_score(result: &ScoreResult) -> Result<String, ReportError> {
    render_builtin(templates::SCORE, result)
}

/// Every organ table of an instrument with option ids and points.
pub fn render_criteria(instrument: &dyn Instrument) -> Result<String, ReportError> {
    render_builtin(
        templates::CRITERIA,
        &json!({
            "name": instrument.name(),
            "systems": instrument.systems(),
        }),
    )
}

pub fn render_elapsed(start: &Moment, end: &Moment, elapsed: &Elapsed) -> Result<String, ReportError> {
    render_builtin(
        templates::ELAPSED,
        &json!({
            "start": format_moment(start),
            "end": format_moment(end),
            "elapsed": elapsed.to_string(),
            "total_minutes": elapsed.total_minutes(),
            "total_hours": format!("{:.2}", elapsed.total_hours()),
            "total_seconds": elapsed.total_seconds,
        }),
    )
}

fn format_moment(moment: &Moment) -> String {
    format!("{} {:02}:{:02}", moment.date, moment.hour, moment.minute)
}
