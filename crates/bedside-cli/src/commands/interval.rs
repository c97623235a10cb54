use serde_json::json;

use bedside_core::models::notice::Notice;
use bedside_interval::{elapsed_between_moments, parse_moment};
use bedside_report::render::render_elapsed;

use crate::output::{OutputFormat, Outcome, to_json};

pub fn run(start: &str, end: &str, format: OutputFormat) -> eyre::Result<Outcome> {
    let moments = parse_moment(start).and_then(|s| Ok((s, parse_moment(end)?)));
    let (start, end) = match moments {
        Ok(pair) => pair,
        Err(e) => return Ok(Outcome::rejected(Notice::error(e.to_string()))),
    };

    let elapsed = match elapsed_between_moments(&start, &end) {
        Ok(elapsed) => elapsed,
        Err(e) => return Ok(Outcome::rejected(Notice::error(e.to_string()))),
    };

    let output = match format {
        OutputFormat::Text => render_elapsed(&start, &end, &elapsed)?,
        OutputFormat::Json => to_json(&json!({
            "start": start,
            "end": end,
            "elapsed": elapsed,
            "summary": elapsed.to_string(),
            "total_minutes": elapsed.total_minutes(),
            "total_hours": elapsed.total_hours(),
        }))?,
    };
    Ok(Outcome::output(output))
}
