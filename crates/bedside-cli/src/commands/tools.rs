use bedside_core::models::tool::{Tool, ToolInfo};
use bedside_report::render::render_tools;

use crate::output::{OutputFormat, Outcome, to_json};

pub fn run(format: OutputFormat) -> eyre::Result<Outcome> {
    let tools: Vec<ToolInfo> = Tool::ALL.into_iter().map(ToolInfo::from).collect();
    let output = match format {
        OutputFormat::Text => render_tools(&tools)?,
        OutputFormat::Json => to_json(&tools)?,
    };
    Ok(Outcome::output(output))
}
