use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The independent tools offered side by side (one tab each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tool {
    DrugExtractor,
    SofaCalculator,
    DurationCalculator,
}

impl Tool {
    pub const ALL: [Tool; 3] = [
        Tool::DrugExtractor,
        Tool::SofaCalculator,
        Tool::DurationCalculator,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tool::DrugExtractor => "drugs",
            Tool::SofaCalculator => "sofa",
            Tool::DurationCalculator => "interval",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tool::DrugExtractor => "Drug Extractor & Disease Mapper",
            Tool::SofaCalculator => "SOFA Score Calculator",
            Tool::DurationCalculator => "Date & Time Duration Calculator",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Tool::DrugExtractor => {
                "Paste a medical paragraph to extract drug names and match them to related diseases and indications."
            }
            Tool::SofaCalculator => {
                "Select one criterion per organ system to compute the SOFA score and estimated mortality."
            }
            Tool::DurationCalculator => {
                "Pick a start and end date and time to compute the elapsed duration."
            }
        }
    }
}

impl FromStr for Tool {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| CoreError::UnknownTool(s.to_string()))
    }
}

/// Serializable description of a tool for listings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolInfo {
    pub tool: Tool,
    pub id: String,
    pub title: String,
    pub summary: String,
}

impl From<Tool> for ToolInfo {
    fn from(tool: Tool) -> Self {
        Self {
            tool,
            id: tool.id().to_string(),
            title: tool.title().to_string(),
            summary: tool.summary().to_string(),
        }
    }
}
