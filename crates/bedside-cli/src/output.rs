use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use bedside_core::models::notice::Notice;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain text and Markdown tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// What a command produced: stdout text plus an optional notice for stderr.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub output: String,
    pub notice: Option<Notice>,
    /// False when the input was rejected; the process exits non-zero.
    pub ok: bool,
}

impl Outcome {
    pub fn output(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            notice: None,
            ok: true,
        }
    }

    pub fn rejected(notice: Notice) -> Self {
        Self {
            output: String::new(),
            notice: Some(notice),
            ok: false,
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> eyre::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
