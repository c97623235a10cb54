use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Defines the valid range for an ordinal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One selectable criterion within an organ system.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    pub points: u8,
}

/// A table of mutually exclusive criteria; exactly one is selected.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrganSystem {
    pub id: String,
    pub name: String,
    /// What is measured, e.g. "PaO2/FiO2 (mmHg)".
    pub measure: String,
    pub range: ScoreRange,
    pub options: Vec<Criterion>,
}

impl OrganSystem {
    pub fn option(&self, option_id: &str) -> Option<&Criterion> {
        self.options.iter().find(|c| c.id == option_id)
    }

    /// Resolve an option by id, or by its point value when `token` is a
    /// number and exactly one option carries those points.
    pub fn resolve(&self, token: &str) -> Option<&Criterion> {
        let token = token.trim();
        if let Some(c) = self.option(token) {
            return Some(c);
        }
        let points: u8 = token.parse().ok()?;
        let mut hits = self.options.iter().filter(|c| c.points == points);
        match (hits.next(), hits.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// A mortality estimate covering an inclusive span of totals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskBand {
    pub min_total: u8,
    pub max_total: u8,
    pub mortality: String,
}

impl RiskBand {
    pub fn contains(&self, total: u8) -> bool {
        total >= self.min_total && total <= self.max_total
    }
}

/// The criterion chosen for one organ system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection {
    pub system_id: String,
    pub option_id: String,
}

impl Selection {
    pub fn new(system_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            system_id: system_id.into(),
            option_id: option_id.into(),
        }
    }
}

/// Points awarded for one organ system.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SystemScore {
    pub system_id: String,
    pub system_name: String,
    pub option_id: String,
    pub label: String,
    pub points: u8,
}

/// A complete scoring: breakdown in table order, total and mortality band.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub instrument_name: String,
    pub breakdown: Vec<SystemScore>,
    pub total: u8,
    pub max_total: u8,
    pub mortality: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    UnknownSystem,
    UnknownOption,
    DuplicateSystem,
    MissingSystem,
    OutOfRange,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub system_id: String,
    pub option_id: Option<String>,
    pub kind: ValidationKind,
    pub message: String,
}
