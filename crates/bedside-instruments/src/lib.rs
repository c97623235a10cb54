//! bedside-instruments
//!
//! Ordinal clinical scoring instruments. Pure data plus the arithmetic:
//! each instrument is a set of organ-system tables, one criterion is chosen
//! per table, and the summed points map to a mortality band.

pub mod error;
pub mod instruments;
pub mod scoring;

use error::InstrumentError;
use scoring::{
    OrganSystem, RiskBand, ScoreResult, Selection, SystemScore, ValidationError, ValidationKind,
};

/// Trait implemented by each scoring instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "sofa").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The organ-system tables, in presentation order.
    fn systems(&self) -> &[OrganSystem];

    /// Mortality bands, ascending and contiguous over `0..=max_total()`.
    /// Must not be empty; [`Instrument::score`] refuses an instrument without bands.
    fn bands(&self) -> &[RiskBand];

    fn max_total(&self) -> u8 {
        self.systems().iter().map(|s| s.range.max).sum()
    }

    /// Check that every system is selected exactly once with a known option.
    fn validate_selections(&self, selections: &[Selection]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut seen: Vec<&str> = Vec::new();

        for sel in selections {
            let Some(system) = self.systems().iter().find(|s| s.id == sel.system_id) else {
                errors.push(ValidationError {
                    system_id: sel.system_id.clone(),
                    option_id: Some(sel.option_id.clone()),
                    kind: ValidationKind::UnknownSystem,
                    message: format!("{}: unknown organ system '{}'", self.name(), sel.system_id),
                });
                continue;
            };

            if seen.contains(&system.id.as_str()) {
                errors.push(ValidationError {
                    system_id: sel.system_id.clone(),
                    option_id: Some(sel.option_id.clone()),
                    kind: ValidationKind::DuplicateSystem,
                    message: format!("{}: {} selected more than once", self.name(), system.name),
                });
                continue;
            }
            seen.push(&system.id);

            match system.option(&sel.option_id) {
                None => errors.push(ValidationError {
                    system_id: sel.system_id.clone(),
                    option_id: Some(sel.option_id.clone()),
                    kind: ValidationKind::UnknownOption,
                    message: format!(
                        "{}: '{}' is not a {} option",
                        self.name(),
                        sel.option_id,
                        system.name
                    ),
                }),
                Some(option) if !system.range.contains(option.points) => {
                    errors.push(ValidationError {
                        system_id: sel.system_id.clone(),
                        option_id: Some(sel.option_id.clone()),
                        kind: ValidationKind::OutOfRange,
                        message: format!(
                            "{}: {} score {} is outside range [{}, {}]",
                            self.name(),
                            system.name,
                            option.points,
                            system.range.min,
                            system.range.max,
                        ),
                    })
                }
                Some(_) => {}
            }
        }

        for system in self.systems() {
            if !seen.contains(&system.id.as_str()) {
                errors.push(ValidationError {
                    system_id: system.id.clone(),
                    option_id: None,
                    kind: ValidationKind::MissingSystem,
                    message: format!("{}: no {} criterion selected", self.name(), system.name),
                });
            }
        }

        errors
    }

    /// The band containing `total`. Totals above the last band clamp to it;
    /// `None` only when the instrument has no bands.
    fn interpret(&self, total: u8) -> Option<&RiskBand> {
        let bands = self.bands();
        bands.iter().find(|b| b.contains(total)).or(bands.last())
    }

    /// Validate and sum a full set of selections.
    fn score(&self, selections: &[Selection]) -> Result<ScoreResult, InstrumentError> {
        let errors = self.validate_selections(selections);
        if !errors.is_empty() {
            return Err(InstrumentError::Invalid(errors));
        }

        let mut breakdown = Vec::with_capacity(self.systems().len());
        for system in self.systems() {
            // Validation guarantees exactly one known option per system.
            let Some(option) = selections
                .iter()
                .find(|s| s.system_id == system.id)
                .and_then(|s| system.option(&s.option_id))
            else {
                continue;
            };
            breakdown.push(SystemScore {
                system_id: system.id.clone(),
                system_name: system.name.clone(),
                option_id: option.id.clone(),
                label: option.label.clone(),
                points: option.points,
            });
        }

        let total: u8 = breakdown.iter().map(|s| s.points).sum();
        let band = self
            .interpret(total)
            .ok_or_else(|| InstrumentError::NoBands(self.id().to_string()))?;

        tracing::debug!(instrument = self.id(), total, "scored");

        Ok(ScoreResult {
            instrument_id: self.id().to_string(),
            instrument_name: self.name().to_string(),
            breakdown,
            total,
            max_total: self.max_total(),
            mortality: band.mortality.clone(),
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::sofa::Sofa)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but with an error for unknown IDs.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
