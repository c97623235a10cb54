use std::io::{BufRead, Write};

use serde_json::json;

use bedside_core::models::notice::Notice;
use bedside_instruments::error::InstrumentError;
use bedside_instruments::instruments::sofa::{
    CARDIOVASCULAR, CNS, COAGULATION, LIVER, RENAL, RESPIRATION,
};
use bedside_instruments::scoring::{OrganSystem, Selection, ValidationKind};
use bedside_instruments::{Instrument, require_instrument};
use bedside_report::render::{render_criteria, render_score};

use crate::cli::SofaScoreArgs;
use crate::output::{OutputFormat, Outcome, to_json};

pub fn options(format: OutputFormat) -> eyre::Result<Outcome> {
    let sofa = require_instrument("sofa")?;
    let output = match format {
        OutputFormat::Text => render_criteria(sofa.as_ref())?,
        OutputFormat::Json => to_json(&json!({
            "id": sofa.id(),
            "name": sofa.name(),
            "systems": sofa.systems(),
            "bands": sofa.bands(),
        }))?,
    };
    Ok(Outcome::output(output))
}

pub fn score(
    args: &SofaScoreArgs,
    format: OutputFormat,
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
) -> eyre::Result<Outcome> {
    let sofa = require_instrument("sofa")?;
    let given = [
        (RESPIRATION, args.respiration.as_deref()),
        (COAGULATION, args.coagulation.as_deref()),
        (LIVER, args.liver.as_deref()),
        (CARDIOVASCULAR, args.cardiovascular.as_deref()),
        (CNS, args.cns.as_deref()),
        (RENAL, args.renal.as_deref()),
    ];

    let mut selections = Vec::new();
    for system in sofa.systems() {
        let token = given
            .iter()
            .find(|(id, _)| *id == system.id)
            .and_then(|(_, token)| *token);

        let option_id = match token {
            // An unresolved token is kept as given so validation lists it
            // alongside every other problem.
            Some(token) => system
                .resolve(token)
                .map_or_else(|| token.trim().to_string(), |option| option.id.clone()),
            None if args.interactive => prompt_option(system, input, prompt)?,
            // Validation reports the missing system.
            None => continue,
        };
        selections.push(Selection::new(system.id.clone(), option_id));
    }

    let result = match sofa.score(&selections) {
        Ok(result) => result,
        Err(InstrumentError::Invalid(errors)) => {
            let messages: Vec<_> = errors
                .iter()
                .map(|e| match (e.kind, &e.option_id) {
                    (ValidationKind::UnknownOption, Some(token)) => sofa
                        .systems()
                        .iter()
                        .find(|s| s.id == e.system_id)
                        .map_or_else(|| e.message.clone(), |s| unknown_option(s, token)),
                    _ => e.message.clone(),
                })
                .collect();
            return Ok(Outcome::rejected(Notice::error(messages.join("\n"))));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(total = result.total, "sofa scored");

    let output = match format {
        OutputFormat::Text => render_score(&result)?,
        OutputFormat::Json => to_json(&result)?,
    };
    Ok(Outcome::output(output))
}

fn unknown_option(system: &OrganSystem, token: &str) -> String {
    let ids: Vec<_> = system.options.iter().map(|o| o.id.as_str()).collect();
    format!(
        "'{token}' is not a {} option; use 0-{} or one of: {}",
        system.name,
        system.range.max,
        ids.join(", ")
    )
}

/// Ask for one organ system until a valid choice is entered.
fn prompt_option(
    system: &OrganSystem,
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
) -> eyre::Result<String> {
    writeln!(prompt, "\n{} - {}", system.name, system.measure)?;
    for option in &system.options {
        writeln!(prompt, "  [{}] {}", option.points, option.label)?;
    }

    loop {
        write!(prompt, "Select {}-{}: ", system.range.min, system.range.max)?;
        prompt.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(eyre::eyre!(
                "input ended before a {} criterion was selected",
                system.name
            ));
        }
        match system.resolve(&line) {
            Some(option) => return Ok(option.id.clone()),
            None => writeln!(prompt, "  '{}' is not a valid choice", line.trim())?,
        }
    }
}
