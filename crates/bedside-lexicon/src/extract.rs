//! Single-pass tokenize-and-lookup over free text.
//!
//! Any character that is not alphanumeric separates tokens, so drug names
//! are found regardless of punctuation around them ("(Heparin)", "aspirin,").
//! Matching is case-insensitive and each drug is reported once, at its
//! first occurrence.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use bedside_core::models::notice::Notice;

use crate::entries::{DrugClass, lookup};
use crate::error::LexiconError;

/// A word in the input text with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub offset: usize,
    pub text: &'a str,
}

/// A drug detected in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrugMatch {
    /// Capitalised generic name for display ("Lisinopril").
    pub drug: String,
    /// Lowercase generic name; the table key.
    pub generic_name: String,
    pub indication: String,
    pub class: DrugClass,
    /// Byte offset of the first occurrence in the original text.
    pub offset: usize,
}

/// Result of running the extractor over one text.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Extraction {
    pub matches: Vec<DrugMatch>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn notice(&self) -> Notice {
        if self.matches.is_empty() {
            Notice::info(
                "No common drugs from our database were detected in the text. \
                 Try using generic names (e.g., 'lisinopril' instead of 'Prinivil').",
            )
        } else {
            Notice::success(format!("Found {} drug(s) in the text!", self.matches.len()))
        }
    }
}

/// Split `text` into alphanumeric runs.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(move |word| Token {
            // `split` yields subslices of `text`, so the pointer difference
            // is the byte offset.
            offset: word.as_ptr() as usize - text.as_ptr() as usize,
            text: word,
        })
}

/// Find every known drug mentioned in `text`.
pub fn extract(text: &str) -> Result<Extraction, LexiconError> {
    if text.trim().is_empty() {
        return Err(LexiconError::EmptyInput);
    }

    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for token in tokenize(text) {
        let Some(entry) = lookup(token.text) else {
            continue;
        };
        if !seen.insert(entry.name) {
            continue;
        }
        matches.push(DrugMatch {
            drug: capitalize(entry.name),
            generic_name: entry.name.to_string(),
            indication: entry.indication.to_string(),
            class: entry.class,
            offset: token.offset,
        });
    }

    debug!(
        input_len = text.len(),
        matched = matches.len(),
        "drug extraction finished"
    );

    Ok(Extraction { matches })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
