//! bedside-lexicon
//!
//! Keyword drug extraction. Maps generic drug names found in free text to
//! their usual indications using a fixed, compiled-in table.

pub mod entries;
pub mod error;
pub mod extract;

pub use entries::{
    DrugClass, DrugEntry, all_drugs, drugs_for_indication, drugs_in_class, filter_drugs,
    lookup,
};
pub use extract::{DrugMatch, Extraction, Token, extract, tokenize};
