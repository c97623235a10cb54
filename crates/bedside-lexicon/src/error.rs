use thiserror::Error;

use bedside_core::models::notice::Notice;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Please enter some text to extract drugs from.")]
    EmptyInput,

    #[error("unknown drug class: {0}")]
    UnknownClass(String),
}

impl LexiconError {
    /// The notice a form shows for this error. Empty input is only a warning.
    pub fn notice(&self) -> Notice {
        match self {
            LexiconError::EmptyInput => Notice::warning(self.to_string()),
            LexiconError::UnknownClass(_) => Notice::error(self.to_string()),
        }
    }
}
