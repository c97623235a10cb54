use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}
