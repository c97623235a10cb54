//! bedside-report
//!
//! Plain-text and Markdown rendering of tool results via Tera templates.

pub mod error;
pub mod render;
pub mod templates;
