//! bedside-cli
//!
//! The `bedside` command: one subcommand per tool, text or JSON output,
//! and a small JSON config file for defaults.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
