use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "bedside")]
#[command(version)]
#[command(about = "Bedside clinical tools: drug extraction, SOFA scoring and duration calculation", long_about = None)]
pub struct Cli {
    /// Output format (defaults to the config file's `default_format`)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available tools
    Tools,

    /// Drug extractor & disease mapper
    Drugs {
        #[command(subcommand)]
        command: DrugsCommand,
    },

    /// SOFA score calculator
    Sofa {
        #[command(subcommand)]
        command: SofaCommand,
    },

    /// Elapsed time between two date/times
    Interval {
        /// Start, as "YYYY-MM-DD HH:MM"
        start: String,

        /// End, as "YYYY-MM-DD HH:MM"
        end: String,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum DrugsCommand {
    /// Extract drug names from medical text
    Extract {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },

    /// Show the drug table
    List {
        /// Only this class (e.g. antibiotic, vasopressor, neuro_psych)
        #[arg(long)]
        class: Option<String>,

        /// Only drugs whose indication contains this text
        #[arg(long)]
        indication: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SofaCommand {
    /// Compute the score from one criterion per organ system
    Score(SofaScoreArgs),

    /// Print every organ table with option ids and points
    Options,
}

/// Each organ takes an option id or a point value (0-4).
#[derive(Debug, Default, Args)]
pub struct SofaScoreArgs {
    /// PaO2/FiO2 criterion
    #[arg(long)]
    pub respiration: Option<String>,

    /// Platelet criterion
    #[arg(long)]
    pub coagulation: Option<String>,

    /// Bilirubin criterion
    #[arg(long)]
    pub liver: Option<String>,

    /// MAP / vasopressor criterion
    #[arg(long)]
    pub cardiovascular: Option<String>,

    /// Glasgow Coma Scale criterion
    #[arg(long)]
    pub cns: Option<String>,

    /// Creatinine / urine output criterion
    #[arg(long)]
    pub renal: Option<String>,

    /// Prompt on stdin for every organ not given as a flag
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective config
    Show,

    /// Write a default config file if none exists
    Init,

    /// Print the config file path
    Path,

    /// Delete the config file
    Reset,
}
