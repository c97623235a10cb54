use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::{Commands, DrugsCommand, SofaCommand};
use crate::config::BedsideConfig;
use crate::output::{OutputFormat, Outcome};

pub mod config;
pub mod drugs;
pub mod interval;
pub mod sofa;
pub mod tools;

/// Everything a command needs besides its own arguments.
pub struct Context<'a> {
    pub format: OutputFormat,
    pub config_path: &'a Path,
    pub config: &'a BedsideConfig,
}

/// Run one parsed command. `input` backs stdin reads and interactive
/// prompts, which are written to `prompt`.
pub fn run(
    command: Commands,
    ctx: &Context<'_>,
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
) -> eyre::Result<Outcome> {
    match command {
        Commands::Tools => tools::run(ctx.format),
        Commands::Drugs { command } => match command {
            DrugsCommand::Extract { text } => drugs::extract(text, ctx.format, input),
            DrugsCommand::List { class, indication } => {
                drugs::list(class.as_deref(), indication.as_deref(), ctx.format)
            }
        },
        Commands::Sofa { command } => match command {
            SofaCommand::Score(args) => sofa::score(&args, ctx.format, input, prompt),
            SofaCommand::Options => sofa::options(ctx.format),
        },
        Commands::Interval { start, end } => interval::run(&start, &end, ctx.format),
        Commands::Config { command } => config::run(command, ctx),
    }
}
