use crate::cli::ConfigCommand;
use crate::commands::Context;
use crate::config::{BedsideConfig, delete_config, save_config};
use crate::output::{Outcome, to_json};

pub fn run(command: ConfigCommand, ctx: &Context<'_>) -> eyre::Result<Outcome> {
    let path = ctx.config_path;
    match command {
        ConfigCommand::Show => Ok(Outcome::output(to_json(ctx.config)?)),
        ConfigCommand::Path => Ok(Outcome::output(format!("{}\n", path.display()))),
        ConfigCommand::Init => {
            if path.exists() {
                return Ok(Outcome::output(format!(
                    "config already exists at {}\n",
                    path.display()
                )));
            }
            save_config(path, &BedsideConfig::default())?;
            Ok(Outcome::output(format!("wrote {}\n", path.display())))
        }
        ConfigCommand::Reset => {
            let message = if delete_config(path)? {
                format!("deleted {}\n", path.display())
            } else {
                format!("no config at {}\n", path.display())
            };
            Ok(Outcome::output(message))
        }
    }
}
