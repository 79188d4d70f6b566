//! Implementation of the `herald config` command family.

use std::fs;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Init(args) => {
            let path = AppConfig::config_path();
            if path.exists() && !args.force {
                return Err(CliError::ConfigExists { path });
            }

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_cli_context(|| format!("creating {}", parent.display()))?;
            }

            let rendered =
                toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
                    message: "could not serialise default configuration".into(),
                    source: Some(Box::new(e)),
                })?;
            fs::write(&path, rendered)
                .with_cli_context(|| format!("writing {}", path.display()))?;

            output.success(&format!("Wrote {}", path.display()))?;
        }

        ConfigCommands::Show => {
            // JSON must stay parseable even in non-TTY pipes, so it bypasses
            // the OutputManager.
            if output.format() == OutputFormat::Json {
                let json =
                    serde_json::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: "could not serialise configuration".into(),
                        source: Some(Box::new(e)),
                    })?;
                println!("{json}");
            } else {
                let rendered =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: "could not serialise configuration".into(),
                        source: Some(Box::new(e)),
                    })?;
                print!("{rendered}");
            }
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path().display());
        }
    }

    Ok(())
}
