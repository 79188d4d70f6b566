//! Implementation of the `herald banner` command.

use tracing::debug;

use herald_core::domain::{Justification, MessageKind, build};

use crate::{
    cli::{BannerArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: BannerArgs,
    _global: GlobalArgs,
    config: AppConfig,
    _output: OutputManager,
) -> CliResult<()> {
    let columns = args.columns.unwrap_or(config.output.columns);
    let justify: Justification = args.justify.into();
    let announcer = super::announcer(&config, columns);

    debug!(columns, %justify, preset = ?args.preset, "rendering banner");

    match args.preset {
        // An explicit preset overrides the text-presence default.  Unknown
        // names surface as a not-found error carrying the requested key.
        Some(name) => {
            let template = build(name.as_str()).map_err(|e| CliError::Core(e.into()))?;
            let text = args.text.as_deref().unwrap_or("");
            let line = match justify {
                Justification::Left => template.left_justify(text, columns),
                Justification::Center => template.center_justify(text, columns),
                Justification::Right => template.right_justify(text, columns),
            };
            announcer.line(&line, MessageKind::Plain)?;
        }
        None => {
            announcer.banner(args.text.as_deref(), justify)?;
        }
    }

    Ok(())
}
