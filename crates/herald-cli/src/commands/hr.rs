//! Implementation of the `herald hr` command.

use herald_core::domain::Justification;

use crate::{
    cli::{HrArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: HrArgs,
    _global: GlobalArgs,
    config: AppConfig,
    _output: OutputManager,
) -> CliResult<()> {
    let columns = args.columns.unwrap_or(config.output.columns);
    let announcer = super::announcer(&config, columns);

    // No text: the generator collapses to the `hr` preset.
    announcer.banner(None, Justification::Left)?;
    Ok(())
}
