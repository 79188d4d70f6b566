//! Implementation of the `herald say` command.

use herald_core::domain::MessageKind;

use crate::{
    cli::{SayArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: SayArgs,
    _global: GlobalArgs,
    config: AppConfig,
    _output: OutputManager,
) -> CliResult<()> {
    let announcer = super::announcer(&config, config.output.columns);
    let kind: MessageKind = args.kind.into();

    if args.timestamp {
        announcer.timestamped_line(&args.text, kind)?;
    } else {
        announcer.line(&args.text, kind)?;
    }
    Ok(())
}
