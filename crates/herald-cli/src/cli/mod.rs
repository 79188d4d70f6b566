//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No rendering logic lives here; value enums
//! convert into the core's domain types at the command boundary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use herald_core::domain::{Justification, MessageKind, parse_columns};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "herald",
    bin_name = "herald",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4ef} Readable status lines and banners for long-running tasks",
    long_about = "Herald renders banners, horizontal rules, and prefixed \
                  status lines so the output of long-running jobs stays \
                  scannable.",
    after_help = "EXAMPLES:\n\
        \x20 herald banner \"deploy api\" --justify center\n\
        \x20 herald banner --preset wtf \"what happened here\"\n\
        \x20 herald hr --columns 100\n\
        \x20 herald say \"3 of 7 shards rebuilt\" --kind success\n\
        \x20 herald completions bash > /usr/share/bash-completion/completions/herald",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a one-line banner around optional text.
    #[command(
        visible_alias = "b",
        about = "Render a banner",
        after_help = "EXAMPLES:\n\
            \x20 herald banner \"build\"\n\
            \x20 herald banner \"build\" --columns 100 --justify right\n\
            \x20 herald banner --preset wtf \"unexpected state\"\n\
            \x20 herald banner                 # bare rule, same as `herald hr`"
    )]
    Banner(BannerArgs),

    /// Render a bare horizontal rule.
    #[command(
        about = "Render a horizontal rule",
        after_help = "EXAMPLES:\n\
            \x20 herald hr\n\
            \x20 herald hr --columns 120"
    )]
    Hr(HrArgs),

    /// Write a prefixed status line.
    #[command(
        about = "Write a status line",
        after_help = "EXAMPLES:\n\
            \x20 herald say \"cache warmed\"\n\
            \x20 herald say \"disk almost full\" --kind warn\n\
            \x20 herald say \"tick 4000\" --timestamp"
    )]
    Say(SayArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 herald completions bash > ~/.local/share/bash-completion/completions/herald\n\
            \x20 herald completions zsh  > ~/.zfunc/_herald\n\
            \x20 herald completions fish > ~/.config/fish/completions/herald.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Herald configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 herald config init\n\
            \x20 herald config show\n\
            \x20 herald config path"
    )]
    Config(ConfigCommands),
}

// ── banner ────────────────────────────────────────────────────────────────────

/// Arguments for `herald banner`.
#[derive(Debug, Args)]
pub struct BannerArgs {
    /// Text to decorate.  Omitted text collapses the banner to a bare rule.
    #[arg(value_name = "TEXT", help = "Banner text")]
    pub text: Option<String>,

    /// Banner width in columns.
    #[arg(
        short = 'C',
        long = "columns",
        value_name = "N",
        value_parser = parse_columns,
        help = "Banner width (default from config, 80 out of the box)"
    )]
    pub columns: Option<usize>,

    /// Justification mode.
    #[arg(
        short = 'j',
        long = "justify",
        value_name = "MODE",
        value_enum,
        default_value = "left",
        help = "Where the text anchors"
    )]
    pub justify: JustifyMode,

    /// Template preset, overriding the text-presence default.
    #[arg(
        short = 'p',
        long = "preset",
        value_name = "NAME",
        help = "Template preset (title, hr, wtf)"
    )]
    pub preset: Option<String>,
}

/// Justification mode for banners.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum JustifyMode {
    #[default]
    Left,
    Center,
    Right,
}

impl From<JustifyMode> for Justification {
    fn from(mode: JustifyMode) -> Self {
        match mode {
            JustifyMode::Left => Justification::Left,
            JustifyMode::Center => Justification::Center,
            JustifyMode::Right => Justification::Right,
        }
    }
}

// ── hr ────────────────────────────────────────────────────────────────────────

/// Arguments for `herald hr`.
#[derive(Debug, Args)]
pub struct HrArgs {
    /// Rule width in columns.
    #[arg(
        short = 'C',
        long = "columns",
        value_name = "N",
        value_parser = parse_columns,
        help = "Rule width (default from config, 80 out of the box)"
    )]
    pub columns: Option<usize>,
}

// ── say ───────────────────────────────────────────────────────────────────────

/// Arguments for `herald say`.
#[derive(Debug, Args)]
pub struct SayArgs {
    /// The message to write.
    #[arg(value_name = "TEXT", help = "Message text")]
    pub text: String,

    /// Message kind, which picks the line prefix.
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        value_enum,
        default_value = "plain",
        help = "Message kind"
    )]
    pub kind: KindArg,

    /// Lead the line with a timestamp.
    #[arg(long = "timestamp", help = "Prepend a timestamp")]
    pub timestamp: bool,
}

/// Message kind for `herald say`.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum KindArg {
    #[default]
    Plain,
    Debug,
    Info,
    Success,
    Warn,
    Error,
}

impl From<KindArg> for MessageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Plain => MessageKind::Plain,
            KindArg::Debug => MessageKind::Debug,
            KindArg::Info => MessageKind::Info,
            KindArg::Success => MessageKind::Success,
            KindArg::Warn => MessageKind::Warn,
            KindArg::Error => MessageKind::Error,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `herald completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Shells we can generate completions for.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Subcommands for `herald config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file.
    Init(ConfigInitArgs),
    /// Print the effective configuration.
    Show,
    /// Print the configuration file path.
    Path,
}

/// Arguments for `herald config init`.
#[derive(Debug, Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}
