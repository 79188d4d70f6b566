//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `HERALD_*` environment variables (`HERALD_OUTPUT__COLUMNS=120`)
//! 3. Config file (`--config FILE`, or the default path if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use herald_core::application::DEFAULT_COLUMNS;
use herald_core::domain::TimestampFormat;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Timestamp preset for `--timestamp` lines.
    pub timestamp: TimestampFormat,
    /// Banner and rule rendering.
    pub output: OutputConfig,
    /// Progress-line throttling.
    pub progress: ProgressConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Banner width when no `--columns` flag is given.
    pub columns: usize,
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Emit a progress line every Nth tick. Must be at least 1.
    pub interval: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timestamp: TimestampFormat::Compact,
            output: OutputConfig {
                columns: DEFAULT_COLUMNS,
                no_color: false,
            },
            progress: ProgressConfig { interval: 1 },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config FILE` must exist and parse; the default-path
    /// file is optional.  Environment variables override both, e.g.
    /// `HERALD_OUTPUT__COLUMNS=120`.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.clone()));
            }
            None => {
                let path = Self::config_path();
                if path.exists() {
                    builder = builder.add_source(config::File::from(path));
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HERALD")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.herald.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "herald", "herald")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".herald.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn default_columns_is_eighty() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.output.columns, 80);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn default_timestamp_is_compact() {
        assert_eq!(AppConfig::default().timestamp, TimestampFormat::Compact);
        assert_eq!(AppConfig::default().progress.interval, 1);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herald.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "timestamp = \"verbose\"\n\n[output]\ncolumns = 120\nno_color = true\n\n[progress]\ninterval = 50"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.columns, 120);
        assert!(cfg.output.no_color);
        assert_eq!(cfg.progress.interval, 50);
        assert_eq!(cfg.timestamp, TimestampFormat::Verbose);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/herald.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herald.toml");
        std::fs::write(&path, "[output]\ncolumns = 40\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.columns, 40);
        assert_eq!(cfg.progress.interval, 1);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let rendered = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.output.columns, cfg.output.columns);
        assert_eq!(parsed.timestamp, cfg.timestamp);
    }
}
