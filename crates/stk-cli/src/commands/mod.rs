//! Command handler modules for stk-cli.
//!
//! Shared utilities used by multiple command paths live here.
//! Command-specific logic lives in the submodules.

pub mod streak;

use anyhow::{Context, Result};
use stk_config::{
    LoadedConfig, OutputFormat, StreakSettings, DEFAULT_LOG_FILTER, DELIMITER_RULE,
};
use stk_series::SeriesFormat;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Install the stderr subscriber. `RUST_LOG` wins over `filter`; an
/// unparseable `filter` falls back to the default.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a CLI `--format` string into a [`SeriesFormat`].
pub fn parse_series_format(format: &str) -> Result<SeriesFormat> {
    match SeriesFormat::parse(format) {
        Some(f) => Ok(f),
        None => anyhow::bail!(
            "invalid --format '{}'. expected one of: auto | list | csv",
            format.trim()
        ),
    }
}

/// Parse a CLI `--delimiter` string.
pub fn parse_delimiter_arg(raw: &str) -> Result<char> {
    stk_config::parse_delimiter(raw)
        .with_context(|| format!("invalid --delimiter '{}': {}", raw, DELIMITER_RULE))
}

/// Load layered config (if any) and derive settings from it.
///
/// No paths means defaults and no config hash.
pub fn load_settings(config_paths: &[String]) -> Result<(StreakSettings, Option<LoadedConfig>)> {
    if config_paths.is_empty() {
        return Ok((StreakSettings::default(), None));
    }

    let path_refs: Vec<&str> = config_paths.iter().map(|s| s.as_str()).collect();
    let loaded = stk_config::load_layered_yaml(&path_refs)?;
    let settings = StreakSettings::from_config_json(&loaded.config_json)
        .context("config rejected")?;
    Ok((settings, Some(loaded)))
}

/// `--json` forces JSON; otherwise config decides.
pub fn resolve_output(json_flag: bool, settings: &StreakSettings) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        settings.output
    }
}
