//! `stk streak`: ingest a series and report its longest positive streak.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use stk_config::{report_unused_keys, OutputFormat, UnusedKeyPolicy};
use stk_streak::{summarize_streaks, StreakSummary};
use tracing::{debug, info, warn};

use super::{init_tracing, load_settings, parse_delimiter_arg, parse_series_format, resolve_output};

#[derive(Args, Debug)]
pub struct StreakArgs {
    /// Series file; omit or pass `-` to read stdin
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Layered config paths in merge order
    #[arg(long = "config", short = 'c')]
    pub config_paths: Vec<String>,

    /// CSV column holding the values (implies csv when --format is auto)
    #[arg(long)]
    pub column: Option<String>,

    /// Input layout (auto | list | csv)
    #[arg(long)]
    pub format: Option<String>,

    /// Field separator (single character, or `tab`)
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Emit the full summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Fail instead of warn when the config has keys nothing reads
    #[arg(long = "strict-config", default_value_t = false)]
    pub strict_config: bool,
}

#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    Stdin,
    File(&'a str),
}

impl<'a> Source<'a> {
    fn label(&self) -> &'a str {
        match *self {
            Source::Stdin => "stdin",
            Source::File(p) => p,
        }
    }
}

/// JSON document printed with `--json`.
#[derive(Debug, Serialize)]
struct StreakOutput<'a> {
    source: &'a str,
    longest_positive_streak: usize,
    summary: StreakSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_hash: Option<&'a str>,
}

pub fn run(args: StreakArgs) -> Result<()> {
    let (mut settings, loaded) = load_settings(&args.config_paths)?;

    init_tracing(&settings.log_filter);

    if let Some(loaded) = &loaded {
        let policy = if args.strict_config {
            UnusedKeyPolicy::Fail
        } else {
            UnusedKeyPolicy::Warn
        };
        let report = report_unused_keys(&loaded.config_json, policy)?;
        if !report.is_clean() {
            warn!(
                unused = ?report.unused_leaf_pointers,
                "config contains keys that are not read"
            );
        }
        debug!(config_hash = %loaded.config_hash, "config loaded");
    }

    // Flags override config.
    if let Some(f) = &args.format {
        settings.input_format = parse_series_format(f)?;
    }
    if let Some(c) = &args.column {
        let c = c.trim();
        if c.is_empty() {
            bail!("invalid --column: must not be empty");
        }
        settings.column = Some(c.to_string());
    }
    if let Some(d) = &args.delimiter {
        settings.delimiter = parse_delimiter_arg(d)?;
    }
    let output = resolve_output(args.json, &settings);
    let opts = settings.series_options();

    let source = match args.input.as_deref() {
        None | Some("-") => Source::Stdin,
        Some(p) => Source::File(p),
    };
    debug!(
        source = source.label(),
        format = opts.effective_format().as_str(),
        column = ?opts.column,
        "reading series"
    );

    let series = match source {
        Source::Stdin => stk_series::parse_series_reader(std::io::stdin().lock(), &opts),
        Source::File(p) => stk_series::parse_series_file(Path::new(p), &opts),
    }
    .with_context(|| format!("failed to read series from {}", source.label()))?;

    let summary = summarize_streaks(&series);
    info!(
        len = summary.len,
        longest = summary.longest,
        streaks = summary.streak_count,
        "series scanned"
    );

    match output {
        OutputFormat::Text => {
            println!("longest_positive_streak={}", summary.longest);
        }
        OutputFormat::Json => {
            let doc = StreakOutput {
                source: source.label(),
                longest_positive_streak: summary.longest,
                summary,
                config_hash: loaded.as_ref().map(|l| l.config_hash.as_str()),
            };
            let json =
                serde_json::to_string_pretty(&doc).context("serialize summary json failed")?;
            println!("{json}");
        }
    }

    Ok(())
}
