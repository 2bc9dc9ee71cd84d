use anyhow::{bail, Result};
use serde_json::Value;
use stk_series::{is_valid_delimiter, SeriesFormat, SeriesOptions};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `/logging/filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `longest_positive_streak=<n>` on one line.
    #[default]
    Text,
    /// Full summary as a JSON object.
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Typed view over the consumed config keys.
///
/// | Pointer            | Values                  | Default |
/// |--------------------|-------------------------|---------|
/// | `/input/format`    | `auto` `list` `csv`     | `auto`  |
/// | `/input/column`    | string                  | none    |
/// | `/input/delimiter` | single character        | `,`     |
/// | `/output/format`   | `text` `json`           | `text`  |
/// | `/logging/filter`  | tracing filter directive| `warn`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakSettings {
    pub input_format: SeriesFormat,
    pub column: Option<String>,
    pub delimiter: char,
    pub output: OutputFormat,
    pub log_filter: String,
}

impl Default for StreakSettings {
    fn default() -> Self {
        Self {
            input_format: SeriesFormat::Auto,
            column: None,
            delimiter: ',',
            output: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StreakSettings {
    /// Read settings from a merged config document. Absent keys keep their
    /// defaults; present keys with the wrong type or value are errors.
    pub fn from_config_json(config: &Value) -> Result<Self> {
        let mut s = Self::default();

        if let Some(raw) = opt_str(config, "/input/format")? {
            s.input_format = match SeriesFormat::parse(raw) {
                Some(f) => f,
                None => bail!(
                    "invalid /input/format '{}'. expected one of: auto | list | csv",
                    raw
                ),
            };
        }

        if let Some(raw) = opt_str(config, "/input/column")? {
            let col = raw.trim();
            if col.is_empty() {
                bail!("invalid /input/column: must not be empty");
            }
            s.column = Some(col.to_string());
        }

        if let Some(raw) = opt_str(config, "/input/delimiter")? {
            s.delimiter = match parse_delimiter(raw) {
                Some(c) => c,
                None => bail!(
                    "invalid /input/delimiter '{}': {}",
                    raw,
                    DELIMITER_RULE
                ),
            };
        }

        if let Some(raw) = opt_str(config, "/output/format")? {
            s.output = match OutputFormat::parse(raw) {
                Some(f) => f,
                None => bail!(
                    "invalid /output/format '{}'. expected one of: text | json",
                    raw
                ),
            };
        }

        if let Some(raw) = opt_str(config, "/logging/filter")? {
            let filter = raw.trim();
            if let Err(e) = EnvFilter::try_new(filter) {
                bail!("invalid /logging/filter '{}': {}", raw, e);
            }
            s.log_filter = filter.to_string();
        }

        Ok(s)
    }

    pub fn series_options(&self) -> SeriesOptions {
        SeriesOptions {
            format: self.input_format,
            column: self.column.clone(),
            delimiter: self.delimiter,
        }
    }
}

/// Shown when a delimiter is rejected.
pub const DELIMITER_RULE: &str =
    "expected a single ASCII separator character (not a digit, letter, '+', '-', '.', '#' or '\"')";

/// Accept exactly one separator character; `\t` and `tab` spell a tab.
/// Characters that can appear inside a number are refused.
pub fn parse_delimiter(raw: &str) -> Option<char> {
    if raw == "\\t" || raw.eq_ignore_ascii_case("tab") {
        return Some('\t');
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_valid_delimiter(c) => Some(c),
        _ => None,
    }
}

fn opt_str<'a>(config: &'a Value, ptr: &str) -> Result<Option<&'a str>> {
    match config.pointer(ptr) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => bail!("invalid {}: expected string, got {}", ptr, other),
    }
}
