//! stk-series
//!
//! Read side of the pipeline: turns text into an ordered `Vec<f64>`.
//! It does **not** compute streaks or print anything; callers hand the
//! resulting series to `stk_streak`.
//!
//! Two layouts are supported:
//! - a plain list of numbers separated by whitespace, newlines or the delimiter
//! - a headered CSV file, reading one named column
//!
//! Only finite numbers are accepted. Gaps are never filled or skipped
//! silently, because a dropped value would move streak boundaries.

mod ingest_csv;
mod ingest_list;

use std::fmt;
use std::io::Read;
use std::path::Path;

pub use ingest_csv::parse_csv_column;
pub use ingest_list::parse_list;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced while ingesting a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// An I/O error while opening or reading the source.
    Io(String),
    /// CSV layout selected but no column name supplied.
    ColumnRequired,
    /// The CSV header row does not contain the requested column.
    MissingColumn(String),
    /// A token is not a finite number. `line` is 1-based.
    ParseValue { line: usize, raw: String },
    /// A CSV row has no value for the requested column. `line` is 1-based.
    EmptyCell { line: usize, column: String },
    /// The separator could be mistaken for part of a number, a comment or a quote.
    BadDelimiter(char),
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::Io(msg) => write!(f, "series io error: {msg}"),
            SeriesError::ColumnRequired => {
                write!(f, "csv series requires a column name")
            }
            SeriesError::MissingColumn(col) => {
                write!(f, "csv missing requested column: '{col}'")
            }
            SeriesError::ParseValue { line, raw } => {
                write!(f, "line {line}: '{raw}' is not a finite number")
            }
            SeriesError::EmptyCell { line, column } => {
                write!(f, "line {line}: empty value in column '{column}'")
            }
            SeriesError::BadDelimiter(c) => {
                write!(f, "delimiter {c:?} is not allowed")
            }
        }
    }
}

impl std::error::Error for SeriesError {}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Input layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeriesFormat {
    /// `Csv` when a column is named, `List` otherwise.
    #[default]
    Auto,
    List,
    Csv,
}

impl SeriesFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesFormat::Auto => "auto",
            SeriesFormat::List => "list",
            SeriesFormat::Csv => "csv",
        }
    }

    /// Case-insensitive parse of `auto | list | csv`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(SeriesFormat::Auto),
            "list" => Some(SeriesFormat::List),
            "csv" => Some(SeriesFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesOptions {
    pub format: SeriesFormat,
    /// CSV column to read (matched case-insensitively).
    pub column: Option<String>,
    /// Field separator for CSV; extra separator for lists.
    pub delimiter: char,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            format: SeriesFormat::Auto,
            column: None,
            delimiter: ',',
        }
    }
}

impl SeriesOptions {
    /// The concrete layout after resolving `Auto`.
    pub fn effective_format(&self) -> SeriesFormat {
        match self.format {
            SeriesFormat::Auto if self.column.is_some() => SeriesFormat::Csv,
            SeriesFormat::Auto => SeriesFormat::List,
            other => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Whether `c` can separate values without changing how a token parses.
///
/// Digits, letters, sign, decimal point, `#` (comments) and `"` (CSV quoting)
/// all occur inside valid input, so none of them can be a separator. Line
/// breaks always separate and are not accepted either.
pub fn is_valid_delimiter(c: char) -> bool {
    c.is_ascii()
        && !c.is_ascii_alphanumeric()
        && !matches!(c, '+' | '-' | '.' | '#' | '"' | '\n' | '\r')
}

/// Parse a series from a string slice.
pub fn parse_series_str(src: &str, opts: &SeriesOptions) -> Result<Vec<f64>, SeriesError> {
    if !is_valid_delimiter(opts.delimiter) {
        return Err(SeriesError::BadDelimiter(opts.delimiter));
    }
    match opts.effective_format() {
        SeriesFormat::Csv => {
            let column = opts.column.as_deref().ok_or(SeriesError::ColumnRequired)?;
            parse_csv_column(src, column, opts.delimiter)
        }
        _ => parse_list(src, opts.delimiter),
    }
}

/// Read everything from `reader` and parse it.
pub fn parse_series_reader<R: Read>(
    mut reader: R,
    opts: &SeriesOptions,
) -> Result<Vec<f64>, SeriesError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|e| SeriesError::Io(format!("read: {e}")))?;
    parse_series_str(&buf, opts)
}

/// Open `path` and parse it.
pub fn parse_series_file(path: &Path, opts: &SeriesOptions) -> Result<Vec<f64>, SeriesError> {
    let file = std::fs::File::open(path)
        .map_err(|e| SeriesError::Io(format!("open '{}': {e}", path.display())))?;
    parse_series_reader(file, opts).map_err(|e| match e {
        SeriesError::Io(msg) => SeriesError::Io(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

/// Parse a single token as a finite `f64`.
pub(crate) fn parse_finite(raw: &str, line: usize) -> Result<f64, SeriesError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SeriesError::ParseValue {
            line,
            raw: raw.to_string(),
        }),
    }
}

/// Drop a UTF-8 byte-order mark, which some spreadsheet exports prepend.
pub(crate) fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{feff}').unwrap_or(s)
}
