//! Headered CSV layout.
//!
//! ## Contract
//!
//! - The first record is the header. Column names are matched
//!   case-insensitively after trimming; quoted names are unquoted first.
//! - Blank lines are skipped. Every other line is a data row.
//! - Quoted cells may contain the delimiter.
//! - The requested column must be present in every data row. An empty cell
//!   is an error, never a silent gap.

use crate::{parse_finite, strip_bom, SeriesError};

/// Read `column` from a headered CSV document, in row order.
///
/// A document with no header, or a header and no rows, yields an empty series.
/// `delimiter` must already satisfy [`crate::is_valid_delimiter`].
pub fn parse_csv_column(
    src: &str,
    column: &str,
    delimiter: char,
) -> Result<Vec<f64>, SeriesError> {
    let src = strip_bom(src);
    if src.trim().is_empty() {
        return Ok(Vec::new());
    }
    if !delimiter.is_ascii() {
        return Err(SeriesError::BadDelimiter(delimiter));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(src.as_bytes());

    // --- Header ---
    let headers = rdr
        .headers()
        .map_err(|e| SeriesError::Io(format!("csv header: {e}")))?;
    let wanted = column.trim().to_ascii_lowercase();
    let idx = headers
        .iter()
        .position(|h| h.to_ascii_lowercase() == wanted)
        .ok_or_else(|| SeriesError::MissingColumn(column.to_string()))?;

    // --- Data rows ---
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| SeriesError::Io(format!("csv record: {e}")))?;
        let line_num = rec
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();

        let cell = rec.get(idx).unwrap_or("");
        if cell.is_empty() {
            return Err(SeriesError::EmptyCell {
                line: line_num,
                column: column.to_string(),
            });
        }
        out.push(parse_finite(cell, line_num)?);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "date,symbol,pnl";

    #[test]
    fn empty_input_returns_empty_vec() {
        assert!(parse_csv_column("", "pnl", ',').unwrap().is_empty());
    }

    #[test]
    fn header_only_returns_empty_vec() {
        assert!(parse_csv_column(HEADER, "pnl", ',').unwrap().is_empty());
    }

    #[test]
    fn missing_column_returns_err() {
        let err = parse_csv_column(HEADER, "return", ',').unwrap_err();
        assert_eq!(err, SeriesError::MissingColumn("return".into()));
    }

    #[test]
    fn column_match_is_case_insensitive() {
        let csv = format!("{HEADER}\n2024-01-02,SPY,1.5\n2024-01-03,SPY,-0.5");
        let xs = parse_csv_column(&csv, "PnL", ',').unwrap();
        assert_eq!(xs, vec![1.5, -0.5]);
    }

    #[test]
    fn blank_lines_skipped() {
        let csv = format!("{HEADER}\n\n2024-01-02,SPY,1\n\n2024-01-04,SPY,-2\n");
        let xs = parse_csv_column(&csv, "pnl", ',').unwrap();
        assert_eq!(xs, vec![1.0, -2.0]);
    }

    #[test]
    fn bad_value_reports_line() {
        let csv = format!("{HEADER}\n2024-01-02,SPY,1\n2024-01-03,SPY,oops");
        let err = parse_csv_column(&csv, "pnl", ',').unwrap_err();
        assert_eq!(
            err,
            SeriesError::ParseValue {
                line: 3,
                raw: "oops".into()
            }
        );
    }

    #[test]
    fn short_row_is_empty_cell() {
        let csv = format!("{HEADER}\n2024-01-02,SPY");
        let err = parse_csv_column(&csv, "pnl", ',').unwrap_err();
        assert_eq!(
            err,
            SeriesError::EmptyCell {
                line: 2,
                column: "pnl".into()
            }
        );
    }

    #[test]
    fn quoted_header_and_cells() {
        let csv = "\"day\",\"pnl\"\n\"1\",\"2.5\"\n\"2\",\"-1\"\n\"3\",\"4\"";
        let xs = parse_csv_column(csv, "pnl", ',').unwrap();
        assert_eq!(xs, vec![2.5, -1.0, 4.0]);
    }

    #[test]
    fn quoted_cell_may_contain_delimiter() {
        let csv = "name,pnl\n\"Acme, Inc\",3\n\"Foo, Bar, Baz\",-2";
        let xs = parse_csv_column(csv, "pnl", ',').unwrap();
        assert_eq!(xs, vec![3.0, -2.0]);
    }

    #[test]
    fn quoted_empty_cell_is_empty() {
        let csv = "name,pnl\nacme,\"\"";
        let err = parse_csv_column(csv, "pnl", ',').unwrap_err();
        assert_eq!(
            err,
            SeriesError::EmptyCell {
                line: 2,
                column: "pnl".into()
            }
        );
    }

    #[test]
    fn semicolon_delimiter() {
        let csv = "a;b\n1;-2\n3;4";
        assert_eq!(parse_csv_column(csv, "b", ';').unwrap(), vec![-2.0, 4.0]);
    }

    #[test]
    fn duplicate_header_first_wins() {
        let csv = "x,x\n1,2";
        assert_eq!(parse_csv_column(csv, "x", ',').unwrap(), vec![1.0]);
    }

    #[test]
    fn non_ascii_delimiter_rejected() {
        let err = parse_csv_column("a§b\n1§2", "b", '§').unwrap_err();
        assert_eq!(err, SeriesError::BadDelimiter('§'));
    }
}
