//! Plain list layout.
//!
//! Values are separated by whitespace, newlines or the delimiter. Blank
//! tokens are ignored (so `1,,2` is two values), and a line whose first
//! non-space character is `#` is a comment.

use crate::{parse_finite, strip_bom, SeriesError};

/// Parse a list of numbers in source order.
pub fn parse_list(src: &str, delimiter: char) -> Result<Vec<f64>, SeriesError> {
    let mut out = Vec::new();

    for (i, line) in strip_bom(src).lines().enumerate() {
        let line_num = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for tok in line.split(|c: char| c == delimiter || c.is_whitespace()) {
            if tok.is_empty() {
                continue;
            }
            out.push(parse_finite(tok, line_num)?);
        }
    }

    Ok(out)
}
