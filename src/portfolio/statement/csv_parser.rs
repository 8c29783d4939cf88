//! CSV parsing for uploaded brokerage statements.
//!
//! Statements are machine-exported, so the surface stays small: the
//! delimiter is auto-detected, a UTF-8 BOM is tolerated, the first
//! non-empty row is the header, and rows are normalized to the header
//! width.

use csv::ReaderBuilder;
use log::warn;

use crate::errors::{Error, Result, ValidationError};

/// Headers plus data rows extracted from one statement file.
#[derive(Debug, Clone)]
pub struct ParsedStatement {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parses raw statement bytes into headers and rows.
pub fn parse_csv(content: &[u8]) -> Result<ParsedStatement> {
    let text = decode_content(content);
    let delimiter = detect_delimiter(&text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(str::to_string).collect();
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                records.push(row);
            }
            Err(e) => {
                warn!("skipping unreadable statement row {}: {}", idx + 1, e);
            }
        }
    }

    if records.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "statement contains no readable rows".to_string(),
        )));
    }

    let mut rows = records;
    let headers: Vec<String> = rows.remove(0).iter().map(|h| h.trim().to_string()).collect();

    // Normalize row widths to the header count.
    let width = headers.len();
    for (idx, row) in rows.iter_mut().enumerate() {
        if row.len() < width {
            row.resize(width, String::new());
        } else if row.len() > width {
            warn!(
                "statement row {} has {} cells, expected {}; extra cells ignored",
                idx + 2,
                row.len(),
                width
            );
            row.truncate(width);
        }
    }

    Ok(ParsedStatement { headers, rows })
}

/// Decodes bytes to text, stripping a UTF-8 BOM when present.
fn decode_content(content: &[u8]) -> String {
    let without_bom = content.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(content);
    match std::str::from_utf8(without_bom) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warn!("statement is not valid UTF-8 at byte {}; replacing bad characters", e.valid_up_to());
            String::from_utf8_lossy(without_bom).into_owned()
        }
    }
}

/// Picks the delimiter whose per-line count is highest and most consistent.
fn detect_delimiter(content: &str) -> u8 {
    let candidates = [b',', b';', b'\t'];
    let lines: Vec<&str> = content.lines().take(10).collect();

    let mut best = b',';
    let mut best_score = 0usize;
    for candidate in candidates {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.bytes().filter(|b| *b == candidate).count())
            .collect();
        let Some(&first) = counts.first() else { continue };
        if first == 0 {
            continue;
        }
        let consistent = counts.iter().filter(|&&c| c == first).count();
        let score = first * consistent;
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_statement() {
        let content = b"symbol,shares,buy_price\n1120.SR,10,85.5\n2222.SR,40,32.1";
        let parsed = parse_csv(content).unwrap();

        assert_eq!(parsed.headers, vec!["symbol", "shares", "buy_price"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0], vec!["1120.SR", "10", "85.5"]);
    }

    #[test]
    fn detects_semicolon_delimiter() {
        let content = b"symbol;shares;buy_price\n1120.SR;10;85.5";
        let parsed = parse_csv(content).unwrap();
        assert_eq!(parsed.headers, vec!["symbol", "shares", "buy_price"]);
    }

    #[test]
    fn detects_tab_delimiter() {
        let content = b"symbol\tshares\n1120.SR\t10";
        let parsed = parse_csv(content).unwrap();
        assert_eq!(parsed.headers, vec!["symbol", "shares"]);
    }

    #[test]
    fn strips_utf8_bom() {
        let content = b"\xEF\xBB\xBFsymbol,shares\n1120.SR,10";
        let parsed = parse_csv(content).unwrap();
        assert_eq!(parsed.headers[0], "symbol");
    }

    #[test]
    fn skips_empty_rows() {
        let content = b"symbol,shares\n1120.SR,10\n,\n\n2222.SR,40";
        let parsed = parse_csv(content).unwrap();
        assert_eq!(parsed.rows.len(), 2);
    }

    #[test]
    fn quoted_cells_keep_embedded_delimiters() {
        let content = b"symbol,company\n1120.SR,\"Al Rajhi, Bank\"";
        let parsed = parse_csv(content).unwrap();
        assert_eq!(parsed.rows[0][1], "Al Rajhi, Bank");
    }

    #[test]
    fn normalizes_ragged_rows() {
        let content = b"a,b,c\n1,2\n3,4,5,6";
        let parsed = parse_csv(content).unwrap();
        assert_eq!(parsed.rows[0], vec!["1", "2", ""]);
        assert_eq!(parsed.rows[1], vec!["3", "4", "5"]);
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(parse_csv(b"").is_err());
        assert!(parse_csv(b"\n\n").is_err());
    }

    #[test]
    fn arabic_headers_survive_decoding() {
        let content = "الرمز,الشركة\n1120,مصرف الراجحي".as_bytes();
        let parsed = parse_csv(content).unwrap();
        assert_eq!(parsed.headers, vec!["الرمز", "الشركة"]);
        assert_eq!(parsed.rows[0][1], "مصرف الراجحي");
    }
}
