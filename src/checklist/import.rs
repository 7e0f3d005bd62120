//! Bulk Import
//!
//! Parses pasted `ABCD 1234` lines into new row candidates.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::FIELD_LEN;

pub const EMPTY_PASTE_NOTICE: &str = "Please paste data first.";
pub const NOTHING_IMPORTED_NOTICE: &str =
    "No new, valid data found. Data should be in 'ABCD 1234' format, and duplicates are ignored.";

static ALPHA_RE: OnceLock<Regex> = OnceLock::new();
static ID_RE: OnceLock<Regex> = OnceLock::new();

fn alpha_re() -> &'static Regex {
    ALPHA_RE.get_or_init(|| Regex::new(r"^[A-Z]{4}$").expect("valid alpha pattern"))
}

fn id_re() -> &'static Regex {
    ID_RE.get_or_init(|| Regex::new(r"^[0-9]{4}$").expect("valid id pattern"))
}

/// An accepted paste line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedRow {
    pub alpha_code: String,
    pub id: String,
}

/// Parse pasted text, skipping malformed lines and alpha codes already in
/// `existing` (compared uppercased) or seen earlier in the same paste.
pub fn parse_pasted<'a, I>(text: &str, existing: I) -> Vec<ImportedRow>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = existing.into_iter().map(|a| a.to_uppercase()).collect();
    let mut accepted = Vec::new();

    for line in text.trim().lines() {
        let mut tokens = line.split_whitespace();
        let alpha: String = tokens.next().unwrap_or("").to_uppercase().chars().take(FIELD_LEN).collect();
        let id: String = tokens.next().unwrap_or("").chars().take(FIELD_LEN).collect();

        if alpha_re().is_match(&alpha) && id_re().is_match(&id) && !seen.contains(&alpha) {
            seen.insert(alpha.clone());
            accepted.push(ImportedRow { alpha_code: alpha, id });
        }
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn alphas(rows: &[ImportedRow]) -> Vec<&str> {
        rows.iter().map(|r| r.alpha_code.as_str()).collect()
    }

    #[test]
    fn test_valid_lines_in_order() {
        let rows = parse_pasted("ABCD 1234\nwxyz 0001\nQRST\t9999", NONE);
        assert_eq!(alphas(&rows), vec!["ABCD", "WXYZ", "QRST"]);
        assert_eq!(rows[1].id, "0001");
    }

    #[test]
    fn test_duplicates_skipped() {
        let rows = parse_pasted("ABCD 1234\nEFGH 5678\nabcd 4321", ["EFGH"]);
        assert_eq!(alphas(&rows), vec!["ABCD"]);
    }

    #[test]
    fn test_existing_compared_uppercased() {
        let rows = parse_pasted("ABCD 1234", ["abcd"]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let text = "AB1D 1234\nABCD 12a4\nABC 1234\nABCD\n\n  \nÄBCD 1234\nGOOD 0000";
        let rows = parse_pasted(text, NONE);
        assert_eq!(alphas(&rows), vec!["GOOD"]);
    }

    #[test]
    fn test_long_tokens_truncated() {
        let rows = parse_pasted("ABCDEF 123456 trailing", NONE);
        assert_eq!(rows, vec![ImportedRow { alpha_code: "ABCD".into(), id: "1234".into() }]);
    }

    #[test]
    fn test_crlf_and_indentation() {
        let rows = parse_pasted("ABCD 1234\r\n   EFGH 5678\r\n", NONE);
        assert_eq!(alphas(&rows), vec!["ABCD", "EFGH"]);
    }

    #[test]
    fn test_unicode_digits_rejected() {
        assert!(parse_pasted("ABCD ١٢٣٤", NONE).is_empty());
    }
}
