//! Missing Summary
//!
//! Per-row list of applications still unchecked, in header order.

use crate::models::Row;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingSummary {
    pub missing: Vec<String>,
}

impl MissingSummary {
    pub fn for_row(row: &Row, applications: &[String]) -> Self {
        let missing = applications
            .iter()
            .enumerate()
            .filter(|(i, _)| !row.is_complete(*i))
            .map(|(_, name)| name.trim().to_string())
            .collect();
        Self { missing }
    }

    /// `Missing: a, b` or empty when everything is checked
    pub fn text(&self) -> String {
        if self.missing.is_empty() {
            String::new()
        } else {
            format!("Missing: {}", self.missing.join(", "))
        }
    }

    /// Row gets the highlight class while anything is missing
    pub fn highlighted(&self) -> bool {
        !self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowKey;

    fn apps() -> Vec<String> {
        vec!["Portal".into(), "Scanner".into(), "Billing".into()]
    }

    #[test]
    fn test_lists_unchecked_in_header_order() {
        let row = Row::new(RowKey(1), "ABCD", "1234", &[false, true, false], 3);
        let summary = MissingSummary::for_row(&row, &apps());
        assert_eq!(summary.text(), "Missing: Portal, Billing");
        assert!(summary.highlighted());
    }

    #[test]
    fn test_all_checked_is_empty() {
        let row = Row::new(RowKey(1), "ABCD", "1234", &[true, true, true], 3);
        let summary = MissingSummary::for_row(&row, &apps());
        assert_eq!(summary.text(), "");
        assert!(!summary.highlighted());
    }

    #[test]
    fn test_short_stored_row_reads_unchecked() {
        let mut row = Row::new(RowKey(1), "ABCD", "1234", &[true, true, true], 3);
        row.completions.truncate(1);
        let summary = MissingSummary::for_row(&row, &apps());
        assert_eq!(summary.text(), "Missing: Scanner, Billing");
    }
}
