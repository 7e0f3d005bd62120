//! Checklist Models
//!
//! Data structures persisted to browser storage and held in undo snapshots.

use serde::{Deserialize, Serialize};

/// Session-local row identity (never persisted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub u64);

/// One checklist row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    #[serde(skip)]
    pub key: RowKey,
    /// 4-letter uppercase code
    #[serde(default)]
    pub alpha_code: String,
    /// 4-digit identifier
    #[serde(default)]
    pub id: String,
    /// One flag per tracked application, in header order
    #[serde(default)]
    pub completions: Vec<bool>,
}

impl Row {
    /// Build a row the way the table renders it: uppercased alpha code, both
    /// fields capped at 4 characters, one completion per application.
    pub fn new(key: RowKey, alpha_code: &str, id: &str, completions: &[bool], app_count: usize) -> Self {
        let completions = (0..app_count)
            .map(|i| completions.get(i).copied().unwrap_or(false))
            .collect();
        Self {
            key,
            alpha_code: cap(&alpha_code.to_uppercase()),
            id: cap(id),
            completions,
        }
    }

    /// Completion flag for one application column (missing entries read unchecked)
    pub fn is_complete(&self, app_index: usize) -> bool {
        self.completions.get(app_index).copied().unwrap_or(false)
    }
}

/// Field length enforced on render
pub const FIELD_LEN: usize = 4;

fn cap(value: &str) -> String {
    value.chars().take(FIELD_LEN).collect()
}

/// Persisted unit: every row plus the go-live date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistState {
    pub rows: Vec<Row>,
    #[serde(default)]
    pub go_live_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_normalizes_fields() {
        let row = Row::new(RowKey(1), "abcde", "123456", &[true], 3);
        assert_eq!(row.alpha_code, "ABCD");
        assert_eq!(row.id, "1234");
        assert_eq!(row.completions, vec![true, false, false]);
    }

    #[test]
    fn test_new_row_drops_surplus_completions() {
        let row = Row::new(RowKey(1), "", "", &[true, true, true], 2);
        assert_eq!(row.completions, vec![true, true]);
    }

    #[test]
    fn test_state_json_shape() {
        let state = ChecklistState {
            rows: vec![Row::new(RowKey(7), "ABCD", "1234", &[true, false], 2)],
            go_live_date: "2025-01-31".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"rows":[{"alphaCode":"ABCD","id":"1234","completions":[true,false]}],"goLiveDate":"2025-01-31"}"#
        );

        let back: ChecklistState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows[0].key, RowKey::default());
        assert_eq!(back.rows[0].alpha_code, "ABCD");
    }

    #[test]
    fn test_legacy_markup_state_is_rejected() {
        let legacy = r#"{"tableHTML":"<tr></tr>","goLiveDate":""}"#;
        assert!(serde_json::from_str::<ChecklistState>(legacy).is_err());
    }
}
