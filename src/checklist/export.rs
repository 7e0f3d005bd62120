//! CSV Export
//!
//! Fields are wrapped in double quotes without further escaping, so quotes or
//! commas inside a code end up verbatim in the file.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::Row;

pub const EXPORT_FILENAME: &str = "N2.0_Rollout_Checklist.csv";

/// Characters `encodeURI` escapes besides controls and non-ASCII
const URI_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// A rendered export ready to hand to the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: &'static str,
    pub content: String,
}

impl CsvExport {
    /// `data:` URI for an anchor download
    pub fn data_uri(&self) -> String {
        format!(
            "data:text/csv;charset=utf-8,{}",
            utf8_percent_encode(&self.content, URI_ESCAPES)
        )
    }
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field)
}

/// Header line of column titles, then one line per row
pub fn to_csv(column_titles: &[String], app_count: usize, rows: &[Row]) -> CsvExport {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(column_titles.iter().map(|t| quoted(t.trim())).collect::<Vec<_>>().join(","));

    for row in rows {
        let mut fields = vec![quoted(&row.alpha_code), quoted(&row.id)];
        fields.extend((0..app_count).map(|i| if row.is_complete(i) { "Yes" } else { "No" }.to_string()));
        lines.push(fields.join(","));
    }

    CsvExport {
        filename: EXPORT_FILENAME,
        content: lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowKey;

    fn titles() -> Vec<String> {
        ["Alpha", "ID", "Portal", "Scanner", "Billing"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_rows_three_apps() {
        let rows = vec![
            Row::new(RowKey(1), "ABCD", "1234", &[true, false, true], 3),
            Row::new(RowKey(2), "EFGH", "5678", &[], 3),
        ];
        let export = to_csv(&titles(), 3, &rows);

        assert_eq!(export.filename, "N2.0_Rollout_Checklist.csv");
        let lines: Vec<&str> = export.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], r#""Alpha","ID","Portal","Scanner","Billing""#);
        assert_eq!(lines[1], r#""ABCD","1234",Yes,No,Yes"#);
        assert_eq!(lines[2], r#""EFGH","5678",No,No,No"#);
    }

    #[test]
    fn test_embedded_quotes_not_escaped() {
        let mut row = Row::new(RowKey(1), "", "", &[], 0);
        row.alpha_code = "A\"B".to_string();
        let export = to_csv(&["Alpha".to_string(), "ID".to_string()], 0, &[row]);
        assert_eq!(export.content, "\"Alpha\",\"ID\"\n\"A\"B\",\"\"");
    }

    #[test]
    fn test_data_uri_encoding() {
        let export = CsvExport {
            filename: EXPORT_FILENAME,
            content: "\"A B\",Yes\n\"[C]\",No".to_string(),
        };
        assert_eq!(
            export.data_uri(),
            "data:text/csv;charset=utf-8,%22A%20B%22,Yes%0A%22%5BC%5D%22,No"
        );
    }
}
