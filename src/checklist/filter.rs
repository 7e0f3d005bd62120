//! Search filter: case-insensitive substring match on alpha code or id.

use crate::models::Row;

pub fn row_matches(row: &Row, query: &str) -> bool {
    let query = query.to_uppercase();
    row.alpha_code.to_uppercase().contains(&query) || row.id.to_uppercase().contains(&query)
}
