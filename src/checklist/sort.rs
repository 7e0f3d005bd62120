//! Column Sorting
//!
//! Only the two text columns sort. Direction flips when the same column is
//! clicked while ascending; any other click starts ascending.

use crate::models::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Alpha,
    Id,
}

impl SortColumn {
    /// Map a header cell index to a sortable column
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SortColumn::Alpha),
            1 => Some(SortColumn::Id),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SortColumn::Alpha => 0,
            SortColumn::Id => 1,
        }
    }

    fn key(&self, row: &Row) -> String {
        match self {
            SortColumn::Alpha => row.alpha_code.to_lowercase(),
            SortColumn::Id => row.id.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header marker class
    pub fn as_class(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The one header currently carrying a direction marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Marker after clicking `column`, given the current marker
    pub fn next(current: Option<SortState>, column: SortColumn) -> SortState {
        let direction = match current {
            Some(s) if s.column == column && s.direction == SortDirection::Ascending => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        SortState { column, direction }
    }
}

pub fn sort_rows(rows: &mut [Row], state: SortState) {
    rows.sort_by(|a, b| {
        let ord = state.column.key(a).cmp(&state.column.key(b));
        match state.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
