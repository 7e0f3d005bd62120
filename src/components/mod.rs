//! UI Components
//!
//! Leptos components for the checklist page.

mod checklist_row;
mod checklist_table;
mod paste_panel;
mod toolbar;

pub use checklist_row::ChecklistRow;
pub use checklist_table::ChecklistTable;
pub use paste_panel::PastePanel;
pub use toolbar::ChecklistToolbar;
