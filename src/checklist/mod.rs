//! Checklist Core
//!
//! DOM-free state, commands and undo. The view layer drives a
//! `ChecklistController` and re-renders from it.

mod controller;
mod export;
mod filter;
mod history;
mod import;
mod sort;
mod summary;
mod traits;

pub use controller::ChecklistController;
pub use export::CsvExport;
pub use sort::SortColumn;
pub use traits::{Prompt, StateStore};
