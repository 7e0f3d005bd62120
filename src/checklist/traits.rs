//! Checklist Seams
//!
//! The controller reaches storage and the user only through these traits.
//! Browser implementations live in `crate::commands`.

use crate::error::ChecklistResult;

/// Key-value slot holding the latest serialized snapshot
pub trait StateStore {
    /// Read the stored snapshot, if any
    fn load(&self) -> ChecklistResult<Option<String>>;

    /// Overwrite the stored snapshot
    fn save(&mut self, snapshot: &str) -> ChecklistResult<()>;

    /// Drop the stored snapshot
    fn remove(&mut self) -> ChecklistResult<()>;
}

/// Synchronous, blocking interaction with the user
pub trait Prompt {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Show a notice the user must dismiss
    fn alert(&self, message: &str);
}
