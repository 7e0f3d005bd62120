//! Storage Commands
//!
//! `localStorage` slot holding the latest checklist snapshot.

use crate::checklist::StateStore;
use crate::error::{ChecklistError, ChecklistResult};

pub const STORAGE_KEY: &str = "checklistState";

/// Browser-backed `StateStore`. Looks the storage up on every call so the
/// handle itself stays `Send + Sync` for the signal that owns it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> ChecklistResult<web_sys::Storage> {
    web_sys::window()
        .ok_or(ChecklistError::StorageUnavailable)?
        .local_storage()
        .map_err(|e| ChecklistError::Storage(format!("{:?}", e)))?
        .ok_or(ChecklistError::StorageUnavailable)
}

impl StateStore for BrowserStore {
    fn load(&self) -> ChecklistResult<Option<String>> {
        local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(|e| ChecklistError::Storage(format!("{:?}", e)))
    }

    fn save(&mut self, snapshot: &str) -> ChecklistResult<()> {
        local_storage()?
            .set_item(STORAGE_KEY, snapshot)
            .map_err(|e| ChecklistError::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self) -> ChecklistResult<()> {
        local_storage()?
            .remove_item(STORAGE_KEY)
            .map_err(|e| ChecklistError::Storage(format!("{:?}", e)))
    }
}
