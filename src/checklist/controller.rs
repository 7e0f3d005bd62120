//! Checklist Controller
//!
//! Owns the checklist state, the undo history and the view-only state
//! (search query, paste buffer, sort marker). Every mutating command ends in
//! `save()`, which snapshots the state into history and storage.

use crate::config::ChecklistConfig;
use crate::error::ChecklistError;
use crate::models::{ChecklistState, Row, RowKey};

use super::export::{to_csv, CsvExport};
use super::filter::row_matches;
use super::history::UndoHistory;
use super::import::{parse_pasted, EMPTY_PASTE_NOTICE, NOTHING_IMPORTED_NOTICE};
use super::sort::{sort_rows, SortColumn, SortState};
use super::summary::MissingSummary;
use super::traits::{Prompt, StateStore};

pub const UNDO_UNDERFLOW_NOTICE: &str = "No more actions to undo.";
pub const RESET_CONFIRM: &str = "Are you sure you want to reset the entire table? This cannot be undone.";

pub struct ChecklistController<S, P> {
    config: ChecklistConfig,
    store: S,
    prompt: P,
    state: ChecklistState,
    history: UndoHistory<ChecklistState>,
    next_key: u64,
    search_query: String,
    paste_buffer: String,
    sort: Option<SortState>,
}

impl<S: StateStore, P: Prompt> ChecklistController<S, P> {
    /// Restore the stored snapshot, or start empty. Only a snapshot actually
    /// read from storage enters the history.
    pub fn new(config: ChecklistConfig, store: S, prompt: P) -> Self {
        let mut controller = Self {
            config,
            store,
            prompt,
            state: ChecklistState::default(),
            history: UndoHistory::default(),
            next_key: 1,
            search_query: String::new(),
            paste_buffer: String::new(),
            sort: None,
        };

        if let Some(mut state) = controller.read_stored() {
            for row in state.rows.iter_mut() {
                row.key = controller.allocate_key();
            }
            log::info!("[LOAD] Restored {} rows", state.rows.len());
            controller.state = state;
            controller.history.push(controller.state.clone());
        }
        controller
    }

    fn read_stored(&self) -> Option<ChecklistState> {
        match self.store.load() {
            Ok(Some(json)) => serde_json::from_str(&json)
                .map_err(|e| log::warn!("[LOAD] Stored state unreadable ({}), starting empty", e))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                log::warn!("[LOAD] {}, starting empty", e);
                None
            }
        }
    }

    fn allocate_key(&mut self) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        key
    }

    fn persist(&mut self) {
        let written = serde_json::to_string(&self.state)
            .map_err(ChecklistError::from)
            .and_then(|json| self.store.save(&json));
        if let Err(e) = written {
            log::warn!("[SAVE] {}", e);
        }
    }

    fn row_mut(&mut self, key: RowKey) -> Option<&mut Row> {
        self.state.rows.iter_mut().find(|r| r.key == key)
    }

    // ========================
    // Queries
    // ========================

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    pub fn applications(&self) -> &[String] {
        &self.config.applications
    }

    #[cfg(test)]
    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn rows(&self) -> &[Row] {
        &self.state.rows
    }

    pub fn row(&self, key: RowKey) -> Option<&Row> {
        self.state.rows.iter().find(|r| r.key == key)
    }

    pub fn row_keys(&self) -> Vec<RowKey> {
        self.state.rows.iter().map(|r| r.key).collect()
    }

    pub fn go_live_date(&self) -> &str {
        &self.state.go_live_date
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn paste_buffer(&self) -> &str {
        &self.paste_buffer
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    #[cfg(test)]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether the search filter currently shows this row
    pub fn is_visible(&self, key: RowKey) -> bool {
        self.row(key).is_some_and(|r| row_matches(r, &self.search_query))
    }

    pub fn missing_summary(&self, key: RowKey) -> MissingSummary {
        self.row(key)
            .map(|r| MissingSummary::for_row(r, self.applications()))
            .unwrap_or_default()
    }

    // ========================
    // Undo / persistence
    // ========================

    /// Snapshot the current state into history and storage
    pub fn save(&mut self) {
        self.history.push(self.state.clone());
        self.persist();
        log::debug!("[SAVE] {} snapshots", self.history.len());
    }

    /// Restore the previous snapshot. Returns false (after telling the user)
    /// when there is nothing left to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo().cloned() else {
            self.prompt.alert(UNDO_UNDERFLOW_NOTICE);
            return false;
        };
        self.state = previous;
        self.persist();
        log::info!("[UNDO] Restored snapshot, {} left", self.history.len());
        true
    }

    // ========================
    // Row commands
    // ========================

    /// Append a row sized to the current application list. Does not save.
    pub fn add_row(&mut self, alpha_code: &str, id: &str, completions: &[bool]) -> RowKey {
        let key = self.allocate_key();
        let row = Row::new(key, alpha_code, id, completions, self.config.applications.len());
        self.state.rows.push(row);
        key
    }

    pub fn add_new_row(&mut self) -> RowKey {
        let key = self.add_row("", "", &[]);
        self.save();
        key
    }

    /// Delete after confirmation. Returns whether the row was removed.
    pub fn delete_row(&mut self, key: RowKey) -> bool {
        let Some(row) = self.row(key) else {
            return false;
        };
        let label = if row.alpha_code.is_empty() { "this row" } else { row.alpha_code.as_str() };
        if !self.prompt.confirm(&format!("Are you sure you want to delete {}?", label)) {
            return false;
        }
        self.state.rows.retain(|r| r.key != key);
        self.save();
        true
    }

    pub fn edit_alpha(&mut self, key: RowKey, value: &str) {
        if let Some(row) = self.row_mut(key) {
            row.alpha_code = value.to_string();
            self.save();
        }
    }

    pub fn edit_id(&mut self, key: RowKey, value: &str) {
        if let Some(row) = self.row_mut(key) {
            row.id = value.to_string();
            self.save();
        }
    }

    pub fn set_completion(&mut self, key: RowKey, app_index: usize, checked: bool) {
        let Some(row) = self.row_mut(key) else {
            return;
        };
        match row.completions.get_mut(app_index) {
            Some(flag) => *flag = checked,
            None => {
                log::warn!(
                    "[EDIT] Row {} stores {} completions, ignoring column {}",
                    row.alpha_code,
                    row.completions.len(),
                    app_index
                );
                return;
            }
        }
        self.save();
    }

    /// Check every box of every row the filter shows
    pub fn check_all(&mut self) {
        self.set_visible_completions(true);
    }

    /// Uncheck every box of every row the filter shows
    pub fn clear_all(&mut self) {
        self.set_visible_completions(false);
    }

    fn set_visible_completions(&mut self, checked: bool) {
        let query = self.search_query.clone();
        for row in self.state.rows.iter_mut().filter(|r| row_matches(r, &query)) {
            row.completions.iter_mut().for_each(|c| *c = checked);
        }
        self.save();
    }

    pub fn set_go_live_date(&mut self, value: &str) {
        self.state.go_live_date = value.to_string();
        self.save();
    }

    /// Wipe rows, date, paste buffer and history after confirmation
    pub fn reset_table(&mut self) -> bool {
        if !self.prompt.confirm(RESET_CONFIRM) {
            return false;
        }
        self.state = ChecklistState::default();
        self.paste_buffer.clear();
        self.history.clear();
        if let Err(e) = self.store.remove() {
            log::warn!("[RESET] {}", e);
        }
        self.save();
        log::info!("[RESET] Table cleared");
        true
    }

    // ========================
    // Sort / search
    // ========================

    /// Sort by a header cell index. Non-text columns are ignored.
    pub fn sort_by_column(&mut self, index: usize) -> bool {
        let Some(column) = SortColumn::from_index(index) else {
            return false;
        };
        let next = SortState::next(self.sort, column);
        sort_rows(&mut self.state.rows, next);
        self.sort = Some(next);
        self.save();
        true
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    // ========================
    // Import / export
    // ========================

    pub fn set_paste_buffer(&mut self, text: &str) {
        self.paste_buffer = text.to_string();
    }

    /// Import the paste buffer. Returns how many rows were added.
    pub fn process_pasted_data(&mut self) -> usize {
        if self.paste_buffer.trim().is_empty() {
            self.prompt.alert(EMPTY_PASTE_NOTICE);
            return 0;
        }

        let imported = parse_pasted(&self.paste_buffer, self.state.rows.iter().map(|r| r.alpha_code.as_str()));
        if imported.is_empty() {
            self.prompt.alert(NOTHING_IMPORTED_NOTICE);
            return 0;
        }

        for row in &imported {
            self.add_row(&row.alpha_code, &row.id, &[]);
        }
        self.paste_buffer.clear();
        self.save();
        log::info!("[IMPORT] Added {} rows", imported.len());
        imported.len()
    }

    pub fn export_csv(&self) -> CsvExport {
        to_csv(&self.config.column_titles(), self.config.applications.len(), &self.state.rows)
    }
}
