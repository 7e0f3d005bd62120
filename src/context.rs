//! Application Context
//!
//! The checklist controller, shared with every component via the Leptos Context API.

use leptos::prelude::*;

use crate::checklist::ChecklistController;
use crate::commands::{BrowserPrompt, BrowserStore};
use crate::config::ChecklistConfig;

pub type BrowserController = ChecklistController<BrowserStore, BrowserPrompt>;

#[derive(Clone, Copy)]
pub struct ChecklistContext {
    controller: RwSignal<BrowserController>,
}

impl ChecklistContext {
    pub fn new(config: ChecklistConfig) -> Self {
        let controller = ChecklistController::new(config, BrowserStore, BrowserPrompt);
        Self { controller: RwSignal::new(controller) }
    }

    /// Read from the controller, tracking the signal
    pub fn with<R>(&self, f: impl FnOnce(&BrowserController) -> R) -> R {
        self.controller.with(f)
    }

    /// Read without subscribing (event handlers)
    pub fn peek<R>(&self, f: impl FnOnce(&BrowserController) -> R) -> R {
        self.controller.with_untracked(f)
    }

    /// Run a command and notify the view (None once the signal is disposed)
    pub fn dispatch<R>(&self, f: impl FnOnce(&mut BrowserController) -> R) -> Option<R> {
        self.controller.try_update(f)
    }
}

pub fn use_checklist() -> ChecklistContext {
    expect_context::<ChecklistContext>()
}
