//! Rollout Checklist App
//!
//! Root component: toolbar, paste panel and the checklist table.

use leptos::{ev, prelude::*};

use crate::components::{ChecklistTable, ChecklistToolbar, PastePanel};
use crate::config::ChecklistConfig;
use crate::context::ChecklistContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = ChecklistContext::new(ChecklistConfig::load());
    provide_context(ctx);

    let title = ctx.peek(|c| c.config().title.clone());
    let row_count = move || ctx.with(|c| c.rows().len());
    // Re-read the logger buffer whenever a command touches the controller
    let activity = move || {
        ctx.with(|_| ());
        console_logger::recent_lines().join("\n")
    };

    // Ctrl+Z / Cmd+Z replaces the browser's own undo
    let _undo_shortcut = window_event_listener(ev::keydown, move |ev| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("z") {
            ev.prevent_default();
            ctx.dispatch(|c| c.undo());
        }
    });

    view! {
        <main class="checklist-app">
            <h1>{title}</h1>
            <ChecklistToolbar />
            <PastePanel />
            <ChecklistTable />
            <p class="row-count">{move || format!("{} rows", row_count())}</p>
            <details class="log-panel">
                <summary>"Activity log"</summary>
                <pre>{activity}</pre>
            </details>
        </main>
    }
}
