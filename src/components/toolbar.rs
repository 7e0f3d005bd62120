//! Checklist Toolbar Component
//!
//! Bulk commands, go-live date and the search box.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_checklist;

#[component]
pub fn ChecklistToolbar() -> impl IntoView {
    let ctx = use_checklist();

    let export = move |_| {
        let export = ctx.peek(|c| c.export_csv());
        if let Err(e) = commands::download_csv(&export) {
            log::error!("[EXPORT] {}", e);
        }
    };

    view! {
        <div class="toolbar">
            <div class="toolbar-buttons">
                <button on:click=move |_| { ctx.dispatch(|c| c.check_all()); }>"Check All"</button>
                <button on:click=move |_| { ctx.dispatch(|c| c.clear_all()); }>"Clear All"</button>
                <button on:click=move |_| { ctx.dispatch(|c| c.add_new_row()); }>"Add New Row"</button>
                <button on:click=move |_| { ctx.dispatch(|c| c.undo()); } title="Undo (Ctrl+Z)">"Undo"</button>
                <button on:click=export>"Export CSV"</button>
                <button class="danger" on:click=move |_| { ctx.dispatch(|c| c.reset_table()); }>"Reset Table"</button>
            </div>

            <div class="toolbar-fields">
                <label class="go-live">
                    "Go-Live Date "
                    <input
                        type="date"
                        prop:value=move || ctx.with(|c| c.go_live_date().to_string())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.dispatch(|c| c.set_go_live_date(&value));
                        }
                    />
                </label>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search alpha or ID..."
                    prop:value=move || ctx.with(|c| c.search_query().to_string())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        ctx.dispatch(|c| c.set_search_query(&query));
                    }
                />
            </div>
        </div>
    }
}
