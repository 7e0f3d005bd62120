//! Paste Panel Component
//!
//! Textarea for bulk `ABCD 1234` input.

use leptos::prelude::*;

use crate::context::use_checklist;

#[component]
pub fn PastePanel() -> impl IntoView {
    let ctx = use_checklist();

    view! {
        <div class="paste-panel">
            <textarea
                rows="6"
                placeholder="Paste rows here, one 'ABCD 1234' per line"
                prop:value=move || ctx.with(|c| c.paste_buffer().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.dispatch(|c| c.set_paste_buffer(&text));
                }
            ></textarea>
            <button on:click=move |_| { ctx.dispatch(|c| c.process_pasted_data()); }>
                "Process Pasted Data"
            </button>
        </div>
    }
}
