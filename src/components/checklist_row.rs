//! Checklist Row Component
//!
//! Editable alpha/id fields, one checkbox per application, the missing
//! summary and a delete button. Every value is read from the controller by
//! row key, so undo and sort re-render in place.

use leptos::prelude::*;

use crate::context::use_checklist;
use crate::models::{Row, RowKey};

#[component]
pub fn ChecklistRow(row_key: RowKey) -> impl IntoView {
    let ctx = use_checklist();
    let app_count = ctx.peek(|c| c.applications().len());

    let read = move |f: fn(&Row) -> String| move || ctx.with(|c| c.row(row_key).map(f).unwrap_or_default());
    let summary = move || ctx.with(|c| c.missing_summary(row_key));

    let row_class = move || {
        let mut class = String::from("checklist-row");
        if summary().highlighted() {
            class.push_str(" highlight-row");
        }
        if !ctx.with(|c| c.is_visible(row_key)) {
            class.push_str(" filtered-out");
        }
        class
    };

    let checkboxes = (0..app_count)
        .map(|index| {
            let checked = move || ctx.with(|c| c.row(row_key).is_some_and(|r| r.is_complete(index)));
            // Rows stored before the application list grew have no slot here
            let detached = move || ctx.with(|c| c.row(row_key).is_some_and(|r| index >= r.completions.len()));
            view! {
                <td class="checkbox-cell">
                    <input
                        type="checkbox"
                        prop:checked=checked
                        prop:disabled=detached
                        on:change=move |ev| {
                            let value = event_target_checked(&ev);
                            ctx.dispatch(|c| c.set_completion(row_key, index, value));
                        }
                    />
                </td>
            }
        })
        .collect_view();

    view! {
        <tr class=row_class>
            <td class="alpha-cell">
                <input
                    type="text"
                    maxlength="4"
                    placeholder="ABCD"
                    prop:value=read(|r| r.alpha_code.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.dispatch(|c| c.edit_alpha(row_key, &value));
                    }
                />
                <div class="missing-summary">{move || summary().text()}</div>
            </td>
            <td class="id-cell">
                <input
                    type="text"
                    maxlength="4"
                    placeholder="1234"
                    prop:value=read(|r| r.id.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.dispatch(|c| c.edit_id(row_key, &value));
                    }
                />
            </td>
            {checkboxes}
            <td class="actions-cell">
                <button
                    class="delete-row-btn"
                    title="Delete Row"
                    on:click=move |_| { ctx.dispatch(|c| c.delete_row(row_key)); }
                >
                    "−"
                </button>
            </td>
        </tr>
    }
}
