//! Checklist Table Component
//!
//! Sortable header built from the configured applications, one row per
//! checklist entry.

use leptos::prelude::*;

use crate::checklist::SortColumn;
use crate::components::ChecklistRow;
use crate::context::use_checklist;

#[component]
pub fn ChecklistTable() -> impl IntoView {
    let ctx = use_checklist();
    let (alpha_label, id_label, applications) = ctx.peek(|c| {
        let config = c.config();
        (config.alpha_label.clone(), config.id_label.clone(), config.applications.clone())
    });

    // Only one header shows a direction marker
    let header_class = move |column: SortColumn| {
        move || {
            let mut class = String::from("sortable");
            if let Some(sort) = ctx.with(|c| c.sort_state()).filter(|s| s.column == column) {
                class.push(' ');
                class.push_str(sort.direction.as_class());
            }
            class
        }
    };

    let sort_by = move |column: SortColumn| {
        move |_: web_sys::MouseEvent| {
            ctx.dispatch(|c| c.sort_by_column(column.index()));
        }
    };

    view! {
        <table class="checklist-table">
            <thead>
                <tr>
                    <th class=header_class(SortColumn::Alpha) data-column="0" on:click=sort_by(SortColumn::Alpha)>
                        {alpha_label}
                    </th>
                    <th class=header_class(SortColumn::Id) data-column="1" on:click=sort_by(SortColumn::Id)>
                        {id_label}
                    </th>
                    {applications
                        .into_iter()
                        .map(|name| view! { <th class="app-header">{name}</th> })
                        .collect_view()}
                    <th class="actions-header"></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || ctx.with(|c| c.row_keys())
                    key=|row_key| *row_key
                    children=move |row_key| view! { <ChecklistRow row_key=row_key /> }
                />
            </tbody>
        </table>
    }
}
