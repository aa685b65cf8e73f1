//! Todo Row Component
//!
//! A single item in the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::DraftInput;
use crate::context::use_todo_context;
use crate::models::Item;

/// One row: checkbox, task (or its edit field), edit and delete buttons.
///
/// Controls are disabled while the row has a request in flight.
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_todo_context();
    let state = ctx.state;

    let rowid = item.rowid;
    let complete = item.complete;
    let task = item.task.clone();

    let locked = move || state.with(|s| s.is_locked(rowid));
    let editing = move || state.with(|s| s.edit.is_editing(rowid));

    let on_toggle = {
        let item = item.clone();
        move |ev: web_sys::Event| {
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let checked = input.checked();
            // Keep showing the stored value until the server confirms
            input.set_checked(!checked);
            let item = item.clone();
            ctx.spawn(move |rows| async move { rows.toggle_complete(&item, checked).await });
        }
    };

    let on_edit = {
        let item = item.clone();
        move |_| ctx.controller().begin_edit(&item)
    };

    let on_delete = {
        let item = item.clone();
        move |_| {
            let item = item.clone();
            ctx.spawn(move |rows| async move { rows.request_delete(&item).await });
        }
    };

    let commit = {
        let item = item.clone();
        move |text: String| {
            let item = item.clone();
            ctx.spawn(move |rows| async move { rows.commit_edit(&item, text).await });
        }
    };

    view! {
        <li class:deleted=move || complete>
            <input
                type="checkbox"
                prop:checked=complete
                disabled=locked
                on:change=on_toggle
            />
            <span class="task">
                <Show when=editing fallback=move || task.clone()>
                    <DraftInput on_commit=commit.clone() on_blur=commit.clone() />
                </Show>
            </span>
            <span class="space"></span>
            <button class="edit inline" disabled=locked on:click=on_edit>"✏"</button>
            <button class="delete inline" disabled=locked on:click=on_delete>"×"</button>
        </li>
    }
}
