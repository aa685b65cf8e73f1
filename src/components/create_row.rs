//! Create Row Component
//!
//! Composer row shown while a new item is being typed.

use leptos::prelude::*;

use crate::components::DraftInput;
use crate::context::use_todo_context;

#[component]
pub fn CreateRow() -> impl IntoView {
    let ctx = use_todo_context();

    let commit = move |text: String| {
        ctx.spawn(move |rows| async move { rows.commit_create(&text).await });
    };

    view! {
        <li class="new">
            <input type="checkbox" disabled=true />
            <span class="task">
                <DraftInput
                    on_commit=commit
                    on_blur=move |_: String| ctx.controller().cancel_edit()
                />
            </span>
        </li>
    }
}
