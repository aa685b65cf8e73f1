//! Todo List Component
//!
//! Renders the canonical collection followed by the create prompt.

use leptos::prelude::*;

use crate::components::{CreateRow, TodoRow};
use crate::context::use_todo_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();
    let state = ctx.state;

    let items = move || state.with(|s| s.items.clone());
    let creating = move || state.with(|s| s.edit.is_creating());

    view! {
        <ul class="todo-list">
            <For
                each=items
                // Rows are rebuilt whenever a confirmed entity replaces them
                key=|item| (item.rowid, item.task.clone(), item.complete)
                children=move |item| view! { <TodoRow item=item /> }
            />
            <Show
                when=creating
                fallback=move || view! {
                    <li class="add-prompt">
                        <button class="inline create" on:click=move |_| ctx.controller().begin_create()>
                            "Create New..."
                        </button>
                    </li>
                }
            >
                <CreateRow />
            </Show>
        </ul>
    }
}
