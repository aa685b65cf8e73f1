//! Draft Input Component
//!
//! Text field bound to the draft of the current edit or creation.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_todo_context;

/// Self-focusing draft field.
///
/// Enter calls `on_commit`, Escape cancels, losing focus calls `on_blur`.
/// Both callbacks receive the field's current text.
#[component]
pub fn DraftInput(
    #[prop(into)] on_commit: Callback<String>,
    #[prop(into)] on_blur: Callback<String>,
) -> impl IntoView {
    let ctx = use_todo_context();
    let state = ctx.state;
    let input_ref = NodeRef::<html::Input>::new();

    let draft = move || state.with(|s| s.edit.draft().unwrap_or_default().to_string());

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            type="text"
            node_ref=input_ref
            prop:value=draft
            on:input=move |ev| ctx.controller().change_draft(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                match ev.key().as_str() {
                    "Enter" => {
                        ev.prevent_default();
                        on_commit.run(event_target_value(&ev));
                    }
                    "Escape" => ctx.controller().cancel_edit(),
                    _ => {}
                }
            }
            on:blur=move |ev: web_sys::FocusEvent| on_blur.run(event_target_value(&ev))
        />
    }
}
