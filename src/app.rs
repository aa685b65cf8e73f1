//! Todo Web App
//!
//! Root component: owns the store, loads the list once, then hands off to
//! the list view.

use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::components::TodoList;
use crate::config::ApiConfig;
use crate::context::TodoContext;
use crate::controller::RowController;
use crate::store::{AppStore, CollectionStore, TodoState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let state = AppStore::new(TodoState::default());
    let store = CollectionStore::new(state, HttpTodoApi::new(ApiConfig::default()));
    let ctx = TodoContext::new(state, RowController::new(store));

    // Provide context to all children
    provide_context(ctx);

    // Load the list on mount. No retry: a failed load stays on "Loading..."
    Effect::new(move |_| {
        log::info!("[APP] Loading todo list");
        ctx.spawn(|rows| async move { rows.store().load().await });
    });

    let loaded = move || state.with(|s| s.loaded);

    view! {
        <div class="app">
            <h1>"To-Do List"</h1>
            <hr />
            <Show
                when=loaded
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <TodoList />
            </Show>
        </div>
    }
}
