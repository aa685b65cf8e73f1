//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::controller::RowController;
use crate::store::AppStore;

/// Row controller wired to the reactive store and the HTTP backend
pub type AppController = RowController<AppStore, HttpTodoApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Reactive todo state - read from views
    pub state: AppStore,
    controller: StoredValue<AppController>,
}

impl TodoContext {
    pub fn new(state: AppStore, controller: AppController) -> Self {
        Self {
            state,
            controller: StoredValue::new(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Run a remote interaction in the background
    pub fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(task(self.controller()));
    }
}

pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
