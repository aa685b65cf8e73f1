//! Row Interaction Controller
//!
//! Owns the transient edit/create mode and turns row gestures into
//! collection store requests.

use crate::api::TodoApi;
use crate::models::{Item, ItemPatch, TaskFields};
use crate::store::{CollectionStore, EditState, StateCell};

pub struct RowController<S, A> {
    store: CollectionStore<S, A>,
}

impl<S: Clone, A> Clone for RowController<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: StateCell, A: TodoApi> RowController<S, A> {
    pub fn new(store: CollectionStore<S, A>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CollectionStore<S, A> {
        &self.store
    }

    fn set_edit(&self, edit: EditState) {
        self.store.state().write(|s| s.edit = edit);
    }

    /// Start editing `item`, dropping any unsaved draft
    pub fn begin_edit(&self, item: &Item) {
        let rowid = item.rowid;
        let draft = item.task.clone();
        self.store.state().write(|s| {
            if s.is_locked(rowid) {
                log::debug!("[ROW] Row {} is locked, not editing", rowid);
                return;
            }
            s.edit = EditState::Editing { rowid, draft };
        });
    }

    /// Replace the draft text of the current edit or creation
    pub fn change_draft(&self, text: String) {
        self.store.state().write(|s| match &mut s.edit {
            EditState::Editing { draft, .. } | EditState::Creating { draft } => *draft = text,
            EditState::Idle => {}
        });
    }

    /// Leave edit/create mode without saving
    pub fn cancel_edit(&self) {
        self.set_edit(EditState::Idle);
    }

    /// Save `new_text` as the task of `item`.
    ///
    /// Only fires while the edit state still names this row, so a confirm key
    /// followed by the field's blur commits once.
    pub async fn commit_edit(&self, item: &Item, new_text: String) {
        let rowid = item.rowid;
        let was_editing = self
            .store
            .state()
            .write(|s| {
                let editing = s.edit.is_editing(rowid);
                if editing {
                    s.edit = EditState::Idle;
                }
                editing
            })
            .unwrap_or(false);
        if !was_editing {
            return;
        }
        self.store.update(item, ItemPatch::task(new_text)).await;
    }

    /// Start composing a new row, dropping any unsaved draft
    pub fn begin_create(&self) {
        self.set_edit(EditState::Creating { draft: String::new() });
    }

    /// Create a row from `draft`; blank drafts are dropped without a request
    pub async fn commit_create(&self, draft: &str) {
        self.set_edit(EditState::Idle);
        let task = draft.trim();
        if task.is_empty() {
            return;
        }
        self.store.create(TaskFields::new_task(task)).await;
    }

    pub async fn toggle_complete(&self, item: &Item, checked: bool) {
        self.store.update(item, ItemPatch::complete(checked)).await;
    }

    pub async fn request_delete(&self, item: &Item) {
        self.store.delete_item(item).await;
    }
}
