//! Collection Store
//!
//! Owns the canonical todo list and the per-row lock set, issues remote
//! mutations and folds their responses back into state.
//!
//! State lives in a single [`TodoState`] value. Every change goes through one
//! of its methods inside a single store write, so the render path only ever
//! sees whole states.

use std::collections::BTreeSet;
use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::models::{Item, ItemPatch, RowId, TaskFields};

/// Which row, if any, is being edited or composed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing { rowid: RowId, draft: String },
    Creating { draft: String },
}

impl EditState {
    pub fn is_editing(&self, rowid: RowId) -> bool {
        matches!(self, EditState::Editing { rowid: r, .. } if *r == rowid)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, EditState::Creating { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Idle => None,
            EditState::Editing { draft, .. } | EditState::Creating { draft } => Some(draft.as_str()),
        }
    }
}

/// Client-side view of the remote collection
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Set once the initial load succeeds
    pub loaded: bool,
    /// Canonical collection, in server/insertion order
    pub items: Vec<Item>,
    /// Rows with a mutating request in flight
    pub locked: BTreeSet<RowId>,
    /// Transient edit/create mode
    pub edit: EditState,
}

impl TodoState {
    pub fn is_locked(&self, rowid: RowId) -> bool {
        self.locked.contains(&rowid)
    }

    pub fn find(&self, rowid: RowId) -> Option<&Item> {
        self.items.iter().find(|item| item.rowid == rowid)
    }

    /// Replace the collection with a fresh server listing
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.locked.clear();
        self.loaded = true;
    }

    /// Lock `rowid` for a mutating request.
    ///
    /// Returns the row's current value, or `None` when the row is already
    /// locked or not in the collection.
    pub fn try_lock(&mut self, rowid: RowId) -> Option<Item> {
        if self.is_locked(rowid) {
            return None;
        }
        let current = self.find(rowid)?.clone();
        self.locked.insert(rowid);
        Some(current)
    }

    /// Clear the lock without touching the collection
    pub fn release(&mut self, rowid: RowId) {
        self.locked.remove(&rowid);
    }

    /// Apply a confirmed update. Returns `false` if the row vanished meanwhile.
    pub fn confirm_update(&mut self, rowid: RowId, fields: TaskFields) -> bool {
        self.release(rowid);
        match self.items.iter_mut().find(|item| item.rowid == rowid) {
            Some(entry) => {
                *entry = Item::from_fields(rowid, fields);
                true
            }
            None => false,
        }
    }

    /// Apply a confirmed delete. Returns `false` if the row was already gone.
    pub fn confirm_delete(&mut self, rowid: RowId) -> bool {
        self.release(rowid);
        let before = self.items.len();
        self.items.retain(|item| item.rowid != rowid);
        self.items.len() != before
    }

    /// Append a confirmed creation
    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }
}

/// Somewhere a [`TodoState`] lives.
///
/// Reads are untracked; a write is one atomic state transition. Both return
/// `None` once the backing storage has been disposed.
pub trait StateCell: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R>;
}

/// Type alias for the reactive store
pub type AppStore = Store<TodoState>;

impl StateCell for AppStore {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Mediates every remote mutation of the collection.
///
/// Operations never return errors: failures roll back local state and are
/// logged.
pub struct CollectionStore<S, A> {
    state: S,
    api: Arc<A>,
}

impl<S: Clone, A> Clone for CollectionStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            api: Arc::clone(&self.api),
        }
    }
}

impl<S: StateCell, A: TodoApi> CollectionStore<S, A> {
    pub fn new(state: S, api: A) -> Self {
        Self::with_shared_api(state, Arc::new(api))
    }

    pub fn with_shared_api(state: S, api: Arc<A>) -> Self {
        Self { state, api }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the whole collection. On failure the client stays unloaded.
    pub async fn load(&self) {
        match self.api.list().await {
            Ok(items) => {
                log::info!("[STORE] Loaded {} items", items.len());
                self.state.write(|s| s.replace_all(items));
            }
            Err(e) => log::error!("[STORE] Initial load failed: {}", e),
        }
    }

    /// Send `patch` merged over the row's current fields as its new state
    pub async fn update(&self, item: &Item, patch: ItemPatch) {
        let rowid = item.rowid;
        let Some(current) = self.lock(rowid, "update") else {
            return;
        };
        let desired = patch.apply_to(&current);

        match self.api.update(rowid, &desired).await {
            Ok(fields) => {
                let applied = self.state.write(|s| s.confirm_update(rowid, fields)).unwrap_or(false);
                if !applied {
                    log::warn!("[STORE] Row {} vanished before its update landed, discarding", rowid);
                }
            }
            Err(e) => {
                log::error!("[STORE] Update of row {} failed: {}", rowid, e);
                self.state.write(|s| s.release(rowid));
            }
        }
    }

    pub async fn delete_item(&self, item: &Item) {
        let rowid = item.rowid;
        if self.lock(rowid, "delete").is_none() {
            return;
        }

        match self.api.delete(rowid).await {
            Ok(()) => {
                let removed = self.state.write(|s| s.confirm_delete(rowid)).unwrap_or(false);
                if !removed {
                    log::warn!("[STORE] Row {} was already gone when its delete landed", rowid);
                }
            }
            Err(e) => {
                log::error!("[STORE] Delete of row {} failed: {}", rowid, e);
                self.state.write(|s| s.release(rowid));
            }
        }
    }

    /// Create a row; it is appended only once the backend assigns its id
    pub async fn create(&self, candidate: TaskFields) {
        match self.api.create(&candidate).await {
            Ok(item) => {
                log::debug!("[STORE] Created row {}", item.rowid);
                self.state.write(|s| s.append(item));
            }
            Err(e) => log::error!("[STORE] Create of {:?} failed: {}", candidate.task, e),
        }
    }

    fn lock(&self, rowid: RowId, op: &str) -> Option<Item> {
        let current = self.state.write(|s| s.try_lock(rowid)).flatten();
        if current.is_none() {
            log::warn!("[STORE] Refusing {} of row {}: locked or missing", op, rowid);
        }
        current
    }
}
