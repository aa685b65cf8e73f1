//! Test doubles for the store and controller tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{ApiError, ApiResult, TodoApi};
use crate::models::{Item, RowId, TaskFields};
use crate::store::{StateCell, TodoState};

/// Non-reactive state cell
#[derive(Clone, Default)]
pub struct LocalCell(Rc<RefCell<TodoState>>);

impl LocalCell {
    pub fn new(state: TodoState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn snapshot(&self) -> TodoState {
        self.0.borrow().clone()
    }
}

impl StateCell for LocalCell {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        Some(f(&self.0.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        Some(f(&mut self.0.borrow_mut()))
    }
}

/// A recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(TaskFields),
    Update(RowId, TaskFields),
    Delete(RowId),
}

type Gate = oneshot::Receiver<ApiResult<TaskFields>>;

/// Scripted [`TodoApi`].
///
/// Unscripted calls succeed: updates echo the desired fields, creates get the
/// next free row id, deletes return `Ok`.
#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<Call>>,
    list: RefCell<Option<ApiResult<Vec<Item>>>>,
    creates: RefCell<VecDeque<ApiResult<Item>>>,
    updates: RefCell<VecDeque<ApiResult<TaskFields>>>,
    deletes: RefCell<VecDeque<ApiResult<()>>>,
    gates: RefCell<HashMap<RowId, Gate>>,
    next_rowid: RefCell<RowId>,
    probe: Option<LocalCell>,
    locked_during_calls: RefCell<Vec<(RowId, bool)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            next_rowid: RefCell::new(100),
            ..Default::default()
        }
    }

    /// Record the lock state of each mutated row at the moment its request is sent
    pub fn with_probe(mut self, cell: LocalCell) -> Self {
        self.probe = Some(cell);
        self
    }

    pub fn set_list(&self, result: ApiResult<Vec<Item>>) {
        *self.list.borrow_mut() = Some(result);
    }

    pub fn push_create(&self, result: ApiResult<Item>) {
        self.creates.borrow_mut().push_back(result);
    }

    pub fn push_update(&self, result: ApiResult<TaskFields>) {
        self.updates.borrow_mut().push_back(result);
    }

    pub fn push_delete(&self, result: ApiResult<()>) {
        self.deletes.borrow_mut().push_back(result);
    }

    /// Hold the next update of `rowid` until the sender resolves it
    pub fn gate_update(&self, rowid: RowId, gate: Gate) {
        self.gates.borrow_mut().insert(rowid, gate);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn locked_during_calls(&self) -> Vec<(RowId, bool)> {
        self.locked_during_calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        if let (Some(cell), Call::Update(rowid, _) | Call::Delete(rowid)) = (&self.probe, &call) {
            let locked = cell.snapshot().is_locked(*rowid);
            self.locked_during_calls.borrow_mut().push((*rowid, locked));
        }
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        self.record(Call::List);
        self.list.borrow_mut().take().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create(&self, candidate: &TaskFields) -> ApiResult<Item> {
        self.record(Call::Create(candidate.clone()));
        if let Some(result) = self.creates.borrow_mut().pop_front() {
            return result;
        }
        let mut next = self.next_rowid.borrow_mut();
        *next += 1;
        Ok(Item::from_fields(*next, candidate.clone()))
    }

    async fn update(&self, rowid: RowId, desired: &TaskFields) -> ApiResult<TaskFields> {
        self.record(Call::Update(rowid, desired.clone()));
        let gate = self.gates.borrow_mut().remove(&rowid);
        if let Some(gate) = gate {
            return gate.await.unwrap_or_else(|_| {
                Err(ApiError::Status { status: 599, message: "gate dropped".into() })
            });
        }
        let scripted = self.updates.borrow_mut().pop_front();
        scripted.unwrap_or_else(|| Ok(desired.clone()))
    }

    async fn delete(&self, rowid: RowId) -> ApiResult<()> {
        self.record(Call::Delete(rowid));
        let scripted = self.deletes.borrow_mut().pop_front();
        scripted.unwrap_or(Ok(()))
    }
}
