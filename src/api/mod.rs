//! Remote Collection API
//!
//! The seam between the collection store and the REST backend.
//! Implementations can speak HTTP, or be scripted in tests.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, RowId, TaskFields};

pub use http::HttpTodoApi;

/// Remote-call failure.
///
/// Every variant is handled the same way by callers; the split only keeps
/// the diagnostic readable.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, or a body that could not be decoded
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD operations against the remote todo collection
#[async_trait(?Send)]
pub trait TodoApi: 'static {
    /// `GET /todo`
    async fn list(&self) -> ApiResult<Vec<Item>>;

    /// `POST /todo`, returns the created entity with its new row id
    async fn create(&self, candidate: &TaskFields) -> ApiResult<Item>;

    /// `PUT /todo/{rowid}` with the full desired state, returns the stored fields
    async fn update(&self, rowid: RowId, desired: &TaskFields) -> ApiResult<TaskFields>;

    /// `DELETE /todo/{rowid}`
    async fn delete(&self, rowid: RowId) -> ApiResult<()>;
}
