//! Client Configuration
//!
//! The backend address is fixed at build time; there is no runtime config.

use crate::models::RowId;

/// Backend base address
pub const BASE_URL: &str = "http://localhost:8080";

/// Lines kept by the in-memory log ring
pub const LOG_CAPACITY: usize = 256;

/// Name stamped on every log line
pub const APP_NAME: &str = "TodoWeb";

/// Location of the remote todo collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `GET`/`POST` target
    pub fn collection_url(&self) -> String {
        format!("{}/todo", self.base_url)
    }

    /// `PUT`/`DELETE` target for a single row
    pub fn entity_url(&self, rowid: RowId) -> String {
        format!("{}/todo/{}", self.base_url, rowid)
    }
}
