/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - envelopes the backend wraps around task data
[UPDATE]: When the backend task schema changes
*/

use serde::{Deserialize, Serialize};

use super::models::Task;

/// One page of a task listing. `total` counts every task matching the
/// filter, not just the returned page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    pub items: Vec<Task>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

/// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
