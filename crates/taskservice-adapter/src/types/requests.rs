/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - bodies and filters the client sends to the backend
[UPDATE]: When the backend task schema changes
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{SiteType, TaskStatus};

/// Body of POST /api/tasks. Id, status and timestamps are server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCreate {
    pub name: String,
    pub url: String,
    pub site_type: SiteType,
    pub criteria: Value,
}

/// Body of PATCH /api/tasks/{id}. Only present fields reach the wire,
/// so a status-only update serializes to exactly `{"status": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_type: Option<SiteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Value>,
}

/// Query parameters of GET /api/tasks. Absent fields are omitted from the
/// query string entirely, never sent as empty values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub q: Option<String>,
    pub site_type: Option<SiteType>,
    pub status: Option<TaskStatus>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
