/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - the task resource as the backend returns it
[UPDATE]: When the backend task schema changes
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{SiteType, TaskStatus};

/// A parsing task as stored by the backend.
///
/// `id` and the timestamps are server-assigned and kept as opaque strings;
/// `criteria` is an arbitrary JSON document the client never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub url: String,
    pub site_type: SiteType,
    pub status: TaskStatus,
    pub criteria: Value,
    pub created_at: String,
    pub updated_at: String,
}
