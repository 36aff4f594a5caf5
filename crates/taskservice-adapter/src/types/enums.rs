/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - closed enumerations shared by every task endpoint
[UPDATE]: When the backend adds site types or task statuses
*/

use serde::{Deserialize, Serialize};

/// Kind of site a parsing task targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    Marketplace,
    News,
    Ecommerce,
    Classifieds,
    #[default]
    Other,
}

/// Lifecycle state of a parsing task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Created,
    Running,
    Paused,
    Completed,
    Failed,
}

impl SiteType {
    /// Wire value, as it appears in JSON bodies and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteType::Marketplace => "marketplace",
            SiteType::News => "news",
            SiteType::Ecommerce => "ecommerce",
            SiteType::Classifieds => "classifieds",
            SiteType::Other => "other",
        }
    }
}

impl TaskStatus {
    /// Wire value, as it appears in JSON bodies and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Created => "created",
            TaskStatus::Running => "running",
            TaskStatus::Paused => "paused",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }
}
