/*
[INPUT]:  Domain enums from the adapter crate
[OUTPUT]: Display labels and fixed option orders for selectors
[POS]:    Presentation layer - the only place wire enums become UI text
[UPDATE]: When the backend adds site types or task statuses
*/

use taskservice_adapter::{SiteType, TaskStatus};

/// Selector and filter-cycling order for site types
pub const SITE_TYPE_OPTIONS: [SiteType; 5] = [
    SiteType::Marketplace,
    SiteType::News,
    SiteType::Ecommerce,
    SiteType::Classifieds,
    SiteType::Other,
];

/// Selector and filter-cycling order for statuses
pub const STATUS_OPTIONS: [TaskStatus; 5] = [
    TaskStatus::Created,
    TaskStatus::Running,
    TaskStatus::Paused,
    TaskStatus::Completed,
    TaskStatus::Failed,
];

pub fn site_type_label(site_type: SiteType) -> &'static str {
    match site_type {
        SiteType::Marketplace => "Marketplace",
        SiteType::News => "News",
        SiteType::Ecommerce => "E-commerce",
        SiteType::Classifieds => "Classifieds",
        SiteType::Other => "Other",
    }
}

pub fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Created => "Created",
        TaskStatus::Running => "Running",
        TaskStatus::Paused => "Paused",
        TaskStatus::Completed => "Completed",
        TaskStatus::Failed => "Failed",
    }
}
