/*
[INPUT]:  Operator-typed field buffers for the create dialog
[OUTPUT]: TaskForm state and validated TaskCreate requests
[POS]:    Controller layer - create form state and local validation
[UPDATE]: Revisit when form fields or validation rules change
*/

use serde_json::Value;
use taskservice_adapter::{SiteType, TaskCreate};

use crate::labels::SITE_TYPE_OPTIONS;

/// Form field buffers for creating a task. Values survive a failed
/// validation or a rejected request untouched; only a successful create
/// resets them.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub name: String,
    pub url: String,
    pub site_type_index: usize,
    pub criteria_text: String,
    pub focused_field: usize,
}

impl TaskForm {
    pub fn new() -> Self {
        let default_site = SITE_TYPE_OPTIONS
            .iter()
            .position(|s| *s == SiteType::Other)
            .unwrap_or(0);
        Self {
            name: String::new(),
            url: String::new(),
            site_type_index: default_site,
            criteria_text: String::new(),
            focused_field: 0,
        }
    }

    pub fn site_type(&self) -> SiteType {
        SITE_TYPE_OPTIONS
            .get(self.site_type_index)
            .copied()
            .unwrap_or(SiteType::Other)
    }

    /// Validate the buffers into a request body. Blank criteria means an
    /// empty JSON object; non-blank criteria must parse as JSON but its
    /// shape is left to the backend.
    pub fn to_request(&self) -> Result<TaskCreate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err("URL is required".to_string());
        }

        let criteria_text = self.criteria_text.trim();
        let criteria = if criteria_text.is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(criteria_text)
                .map_err(|_| "Criteria must be valid JSON".to_string())?
        };

        Ok(TaskCreate {
            name: name.to_string(),
            url: url.to_string(),
            site_type: self.site_type(),
            criteria,
        })
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_name_is_rejected() {
        let form = TaskForm {
            name: "   ".to_string(),
            url: "https://example.com".to_string(),
            ..TaskForm::new()
        };
        assert_eq!(form.to_request().unwrap_err(), "Name is required");
    }

    #[test]
    fn blank_url_is_rejected() {
        let form = TaskForm {
            name: "watcher".to_string(),
            ..TaskForm::new()
        };
        assert_eq!(form.to_request().unwrap_err(), "URL is required");
    }

    #[test]
    fn blank_criteria_becomes_an_empty_object() {
        let form = TaskForm {
            name: "watcher".to_string(),
            url: "https://example.com".to_string(),
            criteria_text: "  ".to_string(),
            ..TaskForm::new()
        };
        let request = form.to_request().expect("should validate");
        assert_eq!(request.criteria, json!({}));
        assert_eq!(request.site_type, SiteType::Other);
    }

    #[test]
    fn malformed_criteria_is_rejected() {
        let form = TaskForm {
            name: "watcher".to_string(),
            url: "https://example.com".to_string(),
            criteria_text: "{not json".to_string(),
            ..TaskForm::new()
        };
        assert_eq!(form.to_request().unwrap_err(), "Criteria must be valid JSON");
    }

    #[test]
    fn criteria_is_passed_through_unmodified() {
        let form = TaskForm {
            name: "watcher".to_string(),
            url: "https://example.com".to_string(),
            site_type_index: 1,
            criteria_text: r#"{"depth": 2, "tags": ["a"]}"#.to_string(),
            ..TaskForm::new()
        };
        let request = form.to_request().expect("should validate");
        assert_eq!(request.site_type, SiteType::News);
        assert_eq!(request.criteria, json!({"depth": 2, "tags": ["a"]}));
    }
}
