/*
[INPUT]:  Task filters, creation/update bodies and task ids
[OUTPUT]: Typed task resources and listing pages
[POS]:    HTTP layer - the /api/tasks resource endpoints
[UPDATE]: When adding new task endpoints or changing query parameters
*/

use crate::http::{Result, TaskServiceClient};
use crate::types::{Task, TaskCreate, TaskFilter, TaskPage, TaskStatus, TaskUpdate};
use reqwest::Method;

impl TaskServiceClient {
    /// List tasks matching a filter, newest first
    ///
    /// GET /api/tasks?limit={limit}&offset={offset}&status={status}&site_type={site_type}&q={q}
    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<TaskPage> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = filter.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = filter.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(status) = filter.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(site_type) = filter.site_type {
            query.push(("site_type", site_type.as_str().to_string()));
        }
        if let Some(q) = &filter.q {
            query.push(("q", q.clone()));
        }

        let builder = self.api_request(Method::GET, "/api/tasks")?.query(&query);
        self.send_json(builder).await
    }

    /// Create a task
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, request: &TaskCreate) -> Result<Task> {
        let builder = self.api_request(Method::POST, "/api/tasks")?.json(request);
        self.send_json(builder).await
    }

    /// Fetch a single task by id
    ///
    /// GET /api/tasks/{id}
    pub async fn get_task(&self, task_id: &str) -> Result<Task> {
        let endpoint = format!("/api/tasks/{}", task_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Apply a partial update to a task
    ///
    /// PATCH /api/tasks/{id}
    pub async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<Task> {
        let endpoint = format!("/api/tasks/{}", task_id);
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(update);
        self.send_json(builder).await
    }

    /// Change a task's status, leaving every other field untouched
    ///
    /// PATCH /api/tasks/{id} with body `{"status": ...}`
    pub async fn update_status(&self, task_id: &str, status: TaskStatus) -> Result<Task> {
        let update = TaskUpdate {
            status: Some(status),
            ..TaskUpdate::default()
        };
        self.update_task(task_id, &update).await
    }

    /// Delete a task
    ///
    /// DELETE /api/tasks/{id} (204 on success)
    pub async fn delete_task(&self, task_id: &str) -> Result<()> {
        let endpoint = format!("/api/tasks/{}", task_id);
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_no_content(builder).await
    }
}
