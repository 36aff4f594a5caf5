/*
[INPUT]:  Base URL of a locally running task service backend
[OUTPUT]: Console walkthrough of the task lifecycle endpoints
[POS]:    Examples - create/list/update/delete round trip
[UPDATE]: When adding new task endpoints
*/

use serde_json::json;
use taskservice_adapter::*;

/// Example: walk a task through its whole lifecycle
///
/// Expects a backend at http://localhost:8000 (see `DEFAULT_BASE_URL`).
#[tokio::main]
async fn main() {
    println!("=== TaskService Lifecycle Example ===\n");

    let client = match TaskServiceClient::new(DEFAULT_BASE_URL) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.health().await {
        Ok(health) => println!("✓ Backend is {}", health.status),
        Err(e) => {
            eprintln!("✗ Backend unreachable: {}", e);
            return;
        }
    }

    let request = TaskCreate {
        name: "docs example crawl".to_string(),
        url: "https://news.example/feed".to_string(),
        site_type: SiteType::News,
        criteria: json!({"depth": 1}),
    };
    println!("\nCreating task \"{}\"...", request.name);
    let task = match client.create_task(&request).await {
        Ok(task) => {
            println!("✓ Created with id {}", task.id);
            task
        }
        Err(e) => {
            eprintln!("✗ Create failed: {}", e);
            return;
        }
    };

    let filter = TaskFilter {
        q: Some("docs example".to_string()),
        ..TaskFilter::default()
    };
    println!("\nListing tasks matching \"docs example\"...");
    match client.list_tasks(&filter).await {
        Ok(page) => println!("✓ {} of {} tasks match", page.items.len(), page.total),
        Err(e) => println!("✗ List failed: {}", e),
    }

    println!("\nMarking {} as running...", task.id);
    match client.update_status(&task.id, TaskStatus::Running).await {
        Ok(updated) => println!("✓ Status is now {:?}", updated.status),
        Err(e) => println!("✗ Status change failed: {}", e),
    }

    println!("\nDeleting {}...", task.id);
    match client.delete_task(&task.id).await {
        Ok(()) => println!("✓ Deleted"),
        Err(e) => println!("✗ Delete failed: {}", e),
    }

    println!("\n✓ Lifecycle example complete");
}
