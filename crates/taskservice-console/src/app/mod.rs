/*
[INPUT]:  Adapter client, operator key actions, finished-request events
[OUTPUT]: AppState as the single owner of all mutable UI state
[POS]:    Controller layer - filter/reload/mutation protocols and sequencing
[UPDATE]: When adding operator actions or changing the reload contract
*/

pub mod form;

use ratatui::widgets::TableState;
use tokio::sync::mpsc;
use tracing::debug;

use taskservice_adapter::{
    RequestError, SiteType, Task, TaskFilter, TaskPage, TaskServiceClient, TaskStatus,
};

use crate::labels::{SITE_TYPE_OPTIONS, STATUS_OPTIONS, status_label};
use form::TaskForm;

/// Fixed page window requested from the backend (its cap is 200)
pub const PAGE_LIMIT: u32 = 50;

const BUSY_MESSAGE: &str = "request in flight, try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tasks,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

#[derive(Debug)]
pub enum ActiveModal {
    Create,
    ConfirmDelete { task_id: String, task_name: String },
    StatusPicker { task_id: String, cursor: usize },
    Details { task: Task },
}

/// Completion of a spawned backend request, fed back into `handle_event`
#[derive(Debug)]
pub enum AppEvent {
    ReloadFinished {
        seq: u64,
        result: Result<TaskPage, RequestError>,
    },
    CreateFinished {
        result: Result<Task, RequestError>,
    },
    DeleteFinished {
        result: Result<(), RequestError>,
    },
    StatusFinished {
        result: Result<Task, RequestError>,
    },
    DetailsFinished {
        result: Result<Task, RequestError>,
    },
}

/// Single source of truth for the console. Every backend call is spawned
/// and reports back through the event channel; the displayed task list is
/// only ever replaced by a reload, never patched locally after a mutation.
pub struct AppState {
    client: TaskServiceClient,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    pub tasks: Vec<Task>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
    pub site_filter: Option<SiteType>,
    pub status_filter: Option<TaskStatus>,
    pub create_form: TaskForm,
    pub current_tab: Tab,
    pub input_mode: InputMode,
    pub table_state: TableState,
    pub modal: Option<ActiveModal>,
    pub status_message: String,
    reload_seq: u64,
}

impl AppState {
    pub fn new(client: TaskServiceClient, events_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            client,
            events_tx,
            tasks: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            query: String::new(),
            site_filter: None,
            status_filter: None,
            create_form: TaskForm::new(),
            current_tab: Tab::Tasks,
            input_mode: InputMode::Normal,
            table_state,
            modal: None,
            status_message: "Ready".to_string(),
            reload_seq: 0,
        }
    }

    /// Filter derived from the UI inputs: trimmed query (empty means
    /// absent), optional selectors, fixed page window.
    pub fn effective_filter(&self) -> TaskFilter {
        let q = self.query.trim();
        TaskFilter {
            q: if q.is_empty() { None } else { Some(q.to_string()) },
            site_type: self.site_filter,
            status: self.status_filter,
            limit: Some(PAGE_LIMIT),
            offset: Some(0),
        }
    }

    /// Issue a list reload tagged with a fresh sequence number. Results of
    /// previously issued reloads become stale the moment this bumps the
    /// counter, regardless of arrival order.
    pub fn request_reload(&mut self) {
        self.reload_seq += 1;
        self.loading = true;
        self.error = None;
        let seq = self.reload_seq;
        let filter = self.effective_filter();
        debug!(seq, "issuing task reload");
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.list_tasks(&filter).await;
            let _ = tx.send(AppEvent::ReloadFinished { seq, result });
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReloadFinished { seq, result } => {
                if seq != self.reload_seq {
                    // a newer reload owns the list and the loading flag
                    debug!(seq, latest = self.reload_seq, "discarding stale reload");
                    return;
                }
                self.loading = false;
                match result {
                    Ok(page) => {
                        self.tasks = page.items;
                        self.total = page.total;
                        self.clamp_selection();
                    }
                    Err(err) => self.error = Some(err.to_string()),
                }
            }
            AppEvent::CreateFinished { result } => match result {
                Ok(task) => {
                    self.status_message = format!("task created: {}", task.name);
                    self.create_form = TaskForm::new();
                    self.modal = None;
                    self.request_reload();
                }
                Err(err) => {
                    // keep the dialog open with every entered value intact
                    self.loading = false;
                    self.error = Some(err.to_string());
                }
            },
            AppEvent::DeleteFinished { result } => match result {
                Ok(()) => {
                    self.status_message = "task deleted".to_string();
                    self.request_reload();
                }
                Err(err) => {
                    self.loading = false;
                    self.error = Some(err.to_string());
                }
            },
            AppEvent::StatusFinished { result } => match result {
                Ok(task) => {
                    self.status_message = format!("status updated: {}", status_label(task.status));
                    self.request_reload();
                }
                Err(err) => {
                    self.loading = false;
                    self.error = Some(err.to_string());
                }
            },
            AppEvent::DetailsFinished { result } => {
                self.loading = false;
                match result {
                    Ok(task) => self.modal = Some(ActiveModal::Details { task }),
                    Err(err) => self.error = Some(err.to_string()),
                }
            }
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let idx = self.table_state.selected()?;
        self.tasks.get(idx)
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (self.tasks.len() - 1) as isize) as usize;
        self.table_state.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= self.tasks.len() {
                self.table_state.select(Some(self.tasks.len().saturating_sub(1)));
            }
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Tasks => Tab::Logs,
            Tab::Logs => Tab::Tasks,
        };
    }

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
        self.request_reload();
    }

    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.request_reload();
        }
    }

    pub fn cycle_site_filter(&mut self) {
        self.site_filter = cycle(self.site_filter, &SITE_TYPE_OPTIONS);
        self.request_reload();
    }

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = cycle(self.status_filter, &STATUS_OPTIONS);
        self.request_reload();
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.site_filter = None;
        self.status_filter = None;
        self.request_reload();
    }

    pub fn open_create(&mut self) {
        self.modal = Some(ActiveModal::Create);
    }

    /// Validate locally, then spawn the create. A validation failure makes
    /// no backend call and leaves the dialog untouched.
    pub fn submit_create(&mut self) {
        if self.loading {
            self.status_message = BUSY_MESSAGE.to_string();
            return;
        }
        self.error = None;
        let request = match self.create_form.to_request() {
            Ok(request) => request,
            Err(message) => {
                self.error = Some(message);
                return;
            }
        };
        self.loading = true;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.create_task(&request).await;
            let _ = tx.send(AppEvent::CreateFinished { result });
        });
    }

    pub fn open_confirm_delete(&mut self) {
        let (task_id, task_name) = match self.selected_task() {
            Some(task) => (task.id.clone(), task.name.clone()),
            None => {
                self.status_message = "no task selected".to_string();
                return;
            }
        };
        self.modal = Some(ActiveModal::ConfirmDelete { task_id, task_name });
    }

    /// Spawn the delete the confirmation dialog was opened for.
    pub fn confirm_delete(&mut self) {
        if self.loading {
            self.status_message = BUSY_MESSAGE.to_string();
            return;
        }
        let task_id = match &self.modal {
            Some(ActiveModal::ConfirmDelete { task_id, .. }) => task_id.clone(),
            _ => return,
        };
        self.modal = None;
        self.error = None;
        self.loading = true;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.delete_task(&task_id).await;
            let _ = tx.send(AppEvent::DeleteFinished { result });
        });
    }

    pub fn open_status_picker(&mut self) {
        let (task_id, status) = match self.selected_task() {
            Some(task) => (task.id.clone(), task.status),
            None => {
                self.status_message = "no task selected".to_string();
                return;
            }
        };
        let cursor = STATUS_OPTIONS.iter().position(|s| *s == status).unwrap_or(0);
        self.modal = Some(ActiveModal::StatusPicker { task_id, cursor });
    }

    pub fn status_picker_move(&mut self, delta: isize) {
        if let Some(ActiveModal::StatusPicker { cursor, .. }) = &mut self.modal {
            let next = (*cursor as isize + delta).clamp(0, (STATUS_OPTIONS.len() - 1) as isize);
            *cursor = next as usize;
        }
    }

    /// Spawn the status change for the picker's cursor position. The table
    /// keeps showing the last confirmed snapshot until the reload lands.
    pub fn submit_status(&mut self) {
        if self.loading {
            self.status_message = BUSY_MESSAGE.to_string();
            return;
        }
        let (task_id, status) = match &self.modal {
            Some(ActiveModal::StatusPicker { task_id, cursor }) => {
                match STATUS_OPTIONS.get(*cursor) {
                    Some(status) => (task_id.clone(), *status),
                    None => return,
                }
            }
            _ => return,
        };
        self.modal = None;
        self.error = None;
        self.loading = true;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.update_status(&task_id, status).await;
            let _ = tx.send(AppEvent::StatusFinished { result });
        });
    }

    /// Fetch the selected task and open the read-only details dialog.
    pub fn open_details(&mut self) {
        if self.loading {
            self.status_message = BUSY_MESSAGE.to_string();
            return;
        }
        let task_id = match self.selected_task() {
            Some(task) => task.id.clone(),
            None => {
                self.status_message = "no task selected".to_string();
                return;
            }
        };
        self.error = None;
        self.loading = true;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.get_task(&task_id).await;
            let _ = tx.send(AppEvent::DetailsFinished { result });
        });
    }

    /// Close the active dialog without touching anything else.
    pub fn cancel_modal(&mut self) {
        self.modal = None;
    }
}

fn cycle<T: Copy + PartialEq>(current: Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().copied(),
        Some(value) => match options.iter().position(|o| *o == value) {
            Some(i) if i + 1 < options.len() => Some(options[i + 1]),
            _ => None,
        },
    }
}
