/*
[INPUT]:  Key codes from the crossterm poll thread
[OUTPUT]: Controller mutations; `true` when the operator asked to quit
[POS]:    Single keyboard dispatch point for the console
[UPDATE]: When adding hotkeys or changing modal key behavior
*/

use crossterm::event::KeyCode;

use super::ui::modal::{ModalAction, handle_create_key};
use crate::app::{ActiveModal, AppState, InputMode};

/// Handles key events for the console.
///
/// Returns `true` if quit is requested, `false` otherwise. An open dialog
/// captures all keys; search capture comes next; the hotkey map applies only
/// in normal mode.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.modal.is_some() {
        handle_modal_key_event(app, key);
        return false;
    }

    if app.input_mode == InputMode::Search {
        match key {
            KeyCode::Enter | KeyCode::Esc => app.exit_search(),
            KeyCode::Backspace => app.pop_query_char(),
            KeyCode::Char(ch) => app.push_query_char(ch),
            _ => {}
        }
        return false;
    }

    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('s') => app.cycle_site_filter(),
        KeyCode::Char('t') => app.cycle_status_filter(),
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Char('n') => app.open_create(),
        KeyCode::Char('d') => app.open_confirm_delete(),
        KeyCode::Char('u') => app.open_status_picker(),
        KeyCode::Char('v') => app.open_details(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        _ => {}
    }
    false
}

fn handle_modal_key_event(app: &mut AppState, key: KeyCode) {
    match &app.modal {
        Some(ActiveModal::Create) => match handle_create_key(&mut app.create_form, key) {
            ModalAction::Submit => app.submit_create(),
            ModalAction::Cancel => app.cancel_modal(),
            ModalAction::None => {}
        },
        Some(ActiveModal::ConfirmDelete { .. }) => match key {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_modal(),
            _ => {}
        },
        Some(ActiveModal::StatusPicker { .. }) => match key {
            KeyCode::Up => app.status_picker_move(-1),
            KeyCode::Down => app.status_picker_move(1),
            KeyCode::Enter => app.submit_status(),
            KeyCode::Esc => app.cancel_modal(),
            _ => {}
        },
        Some(ActiveModal::Details { .. }) => match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v') => {
                app.cancel_modal()
            }
            _ => {}
        },
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskservice_adapter::TaskServiceClient;
    use tokio::sync::mpsc;

    fn test_app() -> (AppState, mpsc::UnboundedReceiver<crate::app::AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        // port 9 is never listening; these tests only exercise routing
        let client = TaskServiceClient::new("http://127.0.0.1:9").expect("client");
        (AppState::new(client, tx), rx)
    }

    #[tokio::test]
    async fn quit_is_only_requested_in_normal_mode() {
        let (mut app, _rx) = test_app();
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));

        let (mut app, _rx) = test_app();
        app.enter_search();
        assert!(!handle_key_event(&mut app, KeyCode::Char('q')));
        assert_eq!(app.query, "q");

        let (mut app, _rx) = test_app();
        app.open_create();
        assert!(!handle_key_event(&mut app, KeyCode::Char('q')));
    }

    #[tokio::test]
    async fn search_keys_edit_the_query_and_exit_cleanly() {
        let (mut app, _rx) = test_app();
        handle_key_event(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        handle_key_event(&mut app, KeyCode::Char('n'));
        handle_key_event(&mut app, KeyCode::Char('e'));
        handle_key_event(&mut app, KeyCode::Backspace);
        assert_eq!(app.query, "n");
        assert!(app.modal.is_none(), "'n' must not open the create dialog");

        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.query, "n", "leaving search keeps the query applied");
    }

    #[test]
    fn escape_cancels_the_create_dialog() {
        let (mut app, _rx) = test_app();
        app.open_create();
        handle_key_event(&mut app, KeyCode::Char('x'));
        handle_key_event(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
        assert_eq!(app.create_form.name, "x", "cancel never clears the form");
    }

    #[test]
    fn declining_the_confirm_dialog_keeps_the_task() {
        let (mut app, _rx) = test_app();
        app.tasks = vec![sample_task()];
        app.table_state.select(Some(0));
        handle_key_event(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.modal, Some(ActiveModal::ConfirmDelete { .. })));

        handle_key_event(&mut app, KeyCode::Char('n'));
        assert!(app.modal.is_none());
        assert!(!app.loading, "declining must not issue a request");
    }

    fn sample_task() -> taskservice_adapter::Task {
        taskservice_adapter::Task {
            id: "t1".to_string(),
            name: "watcher".to_string(),
            url: "https://example.com".to_string(),
            site_type: taskservice_adapter::SiteType::Other,
            status: taskservice_adapter::TaskStatus::Created,
            criteria: serde_json::json!({}),
            created_at: "2026-03-01T00:00:00Z".to_string(),
            updated_at: "2026-03-01T00:00:00Z".to_string(),
        }
    }
}
