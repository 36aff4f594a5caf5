/*
[INPUT]:  TaskForm buffers from the controller
[OUTPUT]: Create-task dialog fields and key handling
[POS]:    TUI UI modal for creating a task
[UPDATE]: When adding form fields or changing field order
*/

use crossterm::event::KeyCode;

use crate::app::form::TaskForm;
use crate::labels::{SITE_TYPE_OPTIONS, site_type_label};

use super::{Field, Modal, ModalAction, handle_modal_key};

// field order: name, url, site select, criteria, create, cancel
const FIELD_NAME: usize = 0;
const FIELD_URL: usize = 1;
const FIELD_SITE: usize = 2;
const FIELD_CRITERIA: usize = 3;

pub(in crate::tui) fn create_modal(form: &TaskForm) -> Modal {
    let site_options = SITE_TYPE_OPTIONS
        .iter()
        .map(|site| site_type_label(*site).to_string())
        .collect();

    Modal {
        title: String::from("New Task"),
        focus_index: form.focused_field,
        fields: vec![
            Field::TextInput {
                label: String::from("Name"),
                value: form.name.clone(),
            },
            Field::TextInput {
                label: String::from("URL"),
                value: form.url.clone(),
            },
            Field::Select {
                label: String::from("Site"),
                options: site_options,
                selected: form.site_type_index,
            },
            Field::TextInput {
                label: String::from("Criteria (JSON)"),
                value: form.criteria_text.clone(),
            },
            Field::Button {
                label: String::from("Create"),
                action: ModalAction::Submit,
            },
            Field::Button {
                label: String::from("Cancel"),
                action: ModalAction::Cancel,
            },
        ],
        error: None,
    }
}

/// Route a key through the shared modal machinery and write the edited
/// field values back into the form buffers.
pub(in crate::tui) fn handle_create_key(form: &mut TaskForm, key: KeyCode) -> ModalAction {
    let mut modal = create_modal(form);
    let action = handle_modal_key(&mut modal, key);
    apply_modal_state(form, &modal);
    action
}

fn apply_modal_state(form: &mut TaskForm, modal: &Modal) {
    form.focused_field = modal.focus_index;
    if let Some(Field::TextInput { value, .. }) = modal.fields.get(FIELD_NAME) {
        form.name = value.clone();
    }
    if let Some(Field::TextInput { value, .. }) = modal.fields.get(FIELD_URL) {
        form.url = value.clone();
    }
    if let Some(Field::Select { selected, .. }) = modal.fields.get(FIELD_SITE) {
        form.site_type_index = *selected;
    }
    if let Some(Field::TextInput { value, .. }) = modal.fields.get(FIELD_CRITERIA) {
        form.criteria_text = value.clone();
    }
}
