/*
[INPUT]:  EmployeeModal state, typed avatar path, and key events
[OUTPUT]: Add employee modal rendering and field edits applied to the form
[POS]:    TUI UI modal add employee
[UPDATE]: 2026-10-14 Add employee modal with avatar attach/remove rows
[UPDATE]: 2026-10-19 Newer file notice replaces a stale validation error
*/

use std::path::PathBuf;

use crossterm::event::KeyCode;
use momentum_board::forms::employee_form::{NAME_HINT, SURNAME_HINT};
use momentum_board::forms::{EmployeeModal, NameField};

use super::{Field, Hint, Modal, ModalAction, handle_modal_key};

const NAME: usize = 0;
const SURNAME: usize = 1;
const AVATAR_PATH: usize = 2;
const DEPARTMENT: usize = 6;

const NO_DEPARTMENT: &str = "Select department";

pub(in crate::tui) struct EmployeeModalView {
    form: EmployeeModal,
    avatar_path: String,
    notice: Option<String>,
    focus_index: usize,
    submission: Option<u64>,
}

impl EmployeeModalView {
    pub(in crate::tui) fn new(form: EmployeeModal) -> Self {
        Self {
            form,
            avatar_path: String::new(),
            notice: None,
            focus_index: 0,
            submission: None,
        }
    }

    pub(in crate::tui) fn form(&self) -> &EmployeeModal {
        &self.form
    }

    pub(in crate::tui) fn form_mut(&mut self) -> &mut EmployeeModal {
        &mut self.form
    }

    /// Id of the create call this form is waiting on
    pub(in crate::tui) fn submission(&self) -> Option<u64> {
        self.submission
    }

    pub(in crate::tui) fn set_submission(&mut self, submission: Option<u64>) {
        self.submission = submission;
    }

    pub(in crate::tui) fn avatar_path(&self) -> PathBuf {
        PathBuf::from(self.avatar_path.trim())
    }

    /// File notice, e.g. a rejected photo; a new one replaces the form error
    pub(in crate::tui) fn set_notice(&mut self, notice: Option<String>) {
        if notice.is_some() {
            self.form.clear_error();
        }
        self.notice = notice;
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        let draft = self.form.draft();

        let mut department_options = vec![NO_DEPARTMENT.to_string()];
        department_options.extend(
            self.form
                .departments()
                .iter()
                .map(|option| option.name.clone()),
        );
        let department_selected = draft
            .department_id
            .and_then(|id| {
                self.form
                    .departments()
                    .iter()
                    .position(|option| option.id == id)
            })
            .map(|idx| idx + 1)
            .unwrap_or(0);

        let preview = self
            .form
            .preview()
            .map(|preview| preview.label())
            .unwrap_or_else(|| String::from("no photo selected"));
        let submit_label = if self.form.is_loading() {
            "Loading..."
        } else {
            "Add employee"
        };

        Modal {
            title: String::from("Add employee"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("First name*"),
                    value: draft.name.clone(),
                    hints: Hint::length(NAME_HINT, self.form.hints(NameField::Name)),
                },
                Field::TextInput {
                    label: String::from("Last name*"),
                    value: draft.surname.clone(),
                    hints: Hint::length(SURNAME_HINT, self.form.hints(NameField::Surname)),
                },
                Field::TextInput {
                    label: String::from("Photo file*"),
                    value: self.avatar_path.clone(),
                    hints: Vec::new(),
                },
                Field::Button {
                    label: String::from("Attach photo"),
                    action: ModalAction::Attach,
                    enabled: !self.avatar_path.trim().is_empty(),
                },
                Field::Info {
                    label: String::from("Photo"),
                    value: preview,
                },
                Field::Button {
                    label: String::from("Remove photo"),
                    action: ModalAction::RemoveAttachment,
                    enabled: self.form.preview().is_some(),
                },
                Field::Select {
                    label: String::from("Department*"),
                    options: department_options,
                    selected: department_selected,
                },
                Field::Button {
                    label: String::from(submit_label),
                    action: ModalAction::Submit,
                    enabled: !self.form.is_loading(),
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                    enabled: true,
                },
            ],
            error: self
                .form
                .error()
                .map(str::to_string)
                .or_else(|| self.notice.clone()),
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal);
        action
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        let previous_focus = self.focus_index;
        self.focus_index = modal.focus_index;
        if previous_focus != self.focus_index {
            match previous_focus {
                NAME => self.form.blur(NameField::Name),
                SURNAME => self.form.blur(NameField::Surname),
                _ => {}
            }
        }

        if let Some(Field::TextInput { value, .. }) = modal.fields.get(NAME) {
            self.form.set_name(value.clone());
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(SURNAME) {
            self.form.set_surname(value.clone());
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(AVATAR_PATH) {
            self.avatar_path = value.clone();
        }
        if let Some(Field::Select { selected, .. }) = modal.fields.get(DEPARTMENT) {
            let department_id = selected
                .checked_sub(1)
                .and_then(|idx| self.form.departments().get(idx))
                .map(|option| option.id);
            self.form.set_department(department_id);
        }
    }
}
