/*
[INPUT]:  CreateTaskForm state and key events
[OUTPUT]: Create task modal rendering and field edits applied to the form
[POS]:    TUI UI modal create task
[UPDATE]: 2026-10-14 Drive the modal from CreateTaskForm instead of local fields
*/

use crossterm::event::KeyCode;
use momentum_board::forms::task_form::{DESCRIPTION_HINT, NAME_HINT};
use momentum_board::forms::{CreateTaskForm, SelectOption};

use super::{Field, Hint, Modal, ModalAction, handle_modal_key};

const NAME: usize = 0;
const DESCRIPTION: usize = 1;
const EMPLOYEE: usize = 2;
const PRIORITY: usize = 3;
const STATUS: usize = 4;
const DUE_DATE: usize = 5;

const NO_EMPLOYEE: &str = "-- select employee --";

pub(in crate::tui) struct CreateTaskModal {
    form: CreateTaskForm,
    focus_index: usize,
    submission: Option<u64>,
}

impl CreateTaskModal {
    pub(in crate::tui) fn new(form: CreateTaskForm) -> Self {
        Self {
            form,
            focus_index: 0,
            submission: None,
        }
    }

    pub(in crate::tui) fn form(&self) -> &CreateTaskForm {
        &self.form
    }

    pub(in crate::tui) fn form_mut(&mut self) -> &mut CreateTaskForm {
        &mut self.form
    }

    /// Id of the create call this form is waiting on
    pub(in crate::tui) fn submission(&self) -> Option<u64> {
        self.submission
    }

    pub(in crate::tui) fn set_submission(&mut self, submission: Option<u64>) {
        self.submission = submission;
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        let draft = self.form.draft();

        let mut employee_options = vec![NO_EMPLOYEE.to_string()];
        employee_options.extend(self.form.employees().iter().map(|option| option.name.clone()));
        let employee_selected = draft
            .employee_id
            .and_then(|id| position_of(self.form.employees(), id))
            .map(|idx| idx + 1)
            .unwrap_or(0);

        let submit_label = if self.form.is_submitting() {
            "Submitting..."
        } else {
            "Create task"
        };

        Modal {
            title: String::from("Create new task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Title*"),
                    value: draft.name.clone(),
                    hints: Hint::length(NAME_HINT, self.form.name_hints()),
                },
                Field::TextInput {
                    label: String::from("Description"),
                    value: draft.description.clone(),
                    hints: Hint::length(DESCRIPTION_HINT, self.form.description_hints()),
                },
                Field::Select {
                    label: String::from("Assignee*"),
                    options: employee_options,
                    selected: employee_selected,
                },
                Field::Select {
                    label: String::from("Priority*"),
                    options: names(self.form.priorities()),
                    selected: position_of(self.form.priorities(), draft.priority_id).unwrap_or(0),
                },
                Field::Select {
                    label: String::from("Status*"),
                    options: names(self.form.statuses()),
                    selected: position_of(self.form.statuses(), draft.status_id).unwrap_or(0),
                },
                Field::TextInput {
                    label: String::from("Deadline (YYYY-MM-DD)"),
                    value: draft.due_date.clone(),
                    hints: vec![Hint {
                        text: String::from("date as YYYY-MM-DD"),
                        state: self.form.due_date_hint(),
                    }],
                },
                Field::Button {
                    label: String::from(submit_label),
                    action: ModalAction::Submit,
                    enabled: !self.form.is_submitting(),
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                    enabled: true,
                },
            ],
            error: self.form.error().map(str::to_string),
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal);
        action
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(NAME) {
            self.form.set_name(value.clone());
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(DESCRIPTION) {
            self.form.set_description(value.clone());
        }
        if let Some(Field::Select { selected, .. }) = modal.fields.get(EMPLOYEE) {
            let employee_id = selected
                .checked_sub(1)
                .and_then(|idx| self.form.employees().get(idx))
                .map(|option| option.id);
            self.form.set_employee(employee_id);
        }
        if let Some(Field::Select { selected, .. }) = modal.fields.get(PRIORITY) {
            if let Some(option) = self.form.priorities().get(*selected) {
                let id = option.id;
                self.form.set_priority(id);
            }
        }
        if let Some(Field::Select { selected, .. }) = modal.fields.get(STATUS) {
            if let Some(option) = self.form.statuses().get(*selected) {
                let id = option.id;
                self.form.set_status(id);
            }
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(DUE_DATE) {
            self.form.set_due_date(value.clone());
        }
    }
}

fn names(options: &[SelectOption]) -> Vec<String> {
    options.iter().map(|option| option.name.clone()).collect()
}

fn position_of(options: &[SelectOption], id: u64) -> Option<usize> {
    options.iter().position(|option| option.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use momentum_adapter::{Employee, Priority, Status};
    use momentum_board::forms::CreateTaskData;

    fn modal() -> CreateTaskModal {
        CreateTaskModal::new(CreateTaskForm::new(CreateTaskData {
            statuses: vec![
                Status {
                    id: 1,
                    name: "To do".to_string(),
                },
                Status {
                    id: 2,
                    name: "In progress".to_string(),
                },
            ],
            priorities: vec![
                Priority {
                    id: 1,
                    name: "Low".to_string(),
                    icon: None,
                },
                Priority {
                    id: 2,
                    name: "Medium".to_string(),
                    icon: None,
                },
            ],
            employees: vec![Employee {
                id: 7,
                name: "Nino".to_string(),
                surname: "Beridze".to_string(),
                avatar: None,
                department: None,
                department_id: None,
            }],
        }))
    }

    fn type_text(modal: &mut CreateTaskModal, text: &str) {
        for ch in text.chars() {
            modal.handle_key(KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_keys_fill_the_draft() {
        let mut modal = modal();
        type_text(&mut modal, "Fix login bug");
        modal.handle_key(KeyCode::Tab);
        type_text(&mut modal, "...");
        modal.handle_key(KeyCode::Tab);
        modal.handle_key(KeyCode::Down);
        modal.handle_key(KeyCode::Tab);
        modal.handle_key(KeyCode::Down);
        modal.handle_key(KeyCode::Tab);
        modal.handle_key(KeyCode::Tab);
        type_text(&mut modal, "2024-05-01");

        let draft = modal.form().draft();
        assert_eq!(draft.name, "Fix login bug");
        assert_eq!(draft.description, "...");
        assert_eq!(draft.employee_id, Some(7));
        assert_eq!(draft.priority_id, 2);
        assert_eq!(draft.status_id, 1);
        assert_eq!(draft.due_date, "2024-05-01");
    }

    #[test]
    fn test_assignee_placeholder_clears_selection() {
        let mut modal = modal();
        modal.focus_index = EMPLOYEE;
        modal.handle_key(KeyCode::Down);
        assert_eq!(modal.form().draft().employee_id, Some(7));
        modal.handle_key(KeyCode::Up);
        assert_eq!(modal.form().draft().employee_id, None);
    }

    #[test]
    fn test_submit_button_disabled_while_submitting() {
        let mut modal = modal();
        modal.form_mut().set_employee(Some(7));
        modal.form_mut().begin_submit().expect("submit");

        modal.focus_index = 6;
        assert_eq!(modal.handle_key(KeyCode::Enter), ModalAction::None);
        match &modal.to_modal().fields[6] {
            Field::Button { label, enabled, .. } => {
                assert_eq!(label, "Submitting...");
                assert!(!enabled);
            }
            _ => panic!("expected submit button"),
        }
    }
}
