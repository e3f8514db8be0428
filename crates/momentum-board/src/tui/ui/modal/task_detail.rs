/*
[INPUT]:  Task fetched by id (or None)
[OUTPUT]: Read-only task detail modal
[POS]:    TUI UI modal task detail
[UPDATE]: 2026-10-15 Show GET /tasks/{id} result for the selected card
*/

use crossterm::event::KeyCode;
use momentum_adapter::Task;
use momentum_board::board::format_card_date;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) const TASK_NOT_FOUND: &str = "Task not found";

pub(in crate::tui) struct TaskDetailView {
    task_id: u64,
    task: Option<Task>,
}

impl TaskDetailView {
    pub(in crate::tui) fn new(task_id: u64, task: Option<Task>) -> Self {
        Self { task_id, task }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        let mut fields = match self.task.as_ref() {
            Some(task) => detail_rows(task),
            None => vec![info("Task", TASK_NOT_FOUND.to_string())],
        };
        fields.push(Field::Button {
            label: String::from("Close"),
            action: ModalAction::Cancel,
            enabled: true,
        });

        Modal {
            title: format!("Task #{}", self.task_id),
            focus_index: fields.len() - 1,
            fields,
            error: None,
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        handle_modal_key(&mut modal, key)
    }
}

fn info(label: &str, value: String) -> Field {
    Field::Info {
        label: label.to_string(),
        value,
    }
}

fn detail_rows(task: &Task) -> Vec<Field> {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| String::from("-"));

    vec![
        info("Title", task.name.clone()),
        info("Description", or_dash(task.description.clone())),
        info(
            "Status",
            or_dash(
                task.status
                    .as_ref()
                    .map(|status| status.name.clone())
                    .or_else(|| task.status_id.map(|id| format!("#{id}"))),
            ),
        ),
        info(
            "Priority",
            or_dash(
                task.priority
                    .as_ref()
                    .map(|priority| priority.name.clone())
                    .or_else(|| task.priority_id.map(|id| format!("#{id}"))),
            ),
        ),
        info(
            "Department",
            or_dash(task.department.as_ref().map(|department| department.name.clone())),
        ),
        info(
            "Assignee",
            or_dash(
                task.employee
                    .as_ref()
                    .map(|employee| employee.full_name())
                    .or_else(|| task.employee_id.map(|id| format!("#{id}"))),
            ),
        ),
        info("Deadline", or_dash(task.due_on().map(format_card_date))),
        info("Comments", task.total_comments.to_string()),
    ]
}
