/*
[INPUT]:  Statuses, priorities, employees (fetched concurrently) and field edits
[OUTPUT]: Validated NewTaskRequest, one create_task call, navigation outcome
[POS]:    Form layer - create task form state machine
[UPDATE]: When changing task fields, defaults, or submit flow
*/

use chrono::NaiveDate;
use momentum_adapter::{Employee, NewTaskRequest, Priority, Status, Task};
use thiserror::Error;
use tracing::{info, warn};

use super::{HintState, LengthHint, SelectOption};
use crate::api::BoardApi;

pub const NAME_HINT: LengthHint = LengthHint::new(3, 255);
pub const DESCRIPTION_HINT: LengthHint = LengthHint::new(3, 255);
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Where the app should go after a form completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    TaskList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSubmitOutcome {
    Navigate(Route),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskFormError {
    #[error("Please select an employee")]
    MissingEmployee,
    #[error("Task is already being submitted")]
    AlreadySubmitting,
    #[error("Task was already created")]
    AlreadySubmitted,
    /// Server or transport failure, carrying the message shown to the user
    #[error("{0}")]
    Api(String),
}

/// Lookup data the form is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskData {
    pub statuses: Vec<Status>,
    pub priorities: Vec<Priority>,
    pub employees: Vec<Employee>,
}

impl CreateTaskData {
    /// Fetch statuses, priorities and employees concurrently
    pub async fn load(api: &dyn BoardApi) -> Self {
        let (statuses, priorities, employees) =
            tokio::join!(api.statuses(), api.priorities(), api.employees());
        Self {
            statuses,
            priorities,
            employees,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub status_id: u64,
    pub priority_id: u64,
    pub employee_id: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct CreateTaskForm {
    statuses: Vec<SelectOption>,
    priorities: Vec<SelectOption>,
    employees: Vec<SelectOption>,
    draft: TaskDraft,
    phase: FormPhase,
    error: Option<String>,
}

impl CreateTaskForm {
    /// Build the form; empty status or priority lists fall back to the
    /// standard options so the selects are never empty
    pub fn new(data: CreateTaskData) -> Self {
        let statuses = if data.statuses.is_empty() {
            fallback_statuses()
        } else {
            data.statuses.iter().map(SelectOption::from).collect()
        };
        let priorities = if data.priorities.is_empty() {
            fallback_priorities()
        } else {
            data.priorities.iter().map(SelectOption::from).collect()
        };
        let employees = data.employees.iter().map(SelectOption::from).collect();

        // Defaults come from the fetched lists, not the fallbacks
        let draft = TaskDraft {
            name: String::new(),
            description: String::new(),
            due_date: String::new(),
            status_id: data.statuses.first().map(|status| status.id).unwrap_or(1),
            priority_id: data
                .priorities
                .first()
                .map(|priority| priority.id)
                .unwrap_or(1),
            employee_id: None,
        };

        Self {
            statuses,
            priorities,
            employees,
            draft,
            phase: FormPhase::Editing,
            error: None,
        }
    }

    pub fn statuses(&self) -> &[SelectOption] {
        &self.statuses
    }

    pub fn priorities(&self) -> &[SelectOption] {
        &self.priorities
    }

    pub fn employees(&self) -> &[SelectOption] {
        &self.employees
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.draft.due_date = due_date.into();
    }

    pub fn set_status(&mut self, status_id: u64) {
        self.draft.status_id = status_id;
    }

    pub fn set_priority(&mut self, priority_id: u64) {
        self.draft.priority_id = priority_id;
    }

    pub fn set_employee(&mut self, employee_id: Option<u64>) {
        self.draft.employee_id = employee_id;
    }

    pub fn name_hints(&self) -> (HintState, HintState) {
        NAME_HINT.states(&self.draft.name, false)
    }

    pub fn description_hints(&self) -> (HintState, HintState) {
        DESCRIPTION_HINT.states(&self.draft.description, false)
    }

    /// Neutral while empty; never blocks submission
    pub fn due_date_hint(&self) -> HintState {
        if self.draft.due_date.is_empty() {
            return HintState::Neutral;
        }
        match NaiveDate::parse_from_str(&self.draft.due_date, DUE_DATE_FORMAT) {
            Ok(_) => HintState::Valid,
            Err(_) => HintState::Invalid,
        }
    }

    /// Check the assignee gate and move to `Submitting`
    pub fn begin_submit(&mut self) -> Result<NewTaskRequest, TaskFormError> {
        match self.phase {
            FormPhase::Submitting => return Err(TaskFormError::AlreadySubmitting),
            FormPhase::Succeeded => return Err(TaskFormError::AlreadySubmitted),
            FormPhase::Editing => {}
        }
        self.error = None;

        let Some(employee_id) = self.draft.employee_id else {
            let err = TaskFormError::MissingEmployee;
            self.error = Some(err.to_string());
            return Err(err);
        };

        self.phase = FormPhase::Submitting;
        Ok(NewTaskRequest {
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            due_date: self.draft.due_date.clone(),
            status_id: self.draft.status_id,
            employee_id,
            priority_id: self.draft.priority_id,
        })
    }

    /// Record the result of the create call started by [`Self::begin_submit`]
    pub fn complete_submit(
        &mut self,
        result: momentum_adapter::Result<Task>,
    ) -> Result<TaskSubmitOutcome, TaskFormError> {
        match result {
            Ok(task) => {
                self.phase = FormPhase::Succeeded;
                info!(task_id = task.id, "task form submitted");
                Ok(TaskSubmitOutcome::Navigate(Route::TaskList))
            }
            Err(err) => {
                self.phase = FormPhase::Editing;
                let message = err.to_string();
                warn!(error = %message, "task form submit failed");
                self.error = Some(message.clone());
                Err(TaskFormError::Api(message))
            }
        }
    }

    pub async fn submit(
        &mut self,
        api: &dyn BoardApi,
    ) -> Result<TaskSubmitOutcome, TaskFormError> {
        let request = self.begin_submit()?;
        let result = api.create_task(request).await;
        self.complete_submit(result)
    }
}

fn fallback_statuses() -> Vec<SelectOption> {
    vec![
        SelectOption::new(1, "To do"),
        SelectOption::new(2, "In progress"),
        SelectOption::new(3, "Ready for testing"),
        SelectOption::new(4, "Done"),
    ]
}

fn fallback_priorities() -> Vec<SelectOption> {
    vec![
        SelectOption::new(1, "Low"),
        SelectOption::new(2, "Medium"),
        SelectOption::new(3, "High"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use momentum_adapter::MomentumError;

    fn data() -> CreateTaskData {
        CreateTaskData {
            statuses: vec![
                Status {
                    id: 5,
                    name: "Backlog".to_string(),
                },
                Status {
                    id: 6,
                    name: "Doing".to_string(),
                },
            ],
            priorities: vec![Priority {
                id: 9,
                name: "Urgent".to_string(),
                icon: None,
            }],
            employees: vec![Employee {
                id: 7,
                name: "Nino".to_string(),
                surname: "Beridze".to_string(),
                avatar: None,
                department: None,
                department_id: None,
            }],
        }
    }

    fn created(id: u64) -> Task {
        serde_json::from_value(serde_json::json!({"id": id, "name": "Fix login bug"}))
            .expect("task")
    }

    #[test]
    fn test_defaults_from_first_fetched_options() {
        let form = CreateTaskForm::new(data());
        assert_eq!(form.draft().status_id, 5);
        assert_eq!(form.draft().priority_id, 9);
        assert_eq!(form.draft().employee_id, None);
        assert_eq!(form.employees()[0].name, "Nino Beridze");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_empty_lookups_use_fallback_options() {
        let form = CreateTaskForm::new(CreateTaskData::default());
        assert_eq!(form.statuses().len(), 4);
        assert_eq!(form.priorities().len(), 3);
        assert!(form.employees().is_empty());
        assert_eq!(form.draft().status_id, 1);
        assert_eq!(form.draft().priority_id, 1);
    }

    #[test]
    fn test_missing_employee_blocks_submit() {
        let mut form = CreateTaskForm::new(data());
        form.set_name("Fix login bug");
        form.set_description("Long enough");
        form.set_due_date("2024-05-01");

        let err = form.begin_submit().expect_err("no employee selected");
        assert_eq!(err, TaskFormError::MissingEmployee);
        assert_eq!(form.error(), Some("Please select an employee"));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_hints_never_block_submit() {
        let mut form = CreateTaskForm::new(data());
        form.set_name("x");
        form.set_due_date("tomorrow");
        form.set_employee(Some(7));

        assert_eq!(form.name_hints().0, HintState::Invalid);
        assert_eq!(form.due_date_hint(), HintState::Invalid);
        let request = form.begin_submit().expect("hints are advisory");
        assert_eq!(request.name, "x");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_double_submit_rejected_while_submitting() {
        let mut form = CreateTaskForm::new(data());
        form.set_employee(Some(7));
        form.begin_submit().expect("first submit");
        assert_eq!(form.begin_submit(), Err(TaskFormError::AlreadySubmitting));
    }

    #[test]
    fn test_failure_returns_to_editing_with_message() {
        let mut form = CreateTaskForm::new(data());
        form.set_employee(Some(7));
        form.begin_submit().expect("submit");

        let result = form.complete_submit(Err(MomentumError::Api {
            status: 422,
            message: "The name field is required.".to_string(),
        }));

        assert_eq!(
            result,
            Err(TaskFormError::Api("The name field is required.".to_string()))
        );
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.error(), Some("The name field is required."));
        assert_eq!(form.draft().employee_id, Some(7));
    }

    #[test]
    fn test_success_navigates_to_task_list() {
        let mut form = CreateTaskForm::new(data());
        form.set_employee(Some(7));
        form.begin_submit().expect("submit");

        let outcome = form.complete_submit(Ok(created(10)));
        assert_eq!(outcome, Ok(TaskSubmitOutcome::Navigate(Route::TaskList)));
        assert_eq!(form.phase(), FormPhase::Succeeded);
        assert_eq!(form.begin_submit(), Err(TaskFormError::AlreadySubmitted));
    }

    #[test]
    fn test_due_date_hint() {
        let mut form = CreateTaskForm::new(data());
        assert_eq!(form.due_date_hint(), HintState::Neutral);
        form.set_due_date("2024-05-01");
        assert_eq!(form.due_date_hint(), HintState::Valid);
    }
}
