/*
[INPUT]:  Lookup records from BoardApi and user edits
[OUTPUT]: Form state machines for task creation and employee creation
[POS]:    Form layer - local draft state, validation, submission
[UPDATE]: When adding a form or a shared field helper
*/

pub mod employee_form;
pub mod task_form;

pub use employee_form::{AvatarPreview, EmployeeDraft, EmployeeFormError, EmployeeModal, NameField};
pub use task_form::{
    CreateTaskData, CreateTaskForm, FormPhase, Route, TaskDraft, TaskFormError, TaskSubmitOutcome,
};

use momentum_adapter::{Department, Employee, Priority, Status};

/// Entry of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: u64,
    pub name: String,
}

impl SelectOption {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<&Status> for SelectOption {
    fn from(status: &Status) -> Self {
        Self::new(status.id, status.name.clone())
    }
}

impl From<&Priority> for SelectOption {
    fn from(priority: &Priority) -> Self {
        Self::new(priority.id, priority.name.clone())
    }
}

impl From<&Department> for SelectOption {
    fn from(department: &Department) -> Self {
        Self::new(department.id, department.name.clone())
    }
}

impl From<&Employee> for SelectOption {
    fn from(employee: &Employee) -> Self {
        Self::new(employee.id, employee.full_name())
    }
}

/// Color state of a length hint under a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    Neutral,
    Valid,
    Invalid,
}

impl HintState {
    fn from_check(passed: bool) -> Self {
        if passed {
            HintState::Valid
        } else {
            HintState::Invalid
        }
    }
}

/// Min/max character count advertised under a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthHint {
    pub min: usize,
    pub max: usize,
}

impl LengthHint {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn min_met(&self, value: &str) -> bool {
        char_len(value) >= self.min
    }

    pub fn max_met(&self, value: &str) -> bool {
        char_len(value) <= self.max
    }

    pub fn min_label(&self) -> String {
        format!("min {} characters", self.min)
    }

    pub fn max_label(&self) -> String {
        format!("max {} characters", self.max)
    }

    /// Hint colors for `value`, neutral while the field is untouched and empty
    pub fn states(&self, value: &str, touched: bool) -> (HintState, HintState) {
        if !touched && value.is_empty() {
            return (HintState::Neutral, HintState::Neutral);
        }
        (
            HintState::from_check(self.min_met(value)),
            HintState::from_check(self.max_met(value)),
        )
    }
}

/// Length in characters, not bytes (Georgian letters are multi-byte)
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_georgian_letters_once() {
        assert_eq!(char_len("ნინო"), 4);
        assert_eq!("ნინო".len(), 12);
    }

    #[test]
    fn test_length_hint_states() {
        let hint = LengthHint::new(2, 5);
        assert_eq!(hint.states("", false), (HintState::Neutral, HintState::Neutral));
        assert_eq!(hint.states("", true), (HintState::Invalid, HintState::Valid));
        assert_eq!(hint.states("a", false), (HintState::Invalid, HintState::Valid));
        assert_eq!(hint.states("abcdef", true), (HintState::Valid, HintState::Invalid));
    }

    #[test]
    fn test_employee_option_uses_full_name() {
        let employee = Employee {
            id: 3,
            name: "Giorgi".to_string(),
            surname: "Kapanadze".to_string(),
            avatar: None,
            department: None,
            department_id: None,
        };
        assert_eq!(SelectOption::from(&employee), SelectOption::new(3, "Giorgi Kapanadze"));
    }
}
