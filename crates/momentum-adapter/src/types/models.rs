/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for tasks, employees and lookup tables
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: 2026-10-14 Accept both nested references and flat *_id fields on Task
*/

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow stage of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: u64,
    pub name: String,
}

/// Task urgency classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Organisational grouping of employees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
}

impl Employee {
    /// "name surname", the label used in assignee pickers
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn effective_department_id(&self) -> Option<u64> {
        self.department
            .as_ref()
            .map(|department| department.id)
            .or(self.department_id)
    }
}

/// Task record as returned by `GET /tasks`, `GET /tasks/{id}` and `POST /tasks`
///
/// Reads return nested `status`/`priority`/`employee` objects while creation
/// echoes the flat `*_id` fields, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default)]
    pub total_comments: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Task {
    pub fn effective_status_id(&self) -> Option<u64> {
        self.status.as_ref().map(|status| status.id).or(self.status_id)
    }

    pub fn effective_priority_id(&self) -> Option<u64> {
        self.priority
            .as_ref()
            .map(|priority| priority.id)
            .or(self.priority_id)
    }

    pub fn effective_employee_id(&self) -> Option<u64> {
        self.employee
            .as_ref()
            .map(|employee| employee.id)
            .or(self.employee_id)
    }

    /// Calendar day of the deadline
    ///
    /// The API sends either `2024-05-01` or a full timestamp such as
    /// `2024-05-01T00:00:00.000000Z`; only the date prefix is significant.
    pub fn due_on(&self) -> Option<NaiveDate> {
        let raw = self.due_date.as_deref()?;
        let day = raw.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_with_nested_references() {
        let json = r#"{
            "id": 3,
            "name": "Fix login bug",
            "description": "Users cannot log in with Georgian passwords",
            "due_date": "2024-05-01T00:00:00.000000Z",
            "department": {"id": 2, "name": "IT"},
            "employee": {
                "id": 7,
                "name": "Nino",
                "surname": "Beridze",
                "avatar": "https://example.test/avatar.png",
                "department_id": 2
            },
            "status": {"id": 1, "name": "To do"},
            "priority": {"id": 2, "name": "Medium", "icon": "https://example.test/medium.svg"},
            "total_comments": 4
        }"#;

        let task: Task = serde_json::from_str(json).expect("task json");
        assert_eq!(task.effective_status_id(), Some(1));
        assert_eq!(task.effective_priority_id(), Some(2));
        assert_eq!(task.effective_employee_id(), Some(7));
        assert_eq!(task.total_comments, 4);
        assert_eq!(task.due_on(), NaiveDate::from_ymd_opt(2024, 5, 1));
        let employee = task.employee.expect("employee");
        assert_eq!(employee.full_name(), "Nino Beridze");
        assert_eq!(employee.effective_department_id(), Some(2));
    }

    #[test]
    fn test_task_with_flat_ids() {
        let json = r#"{
            "id": 10,
            "name": "Fix login bug",
            "description": "...",
            "due_date": "2024-05-01",
            "status_id": 1,
            "employee_id": 7,
            "priority_id": 2
        }"#;

        let task: Task = serde_json::from_str(json).expect("task json");
        assert_eq!(task.effective_status_id(), Some(1));
        assert_eq!(task.effective_priority_id(), Some(2));
        assert_eq!(task.effective_employee_id(), Some(7));
        assert_eq!(task.total_comments, 0);
        assert!(task.created_at.is_none());
    }

    #[test]
    fn test_due_on_ignores_garbage() {
        let task = Task {
            id: 1,
            name: "x".to_string(),
            description: None,
            due_date: Some("soon".to_string()),
            status: None,
            status_id: None,
            priority: None,
            priority_id: None,
            employee: None,
            employee_id: None,
            department: None,
            total_comments: 0,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(task.due_on(), None);
    }
}
