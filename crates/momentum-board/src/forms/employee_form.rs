/*
[INPUT]:  Departments from BoardApi, field edits, avatar image file on disk
[OUTPUT]: Validated NewEmployeeRequest, one create_employee call, reset-on-close modal
[POS]:    Form layer - add employee modal state machine
[UPDATE]: When changing employee fields, validation rules, or submit flow
*/

use std::path::Path;
use std::sync::OnceLock;

use momentum_adapter::{Avatar, Department, Employee, NewEmployeeRequest, image_mime_type};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{HintState, LengthHint, SelectOption, char_len};
use crate::api::BoardApi;

pub const NAME_HINT: LengthHint = LengthHint::new(2, 255);
pub const SURNAME_HINT: LengthHint = LengthHint::new(2, 255);

static LETTERS_ONLY: OnceLock<Regex> = OnceLock::new();

/// Latin and Georgian letters plus whitespace
fn letters_only() -> &'static Regex {
    LETTERS_ONLY.get_or_init(|| {
        Regex::new(r"^[a-zA-Zა-ჰ\s]+$").expect("letters-only regex should be valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeFormError {
    #[error("All fields are required")]
    MissingFields,
    #[error("First name must be at least 2 characters")]
    NameTooShort,
    #[error("Last name must be at least 2 characters")]
    SurnameTooShort,
    #[error("First name must contain only letters (no numbers or special characters)")]
    NameNotLetters,
    #[error("Last name must contain only letters (no numbers or special characters)")]
    SurnameNotLetters,
    #[error("Only image files can be used as an avatar: {0}")]
    UnsupportedAvatar(String),
    #[error("Could not read avatar file {path}: {reason}")]
    AvatarRead { path: String, reason: String },
    #[error("Employee is already being submitted")]
    AlreadySubmitting,
    /// Server or transport failure, carrying the message shown to the user
    #[error("{0}")]
    Api(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Name,
    Surname,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub surname: String,
    pub department_id: Option<u64>,
    pub avatar: Option<Avatar>,
}

/// What the modal shows in place of the selected image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarPreview {
    pub file_name: String,
    pub mime_type: String,
    pub size: usize,
}

impl AvatarPreview {
    fn of(avatar: &Avatar) -> Self {
        Self {
            file_name: avatar.file_name.clone(),
            mime_type: avatar.mime_type.clone(),
            size: avatar.size(),
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{} ({}, {:.1} KiB)",
            self.file_name,
            self.mime_type,
            self.size as f64 / 1024.0
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Touched {
    name: bool,
    surname: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeModal {
    open: bool,
    draft: EmployeeDraft,
    touched: Touched,
    preview: Option<AvatarPreview>,
    loading: bool,
    error: Option<String>,
    departments: Vec<SelectOption>,
}

impl EmployeeModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with an already fetched department list
    pub fn open_with(&mut self, departments: &[Department]) {
        self.open = true;
        self.departments = departments.iter().map(SelectOption::from).collect();
        debug!(departments = self.departments.len(), "employee modal opened");
    }

    /// Open and load departments; a failed fetch leaves the list empty
    pub async fn open(&mut self, api: &dyn BoardApi) {
        let departments = api.departments().await;
        self.open_with(&departments);
    }

    /// Clear every field and flag, release the preview, and close
    pub fn close(&mut self) {
        if self.preview.is_some() {
            debug!("avatar preview released");
        }
        self.draft = EmployeeDraft::default();
        self.touched = Touched::default();
        self.preview = None;
        self.loading = false;
        self.error = None;
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn departments(&self) -> &[SelectOption] {
        &self.departments
    }

    pub fn preview(&self) -> Option<&AvatarPreview> {
        self.preview.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Drop the last validation or server message
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_touched(&self, field: NameField) -> bool {
        match field {
            NameField::Name => self.touched.name,
            NameField::Surname => self.touched.surname,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.draft.surname = surname.into();
    }

    pub fn set_department(&mut self, department_id: Option<u64>) {
        self.draft.department_id = department_id;
    }

    /// Focus left a text field
    pub fn blur(&mut self, field: NameField) {
        match field {
            NameField::Name => self.touched.name = true,
            NameField::Surname => self.touched.surname = true,
        }
    }

    /// Min/max hint colors for a text field
    pub fn hints(&self, field: NameField) -> (HintState, HintState) {
        match field {
            NameField::Name => NAME_HINT.states(&self.draft.name, self.touched.name),
            NameField::Surname => SURNAME_HINT.states(&self.draft.surname, self.touched.surname),
        }
    }

    pub fn attach_avatar(&mut self, avatar: Avatar) {
        let preview = AvatarPreview::of(&avatar);
        debug!(file = %preview.file_name, size = preview.size, "avatar attached");
        self.preview = Some(preview);
        self.draft.avatar = Some(avatar);
    }

    /// Read an image file from disk and attach it
    pub async fn select_avatar_file(&mut self, path: &Path) -> Result<(), EmployeeFormError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        if image_mime_type(&file_name).is_none() {
            return Err(EmployeeFormError::UnsupportedAvatar(file_name));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| EmployeeFormError::AvatarRead {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        let avatar = Avatar::from_bytes(file_name.clone(), bytes)
            .ok_or(EmployeeFormError::UnsupportedAvatar(file_name))?;
        self.attach_avatar(avatar);
        Ok(())
    }

    pub fn remove_avatar(&mut self) {
        self.draft.avatar = None;
        if self.preview.take().is_some() {
            debug!("avatar preview released");
        }
    }

    /// Run the submit gate; the first failing rule wins
    pub fn validate(&mut self) -> Result<(), EmployeeFormError> {
        self.error = None;
        self.touched = Touched {
            name: true,
            surname: true,
        };

        let result = check_draft(&self.draft);
        if let Err(err) = result.as_ref() {
            self.error = Some(err.to_string());
        }
        result
    }

    /// Validate and move to the loading state
    pub fn begin_submit(&mut self) -> Result<NewEmployeeRequest, EmployeeFormError> {
        if self.loading {
            return Err(EmployeeFormError::AlreadySubmitting);
        }
        self.validate()?;

        let (Some(avatar), Some(department_id)) =
            (self.draft.avatar.clone(), self.draft.department_id)
        else {
            return Err(EmployeeFormError::MissingFields);
        };

        self.loading = true;
        Ok(NewEmployeeRequest {
            name: self.draft.name.clone(),
            surname: self.draft.surname.clone(),
            avatar,
            department_id,
        })
    }

    /// Record the result of the create call; success resets and closes
    pub fn complete_submit(
        &mut self,
        result: momentum_adapter::Result<Employee>,
    ) -> Result<Employee, EmployeeFormError> {
        self.loading = false;
        match result {
            Ok(employee) => {
                info!(employee_id = employee.id, "employee modal submitted");
                self.close();
                Ok(employee)
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "employee modal submit failed");
                self.error = Some(message.clone());
                Err(EmployeeFormError::Api(message))
            }
        }
    }

    pub async fn submit(&mut self, api: &dyn BoardApi) -> Result<Employee, EmployeeFormError> {
        let request = self.begin_submit()?;
        let result = api.create_employee(request).await;
        self.complete_submit(result)
    }
}

fn check_draft(draft: &EmployeeDraft) -> Result<(), EmployeeFormError> {
    if draft.name.is_empty()
        || draft.surname.is_empty()
        || draft.avatar.is_none()
        || draft.department_id.is_none()
    {
        return Err(EmployeeFormError::MissingFields);
    }
    if char_len(&draft.name) < NAME_HINT.min {
        return Err(EmployeeFormError::NameTooShort);
    }
    if char_len(&draft.surname) < SURNAME_HINT.min {
        return Err(EmployeeFormError::SurnameTooShort);
    }
    if !letters_only().is_match(&draft.name) {
        return Err(EmployeeFormError::NameNotLetters);
    }
    if !letters_only().is_match(&draft.surname) {
        return Err(EmployeeFormError::SurnameNotLetters);
    }
    Ok(())
}
