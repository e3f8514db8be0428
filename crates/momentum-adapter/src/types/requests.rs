/*
[INPUT]:  Draft data collected by the task and employee forms
[OUTPUT]: Typed request payloads (JSON body for tasks, multipart parts for employees)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::path::Path;

use serde::{Deserialize, Serialize};

/// JSON body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskRequest {
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub status_id: u64,
    pub employee_id: u64,
    pub priority_id: u64,
}

/// Image file uploaded as the `avatar` multipart part
#[derive(Clone, PartialEq, Eq)]
pub struct Avatar {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Avatar {
    /// Build an avatar from a file name, inferring the image MIME type
    ///
    /// Returns `None` when the extension is not a known image type.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        let file_name = file_name.into();
        let mime_type = image_mime_type(&file_name)?;
        Some(Self {
            file_name,
            mime_type: mime_type.to_string(),
            bytes,
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for Avatar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Avatar")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// MIME type for an image file name, by extension
pub fn image_mime_type(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Multipart body of `POST /employees`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployeeRequest {
    pub name: String,
    pub surname: String,
    pub avatar: Avatar,
    pub department_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_request_json_shape() {
        let request = NewTaskRequest {
            name: "Fix login bug".to_string(),
            description: "...".to_string(),
            due_date: "2024-05-01".to_string(),
            status_id: 1,
            employee_id: 7,
            priority_id: 2,
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Fix login bug",
                "description": "...",
                "due_date": "2024-05-01",
                "status_id": 1,
                "employee_id": 7,
                "priority_id": 2
            })
        );
    }

    #[test]
    fn test_image_mime_type_by_extension() {
        assert_eq!(image_mime_type("me.PNG"), Some("image/png"));
        assert_eq!(image_mime_type("/tmp/photo.jpeg"), Some("image/jpeg"));
        assert_eq!(image_mime_type("notes.txt"), None);
        assert_eq!(image_mime_type("no_extension"), None);
    }

    #[test]
    fn test_avatar_debug_hides_bytes() {
        let avatar = Avatar::from_bytes("me.png", vec![0; 2048]).expect("png avatar");
        let debug = format!("{avatar:?}");
        assert!(debug.contains("2048"));
        assert!(debug.contains("image/png"));
    }
}
