/*
[INPUT]:  Employee creation payload (text fields + avatar image)
[OUTPUT]: Employee list (empty on failure) and created employee or error
[POS]:    HTTP layer - employee endpoints
[UPDATE]: When adding new employee endpoints or changing multipart layout
*/

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::{error, info};

use crate::http::{MomentumClient, MomentumError, Result};
use crate::types::{Employee, NewEmployeeRequest};

impl MomentumClient {
    /// List employees
    ///
    /// GET /employees
    pub async fn get_employees(&self) -> Vec<Employee> {
        self.fetch_or_default("employees", "Failed to fetch employees")
            .await
    }

    /// Create an employee
    ///
    /// POST /employees (multipart: name, surname, avatar, department_id)
    pub async fn create_employee(&self, req: NewEmployeeRequest) -> Result<Employee> {
        let NewEmployeeRequest {
            name,
            surname,
            avatar,
            department_id,
        } = req;

        let avatar_part = Part::bytes(avatar.bytes)
            .file_name(avatar.file_name)
            .mime_str(&avatar.mime_type)?;
        let form = Form::new()
            .text("name", name)
            .text("surname", surname)
            .part("avatar", avatar_part)
            .text("department_id", department_id.to_string());

        let builder = self.request(Method::POST, "employees")?.multipart(form);
        match self
            .send_json::<Employee>(builder, "Failed to create employee")
            .await
        {
            Ok(employee) => {
                info!(employee_id = employee.id, "employee created");
                Ok(employee)
            }
            Err(MomentumError::Api { status, message }) => {
                error!(status, server_message = %message, "error creating employee");
                Err(MomentumError::Api {
                    status,
                    message: format!("Error {status}: failed to create employee"),
                })
            }
            Err(err) => {
                error!(error = %err, "error creating employee");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, MomentumClient, MomentumError};
    use crate::types::{Avatar, NewEmployeeRequest};
    use wiremock::matchers::{header, header_regex, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn client_for(server: &MockServer) -> MomentumClient {
        MomentumClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init")
        .with_credentials(Credentials::bearer("test-token"))
    }

    fn request() -> NewEmployeeRequest {
        NewEmployeeRequest {
            name: "ნინო".to_string(),
            surname: "Beridze".to_string(),
            avatar: Avatar::from_bytes("nino.png", b"\x89PNG fake".to_vec()).expect("avatar"),
            department_id: 3,
        }
    }

    #[tokio::test]
    async fn test_get_employees_enveloped() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"id": 7, "name": "Nino", "surname": "Beridze", "department": {"id": 3, "name": "IT"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let employees = client_for(&server).get_employees().await;

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].full_name(), "Nino Beridze");
        assert_eq!(employees[0].effective_department_id(), Some(3));
    }

    #[tokio::test]
    async fn test_get_employees_falls_back_on_unauthorized() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Unauthenticated."
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client_for(&server).get_employees().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_employee_sends_multipart() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/employees"))
            .and(header("authorization", "Bearer test-token"))
            .and(header_regex("content-type", "^multipart/form-data; boundary=.+"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 41,
                "name": "ნინო",
                "surname": "Beridze",
                "avatar": "https://example.test/storage/nino.png",
                "department_id": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let employee = client_for(&server)
            .create_employee(request())
            .await
            .expect("create_employee failed");
        assert_eq!(employee.id, 41);
        assert_eq!(employee.effective_department_id(), Some(3));

        let received: Vec<Request> = server.received_requests().await.expect("recorded requests");
        let body = String::from_utf8_lossy(&received[0].body);
        assert!(body.contains("name=\"name\""));
        assert!(body.contains("ნინო"));
        assert!(body.contains("name=\"surname\""));
        assert!(body.contains("name=\"avatar\"; filename=\"nino.png\""));
        assert!(body.contains("Content-Type: image/png"));
        assert!(body.contains("name=\"department_id\""));
    }

    #[tokio::test]
    async fn test_create_employee_error_carries_status() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "The avatar field must be an image."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_employee(request())
            .await
            .expect_err("422 must surface as an error");

        match err {
            MomentumError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Error 422: failed to create employee");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }
}
