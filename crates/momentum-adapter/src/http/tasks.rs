/*
[INPUT]:  Task identifiers and task creation payloads
[OUTPUT]: Task lists (empty on failure), single task (None on failure), created task or error
[POS]:    HTTP layer - task endpoints
[UPDATE]: When adding new task endpoints or changing response format
*/

use reqwest::Method;
use tracing::{error, info};

use crate::http::{MomentumClient, Result};
use crate::types::{NewTaskRequest, Task};

impl MomentumClient {
    /// List all tasks
    ///
    /// GET /tasks
    pub async fn get_tasks(&self) -> Vec<Task> {
        self.fetch_or_default("tasks", "Failed to fetch tasks").await
    }

    /// Fetch a single task
    ///
    /// GET /tasks/{id}
    pub async fn get_task_by_id(&self, id: u64) -> Option<Task> {
        let endpoint = format!("tasks/{id}");
        let failure = format!("Failed to fetch task with ID {id}");
        let builder = match self.request(Method::GET, &endpoint) {
            Ok(builder) => builder,
            Err(err) => {
                error!(task_id = id, error = %err, "{failure}");
                return None;
            }
        };
        match self.send_json::<Task>(builder, &failure).await {
            Ok(task) => Some(task),
            Err(err) => {
                error!(task_id = id, error = %err, "{failure}");
                None
            }
        }
    }

    /// Create a task
    ///
    /// POST /tasks (JSON body)
    pub async fn create_task(&self, req: NewTaskRequest) -> Result<Task> {
        let builder = self.request(Method::POST, "tasks")?.json(&req);
        match self.send_json::<Task>(builder, "Failed to create task").await {
            Ok(task) => {
                info!(task_id = task.id, name = %task.name, "task created");
                Ok(task)
            }
            Err(err) => {
                error!(error = %err, "error creating task");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, MomentumClient, MomentumError};
    use crate::types::NewTaskRequest;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> MomentumClient {
        MomentumClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init")
        .with_credentials(Credentials::bearer("test-token"))
    }

    fn fix_login_bug() -> NewTaskRequest {
        NewTaskRequest {
            name: "Fix login bug".to_string(),
            description: "...".to_string(),
            due_date: "2024-05-01".to_string(),
            status_id: 1,
            employee_id: 7,
            priority_id: 2,
        }
    }

    #[tokio::test]
    async fn test_get_tasks() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "name": "Deploy app",
                    "due_date": "2022-08-22T00:00:00.000000Z",
                    "status": {"id": 2, "name": "In progress"},
                    "priority": {"id": 3, "name": "High"},
                    "total_comments": 8
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = client_for(&server).get_tasks().await;

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].effective_status_id(), Some(2));
        assert_eq!(tasks[0].total_comments, 8);
    }

    #[tokio::test]
    async fn test_get_tasks_falls_back_on_not_found() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client_for(&server).get_tasks().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_task_by_id() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/tasks/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": 5, "name": "Write docs", "status_id": 4}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = client_for(&server)
            .get_task_by_id(5)
            .await
            .expect("task 5 exists");
        assert_eq!(task.name, "Write docs");
        assert_eq!(task.effective_status_id(), Some(4));
    }

    #[tokio::test]
    async fn test_get_task_by_id_bare_body() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/tasks/6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 6, "name": "Review PR", "priority": {"id": 1, "name": "Low"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = client_for(&server)
            .get_task_by_id(6)
            .await
            .expect("task 6 exists");
        assert_eq!(task.effective_priority_id(), Some(1));
    }

    #[tokio::test]
    async fn test_get_task_by_id_missing_is_none() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/tasks/99"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "No query results for model [App\\Models\\Task] 99"
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client_for(&server).get_task_by_id(99).await.is_none());
    }

    #[tokio::test]
    async fn test_create_task_posts_json_body() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({
                "name": "Fix login bug",
                "description": "...",
                "due_date": "2024-05-01",
                "status_id": 1,
                "employee_id": 7,
                "priority_id": 2
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 10,
                "name": "Fix login bug",
                "description": "...",
                "due_date": "2024-05-01",
                "status_id": 1,
                "employee_id": 7,
                "priority_id": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = client_for(&server)
            .create_task(fix_login_bug())
            .await
            .expect("create_task failed");

        assert_eq!(task.id, 10);
        assert_eq!(task.effective_employee_id(), Some(7));
    }

    #[tokio::test]
    async fn test_create_task_surfaces_server_message() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "The due date field must be a date after today."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_task(fix_login_bug())
            .await
            .expect_err("422 must surface as an error");

        assert_eq!(err.to_string(), "The due date field must be a date after today.");
        assert_eq!(err.status(), Some(422));
    }

    #[tokio::test]
    async fn test_create_task_generic_message_without_body() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_task(fix_login_bug())
            .await
            .expect_err("500 must surface as an error");

        assert!(matches!(
            err,
            MomentumError::Api { status: 500, ref message } if message == "Failed to create task"
        ));
    }
}
