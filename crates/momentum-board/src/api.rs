/*
[INPUT]:  Momentum adapter client
[OUTPUT]: BoardApi trait used by forms and the board
[POS]:    Service seam between UI state and the HTTP adapter
[UPDATE]: When the board needs a new remote operation
*/

use async_trait::async_trait;
use momentum_adapter::{
    Department, Employee, MomentumClient, NewEmployeeRequest, NewTaskRequest, Priority, Status,
    Task,
};

/// Remote operations the board and its forms depend on
///
/// List and detail calls never fail: the adapter logs the failure and hands
/// back an empty value. Only the two create calls surface errors.
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn statuses(&self) -> Vec<Status>;

    async fn priorities(&self) -> Vec<Priority>;

    async fn departments(&self) -> Vec<Department>;

    async fn employees(&self) -> Vec<Employee>;

    async fn tasks(&self) -> Vec<Task>;

    async fn task_by_id(&self, id: u64) -> Option<Task>;

    async fn create_task(&self, req: NewTaskRequest) -> momentum_adapter::Result<Task>;

    async fn create_employee(
        &self,
        req: NewEmployeeRequest,
    ) -> momentum_adapter::Result<Employee>;
}

#[async_trait]
impl BoardApi for MomentumClient {
    async fn statuses(&self) -> Vec<Status> {
        self.get_statuses().await
    }

    async fn priorities(&self) -> Vec<Priority> {
        self.get_priorities().await
    }

    async fn departments(&self) -> Vec<Department> {
        self.get_departments().await
    }

    async fn employees(&self) -> Vec<Employee> {
        self.get_employees().await
    }

    async fn tasks(&self) -> Vec<Task> {
        self.get_tasks().await
    }

    async fn task_by_id(&self, id: u64) -> Option<Task> {
        self.get_task_by_id(id).await
    }

    async fn create_task(&self, req: NewTaskRequest) -> momentum_adapter::Result<Task> {
        MomentumClient::create_task(self, req).await
    }

    async fn create_employee(
        &self,
        req: NewEmployeeRequest,
    ) -> momentum_adapter::Result<Employee> {
        MomentumClient::create_employee(self, req).await
    }
}
