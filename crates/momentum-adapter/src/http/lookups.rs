/*
[INPUT]:  None (lookup tables take no parameters)
[OUTPUT]: Status, priority and department lists, empty on any failure
[POS]:    HTTP layer - lookup table endpoints
[UPDATE]: When adding new lookup endpoints or changing response format
*/

use crate::http::MomentumClient;
use crate::types::{Department, Priority, Status};

impl MomentumClient {
    /// List task statuses
    ///
    /// GET /statuses
    pub async fn get_statuses(&self) -> Vec<Status> {
        self.fetch_or_default("statuses", "Failed to fetch statuses")
            .await
    }

    /// List task priorities
    ///
    /// GET /priorities
    pub async fn get_priorities(&self) -> Vec<Priority> {
        self.fetch_or_default("priorities", "Failed to fetch priorities")
            .await
    }

    /// List departments
    ///
    /// GET /departments
    pub async fn get_departments(&self) -> Vec<Department> {
        self.fetch_or_default("departments", "Failed to fetch departments")
            .await
    }
}
