/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod employees;
pub mod error;
pub mod lookups;
pub mod tasks;

pub use error::{MomentumError, Result};

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, MomentumClient};
