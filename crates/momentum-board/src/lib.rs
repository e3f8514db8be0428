/*
[INPUT]:  Public API exports for momentum-board crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod api;
pub mod board;
pub mod config;
pub mod filters;
pub mod forms;

// Re-export main types for convenience
pub use api::BoardApi;
pub use board::{TaskBoard, TaskSource};
pub use config::BoardConfig;
pub use filters::{FilterKind, Filters};
pub use forms::{CreateTaskForm, EmployeeModal};
