/*
[INPUT]:  BoardApi handle, task source, log buffer
[OUTPUT]: Ratatui kanban board with create task / add employee modals
[POS]:    TUI module for the momentum-board binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log};
pub(crate) use runtime::LOG_BUFFER_CAPACITY;
