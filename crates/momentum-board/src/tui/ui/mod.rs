/*
[INPUT]:  TUI app state for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: 2026-10-14 Add header, filter bar and board panels
*/

mod board;
mod filters;
mod header;
mod layout;
mod logs;

pub mod modal;

pub(in crate::tui) use board::draw_board;
pub(in crate::tui) use filters::draw_filters;
pub(in crate::tui) use header::draw_header;
pub(in crate::tui) use layout::draw_tabs;
pub(in crate::tui) use logs::draw_logs;
