/*
[INPUT]:  Crossterm key events
[OUTPUT]: Board navigation, filter toggles, and modal input routing
[POS]:    TUI event handling
[UPDATE]: 2026-10-14 Replace task control hotkeys with board navigation
[UPDATE]: 2026-10-15 Add filter toggles and avatar attach/remove actions
[UPDATE]: 2026-10-19 Cover attach errors after a failed validation
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use momentum_board::FilterKind;

use super::app::{ActiveModal, AppState};
use super::ui::modal::ModalAction;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    if app.active_modal.is_some() {
        handle_modal_key_event(app, key.code).await;
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => app.refresh_board().await,
        KeyCode::Char('n') => app.open_create_task().await,
        KeyCode::Char('e') => app.open_create_employee().await,
        KeyCode::Enter => app.open_selected_task().await,
        KeyCode::Tab => app.next_tab(),
        KeyCode::Left => app.move_column(-1),
        KeyCode::Right => app.move_column(1),
        KeyCode::Up => app.move_card(-1),
        KeyCode::Down => app.move_card(1),
        KeyCode::Char(ch @ '1'..='3') => {
            let index = ch as usize - '1' as usize;
            if let Some(kind) = FilterKind::from_index(index) {
                app.filters.toggle(kind);
            }
        }
        KeyCode::Esc => app.filters.blur(),
        _ => {}
    }
    false
}

async fn handle_modal_key_event(app: &mut AppState, key: KeyCode) {
    let action = match app.active_modal.as_mut() {
        Some(ActiveModal::CreateTask(modal)) => modal.handle_key(key),
        Some(ActiveModal::CreateEmployee(modal)) => modal.handle_key(key),
        Some(ActiveModal::TaskDetail(view)) => view.handle_key(key),
        None => return,
    };

    match action {
        ModalAction::Cancel => app.close_modal(),
        ModalAction::Submit => app.submit_active_modal(),
        ModalAction::Attach => app.attach_avatar().await,
        ModalAction::RemoveAttachment => app.remove_avatar(),
        ModalAction::None => {}
    }
}
