/*
[INPUT]:  Modal state, fields, and key events
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: 2026-10-14 Add length hints, info rows and disabled buttons to modal fields
[UPDATE]: 2026-10-15 Skip non-focusable rows and support Shift-Tab
*/

mod create_task;
mod employee;
mod task_detail;

pub(in crate::tui) use create_task::CreateTaskModal;
pub(in crate::tui) use employee::EmployeeModalView;
pub(in crate::tui) use task_detail::TaskDetailView;

use crossterm::event::KeyCode;
use momentum_board::forms::{HintState, LengthHint};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::runtime::border_style;

pub(in crate::tui) struct Modal {
    pub(in crate::tui) title: String,
    pub(in crate::tui) focus_index: usize,
    pub(in crate::tui) fields: Vec<Field>,
    pub(in crate::tui) error: Option<String>,
}

pub(in crate::tui) struct Hint {
    pub(super) text: String,
    pub(super) state: HintState,
}

impl Hint {
    pub(super) fn length(hint: LengthHint, states: (HintState, HintState)) -> Vec<Hint> {
        vec![
            Hint {
                text: hint.min_label(),
                state: states.0,
            },
            Hint {
                text: hint.max_label(),
                state: states.1,
            },
        ]
    }
}

pub(in crate::tui) enum Field {
    TextInput {
        label: String,
        value: String,
        hints: Vec<Hint>,
    },
    Select {
        label: String,
        options: Vec<String>,
        selected: usize,
    },
    Button {
        label: String,
        action: ModalAction,
        enabled: bool,
    },
    /// Read-only row; never takes focus
    Info { label: String, value: String },
}

impl Field {
    fn is_focusable(&self) -> bool {
        !matches!(self, Field::Info { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Cancel,
    Attach,
    RemoveAttachment,
    None,
}

pub(in crate::tui) fn hint_style(state: HintState) -> Style {
    match state {
        HintState::Neutral => Style::default().fg(Color::DarkGray),
        HintState::Valid => Style::default().fg(Color::LightGreen),
        HintState::Invalid => Style::default().fg(Color::LightRed),
    }
}

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, modal: &Modal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(modal.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = modal.error.as_deref() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    for (index, field) in modal.fields.iter().enumerate() {
        let focused = index == modal.focus_index;
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        match field {
            Field::TextInput {
                label,
                value,
                hints,
            } => {
                let cursor = if focused { "_" } else { "" };
                lines.push(Line::from(Span::styled(
                    format!("{label}: {value}{cursor}"),
                    style,
                )));
                if !hints.is_empty() {
                    let spans = hints
                        .iter()
                        .map(|hint| {
                            Span::styled(format!("  ✔ {}", hint.text), hint_style(hint.state))
                        })
                        .collect::<Vec<_>>();
                    lines.push(Line::from(spans));
                }
            }
            Field::Select {
                label,
                options,
                selected,
            } => {
                let selected_value = options.get(*selected).map(String::as_str).unwrap_or("-");
                lines.push(Line::from(Span::styled(
                    format!("{label}: < {selected_value} >"),
                    style,
                )));
            }
            Field::Button { label, enabled, .. } => {
                let style = if *enabled {
                    style
                } else {
                    style.fg(Color::DarkGray)
                };
                lines.push(Line::from(Span::styled(format!("[{label}]"), style)));
            }
            Field::Info { label, value } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{label}: "),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(value.clone()),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn step_focus(modal: &mut Modal, forward: bool) {
    let len = modal.fields.len();
    if len == 0 {
        return;
    }
    let mut index = modal.focus_index;
    for _ in 0..len {
        index = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        if modal.fields[index].is_focusable() {
            modal.focus_index = index;
            return;
        }
    }
}

pub(in crate::tui) fn handle_modal_key(modal: &mut Modal, key: KeyCode) -> ModalAction {
    match key {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Tab => {
            step_focus(modal, true);
            ModalAction::None
        }
        KeyCode::BackTab => {
            step_focus(modal, false);
            ModalAction::None
        }
        KeyCode::Up => {
            if let Some(Field::Select {
                selected, options, ..
            }) = modal.fields.get_mut(modal.focus_index)
            {
                if !options.is_empty() {
                    *selected = selected.saturating_sub(1);
                }
            }
            ModalAction::None
        }
        KeyCode::Down => {
            if let Some(Field::Select {
                selected, options, ..
            }) = modal.fields.get_mut(modal.focus_index)
            {
                if *selected + 1 < options.len() {
                    *selected += 1;
                }
            }
            ModalAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.pop();
            }
            ModalAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.push(ch);
            }
            ModalAction::None
        }
        KeyCode::Enter => match modal.fields.get(modal.focus_index) {
            Some(Field::Button {
                action, enabled, ..
            }) => {
                if *enabled {
                    *action
                } else {
                    ModalAction::None
                }
            }
            _ => {
                step_focus(modal, true);
                ModalAction::None
            }
        },
        _ => ModalAction::None,
    }
}
