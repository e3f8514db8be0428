/*
[INPUT]:  AppState board model and card selection
[OUTPUT]: One bordered column per status with task cards
[POS]:    TUI UI kanban board rendering
[UPDATE]: 2026-10-14 Render TaskBoard columns in status colors
*/

use momentum_board::board::{EMPTY_BOARD_MESSAGE, TaskCardView, TaskColumn};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, column_color};

pub(in crate::tui) fn draw_board(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let columns = app.board.columns();
    if columns.is_empty() {
        let widget = Paragraph::new(Span::styled(
            EMPTY_BOARD_MESSAGE,
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Board"),
        );
        frame.render_widget(widget, area);
        return;
    }

    let count = columns.len() as u32;
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (index, (column, column_area)) in columns.iter().zip(areas.iter()).enumerate() {
        let selected = (index == app.selected_column).then_some(app.selected_card);
        draw_column(frame, *column_area, column, selected);
    }
}

fn draw_column(frame: &mut ratatui::Frame, area: Rect, column: &TaskColumn, selected: Option<usize>) {
    let color = column_color(column.color);
    let mut border = Style::default().fg(color);
    if selected.is_some() {
        border = border.add_modifier(Modifier::BOLD);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!(" {} ({}) ", column.title, column.cards.len()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let width = block.inner(area).width.saturating_sub(2) as usize;
    let items = column
        .cards
        .iter()
        .map(|card| ListItem::new(card_text(card, color, width)))
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected.filter(|_| !column.cards.is_empty()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_text(card: &TaskCardView, color: Color, width: usize) -> Text<'static> {
    let tags = card
        .tags
        .iter()
        .map(|tag| format!("[{tag}]"))
        .collect::<Vec<_>>()
        .join(" ");
    let assignee = card.assignee.clone().unwrap_or_else(|| "unassigned".to_string());

    Text::from(vec![
        Line::from(vec![
            Span::styled(truncate(&tags, width.saturating_sub(13)), Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(card.date.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            truncate(&card.title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(truncate(&card.description, width))),
        Line::from(Span::styled(
            truncate(&format!("{assignee}  💬 {}", card.comments), width),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled("─".repeat(width), Style::default().fg(color))),
    ])
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > max {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}
