/*
[INPUT]:  None
[OUTPUT]: Product header with the two primary actions
[POS]:    TUI UI header
[UPDATE]: 2026-10-14 Add header with employee and task actions
*/

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_header(frame: &mut ratatui::Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let brand = Paragraph::new(Line::from(Span::styled(
        "Momentum",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(brand, halves[0]);

    let actions = Paragraph::new(Line::from(vec![
        Span::styled("[e] Add employee", Style::default().fg(Color::Magenta)),
        Span::raw("  "),
        Span::styled("[n] + Create new task", header_style()),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(actions, halves[1]);
}
