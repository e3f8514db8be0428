/*
[INPUT]:  Filters state
[OUTPUT]: Filter bar with the three dropdown labels
[POS]:    TUI UI filter bar
[UPDATE]: 2026-10-15 Highlight the active dropdown
*/

use momentum_board::{FilterKind, Filters};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_filters(frame: &mut ratatui::Frame, area: Rect, filters: &Filters) {
    let mut spans = Vec::new();
    for (index, kind) in FilterKind::ALL.iter().enumerate() {
        let marker = if filters.is_active(*kind) { "▴" } else { "▾" };
        let style = if filters.is_active(*kind) {
            header_style()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" [{}] {} {marker} ", index + 1, kind.label()),
            style,
        ));
        spans.push(Span::raw("  "));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Filters"),
    );
    frame.render_widget(widget, area);
}
