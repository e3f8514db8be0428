/*
[INPUT]:  BoardApi handle, task source, log buffer, shutdown token
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
[UPDATE]: 2026-10-14 Route create results back through the UI event channel
[UPDATE]: 2026-10-15 Add header and filter rows above the board
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use momentum_adapter::{Employee, Task};
use momentum_board::board::ColumnColor;
use momentum_board::{BoardApi, TaskSource};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;

use super::app::{ActiveModal, AppState, Tab};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub(crate) const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Last `count` lines, oldest first
    pub fn tail(&self, count: usize) -> Vec<String> {
        let start = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(start).cloned().collect()
    }
}

/// `MakeWriter` that feeds formatted tracing lines into a [`LogBuffer`]
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) {
        // A poisoned buffer only drops log lines
        if let Ok(mut guard) = self.buffer.lock() {
            guard.push_line(line);
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial.drain(..=pos);
            self.push(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

/// Terminal input and create-call results, each result tagged with the
/// submission id of the form that sent it
pub(super) enum UiEvent {
    Input(CrosstermEvent),
    TaskCreated {
        submission: u64,
        result: momentum_adapter::Result<Task>,
    },
    EmployeeCreated {
        submission: u64,
        result: momentum_adapter::Result<Employee>,
    },
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Arrows]", key_style),
        Span::raw(" Move  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Details  "),
        Span::styled("[n]", key_style),
        Span::raw(" New task  "),
        Span::styled("[e]", key_style),
        Span::raw(" Add employee  "),
        Span::styled("[1/2/3]", key_style),
        Span::raw(" Filters"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[Tab]", key_style),
        Span::raw(" Board/Logs  "),
        Span::styled("[r]", key_style),
        Span::raw(" Refresh  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn column_color(color: ColumnColor) -> Color {
    match color {
        ColumnColor::Yellow => Color::Yellow,
        ColumnColor::Orange => Color::Rgb(255, 138, 0),
        ColumnColor::Pink => Color::Rgb(255, 102, 168),
        ColumnColor::Blue => Color::Rgb(58, 134, 255),
        ColumnColor::Gray => Color::DarkGray,
    }
}

pub async fn run_tui_with_log(
    api: Arc<dyn BoardApi>,
    task_source: TaskSource,
    log_buffer: LogBufferHandle,
    shutdown: CancellationToken,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();
    let input_tx = event_tx.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(api, event_tx, log_buffer, task_source);
    terminal.draw(|frame| draw_ui(frame, &app))?;
    app.refresh_board().await;

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("shutdown requested; leaving board");
                should_quit = true;
            }
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key)))
                        if key.kind == KeyEventKind::Press =>
                    {
                        if handle_key_event(&mut app, key).await {
                            should_quit = true;
                        }
                    }
                    Some(UiEvent::Input(_)) => {}
                    Some(UiEvent::TaskCreated { submission, result }) => {
                        app.on_task_created(submission, result).await
                    }
                    Some(UiEvent::EmployeeCreated { submission, result }) => {
                        app.on_employee_created(submission, result)
                    }
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(frame, layout[0]);
    draw_filters(frame, layout[1], &app.filters);
    match app.current_tab {
        Tab::Board => draw_board(frame, layout[2], app),
        Tab::Logs => draw_logs(frame, layout[2], &app.log_buffer),
    }
    draw_tabs(frame, layout[3], app.current_tab);
    draw_footer(frame, layout[4], app);

    if let Some(active_modal) = app.active_modal.as_ref() {
        let modal = match active_modal {
            ActiveModal::CreateTask(modal) => modal.to_modal(),
            ActiveModal::CreateEmployee(modal) => modal.to_modal(),
            ActiveModal::TaskDetail(view) => view.to_modal(),
        };
        let modal_area = centered_rect(area, 70, 80);
        draw_modal(frame, modal_area, &modal);
    }
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &AppState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| draw_ui(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_log_buffer_is_bounded() {
        let mut buffer = LogBuffer::new(2);
        buffer.push_line("a".to_string());
        buffer.push_line("b".to_string());
        buffer.push_line("c".to_string());
        assert_eq!(buffer.tail(10), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(buffer.tail(1), vec!["c".to_string()]);
    }

    #[test]
    fn test_log_writer_splits_lines() {
        let handle: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(10)));
        let factory = LogWriterFactory::new(handle.clone());
        {
            let mut writer = factory.make_writer();
            writer.write_all(b"first\r\nsec").expect("write");
            writer.write_all(b"ond\ntrailing").expect("write");
        }
        let lines = handle.lock().expect("lock").tail(10);
        assert_eq!(lines, vec!["first", "second", "trailing"]);
    }

    #[tokio::test]
    async fn test_empty_board_shows_message() {
        let (app, _rx) = test_app(TaskSource::Remote);
        let screen = render(&app);
        assert!(screen.contains("No statuses found"));
        assert!(screen.contains("Momentum"));
        assert!(screen.contains("Create new task"));
    }

    #[tokio::test]
    async fn test_board_renders_columns_and_cards() {
        let (mut app, _rx) = test_app(TaskSource::Remote);
        app.refresh_board().await;
        let screen = render(&app);
        assert!(screen.contains("To do"));
        assert!(screen.contains("Done"));
        assert!(screen.contains("Write docs"));
        assert!(!screen.contains("No statuses found"));
    }

    #[tokio::test]
    async fn test_modal_overlay_is_drawn() {
        let (mut app, _rx) = test_app(TaskSource::Remote);
        app.open_create_task().await;
        let screen = render(&app);
        assert!(screen.contains("Create new task"));
        assert!(screen.contains("-- select employee --"));
    }
}
