/*
[INPUT]:  Controller state, crossterm input events, tracing log output
[OUTPUT]: Ratatui run loop, frame rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared rendering helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use taskservice_adapter::{TaskServiceClient, TaskStatus};

use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::modal::{create_modal, draw_confirm, draw_details, draw_modal, draw_status_picker};
use super::ui::{draw_error_banner, draw_filter_bar, draw_logs, draw_tabs, draw_task_table};
use crate::app::{ActiveModal, AppState, Tab};

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

/// Bounded in-memory sink for log lines, shown on the Logs tab. Keeps the
/// newest `capacity` lines; older lines fall off the front.
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

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// tracing-subscriber writer factory that lands formatted log lines in the
/// shared buffer, so logs stay visible while the alternate screen is active.
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

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            let mut guard = self.buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            let mut guard = self.buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(())
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

enum UiEvent {
    Input(CrosstermEvent),
}

/// Run the console until the operator quits.
///
/// Input is read on a blocking thread and forwarded over a channel; finished
/// backend requests come back through the controller's event channel. The
/// select loop is the single place both streams mutate `AppState`.
pub async fn run_tui(client: TaskServiceClient, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let (app_tx, mut app_rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(client, app_tx);
    app.request_reload();

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = input_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    // key release events show up on some terminals; act on presses only
                    if key.kind == KeyEventKind::Press && handle_key_event(&mut app, key.code) {
                        should_quit = true;
                    }
                }
            }
            maybe_event = app_rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event);
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app, &log_buffer))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState, log_buffer: &LogBufferHandle) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    match app.current_tab {
        Tab::Tasks => draw_tasks_tab(frame, layout[0], app),
        Tab::Logs => draw_logs(frame, layout[0], log_buffer),
    }

    draw_tabs(frame, layout[1], app.current_tab);
    draw_footer(frame, layout[2], app);

    if let Some(active) = app.modal.as_ref() {
        match active {
            ActiveModal::Create => {
                let mut modal = create_modal(&app.create_form);
                modal.error = app.error.clone();
                draw_modal(frame, centered_rect(area, 64, 60), &modal);
            }
            ActiveModal::ConfirmDelete { task_name, .. } => {
                draw_confirm(frame, centered_rect(area, 50, 30), task_name);
            }
            ActiveModal::StatusPicker { cursor, .. } => {
                draw_status_picker(frame, centered_rect(area, 36, 40), *cursor);
            }
            ActiveModal::Details { task } => {
                draw_details(frame, centered_rect(area, 70, 70), task);
            }
        }
    }
}

fn draw_tasks_tab(frame: &mut ratatui::Frame, area: Rect, app: &mut AppState) {
    // the error banner row only exists while an error is set
    let constraints = if app.error.is_some() {
        vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
        ]
    } else {
        vec![Constraint::Length(3), Constraint::Min(5)]
    };
    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_filter_bar(frame, content[0], app);
    if app.error.is_some() {
        draw_task_table(frame, content[2], app);
        if let Some(message) = app.error.as_deref() {
            draw_error_banner(frame, content[1], message);
        }
    } else {
        draw_task_table(frame, content[1], app);
    }
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[/]", key_style),
        Span::raw(" Search  "),
        Span::styled("[s]", key_style),
        Span::raw(" Site  "),
        Span::styled("[t]", key_style),
        Span::raw(" Status  "),
        Span::styled("[c]", key_style),
        Span::raw(" Clear  "),
        Span::styled("[Tab]", key_style),
        Span::raw(" Switch  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit"),
    ]);
    let mut line2_spans = vec![
        Span::styled("[n]", key_style),
        Span::raw(" New  "),
        Span::styled("[u]", key_style),
        Span::raw(" Set status  "),
        Span::styled("[d]", key_style),
        Span::raw(" Delete  "),
        Span::styled("[v]", key_style),
        Span::raw(" Details  "),
        Span::styled("[r]", key_style),
        Span::raw(" Refresh  "),
    ];
    if app.loading {
        line2_spans.push(Span::styled(
            "loading...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        line2_spans.push(Span::raw(format!("Status: {}", app.status_message)));
    }
    let line2 = Line::from(line2_spans);

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

pub(crate) fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Created => Style::default().fg(Color::Cyan),
        TaskStatus::Running => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        TaskStatus::Paused => Style::default().fg(Color::Yellow),
        TaskStatus::Completed => Style::default().fg(Color::Blue),
        TaskStatus::Failed => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    }
}

pub(super) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
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
