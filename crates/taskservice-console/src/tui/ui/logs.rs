/*
[INPUT]:  LogBufferHandle snapshots for UI
[OUTPUT]: Log panel rendered into the Ratatui frame
[POS]:    TUI UI logs panel rendering
[UPDATE]: When changing log presentation
*/

use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::LogBufferHandle;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_logs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    buffer: &LogBufferHandle,
) {
    let lines = {
        let guard = buffer.lock().expect("log buffer lock");
        guard.snapshot()
    };
    // tail view: newest lines that fit inside the border
    let available = area.height.saturating_sub(2) as usize;
    let start = lines.len().saturating_sub(available);

    let text = lines[start..]
        .iter()
        .map(|line| Line::from(Span::raw(line.clone())))
        .collect::<Vec<_>>();
    let title = format!("Logs ({} lines)", lines.len());
    let log_widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title),
    );
    frame.render_widget(log_widget, area);
}
