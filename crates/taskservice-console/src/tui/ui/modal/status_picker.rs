/*
[INPUT]:  Picker cursor position over the status options
[OUTPUT]: Status picker dialog rendered into the frame
[POS]:    TUI UI modal for changing a task's status
[UPDATE]: When adding statuses or changing picker presentation
*/

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::labels::{STATUS_OPTIONS, status_label};
use crate::tui::runtime::{border_style, status_style};

pub(in crate::tui) fn draw_status_picker(frame: &mut ratatui::Frame, area: Rect, cursor: usize) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Set Status");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = STATUS_OPTIONS
        .iter()
        .enumerate()
        .map(|(index, status)| {
            let marker = if index == cursor { "> " } else { "  " };
            let style = if index == cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                status_style(*status)
            };
            Line::from(Span::styled(
                format!("{marker}{}", status_label(*status)),
                style,
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from("Enter apply / Esc cancel"));

    frame.render_widget(Paragraph::new(lines), inner);
}
