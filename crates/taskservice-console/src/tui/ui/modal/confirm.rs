/*
[INPUT]:  Name of the task staged for deletion
[OUTPUT]: Delete confirmation dialog rendered into the frame
[POS]:    TUI UI modal for confirming a delete
[UPDATE]: When changing confirmation keys or wording
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_confirm(frame: &mut ratatui::Frame, area: Rect, task_name: &str) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Delete Task");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(format!("Delete \"{task_name}\"?")),
        Line::from("This cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", key_style),
            Span::raw(" delete    "),
            Span::styled("[n]", key_style),
            Span::raw(" keep"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
