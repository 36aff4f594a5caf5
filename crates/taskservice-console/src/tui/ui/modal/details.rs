/*
[INPUT]:  Freshly fetched task from the details request
[OUTPUT]: Read-only task details dialog rendered into the frame
[POS]:    TUI UI modal for inspecting one task
[UPDATE]: When adding task fields to the detail view
*/

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use taskservice_adapter::Task;

use crate::labels::{site_type_label, status_label};
use crate::tui::runtime::{border_style, status_style};

pub(in crate::tui) fn draw_details(frame: &mut ratatui::Frame, area: Rect, task: &Task) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Task Details");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let criteria = serde_json::to_string_pretty(&task.criteria)
        .unwrap_or_else(|_| task.criteria.to_string());

    let mut lines = vec![
        Line::from(format!("ID:      {}", task.id)),
        Line::from(format!("Name:    {}", task.name)),
        Line::from(format!("URL:     {}", task.url)),
        Line::from(format!("Site:    {}", site_type_label(task.site_type))),
        Line::from(vec![
            Span::raw("Status:  "),
            Span::styled(status_label(task.status), status_style(task.status)),
        ]),
        Line::from(format!("Created: {}", task.created_at)),
        Line::from(format!("Updated: {}", task.updated_at)),
        Line::from(""),
        Line::from("Criteria:"),
    ];
    for line in criteria.lines() {
        lines.push(Line::from(format!("  {line}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Esc close"));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
