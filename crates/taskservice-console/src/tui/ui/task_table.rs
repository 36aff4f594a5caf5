/*
[INPUT]:  Controller task list and table selection state
[OUTPUT]: Task table rendered into the Ratatui frame
[POS]:    TUI UI task table rendering
[UPDATE]: When adding columns or changing row presentation
*/

use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::AppState;
use crate::labels::{site_type_label, status_label};
use crate::tui::runtime::{border_style, header_style, status_style};

fn format_timestamp(raw: &str) -> String {
    // backend timestamps are ISO 8601; drop sub-second noise for display
    let trimmed = raw.split('.').next().unwrap_or(raw);
    trimmed.trim_end_matches('Z').replace('T', " ")
}

pub(in crate::tui) fn draw_task_table(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let mut rows = Vec::new();
    for task in &app.tasks {
        rows.push(Row::new(vec![
            Cell::from(task.name.clone()),
            Cell::from(task.url.clone()),
            Cell::from(site_type_label(task.site_type)),
            Cell::from(Span::styled(
                status_label(task.status),
                status_style(task.status),
            )),
            Cell::from(format_timestamp(&task.updated_at)),
        ]));
    }

    if rows.is_empty() {
        let message = if app.loading {
            "Loading..."
        } else {
            "No tasks found"
        };
        rows.push(Row::new(vec![
            Cell::from(message),
            Cell::from(""),
            Cell::from(""),
            Cell::from(""),
            Cell::from(""),
        ]));
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("URL"),
        Cell::from("Site"),
        Cell::from("Status"),
        Cell::from("Updated"),
    ])
    .style(header_style());

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(36),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Tasks"),
    )
    .row_highlight_style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");
    frame.render_stateful_widget(table, area, &mut app.table_state);
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;

    #[test]
    fn timestamps_lose_subsecond_precision_for_display() {
        assert_eq!(
            format_timestamp("2026-03-01T09:15:30.123456"),
            "2026-03-01 09:15:30"
        );
        assert_eq!(
            format_timestamp("2026-03-01T09:15:30Z"),
            "2026-03-01 09:15:30"
        );
        assert_eq!(format_timestamp("not a timestamp"), "not a timestamp");
    }
}
