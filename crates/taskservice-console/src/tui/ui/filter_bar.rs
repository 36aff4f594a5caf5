/*
[INPUT]:  Active query, site/status selectors, list counts, error text
[OUTPUT]: Filter summary bar and error banner rendered into the frame
[POS]:    TUI UI filter bar rendering
[UPDATE]: When adding filters or changing the banner presentation
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode};
use crate::labels::{site_type_label, status_label};
use crate::tui::runtime::{border_style, status_style};

pub(in crate::tui) fn draw_filter_bar(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let search_active = app.input_mode == InputMode::Search;

    let mut spans = vec![Span::raw("Search: ")];
    if search_active {
        // reversed trailing cell doubles as the cursor
        spans.push(Span::raw(app.query.clone()));
        spans.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    } else if app.query.is_empty() {
        spans.push(Span::styled("-", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(app.query.clone()));
    }

    spans.push(Span::raw("    Site: "));
    spans.push(Span::raw(
        app.site_filter.map(site_type_label).unwrap_or("all"),
    ));

    spans.push(Span::raw("    Status: "));
    match app.status_filter {
        Some(status) => spans.push(Span::styled(status_label(status), status_style(status))),
        None => spans.push(Span::raw("all")),
    }

    spans.push(Span::raw(format!(
        "    showing {} of {}",
        app.tasks.len(),
        app.total
    )));

    let title = if search_active {
        "Filters (typing, Enter/Esc to finish)"
    } else {
        "Filters"
    };
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title),
    );
    frame.render_widget(widget, area);
}

pub(in crate::tui) fn draw_error_banner(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    message: &str,
) {
    let widget = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title("Error"),
    );
    frame.render_widget(widget, area);
}
