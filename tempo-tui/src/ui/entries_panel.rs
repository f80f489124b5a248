use super::*;

/// Scrollable list of loaded time entries, newest first. `entries_scroll`
/// is the index of the first visible row.
pub fn render_recent_entries(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Recent Entries ({}) ", app.time_entries.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.time_entries.is_empty() {
        frame.render_widget(
            Paragraph::new("No time entries yet")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let max_rows = inner.height as usize;
    let items: Vec<ListItem> = app
        .time_entries
        .iter()
        .skip(app.entries_scroll)
        .take(max_rows)
        .map(|entry| {
            let project = app
                .project_for_task(&entry.task_id)
                .map(|p| p.name.as_str())
                .unwrap_or("-");
            let line = Line::from(vec![
                Span::styled(entry.date.to_string(), Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled(
                    app.task_title(&entry.task_id).to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" ({})", project), Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled(entry.description.clone(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(entry.format_duration(), Style::default().fg(Color::Yellow)),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
