use super::*;

pub fn render_task_selection(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Task list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let (before, after) = app.task_search_input.split_at_cursor();
    let search_text = format!("{}█{}", before, after);
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    let items: Vec<ListItem> = app
        .filtered_tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let project = app
                .project_for_task(&task.id)
                .map(|p| p.name.as_str())
                .unwrap_or("-");
            let line = Line::from(vec![
                Span::raw(task.title.clone()),
                Span::styled(
                    format!("  [{}]", task.status.as_str()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", project),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            let style = if i == app.filtered_task_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    // Show count: filtered / total
    let title = if app.task_search_input.value.is_empty() {
        format!(" Tasks ({}) ", app.tasks.len())
    } else {
        format!(" Tasks ({}/{}) ", app.filtered_tasks.len(), app.tasks.len())
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(": Navigate  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Select  "),
        Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
        Span::raw(": Clear search  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}
