use super::*;
use crate::app::StopwatchStatus;

pub fn render_timer_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Stopwatch display
            Constraint::Length(3), // Task + description
            Constraint::Length(3), // Stats cards
            Constraint::Min(5),    // Recent entries
            Constraint::Length(2), // Controls
        ])
        .split(body);

    render_stopwatch(frame, chunks[0], app);
    render_task_and_description(frame, chunks[1], app);
    render_stats(frame, chunks[2], app);
    super::entries_panel::render_recent_entries(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn render_stopwatch(frame: &mut Frame, area: Rect, app: &App) {
    let (text, border_style) = match app.stopwatch.status {
        StopwatchStatus::Running => (
            format!("{} ⏵ (running)", app.stopwatch.format_elapsed()),
            Style::default().fg(Color::Green),
        ),
        StopwatchStatus::Paused => (
            format!("{} ⏸ (paused)", app.stopwatch.format_elapsed()),
            Style::default().fg(Color::Yellow),
        ),
        StopwatchStatus::Idle => ("00:00:00 (not running)".to_string(), Style::default()),
    };

    let timer = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Stopwatch ")
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(timer, area);
}

fn render_task_and_description(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (task_text, task_color) = if app.stopwatch.selected_task_id.is_empty() {
        ("[No task selected]".to_string(), Color::DarkGray)
    } else {
        (
            app.task_title(&app.stopwatch.selected_task_id).to_string(),
            Color::White,
        )
    };
    let task = Paragraph::new(task_text)
        .style(Style::default().fg(task_color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Task ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(task, cols[0]);

    let (desc_text, desc_color) = if app.stopwatch.description.is_empty() {
        ("No description".to_string(), Color::DarkGray)
    } else {
        (app.stopwatch.description.clone(), Color::White)
    };
    let description = Paragraph::new(desc_text)
        .style(Style::default().fg(desc_color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Description ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(description, cols[1]);
}

fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let cards = [
        (" Today ", app.hours_today()),
        (" This Week ", app.hours_week()),
        (" Avg / Day ", app.hours_avg_per_day()),
    ];
    for (i, (title, hours)) in cards.iter().enumerate() {
        let card = Paragraph::new(format!("{:.1}h", hours))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(*title));
        frame.render_widget(card, cols[i]);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let hint = |key: &'static str, action: &'static str| {
        vec![
            Span::styled(key, Style::default().fg(Color::Yellow)),
            Span::raw(format!(": {}  ", action)),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(hint("Space", "Start/Pause"));
    spans.extend(hint("X", "Stop & save"));
    spans.extend(hint("T", "Task"));
    spans.extend(hint("N", "Note"));
    spans.extend(hint("M", "Manual entry"));
    spans.extend(hint("E", "Export CSV"));
    spans.extend(hint("R", "Refresh"));
    spans.extend(hint("Q", "Quit"));

    let controls = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(controls, area);
}
