use super::*;
use crate::app::{ManualField, TextInput};

pub fn render_manual_entry(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Task
            Constraint::Length(3), // Description
            Constraint::Length(3), // Date
            Constraint::Length(3), // Start / End
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let focused = app.manual_entry.focused_field;

    let (task_text, task_color) = if app.manual_entry.task_id.is_empty() {
        ("[Press Enter to choose a task]".to_string(), Color::DarkGray)
    } else {
        (
            app.task_title(&app.manual_entry.task_id).to_string(),
            Color::White,
        )
    };
    let task = Paragraph::new(task_text)
        .style(Style::default().fg(task_color))
        .block(field_block(" Task ", focused == ManualField::Task));
    frame.render_widget(task, chunks[0]);

    render_input_field(
        frame,
        chunks[1],
        " Description ",
        &app.manual_entry.description,
        "What did you work on?",
        focused == ManualField::Description,
    );
    render_input_field(
        frame,
        chunks[2],
        " Date ",
        &app.manual_entry.date,
        "YYYY-MM-DD",
        focused == ManualField::Date,
    );

    let times = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    render_input_field(
        frame,
        times[0],
        " Start ",
        &app.manual_entry.start_time,
        "HH:MM",
        focused == ManualField::StartTime,
    );
    render_input_field(
        frame,
        times[1],
        " End ",
        &app.manual_entry.end_time,
        "HH:MM",
        focused == ManualField::EndTime,
    );

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Next field  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Pick task / advance  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Yellow)),
        Span::raw(": Save entry  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Back"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[5]);
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    input: &TextInput,
    placeholder: &str,
    focused: bool,
) {
    let (text, color) = if input.value.is_empty() && !focused {
        (placeholder.to_string(), Color::DarkGray)
    } else if focused {
        let (before, after) = input.split_at_cursor();
        (format!("{}█{}", before, after), Color::White)
    } else {
        (input.value.clone(), Color::White)
    };

    let field = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(field_block(title, focused));
    frame.render_widget(field, area);
}
