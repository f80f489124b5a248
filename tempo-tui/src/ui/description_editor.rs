use super::*;

pub fn render_description_editor(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let (before, after) = app.description_input.split_at_cursor();
    let input_text = format!("{}█{}", before, after);
    let input = Paragraph::new(input_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Description ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(input, chunks[0]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Save  "),
        Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
        Span::raw(": Clear  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}
