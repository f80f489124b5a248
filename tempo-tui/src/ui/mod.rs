use crate::app::{App, ToastKind, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

mod description_editor;
mod entries_panel;
mod manual_entry_view;
mod select_task_view;
mod timer_view;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(0),    // body
            Constraint::Length(1), // toast line
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Timer => timer_view::render_timer_view(frame, app, body),
        View::SelectTask => select_task_view::render_task_selection(frame, app, body),
        View::ManualEntry => manual_entry_view::render_manual_entry(frame, app, body),
        View::EditDescription => description_editor::render_description_editor(frame, app, body),
    }

    render_toast_line(frame, root[2], app);
}

/// Top bar: throbber + app title on the left, signed-in user on the right.
fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(1), // content
        ])
        .split(area);
    let content_row = rows[1];
    let area = Rect {
        x: content_row.x + 2,
        y: content_row.y,
        width: content_row.width.saturating_sub(4),
        height: content_row.height,
    };

    const LABEL: &str = " Tempo Time Tracker";
    let title_width = 1 + LABEL.len() as u16 + 1;

    let user_text = Line::from(vec![
        Span::styled("Signed in as ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.user.name.clone(), Style::default().fg(Color::White)),
    ]);
    let user_width = user_text.width() as u16;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(title_width),
            Constraint::Min(0),
            Constraint::Length(user_width),
        ])
        .split(area);

    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        label_area,
    );
    frame.render_widget(Paragraph::new(user_text), cols[2]);
}

fn render_toast_line(frame: &mut Frame, area: Rect, app: &App) {
    let area = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4),
        height: area.height,
    };

    let line = match app.latest_toast() {
        Some(toast) => {
            let color = match toast.kind {
                ToastKind::Success => Color::Green,
                ToastKind::Error => Color::Red,
                ToastKind::Info => Color::Yellow,
            };
            Line::from(Span::styled(
                toast.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => return,
    };
    frame.render_widget(Paragraph::new(line), area);
}
