//! Screen layout: step header, body panes and status bar

use crate::app::App;
use fleet_signup::state::{Step, SubmissionStatus};
use fleet_signup::wizard::FieldInput;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the frame into header, form pane, summary pane and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    let [form, summary] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);
    (header, form, summary, status)
}

/// Progress header: every step, with the current one highlighted
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.wizard.current_step();
    let mut spans = vec![Span::styled(
        " Start your free trial  ",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, step) in Step::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = match step.cmp(&current) {
            std::cmp::Ordering::Less => Style::default().fg(Color::Green),
            std::cmp::Ordering::Equal => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            std::cmp::Ordering::Greater => Style::default().fg(Color::DarkGray),
        };
        let mark = if *step < current { "✓" } else { "" };
        spans.push(Span::styled(format!("{step}{mark}"), style));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let status = app.wizard.submission_status();
    let status_color = match status {
        SubmissionStatus::Idle => Color::Gray,
        SubmissionStatus::Submitting => Color::Yellow,
        SubmissionStatus::Failed => Color::Red,
        SubmissionStatus::Succeeded => Color::Green,
    };
    spans.push(Span::styled(
        format!("● {} ", status.label()),
        Style::default().fg(status_color),
    ));

    spans.push(Span::styled(get_hints(app), Style::default().fg(Color::White)));

    let error_count = app.wizard.errors().len();
    if error_count > 0 {
        spans.push(Span::raw(" | "));
        let noun = if error_count == 1 { "field needs" } else { "fields need" };
        spans.push(Span::styled(
            format!("{error_count} {noun} attention"),
            Style::default().fg(Color::Red),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Key hints for the focused field and step
fn get_hints(app: &App) -> String {
    if app.wizard.submission_status() == SubmissionStatus::Succeeded {
        return "any key:exit".to_string();
    }
    if app.show_submission_error {
        return "Enter/Esc:dismiss".to_string();
    }

    let field_hint = match app.active_descriptor().map(|f| f.input) {
        Some(FieldInput::Text) => "type to edit",
        Some(FieldInput::Select(_)) | Some(FieldInput::Industry) | Some(FieldInput::Plan) => {
            "←→:choose"
        }
        Some(FieldInput::Billing) => "←→:switch",
        Some(FieldInput::MultiSelect(_)) => "←→:move Space:toggle",
        Some(FieldInput::Checkbox) => "Space:toggle",
        None => "",
    };

    let step = app.wizard.current_step();
    let enter = if step.is_final() { "Enter:submit" } else { "Enter:next" };
    let esc = if step == Step::Contact { "Esc:quit" } else { "Esc:back" };
    format!("Tab:field {field_hint} | {enter} {esc}")
}
