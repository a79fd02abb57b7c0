//! Confirmation screen after a successful registration

use crate::app::App;
use fleet_signup::wizard::TRIAL_PERIOD_DAYS;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(registration) = app.wizard.registration() else {
        return;
    };
    let plan = app.wizard.plan_config();
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(Span::styled(
            "Your trial is active",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Welcome aboard, {}. {} days of {} start now.",
            registration.name, TRIAL_PERIOD_DAYS, plan.name
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Company   ", label),
            Span::raw(registration.company.clone()),
        ]),
        Line::from(vec![
            Span::styled("Email     ", label),
            Span::raw(registration.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Account   ", label),
            Span::raw(registration.id.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Expires   ", label),
            Span::raw(registration.trial_expiry_date.format("%B %-d, %Y").to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Press any key to exit", label)),
    ];

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(lines.len() as u16 + 2),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(64),
        Constraint::Fill(1),
    ])
    .areas(middle);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(Paragraph::new(lines).block(block), center);
}
