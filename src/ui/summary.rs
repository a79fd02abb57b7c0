//! Plan summary pane

use crate::app::App;
use fleet_signup::catalog::BillingCycle;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let plan = app.wizard.plan_config();
    let industry = app.wizard.industry_config();
    let cycle = app.wizard.form().billing_cycle();
    let pricing = app.wizard.pricing();

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            plan.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(plan.tagline, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format_currency(u64::from(pricing.monthly_cost)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" / month, billed {}", cycle.label().to_lowercase()), label),
        ]),
        Line::from(vec![
            Span::styled("Setup fee  ", label),
            Span::raw(format_currency(u64::from(pricing.setup_fee))),
        ]),
    ];

    if cycle == BillingCycle::Annual && pricing.annual_savings > 0 {
        lines.push(Line::from(Span::styled(
            format!(
                "You save {} per year",
                format_currency(pricing.annual_savings.unsigned_abs())
            ),
            Style::default().fg(Color::Green),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled("First year  ", label),
        Span::raw(format_currency(pricing.first_year_total())),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Includes", label)));
    lines.extend(plan.features.iter().map(|f| Line::from(format!("  • {f}"))));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Compliance  ", label),
        Span::raw(plan.compliance.join(", ")),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Industry  ", label),
        Span::raw(industry.name),
    ]));
    lines.push(Line::from(Span::styled(
        industry.description,
        Style::default().fg(Color::Gray),
    )));

    let block = Block::default()
        .title(" Your plan ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Whole-dollar amount with thousands separators, e.g. `$14,400`
pub(crate) fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(2500), "$2,500");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }
}
