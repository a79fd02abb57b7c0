//! Field rendering for wizard steps

use fleet_signup::state::FieldValue;
use fleet_signup::wizard::{FieldDescriptor, FieldInput};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CURSOR: &str = "▌";

/// A field plus everything needed to draw it
pub struct FieldView<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub value: &'a FieldValue,
    pub error: Option<&'a str>,
    pub is_active: bool,
    /// Highlighted option when the field is a multi-select
    pub option_cursor: usize,
}

/// Rows a field occupies, borders included
pub fn field_height(descriptor: &FieldDescriptor) -> u16 {
    match descriptor.input {
        FieldInput::MultiSelect(options) => options.len() as u16 + 2,
        _ => 3,
    }
}

/// Draw a field in a bordered box, with its validation error on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let border_color = match (view.error.is_some(), view.is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let marker = if view.descriptor.required { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", view.descriptor.label, marker))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(error) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(field_lines(view)).block(block), area);
}

/// Content lines for a field, without the surrounding box
pub(crate) fn field_lines(view: &FieldView) -> Vec<Line<'static>> {
    let value_style = if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if view.is_active { CURSOR } else { "" };

    match view.descriptor.input {
        FieldInput::Text => {
            let text = view.value.as_text();
            let shown = if text.is_empty() && !view.is_active {
                "(empty)".to_string()
            } else {
                text.to_string()
            };
            vec![Line::from(vec![
                Span::styled(shown, value_style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])]
        }
        FieldInput::Select(_) => {
            let text = view.value.as_text();
            let shown = if text.is_empty() { "(choose)" } else { text };
            vec![selector_line(shown.to_string(), value_style, view.is_active)]
        }
        FieldInput::Industry | FieldInput::Plan | FieldInput::Billing => {
            vec![selector_line(view.value.display_value(), value_style, view.is_active)]
        }
        FieldInput::Checkbox => {
            let mark = if view.value.is_blank() { "[ ]" } else { "[x]" };
            let mut spans = vec![Span::styled(mark, value_style)];
            if view.is_active {
                spans.push(Span::styled(
                    "  Space to toggle",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            vec![Line::from(spans)]
        }
        FieldInput::MultiSelect(options) => {
            let selected = match view.value {
                FieldValue::Choices(items) => items.as_slice(),
                _ => &[][..],
            };
            options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let on = selected.iter().any(|s| s == option);
                    let mark = if on { "[x]" } else { "[ ]" };
                    let style = if view.is_active && i == view.option_cursor {
                        value_style.add_modifier(Modifier::REVERSED)
                    } else {
                        value_style
                    };
                    Line::from(Span::styled(format!("{mark} {option}"), style))
                })
                .collect()
        }
    }
}

/// `◀ value ▶` when focused, plain value otherwise
fn selector_line(value: String, style: Style, is_active: bool) -> Line<'static> {
    if is_active {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(value, style.add_modifier(Modifier::BOLD)),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(value, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_signup::catalog::PlanId;
    use fleet_signup::state::FieldKey;
    use fleet_signup::wizard::schema::CHALLENGES;
    use pretty_assertions::assert_eq;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn descriptor(input: FieldInput) -> FieldDescriptor {
        FieldDescriptor {
            key: FieldKey::FirstName,
            label: "Label",
            input,
            required: true,
        }
    }

    fn view<'a>(descriptor: &'a FieldDescriptor, value: &'a FieldValue, active: bool) -> FieldView<'a> {
        FieldView {
            descriptor,
            value,
            error: None,
            is_active: active,
            option_cursor: 0,
        }
    }

    #[test]
    fn test_empty_text_placeholder_only_when_inactive() {
        let d = descriptor(FieldInput::Text);
        let value = FieldValue::text("");
        assert_eq!(plain(&field_lines(&view(&d, &value, false))), vec!["(empty)"]);
        assert_eq!(plain(&field_lines(&view(&d, &value, true))), vec![CURSOR]);
    }

    #[test]
    fn test_select_shows_arrows_when_active() {
        let d = descriptor(FieldInput::Select(&["a", "b"]));
        let value = FieldValue::text("b");
        assert_eq!(plain(&field_lines(&view(&d, &value, true))), vec!["◀ b ▶"]);
        let unset = FieldValue::text("");
        assert_eq!(plain(&field_lines(&view(&d, &unset, false))), vec!["(choose)"]);
    }

    #[test]
    fn test_plan_uses_catalog_name() {
        let d = descriptor(FieldInput::Plan);
        let value = FieldValue::Plan(PlanId::FleetEnterprise);
        assert_eq!(
            plain(&field_lines(&view(&d, &value, false))),
            vec!["Fleet Enterprise"]
        );
    }

    #[test]
    fn test_checkbox_mark() {
        let d = descriptor(FieldInput::Checkbox);
        let value = FieldValue::Flag(true);
        assert_eq!(plain(&field_lines(&view(&d, &value, false))), vec!["[x]"]);
    }

    #[test]
    fn test_multi_select_lists_every_option() {
        let d = descriptor(FieldInput::MultiSelect(CHALLENGES));
        let value = FieldValue::Choices(vec!["Driver safety".to_string()]);
        let lines = plain(&field_lines(&view(&d, &value, false)));
        assert_eq!(lines.len(), CHALLENGES.len());
        assert_eq!(lines[0], "[ ] Fuel costs");
        assert_eq!(lines[1], "[x] Driver safety");
        assert_eq!(field_height(&d), CHALLENGES.len() as u16 + 2);
    }
}
