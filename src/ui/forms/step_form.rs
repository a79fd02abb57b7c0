//! Current step's fields

use super::field_renderer::{draw_field, field_height, FieldView};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_step_form(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.wizard.current_step();
    let block = Block::default()
        .title(format!(" Step {} of 4: {} ", step.number(), step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = app.wizard.current_fields();
    if fields.is_empty() {
        frame.render_widget(Paragraph::new(Line::from("Nothing to fill in")), inner);
        return;
    }

    // Keep the focused field on screen when the step is taller than the pane
    let first_visible = first_visible_field(
        fields.iter().map(field_height).collect::<Vec<_>>().as_slice(),
        app.active_field,
        inner.height,
    );
    let visible = &fields[first_visible..];

    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    let form = app.wizard.form();
    for (offset, descriptor) in visible.iter().enumerate() {
        let index = first_visible + offset;
        let view = FieldView {
            descriptor,
            value: form.get(descriptor.key),
            error: app.wizard.state().error(descriptor.key),
            is_active: index == app.active_field,
            option_cursor: app.option_cursor,
        };
        draw_field(frame, rows[offset], &view);
    }
}

/// Index of the first field to draw so that `active` fits within `height` rows
fn first_visible_field(heights: &[u16], active: usize, height: u16) -> usize {
    let mut first = 0;
    while first < active {
        let used: u16 = heights[first..=active.min(heights.len().saturating_sub(1))]
            .iter()
            .sum();
        if used <= height {
            break;
        }
        first += 1;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(first_visible_field(&[3, 3, 3], 2, 20), 0);
    }

    #[test]
    fn test_scrolls_to_active_field() {
        assert_eq!(first_visible_field(&[3, 3, 3, 8], 3, 12), 2);
    }

    #[test]
    fn test_first_field_always_from_top() {
        assert_eq!(first_visible_field(&[3, 3], 0, 1), 0);
    }
}
