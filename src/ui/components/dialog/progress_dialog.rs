//! In-flight registration dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

pub fn render_progress_dialog(frame: &mut Frame, company: &str) {
    let message = if company.is_empty() {
        "Creating your trial account...".to_string()
    } else {
        format!("Creating the trial account for {company}...")
    };

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitting",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: &message,
            hint: None,
            max_width: 50,
        },
    );
}
