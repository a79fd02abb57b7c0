//! UI module for rendering the TUI

mod activated;
mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use components::{render_error_dialog, render_progress_dialog};
use fleet_signup::state::{FieldKey, SubmissionStatus};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, form_area, summary_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.wizard.submission_status() {
        SubmissionStatus::Succeeded => {
            let body = form_area.union(summary_area);
            activated::draw(frame, body, app);
        }
        status => {
            forms::draw_step_form(frame, form_area, app);
            summary::draw(frame, summary_area, app);

            if status == SubmissionStatus::Submitting {
                render_progress_dialog(frame, app.wizard.form().text(FieldKey::Company));
            }
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Draw error dialog on top of everything
    if app.show_submission_error {
        if let Some(message) = app.wizard.submission_error() {
            render_error_dialog(frame, message);
        }
    }
}
