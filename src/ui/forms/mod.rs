//! Form rendering module
//!
//! - `field_renderer`: one bordered box per wizard field
//! - `step_form`: the fields of the current step, stacked

mod field_renderer;
mod step_form;

pub use step_form::draw_step_form;
