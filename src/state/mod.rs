//! Wizard state module

mod forms;
mod step;
mod wizard_state;

pub use forms::*;
pub use step::*;
pub use wizard_state::*;
