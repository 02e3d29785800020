//! Reusable UI components.

mod confirm;
mod input_field;

pub use confirm::render_confirm_dialog;
pub use input_field::{render_input_line, InputLineConfig};
