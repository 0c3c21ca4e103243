//! Text rendering for the generated alarm script.

pub mod placeholder;
pub mod templates;

pub use placeholder::render;
pub use templates::{SEPARATOR, render_alarm_check, render_header, wrap_operation};
