//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over a [`Frame`](crate::frame::Frame)
//! or a slice of plain data, so the same frame can be drawn by any pane.
//!
//! # Pane Modules
//!
//! - [`circles`]: elements and list nodes as a row of circles with decorations
//! - [`bars`]: numeric elements as a bar chart (sorting page)
//! - [`input`]: labelled text fields with limit hints
//! - [`status`]: status bar with step counter, keybindings and play state

pub mod bars;
pub mod circles;
pub mod input;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use circles::{render_circles_pane, CirclesRenderData};
pub use input::{render_input_pane, InputField};
pub use status::{render_status_bar, PlayState, StatusRenderData};
