//! Blackboard Library
//!
//! A minimal drawing toy: one window, a black canvas, a single white point
//! steered with the arrow keys. Escape or Backspace clears the canvas.
//!
//! The crate separates the pure control logic (runtime status, held-key
//! mask, cursor movement) from the windowing and GPU layers, so the whole
//! input/update behavior is testable without a display.

mod app;
mod cursor;
mod renderer;
mod state;
mod window;

pub use app::App;
pub use cursor::{CursorPosition, STEP_HORIZONTAL, STEP_VERTICAL};
pub use renderer::Renderer;
pub use state::{ControlState, Direction, DirectionMask, Effect, InputEvent, RuntimeStatus};
pub use window::AppWrapper;
