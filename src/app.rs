//! Application State and Logic
//!
//! Ties the control state (status + held keys) to the drawing cursor and
//! the per-frame render step. Everything except [`App::render_frame`] is
//! independent of the windowing system and the GPU, so the end-to-end
//! press/hold/release scenarios are testable as plain unit tests.

use crate::cursor::CursorPosition;
use crate::renderer::Renderer;
use crate::state::{ControlState, Effect, InputEvent, RuntimeStatus};

/// Main application state
pub struct App {
    control: ControlState,
    cursor: CursorPosition,
}

impl App {
    /// Create the startup state: `Init` status, cursor at the center
    pub fn new() -> Self {
        Self {
            control: ControlState::new(),
            cursor: CursorPosition::new(),
        }
    }

    /// Current runtime status, read by the main loop's dispatch
    pub fn status(&self) -> RuntimeStatus {
        self.control.status
    }

    /// Route one translated input event through the control state.
    ///
    /// The returned effect, if any, must be carried out synchronously by
    /// the caller (clearing the canvas or exiting the loop).
    pub fn handle_input(&mut self, event: InputEvent) -> Option<Effect> {
        self.control.apply(event)
    }

    /// Mark the one-time init step as done
    pub fn finish_init(&mut self) {
        self.control.finish_init();
    }

    /// Advance the cursor one frame for the currently held keys and return
    /// the new position. The pure half of the active-frame update.
    pub fn advance_cursor(&mut self) -> CursorPosition {
        self.cursor.advance(&self.control.held);
        self.cursor
    }

    /// Current cursor position (unchanged by canvas clears)
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// One active frame: move the cursor, draw it, present.
    pub fn render_frame(&mut self, renderer: &mut Renderer) {
        let position = self.advance_cursor();
        renderer.draw_point(position.to_array());
        renderer.present();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Direction;

    const EPSILON: f32 = 1e-4;

    fn started_app() -> App {
        let mut app = App::new();
        app.finish_init();
        app
    }

    #[test]
    fn hold_up_for_fifty_frames() {
        let mut app = started_app();
        assert_eq!(app.status(), RuntimeStatus::Idle);

        app.handle_input(InputEvent::Pressed(Direction::Up));
        assert_eq!(app.status(), RuntimeStatus::UpdatingGraph);

        for _ in 0..50 {
            app.advance_cursor();
        }
        assert!((app.cursor().y - 0.5).abs() < EPSILON, "y = {}", app.cursor().y);

        app.handle_input(InputEvent::Released(Direction::Up));
        assert_eq!(app.status(), RuntimeStatus::Idle);
    }

    #[test]
    fn clear_preserves_cursor_position() {
        let mut app = started_app();
        app.handle_input(InputEvent::Pressed(Direction::Right));
        for _ in 0..10 {
            app.advance_cursor();
        }
        let before = app.cursor();

        let effect = app.handle_input(InputEvent::ClearPressed);
        assert_eq!(effect, Some(Effect::ClearScreen));
        assert_eq!(app.cursor(), before);
        assert_eq!(app.status(), RuntimeStatus::UpdatingGraph);
    }

    #[test]
    fn left_and_right_together_hold_x_still() {
        let mut app = started_app();
        app.handle_input(InputEvent::Pressed(Direction::Left));
        app.handle_input(InputEvent::Pressed(Direction::Right));
        for _ in 0..200 {
            app.advance_cursor();
        }
        assert!(app.cursor().x.abs() < EPSILON);
        assert_eq!(app.status(), RuntimeStatus::UpdatingGraph);
    }

    #[test]
    fn releasing_one_of_two_keys_keeps_updating() {
        let mut app = started_app();
        app.handle_input(InputEvent::Pressed(Direction::Up));
        app.handle_input(InputEvent::Pressed(Direction::Left));
        app.handle_input(InputEvent::Released(Direction::Up));
        assert_eq!(app.status(), RuntimeStatus::UpdatingGraph);

        let before = app.cursor();
        app.advance_cursor();
        assert!(app.cursor().x < before.x, "left should still move x");
        assert_eq!(app.cursor().y, before.y, "up was released");
    }
}
