//! Cursor Position and Stepping
//!
//! The drawing cursor lives in normalized device coordinates and moves by a
//! fixed step per frame for each held arrow key. This module is pure math
//! so the movement properties can be tested without a GPU.

use crate::state::DirectionMask;

/// Per-frame vertical step (up/down), in NDC units
pub const STEP_VERTICAL: f32 = 0.01;
/// Per-frame horizontal step (left/right), in NDC units
pub const STEP_HORIZONTAL: f32 = 0.005;

/// The point being painted, in normalized device coordinates.
///
/// Both axes stay within [-1.0, 1.0]. The position survives canvas clears:
/// clearing erases pixels, not the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
}

impl CursorPosition {
    /// Start at the center of the canvas
    pub fn new() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Advance one frame's worth of movement for the held keys.
    ///
    /// Each held direction contributes its fixed step, clamped per axis so
    /// the coordinate never leaves [-1.0, 1.0]. Opposite keys held together
    /// cancel within the step (both adjustments apply, net zero).
    pub fn advance(&mut self, held: &DirectionMask) {
        if held.up {
            self.y = (self.y + STEP_VERTICAL).min(1.0);
        }
        if held.down {
            self.y = (self.y - STEP_VERTICAL).max(-1.0);
        }
        if held.left {
            self.x = (self.x - STEP_HORIZONTAL).max(-1.0);
        }
        if held.right {
            self.x = (self.x + STEP_HORIZONTAL).min(1.0);
        }
    }

    /// Position as an array, for the renderer's instance data
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn held(up: bool, down: bool, left: bool, right: bool) -> DirectionMask {
        DirectionMask {
            up,
            down,
            left,
            right,
        }
    }

    fn in_bounds(cursor: &CursorPosition) -> bool {
        (-1.0..=1.0).contains(&cursor.x) && (-1.0..=1.0).contains(&cursor.y)
    }

    #[test]
    fn up_steps_accumulate_linearly() {
        let mut cursor = CursorPosition::new();
        let mask = held(true, false, false, false);
        for _ in 0..50 {
            cursor.advance(&mask);
        }
        assert!((cursor.y - 0.5).abs() < EPSILON, "y = {}", cursor.y);
        assert_eq!(cursor.x, 0.0);
    }

    #[test]
    fn right_steps_use_horizontal_step() {
        let mut cursor = CursorPosition::new();
        let mask = held(false, false, false, true);
        for _ in 0..100 {
            cursor.advance(&mask);
        }
        assert!((cursor.x - 0.5).abs() < EPSILON, "x = {}", cursor.x);
        assert_eq!(cursor.y, 0.0);
    }

    #[test]
    fn down_and_left_move_negative() {
        let mut cursor = CursorPosition::new();
        let mask = held(false, true, true, false);
        for _ in 0..20 {
            cursor.advance(&mask);
        }
        assert!((cursor.y + 0.2).abs() < EPSILON, "y = {}", cursor.y);
        assert!((cursor.x + 0.1).abs() < EPSILON, "x = {}", cursor.x);
    }

    #[test]
    fn coordinates_never_leave_bounds() {
        let mut cursor = CursorPosition::new();
        let mask = held(true, false, false, true);
        for _ in 0..1000 {
            cursor.advance(&mask);
            assert!(in_bounds(&cursor), "escaped bounds: {:?}", cursor);
        }
        assert!((cursor.y - 1.0).abs() < EPSILON);
        assert!((cursor.x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn clamps_at_top_from_near_boundary() {
        let mut cursor = CursorPosition { x: 0.0, y: 0.99 };
        let mask = held(true, false, false, false);
        for _ in 0..10 {
            cursor.advance(&mask);
            assert!(cursor.y <= 1.0, "overshot: {}", cursor.y);
        }
        assert!((cursor.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn clamps_at_negative_bounds() {
        let mut cursor = CursorPosition { x: -0.999, y: -0.999 };
        let mask = held(false, true, true, false);
        for _ in 0..10 {
            cursor.advance(&mask);
        }
        assert_eq!(cursor.x, -1.0);
        assert_eq!(cursor.y, -1.0);
    }

    #[test]
    fn opposite_keys_cancel_per_step() {
        let mut cursor = CursorPosition { x: 0.25, y: -0.5 };
        let vertical = held(true, true, false, false);
        let horizontal = held(false, false, true, true);
        for _ in 0..100 {
            cursor.advance(&vertical);
            cursor.advance(&horizontal);
        }
        assert!((cursor.x - 0.25).abs() < EPSILON);
        assert!((cursor.y + 0.5).abs() < EPSILON);
    }

    #[test]
    fn all_four_held_stays_put() {
        let mut cursor = CursorPosition::new();
        let mask = held(true, true, true, true);
        for _ in 0..10 {
            cursor.advance(&mask);
        }
        assert!(cursor.x.abs() < EPSILON);
        assert!(cursor.y.abs() < EPSILON);
    }
}
