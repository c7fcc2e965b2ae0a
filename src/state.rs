//! Runtime Status and Direction Tracking
//!
//! This module holds the control state shared between the input router and
//! the render stepper: the coarse runtime status and the set of currently
//! held arrow keys. The transition logic is a pure function of
//! (event, state) so it can be tested without any windowing system.

/// Coarse runtime status driving the main-loop dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeStatus {
    /// No input active; the loop just yields the CPU
    Idle,
    /// One-time startup step (show window, clear, set draw defaults)
    Init,
    /// At least one arrow key is held; advance and draw each frame
    UpdatingGraph,
}

/// One of the four tracked arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The set of arrow keys currently held, one named flag per key.
///
/// This reflects what the process has observed, which is not necessarily
/// what is physically held: a release that arrives while the status is not
/// `UpdatingGraph` is dropped and leaves its flag set (see
/// [`ControlState::apply`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionMask {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionMask {
    /// Set the flag for a direction
    pub fn set(&mut self, direction: Direction) {
        *self.flag_mut(direction) = true;
    }

    /// Clear the flag for a direction
    pub fn clear(&mut self, direction: Direction) {
        *self.flag_mut(direction) = false;
    }

    /// Check whether a direction is currently held
    pub fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// True when no tracked key is held
    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    fn flag_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// An input event, already translated out of the host's event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// An arrow key was pressed (may repeat while held)
    Pressed(Direction),
    /// An arrow key was released
    Released(Direction),
    /// Escape or Backspace was pressed
    ClearPressed,
    /// The window close button was used
    CloseRequested,
}

/// A side effect the caller must carry out after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Clear the visible canvas to black
    ClearScreen,
    /// Terminate the main loop
    Exit,
}

/// Runtime status plus held-key set, mutated only on the event thread
#[derive(Debug, Clone, Copy)]
pub struct ControlState {
    pub status: RuntimeStatus,
    pub held: DirectionMask,
}

impl ControlState {
    /// Create the startup state: `Init` status, no keys held.
    ///
    /// Constructed only after the window and renderer exist, so `Init`
    /// marks "startup complete, first loop step pending".
    pub fn new() -> Self {
        Self {
            status: RuntimeStatus::Init,
            held: DirectionMask::default(),
        }
    }

    /// Apply one input event, returning any effect the caller must run.
    ///
    /// Invariant maintained (outside the one-time `Init` status): the
    /// status is `UpdatingGraph` exactly when the held mask is non-empty.
    ///
    /// Key releases are only evaluated while the status is
    /// `UpdatingGraph`. A release arriving in any other status is dropped,
    /// so a key whose press was never observed (or that was held before
    /// the window gained focus) can leave its flag stuck. This mirrors the
    /// behavior this program has always had and is covered by tests rather
    /// than corrected.
    pub fn apply(&mut self, event: InputEvent) -> Option<Effect> {
        match event {
            InputEvent::Pressed(direction) => {
                self.held.set(direction);
                self.status = RuntimeStatus::UpdatingGraph;
                log::debug!("key down: {:?}, held: {:?}", direction, self.held);
                None
            }
            InputEvent::Released(direction) => {
                if self.status == RuntimeStatus::UpdatingGraph {
                    self.held.clear(direction);
                    if self.held.is_empty() {
                        self.status = RuntimeStatus::Idle;
                    }
                    log::debug!("key up: {:?}, held: {:?}", direction, self.held);
                }
                None
            }
            InputEvent::ClearPressed => Some(Effect::ClearScreen),
            InputEvent::CloseRequested => Some(Effect::Exit),
        }
    }

    /// Mark the one-time init step as done
    pub fn finish_init(&mut self) {
        self.status = RuntimeStatus::Idle;
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_state() -> ControlState {
        let mut state = ControlState::new();
        state.finish_init();
        state
    }

    /// Status must be UpdatingGraph exactly when the mask is non-empty,
    /// checked after every event of an arbitrary press/release sequence.
    fn assert_invariant(state: &ControlState) {
        assert_eq!(
            state.status == RuntimeStatus::UpdatingGraph,
            !state.held.is_empty(),
            "status {:?} inconsistent with mask {:?}",
            state.status,
            state.held
        );
    }

    #[test]
    fn press_sets_flag_and_status() {
        let mut state = idle_state();
        assert_eq!(state.apply(InputEvent::Pressed(Direction::Up)), None);
        assert!(state.held.contains(Direction::Up));
        assert_eq!(state.status, RuntimeStatus::UpdatingGraph);
    }

    #[test]
    fn last_release_returns_to_idle() {
        let mut state = idle_state();
        state.apply(InputEvent::Pressed(Direction::Up));
        state.apply(InputEvent::Pressed(Direction::Down));
        state.apply(InputEvent::Released(Direction::Up));
        assert_eq!(state.status, RuntimeStatus::UpdatingGraph);
        state.apply(InputEvent::Released(Direction::Down));
        assert_eq!(state.status, RuntimeStatus::Idle);
        assert!(state.held.is_empty());
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut state = idle_state();
        state.apply(InputEvent::Pressed(Direction::Left));
        state.apply(InputEvent::Pressed(Direction::Left));
        state.apply(InputEvent::Released(Direction::Left));
        assert_eq!(state.status, RuntimeStatus::Idle);
        assert!(state.held.is_empty());
    }

    #[test]
    fn invariant_holds_over_event_sequences() {
        use Direction::*;
        use InputEvent::*;
        let sequence = [
            Pressed(Up),
            Pressed(Right),
            Released(Up),
            Pressed(Down),
            ClearPressed,
            Released(Right),
            Released(Down),
            Pressed(Left),
            Released(Left),
        ];
        let mut state = idle_state();
        for event in sequence {
            state.apply(event);
            assert_invariant(&state);
        }
    }

    #[test]
    fn release_ignored_while_idle() {
        // A flag left set while Idle (e.g. its press was observed but its
        // release was lost) can never be cleared: releases are only
        // evaluated in UpdatingGraph. Preserved quirk, not a bug fix.
        let mut state = ControlState {
            status: RuntimeStatus::Idle,
            held: DirectionMask {
                up: true,
                ..DirectionMask::default()
            },
        };
        state.apply(InputEvent::Released(Direction::Up));
        assert!(state.held.contains(Direction::Up), "flag should stay stuck");
        assert_eq!(state.status, RuntimeStatus::Idle);
    }

    #[test]
    fn release_ignored_during_init() {
        let mut state = ControlState::new();
        state.held.set(Direction::Down);
        state.apply(InputEvent::Released(Direction::Down));
        assert!(state.held.contains(Direction::Down));
        assert_eq!(state.status, RuntimeStatus::Init);
    }

    #[test]
    fn clear_leaves_status_and_mask_untouched() {
        let mut state = idle_state();
        assert_eq!(
            state.apply(InputEvent::ClearPressed),
            Some(Effect::ClearScreen)
        );
        assert_eq!(state.status, RuntimeStatus::Idle);

        state.apply(InputEvent::Pressed(Direction::Right));
        assert_eq!(
            state.apply(InputEvent::ClearPressed),
            Some(Effect::ClearScreen)
        );
        assert_eq!(state.status, RuntimeStatus::UpdatingGraph);
        assert!(state.held.contains(Direction::Right));
    }

    #[test]
    fn close_request_emits_exit() {
        let mut state = idle_state();
        assert_eq!(state.apply(InputEvent::CloseRequested), Some(Effect::Exit));
    }
}
