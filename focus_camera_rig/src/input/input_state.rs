/// Input snapshot for a single frame.

use glam::Vec2;

/// One active touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform touch identifier, stable for the lifetime of the contact
    pub id: u64,
    /// Current position in screen pixels
    pub position: Vec2,
    /// Movement since the previous frame, in screen pixels
    pub delta: Vec2,
}

impl TouchPoint {
    pub fn new(id: u64, position: Vec2, delta: Vec2) -> Self {
        Self { id, position, delta }
    }

    /// Position at the previous frame
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// Everything the rig reads from the input subsystem in one frame.
///
/// Axis values are normalized to `[-1, 1]` and aggregate keyboard,
/// joystick and drag sources. `scroll` is the wheel movement this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Primary pointer button held
    pub pointer_down: bool,
    /// Horizontal axis (positive = right)
    pub horizontal: f32,
    /// Vertical axis (positive = up)
    pub vertical: f32,
    /// Scroll wheel axis (positive = away from the user)
    pub scroll: f32,
    /// Active touches, ordered by id
    pub touches: Vec<TouchPoint>,
}

impl InputState {
    /// Pointer held or at least one finger on the screen.
    pub fn is_dragging(&self) -> bool {
        self.pointer_down || !self.touches.is_empty()
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}
