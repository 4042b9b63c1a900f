/// InputCollector - turns winit window events into per-frame InputState.
///
/// Feed every window event to `handle_window_event`, then call
/// `take_frame` once per frame before updating the rig. Per-frame
/// accumulators (drag, scroll, touch deltas) reset on every take.
///
/// Axis mapping:
/// - A/D and Left/Right arrows: horizontal -1/+1
/// - W/S and Up/Down arrows: vertical +1/-1
/// - Drag with the left button or a single finger: `drag_sensitivity` per
///   pixel, screen Y flipped
/// - Mouse wheel: `scroll_sensitivity` per line
///
/// Both axes are clamped to `[-1, 1]` after the sources are summed.

use glam::Vec2;
use rustc_hash::FxHashMap;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use super::input_state::{InputState, TouchPoint};

/// Tuning for InputCollector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputCollectorDesc {
    /// Axis units per dragged pixel
    pub drag_sensitivity: f32,
    /// Scroll units per wheel line
    pub scroll_sensitivity: f32,
    /// Pixels treated as one wheel line for touchpads
    pub pixels_per_line: f32,
}

impl Default for InputCollectorDesc {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.1,
            scroll_sensitivity: 0.1,
            pixels_per_line: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TrackedTouch {
    position: Vec2,
    last_reported: Vec2,
    ended: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct AxisKeys {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl AxisKeys {
    fn horizontal(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    fn vertical(&self) -> f32 {
        (self.up as i8 - self.down as i8) as f32
    }
}

pub struct InputCollector {
    desc: InputCollectorDesc,
    pointer_down: bool,
    cursor: Option<Vec2>,
    drag: Vec2,
    scroll: f32,
    keys: AxisKeys,
    touches: FxHashMap<u64, TrackedTouch>,
}

impl InputCollector {
    pub fn new(desc: InputCollectorDesc) -> Self {
        Self {
            desc,
            pointer_down: false,
            cursor: None,
            drag: Vec2::ZERO,
            scroll: 0.0,
            keys: AxisKeys::default(),
            touches: FxHashMap::default(),
        }
    }

    pub fn desc(&self) -> &InputCollectorDesc {
        &self.desc
    }

    /// Route a winit window event. Returns true if the event was used.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_button(*button, *state);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(Vec2::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.on_scroll(*delta);
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.on_key(code, event.state)
                } else {
                    false
                }
            }
            WindowEvent::Touch(touch) => {
                let location = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                self.on_touch(touch.id, touch.phase, location);
                true
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => false,
        }
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.pointer_down = state == ElementState::Pressed;
        }
    }

    pub fn on_cursor_moved(&mut self, position: Vec2) {
        if let Some(previous) = self.cursor {
            if self.pointer_down {
                self.drag += position - previous;
            }
        }
        self.cursor = Some(position);
    }

    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / self.desc.pixels_per_line,
        };
        self.scroll += lines * self.desc.scroll_sensitivity;
    }

    /// Returns true if the key drives an axis.
    pub fn on_key(&mut self, code: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        let slot = match code {
            KeyCode::KeyA | KeyCode::ArrowLeft => &mut self.keys.left,
            KeyCode::KeyD | KeyCode::ArrowRight => &mut self.keys.right,
            KeyCode::KeyW | KeyCode::ArrowUp => &mut self.keys.up,
            KeyCode::KeyS | KeyCode::ArrowDown => &mut self.keys.down,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, location: Vec2) {
        match phase {
            TouchPhase::Started => {
                self.touches.insert(id, TrackedTouch {
                    position: location,
                    last_reported: location,
                    ended: false,
                });
            }
            TouchPhase::Moved => {
                if let Some(touch) = self.touches.get_mut(&id) {
                    touch.position = location;
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if let Some(touch) = self.touches.get_mut(&id) {
                    touch.position = location;
                    touch.ended = true;
                }
            }
        }
    }

    /// Snapshot this frame's input and reset the per-frame accumulators.
    ///
    /// Touches that ended during the frame are reported once more, then dropped.
    pub fn take_frame(&mut self) -> InputState {
        let mut touches: Vec<TouchPoint> = self.touches.iter()
            .map(|(id, touch)| TouchPoint::new(*id, touch.position, touch.position - touch.last_reported))
            .collect();
        touches.sort_by_key(|touch| touch.id);

        self.touches.retain(|_, touch| !touch.ended);
        for touch in self.touches.values_mut() {
            touch.last_reported = touch.position;
        }

        // A single finger drags like the mouse; two fingers are left to pinch zoom.
        let mut drag = std::mem::take(&mut self.drag);
        if let [single] = touches.as_slice() {
            drag += single.delta;
        }
        let drag = drag * self.desc.drag_sensitivity;
        let scroll = std::mem::take(&mut self.scroll);

        InputState {
            pointer_down: self.pointer_down,
            horizontal: (self.keys.horizontal() + drag.x).clamp(-1.0, 1.0),
            vertical: (self.keys.vertical() - drag.y).clamp(-1.0, 1.0),
            scroll,
            touches,
        }
    }

    /// Forget held buttons, keys and touches (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.pointer_down = false;
        self.keys = AxisKeys::default();
        self.touches.clear();
        self.drag = Vec2::ZERO;
        self.scroll = 0.0;
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new(InputCollectorDesc::default())
    }
}

#[cfg(test)]
#[path = "input_collector_tests.rs"]
mod tests;
