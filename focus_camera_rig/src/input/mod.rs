//! Per-frame input consumed by the rig.
//!
//! `InputState` is the plain snapshot the rig reads. `InputCollector`
//! builds one from winit window events for hosts that run on winit.

mod input_state;
mod input_collector;

pub use input_state::{InputState, TouchPoint};
pub use input_collector::{InputCollector, InputCollectorDesc};
