//! Orbit/follow camera rig.
//!
//! Provides the host lifecycle trait, the rig descriptor, the zoom
//! strategies (scroll, pinch) and the orbit rig itself.

mod component;
mod rig_desc;
mod zoom;
mod orbit_rig;

pub use component::RigComponent;
pub use rig_desc::{AxisDesc, AxisInversion, RigDesc, ZoomDesc, ZoomMode};
pub use zoom::{Zoomer, NoOpZoomer, ScrollZoomer, PinchZoomer};
pub use orbit_rig::{OrbitRig, RigNodes, MAX_ANGLE_DELTA_TO_TARGET};
