/// Zoom strategies.
///
/// A Zoomer moves the camera node along its local forward axis each frame.
/// The rig picks one at init from `ZoomDesc::mode`. Every strategy keeps
/// the camera depth inside `[-max_zoom, -min_zoom]` after it writes, and
/// `update_zoom` neither logs nor allocates.

use crate::error::Result;
use crate::input::InputState;
use crate::transform::{TransformKey, TransformStore};
use super::rig_desc::ZoomDesc;

/// Strategy for moving the camera closer to or further from the rig.
pub trait Zoomer: Send + Sync {
    /// Update the camera node's local depth for this frame.
    fn update_zoom(
        &mut self,
        transforms: &mut TransformStore,
        camera: TransformKey,
        delta_time: f32,
        input: &InputState,
    ) -> Result<()>;
}

/// Scale the camera's local depth and write it back clamped.
fn write_scaled_depth(
    transforms: &mut TransformStore,
    camera: TransformKey,
    zoom: &ZoomDesc,
    scale: f32,
) -> Result<()> {
    let mut position = transforms.local_position(camera)?;
    position.z = zoom.clamp_depth(position.z * scale);
    transforms.set_local_position(camera, position)
}

/// No-op zoomer - the camera distance never changes.
pub struct NoOpZoomer;

impl NoOpZoomer {
    pub fn new() -> Self {
        Self
    }
}

impl Zoomer for NoOpZoomer {
    fn update_zoom(
        &mut self,
        _transforms: &mut TransformStore,
        _camera: TransformKey,
        _delta_time: f32,
        _input: &InputState,
    ) -> Result<()> {
        Ok(())
    }
}

/// Scroll wheel zoom.
///
/// Each frame with a non-zero scroll value the depth is multiplied by
/// `1 - delta_time * speed * scroll`. Positive scroll brings the camera closer.
pub struct ScrollZoomer {
    zoom: ZoomDesc,
}

impl ScrollZoomer {
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `zoom` fails validation.
    pub fn new(zoom: ZoomDesc) -> Result<Self> {
        zoom.validate()?;
        Ok(Self { zoom })
    }
}

impl Zoomer for ScrollZoomer {
    fn update_zoom(
        &mut self,
        transforms: &mut TransformStore,
        camera: TransformKey,
        delta_time: f32,
        input: &InputState,
    ) -> Result<()> {
        if input.scroll == 0.0 {
            return Ok(());
        }

        let scale = 1.0 - delta_time * self.zoom.speed * input.scroll;
        write_scaled_depth(transforms, camera, &self.zoom, scale)
    }
}

/// Two-finger pinch zoom.
///
/// Active only while exactly two touches are down. The depth is multiplied
/// by `previous_distance / current_distance` between the two fingers, so
/// spreading them shrinks the distance to the rig and pinching grows it.
/// A frame where both fingers sit on the same point is skipped.
pub struct PinchZoomer {
    zoom: ZoomDesc,
}

impl PinchZoomer {
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `zoom` fails validation.
    pub fn new(zoom: ZoomDesc) -> Result<Self> {
        zoom.validate()?;
        Ok(Self { zoom })
    }
}

impl Zoomer for PinchZoomer {
    fn update_zoom(
        &mut self,
        transforms: &mut TransformStore,
        camera: TransformKey,
        _delta_time: f32,
        input: &InputState,
    ) -> Result<()> {
        let [first, second] = input.touches.as_slice() else {
            return Ok(());
        };

        let previous_distance = (first.previous_position() - second.previous_position()).length();
        let current_distance = (first.position - second.position).length();
        if current_distance == 0.0 {
            return Ok(());
        }

        let ratio = previous_distance / current_distance;
        write_scaled_depth(transforms, camera, &self.zoom, ratio)
    }
}

#[cfg(test)]
#[path = "zoom_tests.rs"]
mod tests;
