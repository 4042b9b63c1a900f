/// Rig descriptors - authoring-time configuration.
///
/// Values are set once by the integrator and never change while the rig
/// runs. Angles are in degrees, speeds in degrees per second, damping
/// fractions are per-frame interpolation weights in `[0, 1]`.

use bitflags::bitflags;
use crate::error::{Error, Result};
use crate::engine_bail;

bitflags! {
    /// Axes whose input direction is flipped.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AxisInversion: u8 {
        /// Invert horizontal (X) input
        const X = 0b01;
        /// Invert vertical (Y) input
        const Y = 0b10;
    }
}

/// Which zoom strategy the rig instantiates at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    /// Scroll wheel zoom (desktop)
    Scroll,
    /// Two-finger pinch zoom (touch screens)
    Pinch,
    /// No zoom at all
    Disabled,
}

impl ZoomMode {
    /// Pinch on mobile targets, scroll everywhere else.
    pub fn for_platform() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            ZoomMode::Pinch
        } else {
            ZoomMode::Scroll
        }
    }
}

/// Rotation settings for one axis of the rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDesc {
    /// Target node rotation speed per unit of axis input
    pub target_rotation_speed: f32,
    /// Per-frame fraction the current node moves toward the target
    pub rotation_damping: f32,
    /// Lower angular constraint (left / bottom)
    pub min_angle: f32,
    /// Upper angular constraint (right / top)
    pub max_angle: f32,
    /// Pull-back factor applied inside the damping margin while idle
    pub constraints_damping: f32,
    /// Width of the margin inside the constraints where pull-back applies
    pub damping_distance: f32,
}

impl AxisDesc {
    /// Constraints with both bounds at exactly zero are disabled.
    pub fn constraints_enabled(&self) -> bool {
        !(self.min_angle == 0.0 && self.max_angle == 0.0)
    }

    /// A zero damping distance disables idle pull-back.
    pub fn damping_enabled(&self) -> bool {
        self.damping_distance != 0.0
    }

    /// Constraint window inset by the damping distance on both sides.
    pub fn damping_window(&self) -> (f32, f32) {
        (self.min_angle + self.damping_distance, self.max_angle - self.damping_distance)
    }

    fn validate(&self, axis: &str) -> Result<()> {
        let values = [
            self.target_rotation_speed,
            self.rotation_damping,
            self.min_angle,
            self.max_angle,
            self.constraints_damping,
            self.damping_distance,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            engine_bail!(Error::InvalidConfig, "focuscam::RigDesc",
                "{} axis contains a non-finite value", axis);
        }
        if self.target_rotation_speed < 0.0 {
            engine_bail!(Error::InvalidConfig, "focuscam::RigDesc",
                "{} axis target_rotation_speed must be >= 0, got {}", axis, self.target_rotation_speed);
        }
        if !(0.0..=1.0).contains(&self.rotation_damping) {
            engine_bail!(Error::InvalidConfig, "focuscam::RigDesc",
                "{} axis rotation_damping must be in [0, 1], got {}", axis, self.rotation_damping);
        }
        if self.min_angle > self.max_angle {
            engine_bail!(Error::InvalidConfig, "focuscam::RigDesc",
                "{} axis min_angle ({}) is greater than max_angle ({})", axis, self.min_angle, self.max_angle);
        }
        if self.damping_distance < 0.0 {
            engine_bail!(Error::InvalidConfig, "focuscam::RigDesc",
                "{} axis damping_distance must be >= 0, got {}", axis, self.damping_distance);
        }
        if self.damping_enabled() {
            let (low, high) = self.damping_window();
            if low > high {
                engine_bail!(Error::InvalidConfig, "focuscam::RigDesc",
                    "{} axis damping_distance {} leaves an empty window inside [{}, {}]",
                    axis, self.damping_distance, self.min_angle, self.max_angle);
            }
        }
        Ok(())
    }
}

impl Default for AxisDesc {
    fn default() -> Self {
        Self {
            target_rotation_speed: 10.0,
            rotation_damping: 0.1,
            min_angle: -90.0,
            max_angle: 90.0,
            constraints_damping: 0.1,
            damping_distance: 30.0,
        }
    }
}

/// Camera distance settings.
///
/// The camera sits at local depth `z`, kept in `[-max_zoom, -min_zoom]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomDesc {
    pub mode: ZoomMode,
    /// Scroll zoom rate
    pub speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Camera distance when the rig is created (clamped to the range)
    pub initial_zoom: f32,
}

impl ZoomDesc {
    /// Clamp a local camera depth to `[-max_zoom, -min_zoom]`.
    ///
    /// Never panics, even on an unvalidated descriptor: with inverted bounds
    /// the result is pinned to `-min_zoom`, and NaN bounds are ignored.
    pub fn clamp_depth(&self, depth: f32) -> f32 {
        depth.max(-self.max_zoom).min(-self.min_zoom)
    }

    /// Check the zoom range and rates.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for non-finite values, a negative
    /// `min_zoom`, or `min_zoom > max_zoom`.
    pub fn validate(&self) -> Result<()> {
        if ![self.speed, self.min_zoom, self.max_zoom, self.initial_zoom].iter().all(|v| v.is_finite()) {
            engine_bail!(Error::InvalidConfig, "focuscam::RigDesc", "zoom contains a non-finite value");
        }
        if self.min_zoom < 0.0 {
            engine_bail!(Error::InvalidConfig, "focuscam::RigDesc",
                "min_zoom must be >= 0, got {}", self.min_zoom);
        }
        if self.min_zoom > self.max_zoom {
            engine_bail!(Error::InvalidConfig, "focuscam::RigDesc",
                "min_zoom ({}) is greater than max_zoom ({})", self.min_zoom, self.max_zoom);
        }
        Ok(())
    }
}

impl Default for ZoomDesc {
    fn default() -> Self {
        Self {
            mode: ZoomMode::for_platform(),
            speed: 100.0,
            min_zoom: 30.0,
            max_zoom: 100.0,
            initial_zoom: 50.0,
        }
    }
}

/// Full rig configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigDesc {
    pub horizontal: AxisDesc,
    pub vertical: AxisDesc,
    pub zoom: ZoomDesc,
    pub axis_inversion: AxisInversion,
}

impl RigDesc {
    /// Check every value against its allowed domain.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for non-finite values, negative speeds
    /// or distances, damping fractions outside `[0, 1]`, inverted angle or
    /// zoom ranges, and damping margins wider than half the constraint window.
    pub fn validate(&self) -> Result<()> {
        self.horizontal.validate("horizontal")?;
        self.vertical.validate("vertical")?;
        self.zoom.validate()
    }
}

impl Default for RigDesc {
    fn default() -> Self {
        Self {
            horizontal: AxisDesc::default(),
            vertical: AxisDesc::default(),
            zoom: ZoomDesc::default(),
            axis_inversion: AxisInversion::empty(),
        }
    }
}

#[cfg(test)]
#[path = "rig_desc_tests.rs"]
mod tests;
