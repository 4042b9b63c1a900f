/// OrbitRig - third-person orbit/follow camera.
///
/// Node layout created at init, under the host-supplied root node:
///
/// ```text
/// root ─┬─ horizontal_target ── vertical_target
///       └─ horizontal_current ── vertical_current ── camera
/// ```
///
/// Input only ever rotates the target pair. The current pair chases it with
/// a fixed per-frame slerp fraction, and the camera rides on the current
/// pair at a local depth controlled by the zoom strategy.

use glam::{Quat, Vec3};
use crate::error::{Error, Result};
use crate::{engine_bail, engine_debug, engine_info};
use crate::input::InputState;
use crate::transform::{TransformKey, TransformStore};
use crate::utils::{angle_degrees, out_of_range_distance};
use super::component::RigComponent;
use super::rig_desc::{AxisInversion, RigDesc, ZoomMode};
use super::zoom::{NoOpZoomer, PinchZoomer, ScrollZoomer, Zoomer};

/// Past this angle between a current node and its target, input on that
/// axis is ignored until the current node catches up.
pub const MAX_ANGLE_DELTA_TO_TARGET: f32 = 90.0;

/// Handles to the nodes owned by an initialized rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigNodes {
    pub horizontal_target: TransformKey,
    pub vertical_target: TransformKey,
    pub horizontal_current: TransformKey,
    pub vertical_current: TransformKey,
    pub camera: TransformKey,
}

/// Signed orbit angles of the target pair, in degrees.
#[derive(Debug, Clone, Copy)]
struct TargetAngles {
    horizontal: f32,
    vertical: f32,
}

pub struct OrbitRig {
    desc: RigDesc,
    root: TransformKey,
    target: TransformKey,
    nodes: Option<RigNodes>,
    zoomer: Option<Box<dyn Zoomer>>,
}

impl OrbitRig {
    /// Create a rig following `target`, attached to the host node `root`.
    ///
    /// No nodes are created until `on_init`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the descriptor fails validation.
    pub fn new(desc: RigDesc, root: TransformKey, target: TransformKey) -> Result<Self> {
        desc.validate()?;
        Ok(Self {
            desc,
            root,
            target,
            nodes: None,
            zoomer: None,
        })
    }

    pub fn desc(&self) -> &RigDesc {
        &self.desc
    }

    pub fn root(&self) -> TransformKey {
        self.root
    }

    pub fn target(&self) -> TransformKey {
        self.target
    }

    /// Owned nodes, `None` before init and after teardown.
    pub fn nodes(&self) -> Option<&RigNodes> {
        self.nodes.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.nodes.is_some()
    }

    /// Current local depth of the camera node (negative, behind the rig).
    pub fn camera_depth(&self, transforms: &TransformStore) -> Result<f32> {
        Ok(transforms.local_position(self.require_nodes()?.camera)?.z)
    }

    fn require_nodes(&self) -> Result<RigNodes> {
        match self.nodes {
            Some(nodes) => Ok(nodes),
            None => engine_bail!(Error::InvalidState, "focuscam::OrbitRig",
                "Rig used before on_init"),
        }
    }

    fn create_zoomer(&self) -> Result<Box<dyn Zoomer>> {
        Ok(match self.desc.zoom.mode {
            ZoomMode::Scroll => Box::new(ScrollZoomer::new(self.desc.zoom)?),
            ZoomMode::Pinch => Box::new(PinchZoomer::new(self.desc.zoom)?),
            ZoomMode::Disabled => Box::new(NoOpZoomer::new()),
        })
    }

    // ===== ROTATION =====

    fn target_angles(&self, transforms: &TransformStore, nodes: &RigNodes) -> Result<TargetAngles> {
        let root_forward = transforms.forward(self.root)?;
        let horizontal_forward = transforms.forward(nodes.horizontal_target)?;
        let vertical_forward = transforms.forward(nodes.vertical_target)?;

        // Turning right (forward towards +X) reads as a negative angle.
        let mut horizontal = -angle_degrees(horizontal_forward, root_forward);
        if horizontal_forward.x < 0.0 {
            horizontal = -horizontal;
        }

        // Pitching down (forward towards -Y) reads as a negative angle.
        let mut vertical = angle_degrees(vertical_forward, horizontal_forward);
        if vertical_forward.y < 0.0 {
            vertical = -vertical;
        }

        Ok(TargetAngles { horizontal, vertical })
    }

    fn update_rotation(
        &self,
        transforms: &mut TransformStore,
        nodes: &RigNodes,
        delta_time: f32,
        input: &InputState,
    ) -> Result<()> {
        let horizontal = self.desc.horizontal;
        let vertical = self.desc.vertical;

        let mut horizontal_speed = horizontal.target_rotation_speed;
        let mut vertical_speed = vertical.target_rotation_speed;

        let horizontal_delta = angle_degrees(
            transforms.forward(nodes.horizontal_current)?,
            transforms.forward(nodes.horizontal_target)?,
        );
        let vertical_delta = angle_degrees(
            transforms.up(nodes.vertical_current)?,
            transforms.up(nodes.vertical_target)?,
        );

        if horizontal_delta > MAX_ANGLE_DELTA_TO_TARGET {
            horizontal_speed = 0.0;
        }
        if vertical_delta > MAX_ANGLE_DELTA_TO_TARGET {
            vertical_speed = 0.0;
        }

        let angles = self.target_angles(transforms, nodes)?;
        let root_up = transforms.up(self.root)?;

        if input.is_dragging() {
            if horizontal_speed > 0.0 {
                let axis = if self.desc.axis_inversion.contains(AxisInversion::X) {
                    -input.horizontal
                } else {
                    input.horizontal
                };

                if horizontal.constraints_enabled() {
                    let over = out_of_range_distance(horizontal.min_angle, horizontal.max_angle, angles.horizontal);
                    if over.abs() > 0.0 && over * axis <= 0.0 {
                        horizontal_speed = 0.0;
                    }
                }

                transforms.rotate_world(nodes.horizontal_target, root_up, horizontal_speed * axis * delta_time)?;
            }

            if vertical_speed > 0.0 {
                // Positive rotation about right pitches down, so "up" input is negated.
                let axis = if self.desc.axis_inversion.contains(AxisInversion::Y) {
                    input.vertical
                } else {
                    -input.vertical
                };

                if vertical.constraints_enabled() {
                    let over = out_of_range_distance(vertical.min_angle, vertical.max_angle, angles.vertical);
                    if over.abs() > 0.0 && over * axis <= 0.0 {
                        vertical_speed = 0.0;
                    }
                }

                let right = transforms.right(nodes.vertical_target)?;
                transforms.rotate_world(nodes.vertical_target, right, vertical_speed * axis * delta_time)?;
            }
        } else {
            if horizontal.damping_enabled() {
                let (low, high) = horizontal.damping_window();
                let over = out_of_range_distance(low, high, angles.horizontal);
                transforms.rotate_world(nodes.horizontal_target, root_up, horizontal.constraints_damping * over)?;
            }

            if vertical.damping_enabled() {
                let (low, high) = vertical.damping_window();
                let over = out_of_range_distance(low, high, angles.vertical);
                let right = transforms.right(nodes.vertical_target)?;
                transforms.rotate_world(nodes.vertical_target, right, vertical.constraints_damping * over)?;
            }
        }

        let horizontal_current = transforms.local_rotation(nodes.horizontal_current)?;
        let horizontal_target = transforms.local_rotation(nodes.horizontal_target)?;
        transforms.set_local_rotation(
            nodes.horizontal_current,
            horizontal_current.slerp(horizontal_target, horizontal.rotation_damping),
        )?;

        let vertical_current = transforms.local_rotation(nodes.vertical_current)?;
        let vertical_target = transforms.local_rotation(nodes.vertical_target)?;
        transforms.set_local_rotation(
            nodes.vertical_current,
            vertical_current.slerp(vertical_target, vertical.rotation_damping),
        )?;

        Ok(())
    }
}

impl RigComponent for OrbitRig {
    fn on_init(&mut self, transforms: &mut TransformStore) -> Result<()> {
        if self.nodes.is_some() {
            engine_bail!(Error::InvalidState, "focuscam::OrbitRig", "Rig already initialized");
        }
        if !transforms.contains(self.target) {
            engine_bail!(Error::InvalidNode, "focuscam::OrbitRig",
                "Target node {:?} does not exist", self.target);
        }

        let zoomer = self.create_zoomer()?;

        let horizontal_target = transforms.create_node(Some(self.root))?;
        let vertical_target = transforms.create_node(Some(horizontal_target))?;
        let horizontal_current = transforms.create_node(Some(self.root))?;
        let vertical_current = transforms.create_node(Some(horizontal_current))?;

        let depth = self.desc.zoom.clamp_depth(-self.desc.zoom.initial_zoom);
        let camera = transforms.create_node_with(
            Some(vertical_current),
            Vec3::new(0.0, 0.0, depth),
            Quat::IDENTITY,
        )?;

        self.nodes = Some(RigNodes {
            horizontal_target,
            vertical_target,
            horizontal_current,
            vertical_current,
            camera,
        });
        self.zoomer = Some(zoomer);

        engine_debug!("focuscam::OrbitRig", "Zoom strategy: {:?}", self.desc.zoom.mode);
        engine_info!("focuscam::OrbitRig", "Rig initialized, camera depth {:.2}", depth);
        Ok(())
    }

    fn on_update(
        &mut self,
        transforms: &mut TransformStore,
        delta_time: f32,
        input: &InputState,
    ) -> Result<()> {
        let nodes = self.require_nodes()?;

        let target_position = transforms.world_position(self.target)?;
        transforms.set_world_position(self.root, target_position)?;

        self.update_rotation(transforms, &nodes, delta_time, input)?;

        if let Some(zoomer) = self.zoomer.as_mut() {
            zoomer.update_zoom(transforms, nodes.camera, delta_time, input)?;
        }
        Ok(())
    }

    fn on_teardown(&mut self, transforms: &mut TransformStore) -> Result<()> {
        let Some(nodes) = self.nodes.take() else {
            engine_debug!("focuscam::OrbitRig", "Teardown on uninitialized rig ignored");
            return Ok(());
        };
        self.zoomer = None;

        // Removing the two branch heads drops the whole owned subtree.
        for head in [nodes.horizontal_target, nodes.horizontal_current] {
            if transforms.contains(head) {
                transforms.remove_node(head)?;
            }
        }

        engine_info!("focuscam::OrbitRig", "Rig torn down");
        Ok(())
    }
}

#[cfg(test)]
#[path = "orbit_rig_tests.rs"]
mod tests;
