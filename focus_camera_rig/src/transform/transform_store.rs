/// TransformStore - a minimal scene graph of position + rotation frames.
///
/// Uses a SlotMap so keys stay valid while other nodes come and go.
/// World poses are derived on demand by walking the parent chain; nothing
/// is cached, so reads always see the latest local values.
///
/// Axis conventions: forward is local +Z, up is local +Y, right is local +X.
/// Rotation angles are given in degrees.

use glam::{Quat, Vec3};
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::engine_err;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable handle to a node in a TransformStore.
    ///
    /// Becomes invalid only when its own node (or an ancestor) is removed.
    pub struct TransformKey;
}

// ===== NODE =====

/// A position + rotation frame, relative to its parent.
#[derive(Debug, Clone)]
pub struct TransformNode {
    parent: Option<TransformKey>,
    children: Vec<TransformKey>,
    local_position: Vec3,
    local_rotation: Quat,
}

impl TransformNode {
    fn new(parent: Option<TransformKey>, local_position: Vec3, local_rotation: Quat) -> Self {
        Self {
            parent,
            children: Vec::new(),
            local_position,
            local_rotation,
        }
    }

    pub fn parent(&self) -> Option<TransformKey> {
        self.parent
    }

    pub fn children(&self) -> &[TransformKey] {
        &self.children
    }

    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    pub fn local_rotation(&self) -> Quat {
        self.local_rotation
    }
}

// ===== STORE =====

#[derive(Debug, Default)]
pub struct TransformStore {
    nodes: SlotMap<TransformKey, TransformNode>,
}

impl TransformStore {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, key: TransformKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node(&self, key: TransformKey) -> Option<&TransformNode> {
        self.nodes.get(key)
    }

    // ===== HIERARCHY =====

    /// Create an identity node under `parent` (or at the root when `None`).
    pub fn create_node(&mut self, parent: Option<TransformKey>) -> Result<TransformKey> {
        self.create_node_with(parent, Vec3::ZERO, Quat::IDENTITY)
    }

    /// Create a node with an initial local pose.
    pub fn create_node_with(
        &mut self,
        parent: Option<TransformKey>,
        local_position: Vec3,
        local_rotation: Quat,
    ) -> Result<TransformKey> {
        if let Some(parent_key) = parent {
            if !self.nodes.contains_key(parent_key) {
                return Err(engine_err!(Error::InvalidNode, "focuscam::TransformStore",
                    "Parent node {:?} does not exist", parent_key));
            }
        }

        let key = self.nodes.insert(TransformNode::new(parent, local_position, local_rotation));
        if let Some(parent_key) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent_key) {
                parent_node.children.push(key);
            }
        }
        Ok(key)
    }

    /// Remove a node and its whole subtree. Returns the number of removed nodes.
    pub fn remove_node(&mut self, key: TransformKey) -> Result<usize> {
        let parent = self.get(key)?.parent;
        if let Some(parent_key) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent_key) {
                parent_node.children.retain(|child| *child != key);
            }
        }

        let mut removed = 0;
        let mut pending = vec![key];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.remove(current) {
                pending.extend(node.children);
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn parent(&self, key: TransformKey) -> Result<Option<TransformKey>> {
        Ok(self.get(key)?.parent)
    }

    // ===== LOCAL POSE =====

    pub fn local_position(&self, key: TransformKey) -> Result<Vec3> {
        Ok(self.get(key)?.local_position)
    }

    pub fn set_local_position(&mut self, key: TransformKey, position: Vec3) -> Result<()> {
        self.get_mut(key)?.local_position = position;
        Ok(())
    }

    pub fn local_rotation(&self, key: TransformKey) -> Result<Quat> {
        Ok(self.get(key)?.local_rotation)
    }

    pub fn set_local_rotation(&mut self, key: TransformKey, rotation: Quat) -> Result<()> {
        self.get_mut(key)?.local_rotation = rotation;
        Ok(())
    }

    // ===== WORLD POSE =====

    /// World position and rotation, composed from the root down.
    pub fn world_pose(&self, key: TransformKey) -> Result<(Vec3, Quat)> {
        let node = self.get(key)?;
        match node.parent {
            None => Ok((node.local_position, node.local_rotation)),
            Some(parent_key) => {
                let (parent_position, parent_rotation) = self.world_pose(parent_key)?;
                Ok((
                    parent_position + parent_rotation * node.local_position,
                    parent_rotation * node.local_rotation,
                ))
            }
        }
    }

    pub fn world_position(&self, key: TransformKey) -> Result<Vec3> {
        Ok(self.world_pose(key)?.0)
    }

    pub fn world_rotation(&self, key: TransformKey) -> Result<Quat> {
        Ok(self.world_pose(key)?.1)
    }

    /// Move a node so its world position equals `position`.
    pub fn set_world_position(&mut self, key: TransformKey, position: Vec3) -> Result<()> {
        let local = match self.get(key)?.parent {
            None => position,
            Some(parent_key) => {
                let (parent_position, parent_rotation) = self.world_pose(parent_key)?;
                parent_rotation.inverse() * (position - parent_position)
            }
        };
        self.set_local_position(key, local)
    }

    /// Rotate a node so its world rotation equals `rotation`.
    pub fn set_world_rotation(&mut self, key: TransformKey, rotation: Quat) -> Result<()> {
        let local = match self.get(key)?.parent {
            None => rotation,
            Some(parent_key) => self.world_rotation(parent_key)?.inverse() * rotation,
        };
        self.set_local_rotation(key, local.normalize())
    }

    /// Rotate a node by `degrees` about a world-space `axis`.
    ///
    /// Zero angles and zero axes leave the node untouched.
    pub fn rotate_world(&mut self, key: TransformKey, axis: Vec3, degrees: f32) -> Result<()> {
        let world = self.world_rotation(key)?;
        let axis = match axis.try_normalize() {
            Some(axis) if degrees != 0.0 => axis,
            _ => return Ok(()),
        };
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians()) * world;
        self.set_world_rotation(key, rotation)
    }

    // ===== DIRECTIONS =====

    /// World-space forward (+Z) of a node.
    pub fn forward(&self, key: TransformKey) -> Result<Vec3> {
        Ok(self.world_rotation(key)? * Vec3::Z)
    }

    /// World-space up (+Y) of a node.
    pub fn up(&self, key: TransformKey) -> Result<Vec3> {
        Ok(self.world_rotation(key)? * Vec3::Y)
    }

    /// World-space right (+X) of a node.
    pub fn right(&self, key: TransformKey) -> Result<Vec3> {
        Ok(self.world_rotation(key)? * Vec3::X)
    }

    // ===== INTERNAL =====

    fn get(&self, key: TransformKey) -> Result<&TransformNode> {
        self.nodes.get(key).ok_or_else(|| engine_err!(Error::InvalidNode,
            "focuscam::TransformStore", "Node {:?} does not exist", key))
    }

    fn get_mut(&mut self, key: TransformKey) -> Result<&mut TransformNode> {
        self.nodes.get_mut(key).ok_or_else(|| engine_err!(Error::InvalidNode,
            "focuscam::TransformStore", "Node {:?} does not exist", key))
    }
}

#[cfg(test)]
#[path = "transform_store_tests.rs"]
mod tests;
