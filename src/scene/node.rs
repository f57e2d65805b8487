use glam::{Affine3A, Quat, Vec3};

use crate::bounds::BoundingBox;

/// Index of a node inside its [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Local transform of a node relative to its parent: uniform scale, then a
/// rotation about `+Y`, then a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Offset from the parent origin.
    pub translation: Vec3,
    /// Rotation about the local `+Y` axis, in radians.
    pub rotation_y: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No scale, rotation, or translation.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation_y: 0.0,
        scale: 1.0,
    };

    /// Pure translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Equivalent affine matrix.
    #[must_use]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            self.translation,
        )
    }
}

/// One object in the scene tree.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Name used for lookups (not required to be unique).
    pub name: String,
    /// Parent node, `None` for top-level nodes.
    pub parent: Option<NodeId>,
    /// Child nodes in insertion order.
    pub children: Vec<NodeId>,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Local-space bounds of this node's own geometry, if it has any.
    pub geometry: Option<BoundingBox>,
}
