//! Minimal scene tree for framing and picking.
//!
//! The host renderer keeps the real scene graph. This tree mirrors only what
//! vantage needs: names, parent links, transforms, and local geometry
//! bounds. World bounds of a subtree match what recomputing a box from every
//! mesh under a node would give.

mod node;

use glam::{Affine3A, Vec3};
pub use node::{NodeId, SceneNode, Transform};
use rustc_hash::FxHashMap;

use crate::bounds::BoundingBox;
use crate::error::VantageError;
use crate::picking::Ray;

// ---------------------------------------------------------------------------
// Intersection
// ---------------------------------------------------------------------------

/// A ray hit against one node's world-space geometry bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Node that was hit.
    pub node: NodeId,
    /// Distance along the ray.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Flat node storage with parent/child links and a name index.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    by_name: FxHashMap<String, Vec<NodeId>>,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Generation counter, bumped whenever a node is added or moved. Hosts
    /// compare it to decide whether to resync their renderables.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Add a node under `parent` (or at the top level).
    pub fn add(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        transform: Transform,
        geometry: Option<BoundingBox>,
    ) -> Result<NodeId, VantageError> {
        if let Some(p) = parent {
            if p.0 >= self.nodes.len() {
                return Err(VantageError::UnknownNode(p.0));
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.to_owned(),
            parent,
            children: Vec::new(),
            transform,
            geometry,
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        self.by_name.entry(name.to_owned()).or_default().push(id);
        self.generation += 1;
        Ok(id)
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// First node added with this name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).and_then(|ids| ids.first().copied())
    }

    /// Every node with this name, in insertion order.
    #[must_use]
    pub fn find_all_named(&self, name: &str) -> &[NodeId] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Local transform of a node.
    #[must_use]
    pub fn transform(&self, id: NodeId) -> Option<Transform> {
        self.node(id).map(|n| n.transform)
    }

    /// Mutable local transform of a node. Bumps the generation.
    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        let node = self.nodes.get_mut(id.0)?;
        self.generation += 1;
        Some(&mut node.transform)
    }

    /// Node to world transform, composing every ancestor.
    #[must_use]
    pub fn world_transform(&self, id: NodeId) -> Option<Affine3A> {
        let mut node = self.node(id)?;
        let mut world = node.transform.to_affine();
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            world = node.transform.to_affine() * world;
        }
        Some(world)
    }

    /// Ids of `id` and all its descendants, depth-first, parents before
    /// children.
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// World-space bounds of a node's own geometry.
    #[must_use]
    pub fn geometry_world_bounds(&self, id: NodeId) -> Option<BoundingBox> {
        let geometry = self.node(id)?.geometry?;
        Some(geometry.transformed(&self.world_transform(id)?))
    }

    /// World-space bounds of all geometry under a node. Empty when the
    /// subtree has no geometry.
    pub fn world_bounds(&self, id: NodeId) -> Result<BoundingBox, VantageError> {
        if self.node(id).is_none() {
            return Err(VantageError::UnknownNode(id.0));
        }
        Ok(self
            .subtree(id)
            .into_iter()
            .filter_map(|n| self.geometry_world_bounds(n))
            .fold(BoundingBox::EMPTY, |acc, b| acc.union(&b)))
    }

    /// The top-level node containing `id` (itself when it has no parent).
    #[must_use]
    pub fn top_level_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            match self.node(current)?.parent {
                Some(parent) => current = parent,
                None => return Some(current),
            }
        }
    }

    fn intersect_nodes(
        &self,
        ray: &Ray,
        ids: impl IntoIterator<Item = NodeId>,
    ) -> Vec<Intersection> {
        let mut hits: Vec<Intersection> = ids
            .into_iter()
            .filter_map(|node| {
                let bounds = self.geometry_world_bounds(node)?;
                let distance = ray.intersect_aabb(&bounds)?;
                Some(Intersection {
                    node,
                    distance,
                    point: ray.point_at(distance),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Every node with geometry hit by the ray, nearest first.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Vec<Intersection> {
        self.intersect_nodes(ray, (0..self.nodes.len()).map(NodeId))
    }

    /// Nodes under `id` (inclusive) hit by the ray, nearest first.
    #[must_use]
    pub fn raycast_subtree(&self, ray: &Ray, id: NodeId) -> Vec<Intersection> {
        self.intersect_nodes(ray, self.subtree(id))
    }
}
