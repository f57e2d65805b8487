//! Drives node transforms from running motions.

use std::time::Duration;

use glam::Vec3;

use super::timeline::Timeline;
use crate::scene::{NodeId, Scene};

/// Planned movement of one node: an optional translation timeline and an
/// optional spin (rotation about `+Y`, radians) timeline, started together.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    /// Node being moved.
    pub node: NodeId,
    /// Translation over time.
    pub position: Option<Timeline<Vec3>>,
    /// Rotation about `+Y` over time.
    pub spin: Option<Timeline<f32>>,
}

impl Motion {
    /// Motion that changes nothing until channels are added.
    #[must_use]
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            position: None,
            spin: None,
        }
    }

    /// Set the translation timeline.
    #[must_use]
    pub fn with_position(mut self, timeline: Timeline<Vec3>) -> Self {
        self.position = Some(timeline);
        self
    }

    /// Set the spin timeline.
    #[must_use]
    pub fn with_spin(mut self, timeline: Timeline<f32>) -> Self {
        self.spin = Some(timeline);
        self
    }

    /// Length of the longest channel, in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        let position = self.position.as_ref().map_or(0.0, Timeline::duration);
        let spin = self.spin.as_ref().map_or(0.0, Timeline::duration);
        position.max(spin)
    }
}

#[derive(Debug)]
struct ActiveMotion {
    motion: Motion,
    elapsed: f32,
}

/// Plays motions against a [`Scene`].
#[derive(Debug, Default)]
pub struct Animator {
    active: Vec<ActiveMotion>,
}

impl Animator {
    /// Animator with nothing running.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a motion. A motion already running on the same node is
    /// replaced; the new one picks up from wherever the node is now.
    pub fn start(&mut self, motion: Motion) {
        self.active.retain(|a| a.motion.node != motion.node);
        log::debug!(
            "starting motion on node {} ({:.2}s)",
            motion.node.0,
            motion.duration()
        );
        self.active.push(ActiveMotion {
            motion,
            elapsed: 0.0,
        });
    }

    /// Start several motions.
    pub fn start_all(&mut self, motions: impl IntoIterator<Item = Motion>) {
        for motion in motions {
            self.start(motion);
        }
    }

    /// Whether any motion is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    /// Whether a motion is running on `node`.
    #[must_use]
    pub fn is_animating_node(&self, node: NodeId) -> bool {
        self.active.iter().any(|a| a.motion.node == node)
    }

    /// Advance every motion by `dt` and write the sampled values into the
    /// scene. Finished motions are written at their final value and dropped.
    pub fn update(&mut self, dt: Duration, scene: &mut Scene) {
        let dt = dt.as_secs_f32();
        for active in &mut self.active {
            active.elapsed += dt;
            let t = active.elapsed;
            let Some(transform) = scene.transform_mut(active.motion.node) else {
                continue;
            };
            if let Some(position) = &active.motion.position {
                transform.translation = position.sample(t);
            }
            if let Some(spin) = &active.motion.spin {
                transform.rotation_y = spin.sample(t);
            }
        }
        self.active
            .retain(|a| a.elapsed < a.motion.duration() && scene.node(a.motion.node).is_some());
    }
}
