//! Tween-based animation for moving scene nodes.
//!
//! A [`Tween`] eases one value between two endpoints, a [`Timeline`] chains
//! tweens back to back, and the [`Animator`] plays [`Motion`]s (per-node
//! translation and spin timelines) against a [`Scene`](crate::scene::Scene).

mod animator;
pub mod easing;
mod timeline;
mod tween;

pub use animator::{Animator, Motion};
pub use easing::EasingFunction;
pub use timeline::Timeline;
pub use tween::{Interpolate, Tween};
