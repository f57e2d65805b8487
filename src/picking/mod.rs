//! CPU ray picking.
//!
//! Converts a pointer position into a world-space [`Ray`] through the camera
//! and intersects it with bounding boxes. Scene-level raycasting over node
//! trees lives in [`crate::scene::Scene::raycast`].

mod ray;

pub use ray::{screen_to_ndc, Ray};
