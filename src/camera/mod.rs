//! Camera system for framing and viewing 3D scenes.
//!
//! Provides a perspective camera, the bounding-box framing math, an orbital
//! controller that applies framing results, and frustum tests.

/// Orbital camera controller managing rotation, pan, zoom, and framing.
pub mod controller;
/// Core perspective camera and its matrices.
pub mod core;
/// Bounding-box auto-framing (the view fitter).
pub mod fit;
/// View frustum extraction and intersection tests.
pub mod frustum;

pub use self::core::Camera;
pub use controller::OrbitController;
pub use fit::{fit, ViewFitter, ViewRequest, ViewResult};
pub use frustum::Frustum;
