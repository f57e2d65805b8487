use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Rotation sensitivity (radians per pixel of drag).
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity (world units per pixel of drag, per unit of distance).
    #[schemars(title = "Pan Speed", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub pan_speed: f32,
    /// Zoom sensitivity (fraction of distance per scroll step).
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the orbit camera may zoom to its target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the orbit camera may zoom from its target.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 100.0,
            rotate_speed: 0.01,
            pan_speed: 0.002,
            zoom_speed: 0.05,
            min_distance: 0.01,
            max_distance: 1000.0,
        }
    }
}
