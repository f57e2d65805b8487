use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Framing", inline)]
#[serde(default)]
/// How picked objects are framed by the camera.
pub struct FramingOptions {
    /// Pitch in degrees used when framing a picked object.
    #[schemars(title = "Object Pitch", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub object_pitch: f32,
    /// Pitch in degrees used when framing the stage (nothing picked).
    #[schemars(title = "Stage Pitch", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub stage_pitch: f32,
    /// Multiplier on the exact-fit distance.
    #[schemars(title = "Padding", range(min = 1.0, max = 3.0), extend("step" = 0.05))]
    pub padding: f32,
    /// Closest a framed camera may be placed to its target.
    #[schemars(skip)]
    pub min_distance: f32,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            object_pitch: 70.0,
            stage_pitch: 45.0,
            padding: 1.0,
            min_distance: 0.1,
        }
    }
}
