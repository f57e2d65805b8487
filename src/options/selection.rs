use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
/// Click handling and selection animation parameters.
pub struct SelectionOptions {
    /// Height of a piece resting on the board.
    #[schemars(skip)]
    pub rest_height: f32,
    /// Height a selected piece is lifted to.
    #[schemars(title = "Lift Height", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub lift_height: f32,
    /// Seconds per animation step (lift, drop, slide).
    #[schemars(title = "Step Duration", range(min = 0.05, max = 3.0), extend("step" = 0.05))]
    pub step_duration: f32,
    /// Maximum gap between two clicks of a double click, in milliseconds.
    #[schemars(title = "Double Click (ms)", range(min = 100, max = 1000))]
    pub double_click_ms: u64,
    /// Cursor travel in pixels that turns a press into a drag.
    #[schemars(skip)]
    pub drag_threshold: f32,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            rest_height: 0.3,
            lift_height: 4.0,
            step_duration: 1.0,
            double_click_ms: 400,
            drag_threshold: 4.0,
        }
    }
}
