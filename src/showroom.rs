//! Double-click-to-frame model viewer.
//!
//! Models sit side by side on a stage. Double-clicking a model frames it at
//! the object pitch; double-clicking anywhere else frames the whole stage at
//! the stage pitch.

use glam::{Vec2, Vec3};

use crate::bounds::BoundingBox;
use crate::camera::controller::OrbitController;
use crate::camera::fit::ViewResult;
use crate::error::VantageError;
use crate::options::FramingOptions;
use crate::picking::Ray;
use crate::scene::{NodeId, Scene, Transform};

/// Node name given to every model.
pub const MODEL_NAME: &str = "car";
/// Node name of the stage.
pub const STAGE_NAME: &str = "box";

/// Transform that scales a model to unit depth, spreads models evenly
/// across `x` in `[-0.5, 0.5]`, and rests the model's lowest point on
/// `y = 0`.
///
/// `bounds` are the model's own (untransformed) bounds; `index` is its slot
/// out of `count`.
pub fn place_model(
    bounds: &BoundingBox,
    index: usize,
    count: usize,
) -> Result<Transform, VantageError> {
    if bounds.is_empty() {
        return Err(VantageError::EmptyBounds);
    }
    let depth = bounds.size().z;
    if depth <= 0.0 {
        return Err(VantageError::DegenerateModel);
    }

    let scale = 1.0 / depth;
    let tx = if count > 1 {
        index as f32 / (count - 1) as f32 - 0.5
    } else {
        0.0
    };

    Ok(Transform {
        translation: Vec3::new(tx, -bounds.min.y * scale, 0.0),
        rotation_y: 0.0,
        scale,
    })
}

/// What a double click ended up framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramedTarget {
    /// Framed node (a model or the stage).
    pub node: NodeId,
    /// Whether the node is a model (as opposed to the stage).
    pub is_model: bool,
    /// Camera placement that was applied.
    pub view: ViewResult,
}

/// Scene of models on a stage, framed on double click.
#[derive(Debug, Clone)]
pub struct Showroom {
    /// Stage and models.
    pub scene: Scene,
    stage: NodeId,
    models: Vec<NodeId>,
    framing: FramingOptions,
}

impl Showroom {
    /// Showroom with a stage whose geometry spans `stage_bounds`.
    pub fn new(
        stage_bounds: BoundingBox,
        framing: FramingOptions,
    ) -> Result<Self, VantageError> {
        let mut scene = Scene::new();
        let stage = scene.add(
            STAGE_NAME,
            None,
            Transform::IDENTITY,
            Some(stage_bounds),
        )?;
        Ok(Self {
            scene,
            stage,
            models: Vec::new(),
            framing,
        })
    }

    /// Stage node.
    #[must_use]
    pub fn stage(&self) -> NodeId {
        self.stage
    }

    /// Model nodes in insertion order.
    #[must_use]
    pub fn models(&self) -> &[NodeId] {
        &self.models
    }

    /// Add a model with local geometry `bounds`, placed in slot `index` of
    /// `count` by [`place_model`].
    pub fn add_model(
        &mut self,
        bounds: BoundingBox,
        index: usize,
        count: usize,
    ) -> Result<NodeId, VantageError> {
        let transform = place_model(&bounds, index, count)?;
        let id = self.scene.add(MODEL_NAME, None, transform, Some(bounds))?;
        self.models.push(id);
        Ok(id)
    }

    /// First model (in insertion order) whose subtree the ray hits.
    #[must_use]
    pub fn pick_model(&self, ray: &Ray) -> Option<NodeId> {
        self.models
            .iter()
            .copied()
            .find(|&id| !self.scene.raycast_subtree(ray, id).is_empty())
    }

    /// Handle a double click at `ndc`: frame the picked model, or the stage
    /// when no model is under the cursor.
    pub fn on_double_click(
        &self,
        ndc: Vec2,
        controller: &mut OrbitController,
    ) -> Result<FramedTarget, VantageError> {
        let ray = Ray::from_camera(ndc, &controller.camera);
        let (node, is_model, pitch) = match self.pick_model(&ray) {
            Some(model) => (model, true, self.framing.object_pitch),
            None => (self.stage, false, self.framing.stage_pitch),
        };
        log::debug!(
            "double click at {ndc:?}: framing {} node {}",
            if is_model { "model" } else { "stage" },
            node.0
        );

        let bounds = self.scene.world_bounds(node)?;
        let view = controller.frame_bounds(&bounds, pitch)?;
        Ok(FramedTarget {
            node,
            is_model,
            view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::fit::approach_direction;
    use crate::options::CameraOptions;

    fn car_bounds() -> BoundingBox {
        // 2 wide, 1.5 tall (resting 0.25 below its origin), 4 deep
        BoundingBox::new(Vec3::new(-1.0, -0.25, -2.0), Vec3::new(1.0, 1.25, 2.0))
    }

    fn stage_bounds() -> BoundingBox {
        BoundingBox::new(Vec3::new(-1.2, -0.1, -1.2), Vec3::new(1.2, 0.0, 1.2))
    }

    fn showroom() -> Showroom {
        let mut room = Showroom::new(stage_bounds(), FramingOptions::default()).unwrap();
        let _ = room.add_model(car_bounds(), 0, 2).unwrap();
        let _ = room.add_model(car_bounds(), 1, 2).unwrap();
        room
    }

    fn controller() -> OrbitController {
        let mut c = OrbitController::new(
            &CameraOptions::default(),
            &FramingOptions::default(),
            1.0,
            1.8,
        );
        c.apply_view(&ViewResult {
            camera_position: Vec3::new(0.0, 1.0, 1.5),
            look_at_target: Vec3::ZERO,
        });
        c
    }

    #[test]
    fn placement_normalizes_depth_and_rests_on_ground() {
        let t = place_model(&car_bounds(), 0, 2).unwrap();
        assert!((t.scale - 0.25).abs() < 1e-6);
        assert!((t.translation.x + 0.5).abs() < 1e-6);
        assert!((t.translation.y - 0.0625).abs() < 1e-6);

        let t = place_model(&car_bounds(), 1, 2).unwrap();
        assert!((t.translation.x - 0.5).abs() < 1e-6);

        let t = place_model(&car_bounds(), 0, 1).unwrap();
        assert_eq!(t.translation.x, 0.0);
    }

    #[test]
    fn placement_rejects_flat_and_empty_models() {
        let flat = BoundingBox::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        assert!(matches!(
            place_model(&flat, 0, 1),
            Err(VantageError::DegenerateModel)
        ));
        assert!(matches!(
            place_model(&BoundingBox::EMPTY, 0, 1),
            Err(VantageError::EmptyBounds)
        ));
    }

    #[test]
    fn placed_model_sits_on_stage() {
        let room = showroom();
        let wb = room.scene.world_bounds(room.models()[0]).unwrap();
        assert!(wb.min.y.abs() < 1e-6);
        assert!((wb.size().z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn double_click_on_model_frames_it() {
        let room = showroom();
        let mut c = controller();
        let target_model = room.models()[1];
        let center = room.scene.world_bounds(target_model).unwrap().center();

        // aim straight at the model's center
        let ray_dir = (center - c.camera.eye).normalize();
        let clip = c.camera.build_matrix() * (c.camera.eye + ray_dir).extend(1.0);
        let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);

        let framed = room.on_double_click(ndc, &mut c).unwrap();
        assert!(framed.is_model);
        assert_eq!(framed.node, target_model);
        assert!((framed.view.look_at_target - center).length() < 1e-5);
        assert!((c.focus_point() - center).length() < 1e-5);
        let expected_dir = approach_direction(FramingOptions::default().object_pitch);
        assert!((framed.view.direction() - expected_dir).length() < 1e-4);
    }

    #[test]
    fn double_click_on_empty_space_frames_stage() {
        let room = showroom();
        let mut c = controller();
        // top-left corner of the view looks past everything
        let framed = room.on_double_click(Vec2::new(-1.0, 1.0), &mut c).unwrap();
        assert!(!framed.is_model);
        assert_eq!(framed.node, room.stage());
        let stage_center = stage_bounds().center();
        assert!((framed.view.look_at_target - stage_center).length() < 1e-5);
        let expected_dir = approach_direction(FramingOptions::default().stage_pitch);
        assert!((framed.view.direction() - expected_dir).length() < 1e-4);
    }

    #[test]
    fn overlapping_models_pick_earliest_inserted() {
        let mut room = showroom();
        let first = room.models()[0];
        let second = room.models()[1];
        // line both models up on the z axis, the later one nearer the camera
        room.scene.transform_mut(first).unwrap().translation = Vec3::new(0.0, 0.0625, -3.0);
        room.scene.transform_mut(second).unwrap().translation = Vec3::new(0.0, 0.0625, 0.0);

        let ray = Ray::new(Vec3::new(0.0, 0.2, 5.0), Vec3::NEG_Z);
        assert_eq!(room.scene.raycast(&ray)[0].node, second);
        assert_eq!(room.pick_model(&ray), Some(first));

        let mut c = controller();
        c.apply_view(&ViewResult {
            camera_position: Vec3::new(0.0, 0.2, 5.0),
            look_at_target: Vec3::new(0.0, 0.2, 0.0),
        });
        let framed = room.on_double_click(Vec2::ZERO, &mut c).unwrap();
        assert!(framed.is_model);
        assert_eq!(framed.node, first);
        let center = room.scene.world_bounds(first).unwrap().center();
        assert!((framed.view.look_at_target - center).length() < 1e-5);
    }
}
