use glam::{Mat3, Quat, Vec2, Vec3};

use crate::bounds::BoundingBox;
use crate::camera::core::Camera;
use crate::camera::fit::{ViewFitter, ViewRequest, ViewResult};
use crate::error::VantageError;
use crate::options::{CameraOptions, FramingOptions};

/// Orbit-style camera controls: the camera circles a focus point (the orbit
/// target) at some distance, along `orientation * Z`.
#[derive(Debug, Clone)]
pub struct OrbitController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    /// Camera driven by this controller.
    pub camera: Camera,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
    fitter: ViewFitter,
}

impl OrbitController {
    /// Controller looking at the origin from `distance` along `+Z`.
    #[must_use]
    pub fn new(
        camera_options: &CameraOptions,
        framing_options: &FramingOptions,
        aspect: f32,
        distance: f32,
    ) -> Self {
        let focus_point = Vec3::ZERO;
        let orientation = Quat::IDENTITY;
        let camera = Camera::from_options(
            camera_options,
            focus_point + Vec3::Z * distance,
            aspect,
        );

        Self {
            orientation,
            distance,
            focus_point,
            camera,
            rotate_speed: camera_options.rotate_speed,
            pan_speed: camera_options.pan_speed,
            zoom_speed: camera_options.zoom_speed,
            min_distance: camera_options.min_distance,
            max_distance: camera_options.max_distance,
            fitter: ViewFitter::from_options(framing_options),
        }
    }

    /// Current orbit target.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Current distance from the camera to the orbit target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current orbit orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Update the aspect ratio after a viewport resize. A zero height is
    /// ignored (minimized window).
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Orbit by a drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal_rotation =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal_rotation * self.orientation;

        // Vertical rotation around camera's right vector (after horizontal
        // rotation)
        let right = self.orientation * Vec3::X;
        let vertical_rotation =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical_rotation * self.orientation).normalize();

        self.update_camera_pos();
    }

    /// Move the orbit target in the camera's screen plane by a drag delta in
    /// pixels. Pan speed scales with distance so the target tracks the
    /// cursor at any zoom level.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let scale = self.pan_speed * self.distance;

        let translation = right * (-delta.x * scale) + up * (delta.y * scale);

        self.focus_point += translation;
        self.update_camera_pos();
    }

    /// Dolly toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Place the camera at a framing result and make its target the new
    /// orbit target.
    pub fn apply_view(&mut self, view: &ViewResult) {
        let direction = view.direction();
        self.focus_point = view.look_at_target;
        self.distance = view.distance();
        if direction != Vec3::ZERO {
            self.orientation = upright_orientation(direction);
        }
        self.update_camera_pos();
    }

    /// Frame a bounding box at the camera's current field of view from
    /// `pitch_degrees`, then apply it.
    ///
    /// Padding and the minimum framing distance come from the
    /// [`FramingOptions`] given at construction.
    pub fn frame_bounds(
        &mut self,
        bounds: &BoundingBox,
        pitch_degrees: f32,
    ) -> Result<ViewResult, VantageError> {
        let request = ViewRequest {
            bounds: *bounds,
            vertical_fov_degrees: self.camera.fovy,
            pitch_degrees,
        };
        let view = self.fitter.frame(&request)?;
        log::debug!(
            "framing {:?} at pitch {pitch_degrees}: eye {:?} distance {:.3}",
            bounds.center(),
            view.camera_position,
            view.distance()
        );
        self.apply_view(&view);
        Ok(view)
    }

    /// Adjust camera to fit the given positions, keeping the current viewing
    /// direction. Does nothing for an empty slice.
    pub fn fit_to_positions(
        &mut self,
        positions: &[Vec3],
    ) -> Result<(), VantageError> {
        if positions.is_empty() {
            return Ok(());
        }

        let bounds = BoundingBox::from_points(positions.iter().copied());
        let request = ViewRequest {
            bounds,
            vertical_fov_degrees: self.camera.fovy,
            pitch_degrees: 90.0,
        };
        let exact = self.fitter.frame(&request)?;

        // Keep the orientation; only the target and distance move.
        self.focus_point = exact.look_at_target;
        self.distance = exact.distance();
        self.update_camera_pos();
        Ok(())
    }
}

/// Orientation whose `Z` axis is `direction` and whose `Y` axis stays in
/// the plane of world up and `direction`, so the camera never rolls. Looking
/// straight along world up has no such plane and falls back to the shortest
/// arc from `Z`.
fn upright_orientation(direction: Vec3) -> Quat {
    let dir = direction.normalize();
    let right = Vec3::Y.cross(dir);
    if right.length_squared() < 1e-8 {
        return Quat::from_rotation_arc(Vec3::Z, dir);
    }
    let right = right.normalize();
    let up = dir.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, dir)).normalize()
}
