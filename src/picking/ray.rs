use glam::{Vec2, Vec3, Vec4};

use crate::bounds::BoundingBox;
use crate::camera::core::Camera;

/// Convert a pixel position (origin top-left, y down) to normalized device
/// coordinates (origin center, y up, both axes in `[-1, 1]`).
///
/// A zero-sized viewport maps everything to the center.
#[must_use]
pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through an NDC point.
    ///
    /// The NDC point is unprojected at the far plane and the ray points from
    /// the eye toward it, so every object under the cursor lies on the ray.
    #[must_use]
    pub fn from_camera(ndc: Vec2, camera: &Camera) -> Self {
        let inv_view_proj = camera.build_matrix().inverse();
        let far_clip = Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far_world = inv_view_proj * far_clip;
        let far_point = far_world.truncate() / far_world.w;

        Self::new(camera.eye, far_point - camera.eye)
    }

    /// Ray from the camera eye through a pixel of a `width` x `height`
    /// viewport.
    #[must_use]
    pub fn from_screen(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        camera: &Camera,
    ) -> Self {
        Self::from_camera(screen_to_ndc(x, y, width, height), camera)
    }

    /// Point at distance `t` along the ray.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test against an axis-aligned box.
    ///
    /// Returns the distance to the entry point, or to the exit point when the
    /// origin is inside the box. `None` when the ray misses, the box is
    /// behind the origin, or the box is empty.
    #[must_use]
    pub fn intersect_aabb(&self, bounds: &BoundingBox) -> Option<f32> {
        if bounds.is_empty() {
            return None;
        }

        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];
            let lo = bounds.min[axis];
            let hi = bounds.max[axis];

            if dir.abs() < f32::EPSILON {
                // parallel to this slab
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv_dir = 1.0 / dir;
            let mut t1 = (lo - origin) * inv_dir;
            let mut t2 = (hi - origin) * inv_dir;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }

            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }

        if t_min >= 0.0 {
            Some(t_min)
        } else if t_max >= 0.0 {
            Some(t_max)
        } else {
            None
        }
    }
}
