//! Bounding-box auto-framing.
//!
//! [`fit`] computes where a perspective camera must stand so that the
//! bounding sphere of a box exactly fills the vertical field of view, when
//! approached from a given pitch. It is a pure function: no state, no I/O,
//! identical inputs give identical outputs.
//!
//! The approach direction is `+Y` rotated about world `+X` by the pitch, in a
//! right-handed Y-up frame:
//!
//! | pitch | direction      | view                     |
//! |-------|----------------|--------------------------|
//! | 0°    | `(0, 1, 0)`    | straight down from above |
//! | 45°   | `(0, .71, .71)`| elevated, in front       |
//! | 90°   | `(0, 0, 1)`    | level, in front          |
//! | 180°  | `(0, -1, 0)`   | straight up from below   |
//!
//! [`ViewFitter`] wraps [`fit`] with the two adjustments a host usually
//! wants: padding around the object and a minimum distance, so a degenerate
//! box never puts the camera on top of its target.

use glam::{Quat, Vec3};

use crate::bounds::BoundingBox;
use crate::error::VantageError;
use crate::options::FramingOptions;

/// Inputs to one framing computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRequest {
    /// Box to frame.
    pub bounds: BoundingBox,
    /// Camera vertical field of view in degrees, inside (0, 180).
    pub vertical_fov_degrees: f32,
    /// Pitch of the approach direction in degrees.
    pub pitch_degrees: f32,
}

impl ViewRequest {
    /// Run [`fit`] on this request.
    pub fn fit(&self) -> Result<ViewResult, VantageError> {
        fit(&self.bounds, self.vertical_fov_degrees, self.pitch_degrees)
    }
}

/// Camera placement produced by [`fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewResult {
    /// Where to put the camera eye.
    pub camera_position: Vec3,
    /// Where the camera (and any orbit target) should look.
    pub look_at_target: Vec3,
}

impl ViewResult {
    /// Distance from the camera to its target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.camera_position.distance(self.look_at_target)
    }

    /// Unit vector from the target toward the camera, or zero when the two
    /// coincide.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.camera_position - self.look_at_target).normalize_or_zero()
    }
}

/// Unit approach direction for a pitch angle: `+Y` rotated about `+X`.
#[must_use]
pub fn approach_direction(pitch_degrees: f32) -> Vec3 {
    Quat::from_rotation_x(pitch_degrees.to_radians()) * Vec3::Y
}

/// Distance at which a sphere of `radius` exactly fills a vertical field of
/// view. The caller guarantees the field of view is inside (0, 180).
#[must_use]
pub fn fit_distance(radius: f32, vertical_fov_degrees: f32) -> f32 {
    radius / (vertical_fov_degrees * 0.5).to_radians().tan()
}

/// Frame `bounds` for a camera with the given vertical field of view,
/// approaching from `pitch_degrees`.
///
/// The camera lands at `center + direction * radius / tan(fov / 2)`, where
/// `radius` is half the box diagonal.
///
/// # Errors
///
/// - [`VantageError::InvalidFieldOfView`] when the field of view is not a
///   finite value strictly between 0 and 180 degrees.
/// - [`VantageError::InvalidPitch`] when the pitch is NaN or infinite.
/// - [`VantageError::EmptyBounds`] when `bounds` contains nothing.
///
/// A degenerate box (`min == max`) is not an error; it yields a zero
/// distance with the camera on the center.
pub fn fit(
    bounds: &BoundingBox,
    vertical_fov_degrees: f32,
    pitch_degrees: f32,
) -> Result<ViewResult, VantageError> {
    if !(vertical_fov_degrees > 0.0 && vertical_fov_degrees < 180.0) {
        return Err(VantageError::InvalidFieldOfView(vertical_fov_degrees));
    }
    if !pitch_degrees.is_finite() {
        return Err(VantageError::InvalidPitch(pitch_degrees));
    }
    if bounds.is_empty() {
        return Err(VantageError::EmptyBounds);
    }

    let center = bounds.center();
    let distance = fit_distance(bounds.radius(), vertical_fov_degrees);
    let direction = approach_direction(pitch_degrees);

    Ok(ViewResult {
        camera_position: center + direction * distance,
        look_at_target: center,
    })
}

/// Host-level fitter that pads the framing distance and clamps it to a
/// minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFitter {
    /// Multiplier on the exact-fit distance (1.0 = sphere touches the view
    /// edges).
    pub padding: f32,
    /// Closest the camera may be placed to its target.
    pub min_distance: f32,
}

impl Default for ViewFitter {
    fn default() -> Self {
        Self::from_options(&FramingOptions::default())
    }
}

impl ViewFitter {
    /// Build a fitter from framing options. Negative or non-finite values
    /// fall back to no padding and a zero minimum.
    #[must_use]
    pub fn from_options(options: &FramingOptions) -> Self {
        let padding = if options.padding.is_finite() && options.padding > 0.0 {
            options.padding
        } else {
            1.0
        };
        let min_distance = if options.min_distance.is_finite() {
            options.min_distance.max(0.0)
        } else {
            0.0
        };
        Self {
            padding,
            min_distance,
        }
    }

    /// Padded, clamped camera distance for a validated request. Taken from
    /// the radius directly rather than from the exact-fit positions, which
    /// lose precision far from the origin.
    fn distance_for(&self, request: &ViewRequest) -> f32 {
        let padded = fit_distance(request.bounds.radius(), request.vertical_fov_degrees)
            * self.padding;
        let distance = padded.max(self.min_distance);
        if distance != padded {
            log::debug!(
                "framing distance {padded:.4} clamped to {:.4}",
                self.min_distance
            );
        }
        distance
    }

    /// Frame a request, then apply padding and the minimum distance.
    ///
    /// When the box is degenerate the exact-fit direction is still known from
    /// the pitch, so the clamped camera sits `min_distance` away along it.
    pub fn frame(&self, request: &ViewRequest) -> Result<ViewResult, VantageError> {
        let exact = request.fit()?;
        let distance = self.distance_for(request);
        let direction = approach_direction(request.pitch_degrees);
        Ok(ViewResult {
            camera_position: exact.look_at_target + direction * distance,
            look_at_target: exact.look_at_target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn unit_cube() -> BoundingBox {
        BoundingBox::new(Vec3::splat(-1.0), Vec3::ONE)
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn level_view_of_unit_cube() {
        let result = fit(&unit_cube(), 90.0, 90.0).unwrap();
        let sqrt3 = 3.0_f32.sqrt();
        assert!(approx(result.camera_position, Vec3::new(0.0, 0.0, sqrt3)));
        assert_eq!(result.look_at_target, Vec3::ZERO);
        assert!((result.distance() - sqrt3).abs() < EPS);
    }

    #[test]
    fn pitch_zero_looks_down() {
        let result = fit(&unit_cube(), 90.0, 0.0).unwrap();
        assert!(approx(result.direction(), Vec3::Y));
    }

    #[test]
    fn pitch_rotation_convention() {
        assert!(approx(approach_direction(90.0), Vec3::Z));
        assert!(approx(approach_direction(180.0), Vec3::NEG_Y));
        let half = std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx(approach_direction(45.0), Vec3::new(0.0, half, half)));
        // pitch is periodic
        assert!(approx(approach_direction(450.0), approach_direction(90.0)));
        assert!(approx(approach_direction(-270.0), approach_direction(90.0)));
    }

    #[test]
    fn identical_inputs_identical_outputs() {
        let b = BoundingBox::new(Vec3::new(-3.0, 0.5, 2.0), Vec3::new(1.0, 4.0, 9.0));
        let first = fit(&b, 60.0, 70.0).unwrap();
        let second = fit(&b, 60.0, 70.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn narrower_fov_stands_farther_back() {
        let b = unit_cube();
        let mut last = 0.0_f32;
        for fov in [170.0, 120.0, 90.0, 60.0, 30.0, 10.0, 1.0] {
            let d = fit(&b, fov, 45.0).unwrap().distance();
            assert!(d > last, "fov {fov}: {d} should exceed {last}");
            last = d;
        }
    }

    #[test]
    fn wide_fov_approaches_zero_distance() {
        let d = fit(&unit_cube(), 179.999, 90.0).unwrap().distance();
        assert!(d < 1e-3);
    }

    #[test]
    fn fov_out_of_range_is_rejected() {
        for fov in [0.0, -10.0, 180.0, 200.0, f32::NAN, f32::INFINITY] {
            let err = fit(&unit_cube(), fov, 45.0).unwrap_err();
            assert!(matches!(err, VantageError::InvalidFieldOfView(_)));
        }
    }

    #[test]
    fn non_finite_pitch_is_rejected() {
        let err = fit(&unit_cube(), 45.0, f32::NAN).unwrap_err();
        assert!(matches!(err, VantageError::InvalidPitch(_)));
    }

    #[test]
    fn empty_bounds_are_rejected() {
        let err = fit(&BoundingBox::EMPTY, 45.0, 45.0).unwrap_err();
        assert!(matches!(err, VantageError::EmptyBounds));
    }

    #[test]
    fn degenerate_box_puts_camera_on_center() {
        let p = Vec3::new(2.0, -1.0, 7.0);
        let result = fit(&BoundingBox::new(p, p), 45.0, 70.0).unwrap();
        assert_eq!(result.camera_position, p);
        assert_eq!(result.look_at_target, p);
        assert_eq!(result.distance(), 0.0);
    }

    #[test]
    fn center_independent_of_pitch_and_fov() {
        let b = BoundingBox::new(Vec3::ZERO, Vec3::new(4.0, 2.0, 6.0));
        for (fov, pitch) in [(30.0, 0.0), (75.0, 45.0), (120.0, 170.0)] {
            let result = fit(&b, fov, pitch).unwrap();
            assert_eq!(result.look_at_target, Vec3::new(2.0, 1.0, 3.0));
        }
    }

    #[test]
    fn request_matches_free_function() {
        let request = ViewRequest {
            bounds: unit_cube(),
            vertical_fov_degrees: 75.0,
            pitch_degrees: 70.0,
        };
        assert_eq!(request.fit().unwrap(), fit(&unit_cube(), 75.0, 70.0).unwrap());
    }

    #[test]
    fn fitter_clamps_degenerate_box() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let fitter = ViewFitter {
            padding: 1.0,
            min_distance: 0.5,
        };
        let request = ViewRequest {
            bounds: BoundingBox::new(p, p),
            vertical_fov_degrees: 45.0,
            pitch_degrees: 90.0,
        };
        let result = fitter.frame(&request).unwrap();
        assert_eq!(result.look_at_target, p);
        assert_ne!(result.camera_position, result.look_at_target);
        assert!((result.distance() - 0.5).abs() < EPS);
        assert!(approx(result.direction(), Vec3::Z));
    }

    #[test]
    fn fitter_applies_padding() {
        let fitter = ViewFitter {
            padding: 1.5,
            min_distance: 0.0,
        };
        let request = ViewRequest {
            bounds: unit_cube(),
            vertical_fov_degrees: 90.0,
            pitch_degrees: 90.0,
        };
        let result = fitter.frame(&request).unwrap();
        assert!((result.distance() - 1.5 * 3.0_f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn fitter_distance_ignores_distance_from_origin() {
        let fitter = ViewFitter {
            padding: 1.25,
            min_distance: 0.0,
        };
        let far = Vec3::new(3.0e5, -2.0e5, 1.0e5);
        let request = ViewRequest {
            bounds: BoundingBox::new(far - Vec3::splat(50.0), far + Vec3::splat(50.0)),
            vertical_fov_degrees: 60.0,
            pitch_degrees: 70.0,
        };
        let expected = fit_distance(request.bounds.radius(), 60.0) * 1.25;
        assert!(expected > 0.0);
        assert_eq!(fitter.distance_for(&request), expected);
        assert!(fitter.frame(&request).is_ok());
    }

    #[test]
    fn fitter_from_options_sanitizes() {
        let opts = FramingOptions {
            padding: -2.0,
            min_distance: f32::NAN,
            ..FramingOptions::default()
        };
        let fitter = ViewFitter::from_options(&opts);
        assert_eq!(fitter.padding, 1.0);
        assert_eq!(fitter.min_distance, 0.0);
    }

    #[test]
    fn fitter_propagates_errors() {
        let request = ViewRequest {
            bounds: unit_cube(),
            vertical_fov_degrees: 180.0,
            pitch_degrees: 45.0,
        };
        assert!(ViewFitter::default().frame(&request).is_err());
    }
}
