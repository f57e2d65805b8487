//! Single-segment tweens.

use glam::Vec3;

use super::easing::EasingFunction;

/// Values that can be blended linearly.
pub trait Interpolate: Copy {
    /// Blend from `self` (t = 0) to `other` (t = 1).
    #[must_use]
    fn interpolate(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec3 {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// Eased interpolation from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    /// Value at the start.
    pub from: T,
    /// Value at the end.
    pub to: T,
    /// Length in seconds.
    pub duration: f32,
    /// Easing applied to progress.
    pub easing: EasingFunction,
}

impl<T: Interpolate> Tween<T> {
    /// Tween with the default easing.
    #[must_use]
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Replace the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Raw progress in `[0, 1]` after `elapsed` seconds.
    #[must_use]
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Value after `elapsed` seconds. Holds `from` before the start and `to`
    /// after the end; a zero-length tween is always `to`.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> T {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.to;
        }
        if progress <= 0.0 {
            return self.from;
        }
        self.from.interpolate(self.to, self.easing.evaluate(progress))
    }
}
