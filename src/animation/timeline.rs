//! Back-to-back tween sequences.
//!
//! A [`Timeline`] plays its segments one after another: `then` appends a
//! tween that starts when the previous one ends. Sampling is stateless, so
//! hosts can scrub to any time.

use super::tween::{Interpolate, Tween};

#[derive(Debug, Clone, PartialEq)]
struct Segment<T> {
    start: f32,
    tween: Tween<T>,
}

/// Sequence of tweens over one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<T> {
    segments: Vec<Segment<T>>,
    delay: f32,
}

impl<T: Interpolate> Timeline<T> {
    /// Timeline holding a single tween.
    #[must_use]
    pub fn new(first: Tween<T>) -> Self {
        Self {
            segments: vec![Segment {
                start: 0.0,
                tween: first,
            }],
            delay: 0.0,
        }
    }

    /// Append a tween that starts when the current last one ends.
    #[must_use]
    pub fn then(mut self, tween: Tween<T>) -> Self {
        let start = self.content_duration();
        self.segments.push(Segment { start, tween });
        self
    }

    /// Delay the whole timeline by `seconds`.
    #[must_use]
    pub fn with_delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    fn content_duration(&self) -> f32 {
        self.segments
            .last()
            .map_or(0.0, |s| s.start + s.tween.duration)
    }

    /// Total length in seconds, including the delay.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.delay + self.content_duration()
    }

    /// Whether the timeline has played out at time `t`.
    #[must_use]
    pub fn is_finished(&self, t: f32) -> bool {
        t >= self.duration()
    }

    /// Value at time `t` (seconds since the timeline started).
    #[must_use]
    pub fn sample(&self, t: f32) -> T {
        let local = t - self.delay;
        // the last segment that has started wins; before any has started the
        // first segment holds its `from`
        let segment = self
            .segments
            .iter()
            .rev()
            .find(|s| local >= s.start)
            .unwrap_or(&self.segments[0]);
        segment.tween.sample(local - segment.start)
    }
}
