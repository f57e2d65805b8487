use std::time::{Duration, Instant};

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::controller::OrbitController;
use crate::options::SelectionOptions;

/// Pixels two clicks may be apart and still count as a double click.
const DOUBLE_CLICK_RADIUS: f32 = 6.0;

/// Result of a primary-button release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResult {
    /// No click (drag, or a release without a press).
    NoAction,
    /// Single click at a screen position.
    SingleClick {
        /// Cursor position in pixels.
        position: Vec2,
    },
    /// Second click close in time and space to the previous one.
    DoubleClick {
        /// Cursor position in pixels.
        position: Vec2,
    },
}

/// Tracks cursor position, drag state, and the multi-click state machine for
/// the primary button.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    mouse_pos: Vec2,
    press_pos: Option<Vec2>,
    is_dragging: bool,
    shift_held: bool,
    last_click: Option<(Instant, Vec2)>,
    double_click_threshold: Duration,
    drag_threshold: f32,
}

impl ClickTracker {
    /// Create a tracker with thresholds from the selection options.
    #[must_use]
    pub fn new(options: &SelectionOptions) -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            press_pos: None,
            is_dragging: false,
            shift_held: false,
            last_click: None,
            double_click_threshold: Duration::from_millis(options.double_click_ms),
            drag_threshold: options.drag_threshold.max(0.0),
        }
    }

    /// Last known cursor position in pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Whether the primary button is held and has moved past the drag
    /// threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Feed one event using the current wall-clock time.
    pub fn handle_event(&mut self, event: &InputEvent) -> ClickResult {
        self.handle_event_at(event, Instant::now())
    }

    /// Feed one event with an explicit timestamp.
    pub fn handle_event_at(&mut self, event: &InputEvent, now: Instant) -> ClickResult {
        match *event {
            InputEvent::CursorMoved { x, y } => {
                self.mouse_pos = Vec2::new(x, y);
                if let Some(press) = self.press_pos {
                    if press.distance(self.mouse_pos) > self.drag_threshold {
                        self.is_dragging = true;
                    }
                }
                ClickResult::NoAction
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            } => {
                self.press_pos = Some(self.mouse_pos);
                self.is_dragging = false;
                ClickResult::NoAction
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            } => self.process_release(now),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_held = shift;
                ClickResult::NoAction
            }
            _ => ClickResult::NoAction,
        }
    }

    fn process_release(&mut self, now: Instant) -> ClickResult {
        let was_pressed = self.press_pos.take().is_some();
        let was_dragging = std::mem::replace(&mut self.is_dragging, false);

        if !was_pressed || was_dragging {
            self.last_click = None;
            return ClickResult::NoAction;
        }

        let position = self.mouse_pos;
        let is_double = self.last_click.is_some_and(|(time, pos)| {
            now.saturating_duration_since(time) < self.double_click_threshold
                && pos.distance(position) <= DOUBLE_CLICK_RADIUS
        });

        if is_double {
            // a third click starts a fresh sequence
            self.last_click = None;
            ClickResult::DoubleClick { position }
        } else {
            self.last_click = Some((now, position));
            ClickResult::SingleClick { position }
        }
    }

    /// Route drag and scroll events to an orbit controller: drag rotates,
    /// shift-drag pans, scroll zooms, resize updates the aspect.
    pub fn drive_controller(
        &self,
        controller: &mut OrbitController,
        event: &InputEvent,
        delta: Vec2,
    ) {
        match *event {
            InputEvent::CursorMoved { .. } if self.is_dragging => {
                if self.shift_held {
                    controller.pan(delta);
                } else {
                    controller.rotate(delta);
                }
            }
            InputEvent::Scroll { delta } => controller.zoom(delta),
            InputEvent::Resized { width, height } => controller.resize(width, height),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FramingOptions;

    fn press() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }
    }

    fn release() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }
    }

    fn click(tracker: &mut ClickTracker, at: Instant) -> ClickResult {
        let _ = tracker.handle_event_at(&press(), at);
        tracker.handle_event_at(&release(), at)
    }

    fn tracker() -> ClickTracker {
        ClickTracker::new(&SelectionOptions::default())
    }

    #[test]
    fn single_then_double() {
        let mut t = tracker();
        let start = Instant::now();
        let _ = t.handle_event_at(&InputEvent::CursorMoved { x: 10.0, y: 20.0 }, start);
        assert_eq!(
            click(&mut t, start),
            ClickResult::SingleClick {
                position: Vec2::new(10.0, 20.0)
            }
        );
        assert_eq!(
            click(&mut t, start + Duration::from_millis(200)),
            ClickResult::DoubleClick {
                position: Vec2::new(10.0, 20.0)
            }
        );
        // third click starts over
        assert!(matches!(
            click(&mut t, start + Duration::from_millis(300)),
            ClickResult::SingleClick { .. }
        ));
    }

    #[test]
    fn slow_second_click_is_single() {
        let mut t = tracker();
        let start = Instant::now();
        let _ = click(&mut t, start);
        assert!(matches!(
            click(&mut t, start + Duration::from_millis(900)),
            ClickResult::SingleClick { .. }
        ));
    }

    #[test]
    fn distant_second_click_is_single() {
        let mut t = tracker();
        let start = Instant::now();
        let _ = click(&mut t, start);
        let _ = t.handle_event_at(&InputEvent::CursorMoved { x: 100.0, y: 0.0 }, start);
        assert!(matches!(
            click(&mut t, start + Duration::from_millis(100)),
            ClickResult::SingleClick { .. }
        ));
    }

    #[test]
    fn drag_suppresses_click() {
        let mut t = tracker();
        let now = Instant::now();
        let _ = t.handle_event_at(&press(), now);
        let _ = t.handle_event_at(&InputEvent::CursorMoved { x: 50.0, y: 0.0 }, now);
        assert!(t.is_dragging());
        assert_eq!(t.handle_event_at(&release(), now), ClickResult::NoAction);
        assert!(!t.is_dragging());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = tracker();
        assert_eq!(t.handle_event_at(&release(), Instant::now()), ClickResult::NoAction);
    }

    #[test]
    fn drives_orbit_controller() {
        let mut t = tracker();
        let mut controller = OrbitController::new(
            &crate::options::CameraOptions::default(),
            &FramingOptions::default(),
            1.0,
            10.0,
        );
        let now = Instant::now();
        let _ = t.handle_event_at(&press(), now);
        let moved = InputEvent::CursorMoved { x: 30.0, y: 0.0 };
        let _ = t.handle_event_at(&moved, now);
        let eye_before = controller.camera.eye;
        t.drive_controller(&mut controller, &moved, Vec2::new(30.0, 0.0));
        assert_ne!(controller.camera.eye, eye_before);

        t.drive_controller(&mut controller, &InputEvent::Scroll { delta: 1.0 }, Vec2::ZERO);
        assert!(controller.distance() < 10.0);

        t.drive_controller(
            &mut controller,
            &InputEvent::Resized {
                width: 300,
                height: 100,
            },
            Vec2::ZERO,
        );
        assert_eq!(controller.camera.aspect, 3.0);
    }
}
