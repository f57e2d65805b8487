use std::f32::consts::TAU;

use glam::Vec3;

use crate::animation::{Motion, Timeline, Tween};
use crate::options::SelectionOptions;
use crate::scene::{NodeId, Scene, Transform};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickHit {
    /// A piece.
    Piece(NodeId),
    /// The board surface at a world point.
    Board(Vec3),
    /// Empty space.
    Nothing,
}

/// Click-to-select state machine for board pieces.
///
/// - Clicking a piece lifts and spins it; clicking it again (or another
///   piece) sets the previous selection back down.
/// - Clicking the board while a piece is selected slides the piece over the
///   clicked point, then lowers it there.
/// - Clicking empty space drops the selection without moving anything.
#[derive(Debug, Clone, Default)]
pub struct PieceSelector {
    selected: Option<NodeId>,
}

impl PieceSelector {
    /// Selector with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected piece.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Update the selection for a click and return the motions to play.
    /// Motions start from each piece's current transform in `scene`.
    pub fn handle_click(
        &mut self,
        hit: ClickHit,
        scene: &Scene,
        options: &SelectionOptions,
    ) -> Vec<Motion> {
        let step = options.step_duration;
        match hit {
            ClickHit::Piece(piece) => {
                let old = self.selected.replace(piece);
                let mut motions = Vec::new();
                if old == Some(piece) {
                    self.selected = None;
                } else if let Some(current) = scene.transform(piece) {
                    motions.push(lift(piece, current, options.lift_height, step));
                }
                if let Some(old) = old {
                    if let Some(current) = scene.transform(old) {
                        motions.push(lower(old, current, options.rest_height, step));
                    }
                }
                log::debug!(
                    "piece {} clicked: selected {:?}",
                    piece.0,
                    self.selected.map(|n| n.0)
                );
                motions
            }
            ClickHit::Board(point) => {
                let Some(piece) = self.selected.take() else {
                    return Vec::new();
                };
                log::debug!("moving piece {} to {point:?}", piece.0);
                scene
                    .transform(piece)
                    .map(|current| {
                        vec![slide_and_land(
                            piece,
                            current,
                            point,
                            options.rest_height,
                            step,
                        )]
                    })
                    .unwrap_or_default()
            }
            ClickHit::Nothing => {
                self.selected = None;
                Vec::new()
            }
        }
    }
}

fn with_height(v: Vec3, y: f32) -> Vec3 {
    Vec3::new(v.x, y, v.z)
}

fn lift(piece: NodeId, current: Transform, height: f32, step: f32) -> Motion {
    let from = current.translation;
    Motion::new(piece)
        .with_position(Timeline::new(Tween::new(from, with_height(from, height), step)))
        .with_spin(Timeline::new(Tween::new(current.rotation_y, TAU, step)))
}

fn lower(piece: NodeId, current: Transform, rest: f32, step: f32) -> Motion {
    let from = current.translation;
    Motion::new(piece)
        .with_position(Timeline::new(Tween::new(from, with_height(from, rest), step)))
        .with_spin(Timeline::new(Tween::new(current.rotation_y, -TAU, step)))
}

fn slide_and_land(
    piece: NodeId,
    current: Transform,
    point: Vec3,
    rest: f32,
    step: f32,
) -> Motion {
    let from = current.translation;
    let over = Vec3::new(point.x, from.y, point.z);
    let landed = with_height(over, rest);
    Motion::new(piece)
        .with_position(
            Timeline::new(Tween::new(from, over, step)).then(Tween::new(over, landed, step)),
        )
        .with_spin(Timeline::new(Tween::new(current.rotation_y, -TAU, step * 2.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Scene, NodeId, NodeId, SelectionOptions) {
        let opts = SelectionOptions::default();
        let mut scene = Scene::new();
        let a = scene
            .add(
                "White-Pawn-0",
                None,
                Transform::from_translation(Vec3::new(-3.5, opts.rest_height, -2.5)),
                None,
            )
            .unwrap();
        let b = scene
            .add(
                "White-Pawn-1",
                None,
                Transform::from_translation(Vec3::new(-2.5, opts.rest_height, -2.5)),
                None,
            )
            .unwrap();
        (scene, a, b, opts)
    }

    fn end_position(m: &Motion) -> Vec3 {
        let t = m.duration();
        m.position.as_ref().unwrap().sample(t)
    }

    fn end_spin(m: &Motion) -> f32 {
        m.spin.as_ref().unwrap().sample(m.duration())
    }

    #[test]
    fn first_click_lifts_and_spins() {
        let (scene, a, _, opts) = setup();
        let mut sel = PieceSelector::new();
        let motions = sel.handle_click(ClickHit::Piece(a), &scene, &opts);
        assert_eq!(sel.selected(), Some(a));
        assert_eq!(motions.len(), 1);
        assert_eq!(motions[0].node, a);
        assert_eq!(end_position(&motions[0]).y, opts.lift_height);
        assert_eq!(end_spin(&motions[0]), TAU);
        assert_eq!(motions[0].duration(), opts.step_duration);
    }

    #[test]
    fn clicking_selected_piece_deselects_and_lowers() {
        let (scene, a, _, opts) = setup();
        let mut sel = PieceSelector::new();
        let _ = sel.handle_click(ClickHit::Piece(a), &scene, &opts);
        let motions = sel.handle_click(ClickHit::Piece(a), &scene, &opts);
        assert_eq!(sel.selected(), None);
        assert_eq!(motions.len(), 1);
        assert_eq!(end_position(&motions[0]).y, opts.rest_height);
        assert_eq!(end_spin(&motions[0]), -TAU);
    }

    #[test]
    fn clicking_other_piece_swaps_selection() {
        let (scene, a, b, opts) = setup();
        let mut sel = PieceSelector::new();
        let _ = sel.handle_click(ClickHit::Piece(a), &scene, &opts);
        let motions = sel.handle_click(ClickHit::Piece(b), &scene, &opts);
        assert_eq!(sel.selected(), Some(b));
        assert_eq!(motions.len(), 2);
        let lifted = motions.iter().find(|m| m.node == b).unwrap();
        let lowered = motions.iter().find(|m| m.node == a).unwrap();
        assert_eq!(end_position(lifted).y, opts.lift_height);
        assert_eq!(end_position(lowered).y, opts.rest_height);
    }

    #[test]
    fn board_click_slides_then_lands() {
        let (mut scene, a, _, opts) = setup();
        let mut sel = PieceSelector::new();
        let _ = sel.handle_click(ClickHit::Piece(a), &scene, &opts);
        // pretend the lift finished
        scene.transform_mut(a).unwrap().translation.y = opts.lift_height;

        let target = Vec3::new(0.5, 0.0, 1.5);
        let motions = sel.handle_click(ClickHit::Board(target), &scene, &opts);
        assert_eq!(sel.selected(), None);
        assert_eq!(motions.len(), 1);
        let m = &motions[0];
        let position = m.position.as_ref().unwrap();
        // after the first step the piece is over the target, still lifted
        let over = position.sample(opts.step_duration);
        assert_eq!(over, Vec3::new(0.5, opts.lift_height, 1.5));
        assert_eq!(end_position(m), Vec3::new(0.5, opts.rest_height, 1.5));
        assert_eq!(m.duration(), opts.step_duration * 2.0);
        assert_eq!(end_spin(m), -TAU);
    }

    #[test]
    fn board_click_without_selection_does_nothing() {
        let (scene, _, _, opts) = setup();
        let mut sel = PieceSelector::new();
        let motions = sel.handle_click(ClickHit::Board(Vec3::ZERO), &scene, &opts);
        assert!(motions.is_empty());
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn empty_click_clears_without_motion() {
        let (scene, a, _, opts) = setup();
        let mut sel = PieceSelector::new();
        let _ = sel.handle_click(ClickHit::Piece(a), &scene, &opts);
        let motions = sel.handle_click(ClickHit::Nothing, &scene, &opts);
        assert!(motions.is_empty());
        assert_eq!(sel.selected(), None);
    }
}
