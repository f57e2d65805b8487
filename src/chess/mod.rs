//! Click-to-move chess board.
//!
//! A board node plus 32 piece nodes in a [`Scene`]. Clicks are raycast
//! against the scene, classified as board or piece hits, and fed to a
//! [`PieceSelector`] whose motions play on an [`Animator`].

mod board;
mod layout;
mod selection;

use std::time::Duration;

pub use board::{Board, BOARD_CELLS};
use glam::{Vec2, Vec3};
pub use layout::{initial_layout, PieceKind, PieceSpec, Side};
pub use selection::{ClickHit, PieceSelector};

use crate::animation::Animator;
use crate::bounds::BoundingBox;
use crate::camera::core::Camera;
use crate::error::VantageError;
use crate::options::SelectionOptions;
use crate::picking::Ray;
use crate::scene::{NodeId, Scene, Transform};

/// Node name of the board.
pub const BOARD_NAME: &str = "Board";

/// Default local bounds for a piece on a board with the given cell width:
/// a square footprint sitting on `y = 0`, taller for the major pieces.
#[must_use]
pub fn default_piece_bounds(kind: PieceKind, cell_width: f32) -> BoundingBox {
    let height = match kind {
        PieceKind::Pawn => 0.6,
        PieceKind::Rook => 0.75,
        PieceKind::Knight | PieceKind::Bishop => 0.85,
        PieceKind::Queen => 1.0,
        PieceKind::King => 1.1,
    } * cell_width;
    let half = 0.3 * cell_width;
    BoundingBox::new(Vec3::new(-half, 0.0, -half), Vec3::new(half, height, half))
}

/// Board, pieces, selection state, and running animations.
#[derive(Debug)]
pub struct ChessBoard {
    /// Board and piece nodes.
    pub scene: Scene,
    board_node: NodeId,
    board: Board,
    pieces: Vec<NodeId>,
    selector: PieceSelector,
    animator: Animator,
    options: SelectionOptions,
}

impl ChessBoard {
    /// Board spanning `board_bounds` with the standard starting position.
    /// Each piece's geometry comes from `piece_bounds`.
    pub fn new<F>(
        board_bounds: BoundingBox,
        options: SelectionOptions,
        piece_bounds: F,
    ) -> Result<Self, VantageError>
    where
        F: Fn(PieceKind) -> BoundingBox,
    {
        if board_bounds.is_empty() {
            return Err(VantageError::EmptyBounds);
        }
        let mut scene = Scene::new();
        let board_node = scene.add(
            BOARD_NAME,
            None,
            Transform::IDENTITY,
            Some(board_bounds),
        )?;
        let board = Board::from_bounds(&board_bounds);

        let pieces = initial_layout()
            .into_iter()
            .map(|spec| {
                let cell = board.cell_center(spec.row, spec.col);
                let transform = Transform::from_translation(Vec3::new(
                    cell.x,
                    options.rest_height,
                    cell.y,
                ));
                scene.add(&spec.name, None, transform, Some(piece_bounds(spec.kind)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            scene,
            board_node,
            board,
            pieces,
            selector: PieceSelector::new(),
            animator: Animator::new(),
            options,
        })
    }

    /// Board with [`default_piece_bounds`] pieces.
    pub fn with_default_pieces(
        board_bounds: BoundingBox,
        options: SelectionOptions,
    ) -> Result<Self, VantageError> {
        let cell = Board::from_bounds(&board_bounds).cell_width();
        Self::new(board_bounds, options, |kind| {
            default_piece_bounds(kind, cell)
        })
    }

    /// Cell geometry.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board node.
    #[must_use]
    pub fn board_node(&self) -> NodeId {
        self.board_node
    }

    /// Piece nodes in layout order.
    #[must_use]
    pub fn pieces(&self) -> &[NodeId] {
        &self.pieces
    }

    /// Currently selected piece.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selector.selected()
    }

    /// Whether any piece is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Classify what the ray hits first.
    #[must_use]
    pub fn classify(&self, ray: &Ray) -> ClickHit {
        let Some(hit) = self.scene.raycast(ray).into_iter().next() else {
            return ClickHit::Nothing;
        };
        match self.scene.top_level_ancestor(hit.node) {
            Some(top) if top == self.board_node => ClickHit::Board(hit.point),
            Some(top) => ClickHit::Piece(top),
            None => ClickHit::Nothing,
        }
    }

    /// Handle a click at `ndc` seen through `camera`: update the selection
    /// and start the resulting motions. Returns what was hit.
    pub fn click(&mut self, ndc: Vec2, camera: &Camera) -> ClickHit {
        let ray = Ray::from_camera(ndc, camera);
        let hit = self.classify(&ray);
        let motions = self.selector.handle_click(hit, &self.scene, &self.options);
        self.animator.start_all(motions);
        hit
    }

    /// Advance running animations.
    pub fn update(&mut self, dt: Duration) {
        self.animator.update(dt, &mut self.scene);
    }
}
