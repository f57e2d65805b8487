use glam::{Vec2, Vec3};

use crate::bounds::BoundingBox;

/// Squares per side.
pub const BOARD_CELLS: usize = 8;

/// Cell geometry of a square board lying in the `xz` plane.
///
/// Rows run along `+z` and columns along `+x`, both counted from the
/// board's minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    center: Vec3,
    size: f32,
    top: f32,
}

impl Board {
    /// Board covering `bounds`. The side length is the `x` extent.
    #[must_use]
    pub fn from_bounds(bounds: &BoundingBox) -> Self {
        Self {
            center: bounds.center(),
            size: bounds.size().x.max(0.0),
            top: bounds.max.y,
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Width of one square.
    #[must_use]
    pub fn cell_width(&self) -> f32 {
        self.size / BOARD_CELLS as f32
    }

    /// Height of the playing surface.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Center of a square as `(x, z)`.
    #[must_use]
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        let cell = self.cell_width();
        let half = self.size * 0.5;
        Vec2::new(
            self.center.x + col as f32 * cell + cell * 0.5 - half,
            self.center.z + row as f32 * cell + cell * 0.5 - half,
        )
    }

    /// Square containing a world point, ignoring height. `None` off the
    /// board.
    #[must_use]
    pub fn cell_at(&self, point: Vec3) -> Option<(usize, usize)> {
        let cell = self.cell_width();
        if cell <= 0.0 {
            return None;
        }
        let half = self.size * 0.5;
        let col = ((point.x - (self.center.x - half)) / cell).floor();
        let row = ((point.z - (self.center.z - half)) / cell).floor();
        let range = 0.0..BOARD_CELLS as f32;
        (range.contains(&row) && range.contains(&col))
            .then(|| (row as usize, col as usize))
    }
}
