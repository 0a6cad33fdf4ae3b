//! Mapping between terminal cells and world units.

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use ratatui::layout::Rect;

/// The terminal region the world is stretched onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// World point at the center of the cell at `(col, row)`, in viewport-local
    /// cell coordinates.
    pub fn cell_center(&self, col: u16, row: u16) -> (i32, i32) {
        let w = self.area.width.max(1) as i32;
        let h = self.area.height.max(1) as i32;
        (
            ((2 * col as i32 + 1) * SCREEN_WIDTH) / (2 * w),
            ((2 * row as i32 + 1) * SCREEN_HEIGHT) / (2 * h),
        )
    }

    /// World point under an absolute terminal position, if it lies in the viewport.
    pub fn to_world(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let a = self.area;
        if column < a.x || row < a.y || column >= a.x + a.width || row >= a.y + a.height {
            return None;
        }
        Some(self.cell_center(column - a.x, row - a.y))
    }

    /// Viewport-local column containing world x (may fall outside the viewport).
    pub fn col_of(&self, x: i32) -> i32 {
        (x * self.area.width as i32).div_euclid(SCREEN_WIDTH)
    }

    /// Viewport-local row containing world y (may fall outside the viewport).
    pub fn row_of(&self, y: i32) -> i32 {
        (y * self.area.height as i32).div_euclid(SCREEN_HEIGHT)
    }
}
