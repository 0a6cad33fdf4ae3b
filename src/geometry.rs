//! Integer rectangles in world units.
//!
//! The origin is the top-left corner of the screen, y grows downward.
//! `right` and `bottom` are exclusive edges (`x + width`, `y + height`).

/// Axis-aligned rectangle with a top-left anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Place the rectangle so the middle of its left edge sits on `(x, y)`.
    pub fn set_midleft(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y - self.height / 2;
    }

    /// Place the rectangle so its center sits on `(x, y)`.
    pub fn set_center(&mut self, x: i32, y: i32) {
        self.x = x - self.width / 2;
        self.y = y - self.height / 2;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Grow (positive) or shrink (negative) the size while keeping the center.
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self {
            x: self.x - dw / 2,
            y: self.y - dh / 2,
            width: self.width + dw,
            height: self.height + dh,
        }
    }

    /// True if the interiors overlap. Rectangles that only share an edge do not.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}
