//! Geometric primitives: Point, IntRect, Orientation

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Coordinate along `orientation`.
    pub fn along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}

/// Orientation of a slide or scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    pub fn cross(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Pixel-aligned rectangle in container coordinates.
///
/// `right` and `bottom` are exclusive, so a view at `left = 0` with a width of
/// 100 does not contain `x = 100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty() && x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Leading coordinate along `orientation` (`top` or `left`).
    pub fn start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    /// Trailing coordinate along `orientation` (`bottom` or `right`).
    pub fn end(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.right,
            Orientation::Vertical => self.bottom,
        }
    }

    /// Extent along `orientation`.
    pub fn extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width(),
            Orientation::Vertical => self.height(),
        }
    }

    /// Moves the rectangle by `delta` along `orientation` only.
    pub fn offset_along(&self, orientation: Orientation, delta: i32) -> Self {
        match orientation {
            Orientation::Horizontal => self.translate(delta, 0),
            Orientation::Vertical => self.translate(0, delta),
        }
    }
}
