//! Integer world geometry.
//!
//! The world is a pixel lattice: every agent occupies exactly one integer
//! coordinate (the top-left corner of its square footprint).  Signed
//! coordinates are used so that neighborhood offsets and random-walk
//! displacements can go negative without casts.

use std::fmt;

/// An integer coordinate in world space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev (king-move) distance.  Neighborhoods are square, so this is
    /// the metric that decides "within radius".
    #[inline]
    pub fn chebyshev(self, other: Cell) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Step at most `max_step` along each axis toward `target` without
    /// overshooting it.
    #[inline]
    pub fn step_toward(self, target: Cell, max_step: i32) -> Cell {
        Cell::new(
            self.x + (target.x - self.x).clamp(-max_step, max_step),
            self.y + (target.y - self.y).clamp(-max_step, max_step),
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle with integer bounds.
///
/// `right` and `bottom` are exclusive edges (`right = left + width`), so two
/// rectangles that share an edge coordinate do not overlap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left:   i32,
    pub top:    i32,
    pub right:  i32,
    pub bottom: i32,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[inline]
    pub const fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Integer center (rounded toward the top-left).
    #[inline]
    pub fn center(&self) -> Cell {
        Cell::new(self.left + self.width() / 2, self.top + self.height() / 2)
    }

    /// Shrink by `margin` on all four sides.  The result may be empty or
    /// inverted; callers check [`width`](Self::width) afterwards.
    #[inline]
    pub fn inset(&self, margin: i32) -> Rect {
        Rect {
            left:   self.left + margin,
            top:    self.top + margin,
            right:  self.right - margin,
            bottom: self.bottom - margin,
        }
    }

    /// `true` if `cell` lies in the half-open area `[left, right) × [top, bottom)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (self.left..self.right).contains(&cell.x) && (self.top..self.bottom).contains(&cell.y)
    }

    /// `true` if the rectangles share any interior area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.left, self.top, self.right, self.bottom)
    }
}
