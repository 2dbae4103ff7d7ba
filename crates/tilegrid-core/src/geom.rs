//! Cell coordinates and rectangular cell ranges.
//!
//! Coordinates are signed so that a step past an edge can be represented and
//! then rejected by a bounds check instead of wrapping.

use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate. X grows right and Y grows up, so the row with the
/// largest `y` is the top edge of a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Cells `min.x <= x < max.x`, `min.y <= y < max.y`.
///
/// A range with no cells is normalized to `Range::default()` by
/// [`intersect`](Range::intersect), which is how [`GridTopology`] clips
/// requests to the grid.
///
/// [`GridTopology`]: crate::GridTopology
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range spanned by two opposite corners, given in any order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Range from one half-open span per axis. Spans are taken as given, so
    /// an inverted span makes the range empty.
    #[inline]
    pub fn from_spans(xs: std::ops::Range<i32>, ys: std::ops::Range<i32>) -> Self {
        Self {
            min: Point::new(xs.start, ys.start),
            max: Point::new(xs.end, ys.end),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * (self.max.y - self.min.y) as usize
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Cells covered by both ranges; `Range::default()` when they are
    /// disjoint.
    pub fn intersect(self, other: Range) -> Self {
        let clipped = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if clipped.is_empty() {
            Self::default()
        } else {
            clipped
        }
    }

    /// Cells in ascending `(y, x)` order, which is flattened-index order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: self.min,
        }
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.range.is_empty() || self.next.y >= self.range.max.y {
            return None;
        }
        let p = self.next;
        self.next.x += 1;
        if self.next.x == self.range.max.x {
            self.next = Point::new(self.range.min.x, self.next.y + 1);
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.range.is_empty() || self.next.y >= self.range.max.y {
            0
        } else {
            let rows_after = (self.range.max.y - self.next.y - 1) as usize;
            (self.range.max.x - self.next.x) as usize + rows_after * self.range.width() as usize
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}
