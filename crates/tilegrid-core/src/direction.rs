//! Compass directions and adjacency modes.

use crate::geom::Point;

/// One of the eight directions around a cell.
///
/// `Top` points towards increasing `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Direction {
    /// All eight directions, clockwise starting from top-left.
    ///
    /// ```text
    ///  0 1 2
    ///  7 x 3
    ///  6 5 4
    /// ```
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
    ];

    /// The four cardinal directions, clockwise starting from top.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Coordinate offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::TopLeft => Point::new(-1, 1),
            Direction::Top => Point::new(0, 1),
            Direction::TopRight => Point::new(1, 1),
            Direction::Right => Point::new(1, 0),
            Direction::BottomRight => Point::new(1, -1),
            Direction::Bottom => Point::new(0, -1),
            Direction::BottomLeft => Point::new(-1, -1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::TopLeft
                | Direction::TopRight
                | Direction::BottomRight
                | Direction::BottomLeft
        )
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::TopLeft => Direction::BottomRight,
            Direction::Top => Direction::Bottom,
            Direction::TopRight => Direction::BottomLeft,
            Direction::Right => Direction::Left,
            Direction::BottomRight => Direction::TopLeft,
            Direction::Bottom => Direction::Top,
            Direction::BottomLeft => Direction::TopRight,
            Direction::Left => Direction::Right,
        }
    }
}

/// Which neighbors count as adjacent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// Cardinal neighbors only.
    #[default]
    Four,
    /// Cardinal and diagonal neighbors.
    Eight,
}

impl Adjacency {
    /// Directions considered by this adjacency, in neighbor-array order.
    #[inline]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Adjacency::Four => &Direction::CARDINAL,
            Adjacency::Eight => &Direction::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_offsets_cancel() {
        for d in Direction::ALL {
            assert_eq!(d.offset() + d.opposite().offset(), Point::ZERO);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn diagonals_move_on_both_axes() {
        for d in Direction::ALL {
            let o = d.offset();
            assert_eq!(d.is_diagonal(), o.x != 0 && o.y != 0);
        }
        assert!(Direction::CARDINAL.iter().all(|d| !d.is_diagonal()));
    }

    #[test]
    fn adjacency_directions() {
        assert_eq!(Adjacency::Four.directions().len(), 4);
        assert_eq!(Adjacency::Eight.directions().len(), 8);
        assert_eq!(Adjacency::Eight.directions()[0], Direction::TopLeft);
    }
}
