//! The [`GridTopology`] type: flattened cell addressing and neighbor lookup.
//!
//! A topology is just a width and a height. Every cell has a flattened index
//! `x + width * y`; every other crate in the workspace addresses cells by that
//! index and relies on [`GridTopology::index_of`] and
//! [`GridTopology::coords_of`] being inverse to each other for in-bounds
//! coordinates.

use crate::direction::{Adjacency, Direction};
use crate::error::TopologyError;
use crate::geom::{Point, Range};

/// Immutable dimensions of a rectangular grid of cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridTopology {
    width: i32,
    height: i32,
}

impl GridTopology {
    /// Create a topology of `width` × `height` cells.
    ///
    /// Fails with [`TopologyError::InvalidDimensions`] unless both dimensions
    /// are positive.
    pub fn new(width: i32, height: i32) -> Result<Self, TopologyError> {
        if width <= 0 || height <= 0 {
            return Err(TopologyError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flattened index of `p`.
    ///
    /// Only meaningful when [`in_bounds`](Self::in_bounds) holds for `p`; no
    /// check is made here.
    #[inline]
    pub fn index_of(&self, p: Point) -> usize {
        (p.x as i64 + self.width as i64 * p.y as i64) as usize
    }

    /// Coordinates of a flattened index.
    ///
    /// Only meaningful for `index < cell_count()`; no check is made here.
    #[inline]
    pub fn coords_of(&self, index: usize) -> Point {
        let w = self.width as usize;
        Point::new((index % w) as i32, (index / w) as i32)
    }

    /// Whether `0 <= p.x < width` and `0 <= p.y < height`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Whether `index` addresses a cell of this grid.
    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.cell_count()
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Index of the cell one step from `index` in direction `dir`, or `None`
    /// if that step would leave the grid.
    ///
    /// `index` must address a cell of this grid.
    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        let p = self.coords_of(index);
        let left = p.x == 0;
        let right = p.x == self.width - 1;
        let bottom = p.y == 0;
        let top = p.y == self.height - 1;
        let w = self.width as usize;

        match dir {
            Direction::TopLeft if !(left || top) => Some(index + w - 1),
            Direction::Top if !top => Some(index + w),
            Direction::TopRight if !(top || right) => Some(index + w + 1),
            Direction::Right if !right => Some(index + 1),
            Direction::BottomRight if !(right || bottom) => Some(index - w + 1),
            Direction::Bottom if !bottom => Some(index - w),
            Direction::BottomLeft if !(left || bottom) => Some(index - w - 1),
            Direction::Left if !left => Some(index - 1),
            _ => None,
        }
    }

    /// The eight neighbors of `index`, clockwise from top-left
    /// (TL, T, TR, R, BR, B, BL, L). Off-grid neighbors are `None`.
    pub fn neighbors8(&self, index: usize) -> [Option<usize>; 8] {
        Direction::ALL.map(|d| self.neighbor(index, d))
    }

    /// The four cardinal neighbors of `index` (T, R, B, L). Off-grid
    /// neighbors are `None`.
    pub fn neighbors4(&self, index: usize) -> [Option<usize>; 4] {
        Direction::CARDINAL.map(|d| self.neighbor(index, d))
    }

    /// Iterate over the in-grid neighbors of `index` for the given adjacency,
    /// in neighbor-array order.
    pub fn neighbors(
        &self,
        index: usize,
        adjacency: Adjacency,
    ) -> impl Iterator<Item = usize> + '_ {
        adjacency
            .directions()
            .iter()
            .filter_map(move |&d| self.neighbor(index, d))
    }

    // -----------------------------------------------------------------------
    // Enumeration
    // -----------------------------------------------------------------------

    /// Indices of every in-grid cell of the half-open rectangle `rect`, in
    /// ascending index order. Parts of `rect` outside the grid are ignored.
    pub fn cells_in_bounds(&self, rect: Range) -> Vec<usize> {
        rect.intersect(self.bounds())
            .iter()
            .map(|p| self.index_of(p))
            .collect()
    }

    /// Iterate over every cell as `(coordinates, index)`, in index order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, usize)> + '_ {
        self.bounds().iter().enumerate().map(|(i, p)| (p, i))
    }

    /// Unweighted layered expansion from `source`, ignoring passability.
    ///
    /// Ring `k` holds the cells first reached after `k + 1` steps. At most
    /// `range` rings are produced; expansion stops at the first empty ring.
    /// The source itself is in no ring.
    pub fn rings(&self, source: usize, range: usize, adjacency: Adjacency) -> Vec<Vec<usize>> {
        let mut rings = Vec::new();
        if !self.contains_index(source) {
            log::warn!("rings: source {source} is outside a {}x{} grid", self.width, self.height);
            return rings;
        }

        let mut visited = vec![false; self.cell_count()];
        visited[source] = true;
        let mut active = vec![source];

        while rings.len() < range {
            let mut next = Vec::new();
            for &cell in &active {
                for n in self.neighbors(cell, adjacency) {
                    if !visited[n] {
                        visited[n] = true;
                        next.push(n);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            rings.push(next.clone());
            active = next;
        }

        rings
    }

    /// All cells of [`rings`](Self::rings), concatenated in ring order.
    pub fn rings_flattened(&self, source: usize, range: usize, adjacency: Adjacency) -> Vec<usize> {
        self.rings(source, range, adjacency).concat()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct TopologyRepr {
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl serde::Serialize for GridTopology {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TopologyRepr {
            width: self.width,
            height: self.height,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridTopology {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = TopologyRepr::deserialize(deserializer)?;
        GridTopology::new(repr.width, repr.height).map_err(serde::de::Error::custom)
    }
}
