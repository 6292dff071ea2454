//! Grid coordinates for world locations.

/// Integer grid coordinates for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    /// Calculate the Manhattan (L1) distance to another coordinate.
    ///
    /// Travel cost between locations is measured on the grid, so the
    /// distance is `|x1 - x2| + |y1 - y2|`, never negative.
    pub fn distance_to(&self, other: &Self) -> u64 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}
