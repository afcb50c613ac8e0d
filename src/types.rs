//! various types that are useful for working with life boards
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x offset
    pub x: i64,
    /// y offset
    pub y: i64,
}

/// An (x, y) position on a board. Row 0 is the top row, column 0 the left column.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// column
    pub x: i32,
    /// row
    pub y: i32,
}

impl Coordinate {
    /// makes a new coordinate
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// offsets this coordinate by a vector
    pub fn add_vec(&self, v: Vector) -> Coordinate {
        Coordinate {
            x: (self.x as i64 + v.x) as i32,
            y: (self.y as i64 + v.y) as i32,
        }
    }

    /// convert this coordinate to a vector from the origin
    pub fn to_vector(&self) -> Vector {
        Vector {
            x: self.x as i64,
            y: self.y as i64,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight directions in which a cell has a neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[allow(missing_docs)]
    North,
    #[allow(missing_docs)]
    NorthEast,
    #[allow(missing_docs)]
    East,
    #[allow(missing_docs)]
    SouthEast,
    #[allow(missing_docs)]
    South,
    #[allow(missing_docs)]
    SouthWest,
    #[allow(missing_docs)]
    West,
    #[allow(missing_docs)]
    NorthWest,
}

/// the number of directions a cell can have neighbors in
pub const N_DIRECTIONS: usize = 8;

impl Direction {
    /// convert this direction to a vector. north points to the row above (y - 1)
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::North => Vector { x: 0, y: -1 },
            Direction::NorthEast => Vector { x: 1, y: -1 },
            Direction::East => Vector { x: 1, y: 0 },
            Direction::SouthEast => Vector { x: 1, y: 1 },
            Direction::South => Vector { x: 0, y: 1 },
            Direction::SouthWest => Vector { x: -1, y: 1 },
            Direction::West => Vector { x: -1, y: 0 },
            Direction::NorthWest => Vector { x: -1, y: -1 },
        }
    }

    /// returns all eight directions, clockwise starting at north
    pub fn all() -> [Direction; N_DIRECTIONS] {
        [
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ]
    }
}

/// How a board treats neighbor positions that fall off its edges
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// positions outside the grid do not exist
    Solid,
    /// the left and right edges link together, as do the top and bottom edges
    Passthrough,
}

impl Default for Topology {
    fn default() -> Self {
        Topology::Solid
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Solid => write!(f, "solid"),
            Topology::Passthrough => write!(f, "passthrough"),
        }
    }
}

/// One of the four edges of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Top,
    #[allow(missing_docs)]
    Right,
    #[allow(missing_docs)]
    Bottom,
}

impl fmt::Display for BorderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderSide::Left => write!(f, "left"),
            BorderSide::Top => write!(f, "top"),
            BorderSide::Right => write!(f, "right"),
            BorderSide::Bottom => write!(f, "bottom"),
        }
    }
}

/// Instruments to be used with simulation
pub trait SimulatorInstruments: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe_simulation(&self, duration: Duration);
}

/// a board for which the size can be determined
pub trait SizeDeterminableBoard {
    #[allow(missing_docs)]
    fn get_width(&self) -> u32;
    #[allow(missing_docs)]
    fn get_height(&self) -> u32;

    /// checks whether a coordinate lies outside of the board
    fn off_board(&self, pos: Coordinate) -> bool {
        pos.x < 0
            || pos.x >= self.get_width() as i32
            || pos.y < 0
            || pos.y >= self.get_height() as i32
    }
}

/// a board whose cell states can be read. This is the surface renderers work against
pub trait CellStateGettableBoard: SizeDeterminableBoard {
    /// is the cell at the given coordinate alive? panics for coordinates off the board
    fn is_alive(&self, pos: Coordinate) -> bool;

    /// the number of living cells on the board
    fn living_cell_count(&self) -> usize;
}

/// a board whose cell states can be written. This is the surface pattern placers and
/// random fillers work against
pub trait CellStateSettableBoard: SizeDeterminableBoard {
    /// set the cell at the given coordinate, panics for coordinates off the board
    fn set_alive(&mut self, pos: Coordinate, alive: bool);
}

/// a board for which the neighbors of a given coordinate can be determined
pub trait NeighborDeterminableBoard: SizeDeterminableBoard {
    /// returns the distinct neighboring coordinates, never including `pos` itself
    fn neighbors(&self, pos: &Coordinate) -> Vec<Coordinate>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_distinct_unit_offsets() {
        let vectors = Direction::all()
            .iter()
            .map(|d| d.to_vector())
            .collect::<Vec<_>>();
        for (i, v) in vectors.iter().enumerate() {
            assert!(v.x.abs() <= 1 && v.y.abs() <= 1);
            assert!(!(v.x == 0 && v.y == 0));
            assert!(!vectors[i + 1..].contains(v));
        }
    }

    #[test]
    fn test_coordinate_vector_math() {
        let c = Coordinate::new(3, 4);
        let moved = c.add_vec(Direction::NorthWest.to_vector());
        assert_eq!(moved, Coordinate::new(2, 3));
        assert_eq!(moved.add_vec(Direction::SouthEast.to_vector()), c);
    }

    #[test]
    fn test_topology_serde_names() {
        let t: Topology = serde_json::from_str("\"passthrough\"").unwrap();
        assert_eq!(t, Topology::Passthrough);
        assert_eq!(serde_json::to_string(&Topology::Solid).unwrap(), "\"solid\"");
    }
}
