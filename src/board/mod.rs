//! The grid a simulation runs on.
//!
//! A [Board] owns its dimensions, its [Topology] and one [Field] per cell. Fields do not know
//! which board they belong to; every neighbor query goes through the board, which is what lets a
//! `Board` be copied with a plain `clone`.
mod field;

pub use field::Field;

use fxhash::FxHashSet;
use itertools::Itertools;
use std::fmt;

use crate::inputs::template::{Template, ALIVE_SYMBOL, DEAD_SYMBOL};
use crate::types::{
    CellStateGettableBoard, CellStateSettableBoard, Coordinate, Direction,
    NeighborDeterminableBoard, SizeDeterminableBoard, Topology, N_DIRECTIONS,
};

/// A rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u32,
    height: u32,
    topology: Topology,
    fields: Vec<Vec<Field>>,
}

impl Board {
    /// Makes a board on which every cell is dead. Panics if either dimension is zero
    pub fn new(width: u32, height: u32, topology: Topology) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {}x{}",
            width,
            height
        );
        Board {
            width,
            height,
            topology,
            fields: generate_fields(width, height),
        }
    }

    /// the border type of this board
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// the rows of this board, top to bottom
    pub fn rows(&self) -> &[Vec<Field>] {
        &self.fields
    }

    /// iterates every field, row by row
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().flatten()
    }

    /// iterates the coordinates of every living cell, row by row
    pub fn living_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.fields()
            .filter(|field| field.is_alive())
            .map(|field| field.coordinate())
    }

    /// the field at the given position. Panics for positions off the board
    pub fn field(&self, pos: Coordinate) -> &Field {
        let (x, y) = self.checked_index(pos);
        &self.fields[y][x]
    }

    /// Returns the state of the cell at (x, y). Panics for positions off the board
    pub fn get_state(&self, x: i32, y: i32) -> bool {
        self.field(Coordinate::new(x, y)).is_alive()
    }

    /// Sets the state of the cell at (x, y). Panics for positions off the board
    pub fn set_state(&mut self, x: i32, y: i32, alive: bool) {
        let (x, y) = self.checked_index(Coordinate::new(x, y));
        self.fields[y][x].set_alive(alive);
    }

    /// returns the neighbor coordinates of a field
    pub fn neighbors_of(&self, field: &Field) -> Vec<Coordinate> {
        self.neighbors(&field.coordinate())
    }

    /// number of living cells around `pos`
    pub fn living_neighbor_count(&self, pos: &Coordinate) -> usize {
        self.neighbors(pos)
            .into_iter()
            .filter(|neighbor| self.field(*neighbor).is_alive())
            .count()
    }

    /// Number of neighbor positions of `pos` that fall outside a solid border. Always zero on a
    /// passthrough board
    pub fn offgrid_neighbor_count(&self, pos: &Coordinate) -> usize {
        match self.topology {
            Topology::Solid => N_DIRECTIONS - self.neighbors(pos).len(),
            Topology::Passthrough => 0,
        }
    }

    /// the fraction of cells that are alive, between 0 and 1
    pub fn living_cell_fraction(&self) -> f64 {
        self.living_cell_count() as f64 / (self.width as f64 * self.height as f64)
    }

    /// Returns the field used to anchor objects at the middle of the board
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            ((self.width + 1) / 2) as i32 - 1,
            ((self.height + 1) / 2) as i32 - 1,
        )
    }

    /// flips every cell
    pub fn invert(&mut self) {
        for field in self.fields.iter_mut().flatten() {
            field.invert();
        }
    }

    /// kills every cell
    pub fn reset(&mut self) {
        self.fields = generate_fields(self.width, self.height);
    }

    /// Replaces every cell with the cells of a template, resizing the board to the template's
    /// dimensions. The topology is kept
    pub fn replace_with(&mut self, template: &Template) {
        self.width = template.width();
        self.height = template.height();
        self.fields = (0..self.height as i32)
            .map(|y| {
                (0..self.width as i32)
                    .map(|x| {
                        let pos = Coordinate::new(x, y);
                        Field::new(pos, template.is_alive(pos))
                    })
                    .collect()
            })
            .collect();
    }

    /// a board of the same size and topology with every cell dead
    pub(crate) fn empty_fields(&self) -> Vec<Vec<Field>> {
        generate_fields(self.width, self.height)
    }

    /// swaps in a whole new generation
    pub(crate) fn replace_fields(&mut self, fields: Vec<Vec<Field>>) {
        debug_assert_eq!(fields.len(), self.height as usize);
        debug_assert!(fields.iter().all(|row| row.len() == self.width as usize));
        self.fields = fields;
    }

    fn checked_index(&self, pos: Coordinate) -> (usize, usize) {
        assert!(
            !self.off_board(pos),
            "{} is outside of the {}x{} board",
            pos,
            self.width,
            self.height
        );
        (pos.x as usize, pos.y as usize)
    }

    fn wrap(&self, pos: Coordinate) -> Option<Coordinate> {
        if !self.off_board(pos) {
            return Some(pos);
        }
        match self.topology {
            Topology::Solid => None,
            Topology::Passthrough => Some(Coordinate::new(
                pos.x.rem_euclid(self.width as i32),
                pos.y.rem_euclid(self.height as i32),
            )),
        }
    }
}

fn generate_fields(width: u32, height: u32) -> Vec<Vec<Field>> {
    (0..height as i32)
        .map(|y| {
            (0..width as i32)
                .map(|x| Field::new(Coordinate::new(x, y), false))
                .collect()
        })
        .collect()
}

impl SizeDeterminableBoard for Board {
    fn get_width(&self) -> u32 {
        self.width
    }

    fn get_height(&self) -> u32 {
        self.height
    }
}

impl CellStateGettableBoard for Board {
    fn is_alive(&self, pos: Coordinate) -> bool {
        self.field(pos).is_alive()
    }

    fn living_cell_count(&self) -> usize {
        self.fields().filter(|field| field.is_alive()).count()
    }
}

impl CellStateSettableBoard for Board {
    fn set_alive(&mut self, pos: Coordinate, alive: bool) {
        self.set_state(pos.x, pos.y, alive);
    }
}

impl NeighborDeterminableBoard for Board {
    fn neighbors(&self, pos: &Coordinate) -> Vec<Coordinate> {
        // on boards one or two cells wide several directions wrap to the same cell
        let mut seen = FxHashSet::default();
        Direction::all()
            .iter()
            .filter_map(|direction| self.wrap(pos.add_vec(direction.to_vector())))
            .filter(|neighbor| neighbor != pos && seen.insert(*neighbor))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .fields
            .iter()
            .map(|row| {
                row.iter()
                    .map(|field| {
                        if field.is_alive() {
                            ALIVE_SYMBOL
                        } else {
                            DEAD_SYMBOL
                        }
                    })
                    .collect::<String>()
            })
            .join("\n");
        write!(f, "{}", text)
    }
}
