//! The plain text pattern encoding.
//!
//! One line per row and one character per column. `X` marks a living cell, every other character
//! a dead one. There is no header and no escaping, so the row length is the width and the number
//! of rows is the height.
use std::fmt;
use std::str::FromStr;

use crate::error::TemplateError;
use crate::types::{
    BorderSide, CellStateGettableBoard, CellStateSettableBoard, Coordinate, SizeDeterminableBoard,
};

/// the character of a living cell
pub const ALIVE_SYMBOL: char = 'X';

/// the character written for a dead cell
pub const DEAD_SYMBOL: char = '.';

/// A rectangular pattern of cells that can be placed on a board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    width: u32,
    height: u32,
    cells: Vec<Vec<bool>>,
}

impl Template {
    /// Parses the text encoding. Empty lines are skipped, every other row must be as long as the
    /// first one
    pub fn parse(text: &str) -> Result<Template, TemplateError> {
        let cells = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c == ALIVE_SYMBOL).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let width = match cells.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(TemplateError::Empty),
        };
        if let Some((row, found)) = cells
            .iter()
            .map(|row| row.len())
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(TemplateError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        Ok(Template {
            width: width as u32,
            height: cells.len() as u32,
            cells,
        })
    }

    /// captures the current cells of a board
    pub fn from_board<B: CellStateGettableBoard>(board: &B) -> Template {
        let cells = (0..board.get_height() as i32)
            .map(|y| {
                (0..board.get_width() as i32)
                    .map(|x| board.is_alive(Coordinate::new(x, y)))
                    .collect()
            })
            .collect();
        Template {
            width: board.get_width(),
            height: board.get_height(),
            cells,
        }
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// is the cell at `pos` alive? panics for positions outside of the template
    pub fn is_alive(&self, pos: Coordinate) -> bool {
        self.cells[pos.y as usize][pos.x as usize]
    }

    /// the living cells, relative to the top left corner of the template
    pub fn living_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(move |(x, _)| Coordinate::new(x as i32, y as i32))
        })
    }

    /// The border of `board` this template would cross if its top left corner were at `top_left`
    pub fn exceeded_border<B: SizeDeterminableBoard>(
        &self,
        board: &B,
        top_left: Coordinate,
    ) -> Option<BorderSide> {
        if top_left.x < 0 {
            Some(BorderSide::Left)
        } else if top_left.y < 0 {
            Some(BorderSide::Top)
        } else if top_left.x as i64 + self.width as i64 > board.get_width() as i64 {
            Some(BorderSide::Right)
        } else if top_left.y as i64 + self.height as i64 > board.get_height() as i64 {
            Some(BorderSide::Bottom)
        } else {
            None
        }
    }

    /// Revives the template's living cells on `board`, with the template's top left corner at
    /// `top_left`. Cells that are dead in the template are left alone. Nothing is written if the
    /// template does not fit
    pub fn place_on<B: CellStateSettableBoard>(
        &self,
        board: &mut B,
        top_left: Coordinate,
    ) -> Result<(), TemplateError> {
        if let Some(side) = self.exceeded_border(board, top_left) {
            return Err(TemplateError::OutOfBounds(side));
        }
        for pos in self.living_coordinates() {
            board.set_alive(pos.add_vec(top_left.to_vector()), true);
        }
        Ok(())
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for alive in row {
                write!(f, "{}", if *alive { ALIVE_SYMBOL } else { DEAD_SYMBOL })?;
            }
        }
        Ok(())
    }
}
