#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use solver::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod session;
mod solver;
mod types;

/// The player always starts in the top-left corner.
pub const START: Coord2 = (0, 0);

/// Largest number of holes a generated field of `size` by `size` cells may contain, 30% rounded down.
pub const fn max_holes(size: Coord) -> CellCount {
    (mult(size, size) as u32 * 3 / 10) as CellCount
}

/// Square grid of cells indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Field {
    cells: Array2<Cell>,
}

impl Field {
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(GameError::InvalidBoardShape);
        }
        let size: Coord = rows
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        if size < 2 {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let size = self.size();
        row < size && col < size
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords).then(|| self[coords])
    }

    pub fn hat_position(&self) -> Option<Coord2> {
        self.cells
            .indexed_iter()
            .find(|&(_, &cell)| cell == Cell::Hat)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn hat_count(&self) -> CellCount {
        self.count(Cell::Hat)
    }

    pub fn hole_count(&self) -> CellCount {
        self.count(Cell::Hole)
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    fn count(&self, kind: Cell) -> CellCount {
        self.cells
            .iter()
            .filter(|&&cell| cell == kind)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

impl TryFrom<Array2<Cell>> for Field {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Field> for Array2<Cell> {
    fn from(field: Field) -> Self {
        field.cells
    }
}

impl Index<Coord2> for Field {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Field {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// Renders one line per row, every line terminated by `\n`.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for row in self.cells.rows() {
            for cell in row {
                f.write_char(cell.symbol())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Parses the same text [`Field`] renders to.
impl FromStr for Field {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut rows = 0;

        for line in s.lines() {
            let row_start = cells.len();
            for symbol in line.chars() {
                cells.push(Cell::from_symbol(symbol).ok_or(GameError::InvalidSymbol(symbol))?);
            }
            if rows > 0 && cells.len() - row_start != row_start / rows {
                return Err(GameError::InvalidBoardShape);
            }
            rows += 1;
        }

        let cols = cells.len().checked_div(rows).unwrap_or(0);
        let cells =
            Array2::from_shape_vec((rows, cols), cells).map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_cells(cells)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stepped onto a free cell, which is now part of the path.
    Moved(Coord2),
    FoundHat,
    FellInHole,
}

impl MoveOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::FoundHat | Self::FellInHole)
    }
}
