use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells with a fixed mine layout.
///
/// Only the `revealed` and `flagged` bits of a cell change after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
}

impl Board {
    /// Builds a board from a square mine mask, deriving every neighbor count.
    pub(crate) fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            let mine = mine_mask[(row, col)];
            if mine {
                mine_count += 1;
            }
            Cell {
                mine,
                ..Cell::default()
            }
        });

        let mut board = Self {
            cells,
            mine_count,
            revealed_count: 0,
        };
        board.derive_neighbor_counts();
        board
    }

    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration {
                size,
                mines: mine_coords.len().try_into().unwrap_or(CellCount::MAX),
            });
        }

        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    fn derive_neighbor_counts(&mut self) {
        let size = self.size();
        for row in 0..size {
            for col in 0..size {
                let coords = (row, col);
                if self[coords].mine {
                    continue;
                }
                let count = self.adjacent_mine_count(coords);
                self.cells[coords.to_nd_index()].neighbor_mine_count = count;
            }
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].mine
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self
            .cells
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].mine)
            .count();
        // at most eight neighbors
        count as u8
    }

    /// Rows in order, each yielding its cells left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.into_iter().copied())
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// Reveals exactly one cell; neighbors are never opened, even around a zero.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        if !cell.is_revealable() {
            return Ok(RevealOutcome::NoChange);
        }

        cell.revealed = true;
        self.revealed_count += 1;
        Ok(if cell.mine {
            RevealOutcome::HitMine
        } else {
            RevealOutcome::Revealed
        })
    }

    pub fn set_flag(&mut self, coords: Coord2, flagged: bool) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        if !cell.is_flaggable() || cell.flagged == flagged {
            return Ok(MarkOutcome::NoChange);
        }

        cell.flagged = flagged;
        Ok(MarkOutcome::Changed)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
