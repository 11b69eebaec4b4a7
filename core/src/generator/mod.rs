use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(&mut self, config: BoardConfig) -> Result<Board>;
}

/// Generator that always lays out the same mines, for scripted games.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetBoardGenerator {
    mines: Vec<Coord2>,
}

impl PresetBoardGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl BoardGenerator for PresetBoardGenerator {
    fn generate(&mut self, config: BoardConfig) -> Result<Board> {
        config.validate()?;
        let board = Board::from_mine_coords(config.size, &self.mines)?;
        if board.mine_count() != config.mines {
            log::warn!(
                "Preset layout has {} mines, configured board expects {}",
                board.mine_count(),
                config.mines
            );
        }
        Ok(board)
    }
}
