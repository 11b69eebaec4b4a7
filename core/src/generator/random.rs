use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Uniform mine placement without replacement.
///
/// Sparse boards use rejection sampling over random positions. Once mines fill more than half
/// of the board, placement switches to a partial shuffle of the cell indices.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn place_by_rejection(&mut self, config: BoardConfig, mines: &mut Array2<bool>) {
        let mut mines_placed: CellCount = 0;
        while mines_placed < config.mines {
            let coords = (
                self.rng.random_range(0..config.size),
                self.rng.random_range(0..config.size),
            );
            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }
    }

    fn place_by_shuffle(&mut self, config: BoardConfig, mines: &mut Array2<bool>) {
        let size = usize::from(config.size);
        let picked = index::sample(
            &mut self.rng,
            usize::from(config.total_cells()),
            usize::from(config.mines),
        );
        for i in picked {
            mines[[i / size, i % size]] = true;
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: BoardConfig) -> Result<Board> {
        config.validate()?;

        let mut mines: Array2<bool> = Array2::default((config.size, config.size).to_nd_index());
        if config.mines > config.total_cells() / 2 {
            log::debug!(
                "Dense board ({} of {} cells), placing mines by shuffle",
                config.mines,
                config.total_cells()
            );
            self.place_by_shuffle(config, &mut mines);
        } else {
            self.place_by_rejection(config, &mut mines);
        }

        let board = Board::from_mine_mask(&mines);

        // double check mine count
        if board.mine_count() != config.mines {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines
            );
        }
        Ok(board)
    }
}
