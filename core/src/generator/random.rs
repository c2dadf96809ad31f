use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// One in this many cells is drawn as a hole, until the hole cap is reached.
const HOLE_ODDS: u8 = 4;

/// Purely random generation strategy. Candidates are drawn until one has a hat reachable from the start, so the
/// result is always solvable.
#[derive(Clone, Debug)]
pub struct RandomFieldGenerator<R> {
    rng: R,
}

impl RandomFieldGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomFieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a single field that may or may not be solvable.
    fn candidate(&mut self, size: Coord) -> Field {
        let hole_cap = max_holes(size);
        let mut holes: CellCount = 0;

        let mut cells: Array2<Cell> = Array2::default((size, size).to_nd_index());
        for cell in cells.iter_mut() {
            if self.rng.random_range(0..HOLE_ODDS) == 0 && holes < hole_cap {
                holes += 1;
                *cell = Cell::Hole;
            }
        }
        cells[START.to_nd_index()] = Cell::Path;

        // may land on a hole, the hat wins
        let hat = loop {
            let coords = (self.rng.random_range(0..size), self.rng.random_range(0..size));
            if coords != START {
                break coords;
            }
        };
        cells[hat.to_nd_index()] = Cell::Hat;

        Field { cells }
    }
}

impl<R: Rng> FieldGenerator for RandomFieldGenerator<R> {
    fn generate(&mut self, size: Coord) -> Result<Field> {
        if size < 2 {
            return Err(GameError::InvalidSize(size));
        }

        let mut attempts: u64 = 1;
        loop {
            let field = self.candidate(size);
            if is_solvable(&field) {
                log::debug!(
                    "Generated {size}x{size} field with {} holes after {attempts} attempt(s)",
                    field.hole_count()
                );
                return Ok(field);
            }
            log::trace!("Discarding unsolvable field, attempt {attempts}");
            attempts += 1;
        }
    }
}
