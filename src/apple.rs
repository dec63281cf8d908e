use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Where a fresh apple may appear.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum SpawnPolicy {
    /// Uniform over every tile, including tiles under the snake.
    #[default]
    Anywhere,
    /// Uniform over tiles the snake does not occupy.
    AvoidSnake,
}

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns an apple according to `policy`.
    ///
    /// `AvoidSnake` falls back to `Anywhere` once the snake covers the board.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: GridSize,
        snake: &Snake,
        policy: SpawnPolicy,
    ) -> Self {
        let position = match policy {
            SpawnPolicy::Anywhere => random_position(rng, grid),
            SpawnPolicy::AvoidSnake => {
                free_position(rng, grid, snake).unwrap_or_else(|| random_position(rng, grid))
            }
        };

        Self { position }
    }
}

/// Picks a tile uniformly over the whole grid.
#[must_use]
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Position {
    debug_assert!(grid.width > 0 && grid.height > 0);

    Position {
        x: rng.gen_range(0..i32::from(grid.width)),
        y: rng.gen_range(0..i32::from(grid.height)),
    }
}

/// Picks a tile uniformly among those not occupied by the snake.
#[must_use]
pub fn free_position<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(grid.total_cells());

    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
