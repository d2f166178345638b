//! Static markers (traps, key, goal) and placement sampling.
use crate::core::player::Player;
use crate::core::rng::GameRng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub x: usize,
    pub y: usize,
}

impl Marker {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn cell(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        player.cell() == (self.x, self.y)
    }
}

/// Draws `count` cells from `pool` without replacement. Once the pool runs dry
/// the remaining draws land on `fallback`.
pub fn sample_cells(
    pool: &mut Vec<(usize, usize)>,
    count: usize,
    fallback: (usize, usize),
    rng: &mut GameRng,
) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| {
            if pool.is_empty() {
                fallback
            } else {
                let i = rng.index(pool.len());
                pool.swap_remove(i)
            }
        })
        .collect()
}
