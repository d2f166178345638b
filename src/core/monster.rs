//! Wandering monsters: a one-cell random walk over passages.
use crate::core::maze::{Cell, Maze};
use crate::core::player::Player;
use crate::core::rng::GameRng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub x: usize,
    pub y: usize,
}

impl Monster {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves to a random passage neighbour. Returns `false` (and stays put)
    /// when every neighbour is a wall.
    pub fn step(&mut self, maze: &Maze, rng: &mut GameRng) -> bool {
        let mut moves: Vec<(usize, usize)> = Vec::with_capacity(4);
        for (dx, dy) in [(0i64, -1i64), (1, 0), (0, 1), (-1, 0)] {
            let nx = self.x as i64 + dx;
            let ny = self.y as i64 + dy;
            if maze.cell_at(nx, ny) == Some(Cell::Passage) {
                moves.push((nx as usize, ny as usize));
            }
        }
        match rng.pick(&moves) {
            Some(&(nx, ny)) => {
                self.x = nx;
                self.y = ny;
                true
            }
            None => false,
        }
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        player.cell() == (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosed_monster_stays_put() {
        let maze = Maze::from_ascii(&["###", "#.#", "###"]).unwrap();
        let mut rng = GameRng::new(5);
        let mut m = Monster::new(1, 1);
        for _ in 0..10 {
            assert!(!m.step(&maze, &mut rng));
        }
        assert_eq!(m, Monster::new(1, 1));
    }

    #[test]
    fn only_steps_onto_passages() {
        let maze = Maze::from_ascii(&[
            "#####",
            "#...#",
            "#.#.#",
            "#...#",
            "#####",
        ])
        .unwrap();
        let mut rng = GameRng::new(9);
        let mut m = Monster::new(1, 1);
        for _ in 0..200 {
            let (px, py) = (m.x, m.y);
            assert!(m.step(&maze, &mut rng));
            assert!(!maze.is_wall(m.x, m.y));
            assert_eq!(px.abs_diff(m.x) + py.abs_diff(m.y), 1);
        }
    }

    #[test]
    fn collides_on_same_cell() {
        let m = Monster::new(2, 3);
        assert!(m.collides_with(&Player::new(2.9, 3.1, 0.0)));
        assert!(!m.collides_with(&Player::new(3.0, 3.1, 0.0)));
    }
}
