use crate::core::maze::{Cell, Maze};

/// Fraction of the blocked axis' motion applied to the other axis so the
/// player slides along walls instead of stopping dead.
const SLIDE: f32 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub angle: f32, // yaw, radians, never normalized
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Centre of the start cell, facing down the maze.
    pub fn spawn(maze: &Maze) -> Self {
        let (sx, sy) = maze.start();
        Self::new(sx as f32 + 0.5, sy as f32 + 0.5, std::f32::consts::FRAC_PI_2)
    }

    pub fn cell(&self) -> (usize, usize) {
        (self.x.floor() as usize, self.y.floor() as usize)
    }

    pub fn turn(&mut self, delta: f32) {
        self.angle += delta;
    }

    /// Walks `speed` cells along the facing angle (negative walks backwards),
    /// resolving each axis separately so motion slides along walls.
    pub fn advance(&mut self, maze: &Maze, speed: f32) {
        let (old_x, old_y) = (self.x, self.y);
        let dx = self.angle.cos() * speed;
        let dy = self.angle.sin() * speed;
        let new_x = self.x + dx;
        let new_y = self.y + dy;

        if !solid(maze, self.x, new_y) {
            self.y = new_y;
        } else {
            self.x += dx * SLIDE;
        }

        if !solid(maze, new_x, self.y) {
            self.x = new_x;
        } else {
            self.y += dy * SLIDE;
        }

        if solid(maze, self.x, self.y) {
            self.x = old_x;
            self.y = old_y;
        }
    }
}

/// Cells outside the grid are solid.
fn solid(maze: &Maze, wx: f32, wy: f32) -> bool {
    !matches!(
        maze.cell_at(wx.floor() as i64, wy.floor() as i64),
        Some(Cell::Passage)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn corridor() -> Maze {
        Maze::from_ascii(&[
            "#######",
            "#.....#",
            "#######",
        ])
        .unwrap()
    }

    #[test]
    fn walks_forward_in_open_corridor() {
        let maze = corridor();
        let mut p = Player::new(1.5, 1.5, 0.0);
        p.advance(&maze, 0.5);
        assert!((p.x - 2.0).abs() < 1e-5);
        assert!((p.y - 1.5).abs() < 1e-5);
    }

    #[test]
    fn negative_speed_walks_backwards() {
        let maze = corridor();
        let mut p = Player::new(3.5, 1.5, 0.0);
        p.advance(&maze, -0.5);
        assert!((p.x - 3.0).abs() < 1e-5);
    }

    #[test]
    fn slides_along_wall_at_an_angle() {
        let maze = corridor();
        // Heading diagonally into the top wall: y is blocked, x still advances.
        let mut p = Player::new(2.5, 1.1, -FRAC_PI_4);
        let x0 = p.x;
        p.advance(&maze, 0.3);
        assert!(p.x > x0);
        assert!(p.y >= 1.0 && p.y < 2.0);
    }

    #[test]
    fn stops_at_dead_end() {
        let maze = corridor();
        let mut p = Player::new(5.5, 1.5, 0.0);
        for _ in 0..20 {
            p.advance(&maze, 0.2);
        }
        assert_eq!(p.cell(), (5, 1));
    }

    #[test]
    fn facing_straight_into_wall_does_not_move() {
        let maze = corridor();
        let mut p = Player::new(3.5, 1.5, -FRAC_PI_2);
        p.advance(&maze, 0.8);
        assert_eq!(p.cell(), (3, 1));
        assert!(!maze.is_wall(p.cell().0, p.cell().1));
    }

    #[test]
    fn spawn_and_turn() {
        let maze = corridor();
        let mut p = Player::spawn(&maze);
        assert_eq!(p.cell(), (1, 1));
        p.turn(PI);
        assert!((p.angle - (FRAC_PI_2 + PI)).abs() < 1e-6);
    }
}
