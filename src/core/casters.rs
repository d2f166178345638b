//! Ray marching through the maze grid and column projection.
use crate::core::maze::{Cell, Maze};
use crate::core::player::Player;

/// Distance advanced per ray sample, in cells.
pub const RAY_STEP: f32 = 0.1;
/// Closest distance used for projection; keeps `h / d` finite.
pub const MIN_DISTANCE: f32 = 0.1;
pub const DEFAULT_MAX_DISTANCE: f32 = 30.0;
/// Half of the horizontal field of view, in radians.
pub const HALF_FOV: f32 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitKind {
    Wall,
    Goal,
    OutOfBounds,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersect {
    pub distance: f32,
    pub impact: HitKind,
}

/// Marches a ray from the player until it hits a wall, the active goal, or
/// leaves the grid. `goal` is `None` while the goal is hidden.
/// Escaping the grid or running past `max_distance` both report
/// `OutOfBounds` at `max_distance`.
pub fn cast_ray(
    maze: &Maze,
    player: &Player,
    goal: Option<(usize, usize)>,
    a: f32,
    max_distance: f32,
) -> Intersect {
    let (dir_x, dir_y) = (a.cos(), a.sin());
    let steps = (max_distance / RAY_STEP).ceil() as u32;

    for i in 1..=steps {
        let d = (i as f32 * RAY_STEP).min(max_distance);
        let cx = (player.x + dir_x * d).floor() as i64;
        let cy = (player.y + dir_y * d).floor() as i64;

        match maze.cell_at(cx, cy) {
            None => break,
            Some(Cell::Wall) => {
                return Intersect { distance: d, impact: HitKind::Wall };
            }
            Some(Cell::Passage) => {
                if goal == Some((cx as usize, cy as usize)) {
                    return Intersect { distance: d, impact: HitKind::Goal };
                }
            }
        }
    }

    Intersect {
        distance: max_distance,
        impact: HitKind::OutOfBounds,
    }
}

/// Ray angle for `column` of `columns`, sweeping `a - 0.5 .. a + 0.5`.
#[inline]
pub fn ray_angle(a: f32, column: u32, columns: u32) -> f32 {
    a - HALF_FOV + (2.0 * HALF_FOV) * (column as f32 / columns.max(1) as f32)
}

/// Vertical extent of a wall column, in screen rows `[top, bottom)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpan {
    pub top: u32,
    pub bottom: u32,
}

/// Inverse-distance projection: `top = h/2 - h/d`, `bottom = h - top`,
/// clamped to the screen.
pub fn project_column(screen_h: u32, distance: f32) -> ColumnSpan {
    let h = screen_h as f32;
    let d = distance.max(MIN_DISTANCE);
    let top = (h * 0.5 - h / d).clamp(0.0, h * 0.5) as u32;
    ColumnSpan {
        top,
        bottom: screen_h - top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn room() -> Maze {
        Maze::from_ascii(&[
            "#######",
            "#.....#",
            "#.....#",
            "#######",
        ])
        .unwrap()
    }

    #[test]
    fn hits_wall_straight_ahead() {
        let maze = room();
        let p = Player::new(1.5, 1.5, 0.0);
        let hit = cast_ray(&maze, &p, None, 0.0, DEFAULT_MAX_DISTANCE);
        assert_eq!(hit.impact, HitKind::Wall);
        // Wall cell x = 6 starts 4.5 cells away.
        assert!(hit.distance > 4.4 && hit.distance < 4.7);
    }

    #[test]
    fn open_corridor_reports_out_of_bounds_at_clamp() {
        let row = ".".repeat(60);
        let walls = "#".repeat(60);
        let maze = Maze::from_ascii(&[&walls, &row, &walls]).unwrap();
        let p = Player::new(1.5, 1.5, 0.0);
        let hit = cast_ray(&maze, &p, None, 0.0, 30.0);
        assert_eq!(hit, Intersect { distance: 30.0, impact: HitKind::OutOfBounds });
    }

    #[test]
    fn leaving_the_grid_is_out_of_bounds() {
        let maze = Maze::from_ascii(&["#.....", "......", "#....."]).unwrap();
        let p = Player::new(1.5, 1.5, 0.0);
        let hit = cast_ray(&maze, &p, None, 0.0, 30.0);
        assert_eq!(hit.impact, HitKind::OutOfBounds);
        assert_eq!(hit.distance, 30.0);
    }

    #[test]
    fn goal_only_visible_when_active() {
        let maze = room();
        let p = Player::new(1.5, 1.5, 0.0);
        let hidden = cast_ray(&maze, &p, None, 0.0, 30.0);
        assert_eq!(hidden.impact, HitKind::Wall);
        let shown = cast_ray(&maze, &p, Some((4, 1)), 0.0, 30.0);
        assert_eq!(shown.impact, HitKind::Goal);
        assert!(shown.distance < hidden.distance);
    }

    #[test]
    fn short_bound_stops_before_wall() {
        let maze = room();
        let p = Player::new(1.5, 1.5, 0.0);
        let hit = cast_ray(&maze, &p, None, 0.0, 2.0);
        assert_eq!(hit, Intersect { distance: 2.0, impact: HitKind::OutOfBounds });
    }

    #[test]
    fn looking_down_hits_floor_wall() {
        let maze = room();
        let p = Player::new(2.5, 1.5, 0.0);
        let hit = cast_ray(&maze, &p, None, FRAC_PI_2, 30.0);
        assert_eq!(hit.impact, HitKind::Wall);
        assert!(hit.distance < 2.0);
        let back = cast_ray(&maze, &p, None, PI, 30.0);
        assert_eq!(back.impact, HitKind::Wall);
    }

    #[test]
    fn ray_angles_span_the_field_of_view() {
        assert!((ray_angle(1.0, 0, 256) - 0.5).abs() < 1e-6);
        assert!((ray_angle(1.0, 128, 256) - 1.0).abs() < 1e-6);
        assert!(ray_angle(1.0, 255, 256) < 1.5);
    }

    #[test]
    fn projection_shrinks_with_distance() {
        let near = project_column(240, 0.05);
        assert_eq!(near, ColumnSpan { top: 0, bottom: 240 });
        let mid = project_column(240, 4.0);
        assert_eq!(mid, ColumnSpan { top: 60, bottom: 180 });
        let far = project_column(240, 30.0);
        assert_eq!(far, ColumnSpan { top: 112, bottom: 128 });
    }
}
