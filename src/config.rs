//! Game configuration and command-line flags.
use clap::Parser;

use crate::core::casters::DEFAULT_MAX_DISTANCE;
use crate::core::maze::check_dimensions;
use crate::core::shading::ShadingMode;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub maze_width: usize,
    pub maze_height: usize,
    /// Extra cells per side added to the maze at each new stage (kept even).
    pub stage_growth: usize,
    pub stages: u32,
    pub traps: usize,
    pub monsters: usize,
    /// Logic ticks between monster steps (90 at 60 Hz is 1.5 s).
    pub monster_interval: u32,
    /// Cells walked per tick.
    pub move_speed: f32,
    /// Radians turned per tick.
    pub turn_speed: f32,
    pub max_ray_distance: f32,
    pub column_step: u32,
    pub shading: ShadingMode,
    /// Distance at which the gradient reaches its darkest shade.
    pub gradient_far: f32,
    /// Manhattan radius around the start kept free of traps, key and monsters.
    pub safe_radius: usize,
    pub seed: Option<u64>,
    pub screen_width: u32,
    pub screen_height: u32,
    pub window_scale: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            maze_width: 31,
            maze_height: 31,
            stage_growth: 2,
            stages: 3,
            traps: 10,
            monsters: 3,
            monster_interval: 90,
            move_speed: 0.05,
            turn_speed: 0.05,
            max_ray_distance: DEFAULT_MAX_DISTANCE,
            column_step: 1,
            shading: ShadingMode::Gradient,
            gradient_far: 10.0,
            safe_radius: 4,
            seed: None,
            screen_width: 256,
            screen_height: 240,
            window_scale: 3,
        }
    }
}

impl GameConfig {
    /// Maze size for a 1-based stage number.
    pub fn maze_size(&self, stage: u32) -> (usize, usize) {
        let grow = self.stage_growth * stage.saturating_sub(1) as usize;
        (self.maze_width + grow, self.maze_height + grow)
    }

    /// Ray bound for a stage: the configured distance, raised to the maze
    /// diagonal so no ray stops short inside the grid.
    pub fn ray_bound(&self, stage: u32) -> f32 {
        let (w, h) = self.maze_size(stage);
        let diagonal = ((w * w + h * h) as f32).sqrt();
        self.max_ray_distance.max(diagonal)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.maze_width, self.maze_height)?;
        if self.stage_growth % 2 != 0 {
            // Odd growth would make the next stage's maze even-sized.
            check_dimensions(self.maze_width + self.stage_growth, self.maze_height + self.stage_growth)?;
        }
        if self.stages == 0 {
            return Err(ConfigError::NotPositive { name: "stages" });
        }
        if self.monster_interval == 0 {
            return Err(ConfigError::NotPositive { name: "monster interval" });
        }
        if self.move_speed <= 0.0 {
            return Err(ConfigError::NotPositive { name: "move speed" });
        }
        if self.turn_speed <= 0.0 {
            return Err(ConfigError::NotPositive { name: "turn speed" });
        }
        if self.gradient_far <= 0.0 {
            return Err(ConfigError::NotPositive { name: "gradient distance" });
        }
        if self.screen_width == 0 || self.screen_height == 0 || self.window_scale == 0 {
            return Err(ConfigError::NotPositive { name: "screen size" });
        }
        if !matches!(self.column_step, 1 | 2) {
            return Err(ConfigError::ColumnStep(self.column_step));
        }
        if self.max_ray_distance <= 0.0 {
            return Err(ConfigError::NotPositive { name: "view distance" });
        }
        let needed = 1 + self.traps + self.monsters;
        let room = guaranteed_free_cells(self.maze_width, self.maze_height);
        if needed > room {
            return Err(ConfigError::TooCrowded {
                width: self.maze_width,
                height: self.maze_height,
                needed,
                room,
            });
        }
        Ok(())
    }
}

/// Passage cells every generated maze of this size has, besides start and goal.
/// A carved maze opens all `n` lattice cells and `n - 1` walls between them;
/// loop injection only adds to that.
fn guaranteed_free_cells(width: usize, height: usize) -> usize {
    let lattice = (width / 2) * (height / 2);
    (2 * lattice).saturating_sub(3)
}

/// First-person maze: find the key, reach the goal, avoid monsters and traps.
#[derive(Parser, Debug)]
#[command(name = "maze_adventure", version, about)]
pub struct Cli {
    /// Maze width in cells (odd, >= 5)
    #[arg(long, default_value_t = 31)]
    pub width: usize,

    /// Maze height in cells (odd, >= 5)
    #[arg(long, default_value_t = 31)]
    pub height: usize,

    /// Number of stages to clear
    #[arg(long, default_value_t = 3)]
    pub stages: u32,

    #[arg(long, default_value_t = 10)]
    pub traps: usize,

    #[arg(long, default_value_t = 3)]
    pub monsters: usize,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Wall shading style
    #[arg(long, value_enum, default_value_t = ShadingMode::Gradient)]
    pub shading: ShadingMode,

    /// Cast one ray every N screen columns (1 or 2)
    #[arg(long, default_value_t = 1)]
    pub column_step: u32,

    /// Maximum ray distance in cells
    #[arg(long)]
    pub view_distance: Option<f32>,

    /// Window pixels per framebuffer pixel
    #[arg(long, default_value_t = 3)]
    pub scale: u32,
}

impl Cli {
    pub fn into_config(self) -> Result<GameConfig, ConfigError> {
        let defaults = GameConfig::default();
        let config = GameConfig {
            maze_width: self.width,
            maze_height: self.height,
            stages: self.stages,
            traps: self.traps,
            monsters: self.monsters,
            seed: self.seed,
            shading: self.shading,
            column_step: self.column_step,
            max_ray_distance: self.view_distance.unwrap_or(defaults.max_ray_distance),
            window_scale: self.scale,
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn crowded_first_stage_is_rejected() {
        let config = GameConfig {
            maze_width: 5,
            maze_height: 5,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooCrowded { width: 5, height: 5, needed: 14, room: 5 })
        );
        let sparse = GameConfig { traps: 2, monsters: 2, ..config };
        assert_eq!(sparse.validate(), Ok(()));

        let seven = GameConfig {
            maze_width: 7,
            maze_height: 7,
            ..GameConfig::default()
        };
        assert_eq!(seven.validate(), Ok(()));
    }

    #[test]
    fn stage_sizes_grow() {
        let config = GameConfig::default();
        assert_eq!(config.maze_size(1), (31, 31));
        assert_eq!(config.maze_size(3), (35, 35));
    }

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli::try_parse_from([
            "maze_adventure",
            "--width",
            "11",
            "--height",
            "9",
            "--seed",
            "42",
            "--shading",
            "banded",
            "--column-step",
            "2",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!((config.maze_width, config.maze_height), (11, 9));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.shading, ShadingMode::Banded);
        assert_eq!(config.column_step, 2);
        assert_eq!(config.traps, 10);
    }

    #[test]
    fn even_dimensions_are_rejected() {
        let cli = Cli::try_parse_from(["maze_adventure", "--width", "10"]).unwrap();
        assert_eq!(
            cli.into_config(),
            Err(ConfigError::Maze(MazeError::InvalidDimensions { width: 10, height: 31 }))
        );
    }

    #[test]
    fn ray_bound_covers_the_diagonal() {
        let config = GameConfig::default();
        assert!(config.ray_bound(1) > 43.0);
        let small = GameConfig {
            maze_width: 5,
            maze_height: 5,
            ..GameConfig::default()
        };
        assert_eq!(small.ray_bound(1), 30.0);
    }

    #[test]
    fn non_positive_view_distance_is_rejected() {
        let config = GameConfig {
            max_ray_distance: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "view distance" })
        );
    }

    #[test]
    fn bad_column_step_is_rejected() {
        let config = GameConfig {
            column_step: 3,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ColumnStep(3)));
    }
}
