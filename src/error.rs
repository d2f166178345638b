//! Error types for maze construction and configuration.
use thiserror::Error;

/// Errors raised while building a [`Maze`](crate::core::maze::Maze).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be odd and at least 5")]
    InvalidDimensions { width: usize, height: usize },

    #[error("maze layout has no rows")]
    EmptyLayout,

    #[error("maze layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown maze cell '{ch}' at ({x}, {y})")]
    UnknownCell { ch: char, x: usize, y: usize },
}

/// Errors raised when a [`GameConfig`](crate::config::GameConfig) is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error("{name} must be greater than zero")]
    NotPositive { name: &'static str },

    #[error("column step must be 1 or 2, got {0}")]
    ColumnStep(u32),

    #[error("{needed} traps, monsters and key need more room than a {width}x{height} maze guarantees ({room} cells)")]
    TooCrowded {
        width: usize,
        height: usize,
        needed: usize,
        room: usize,
    },
}
