//! Core game types and logic (maze, entities, raycasting).
//!
//! Re-exports:
//! - `maze`: Maze generation and grid queries
//! - `player`: Player position and wall-slide movement
//! - `monster`: Monster random walk
//! - `marker`: Traps, key, goal and placement sampling
//! - `casters`: Ray marching and column projection
//! - `shading`: Palette indices for wall columns
//! - `events`: Events emitted to sound/score collaborators
//! - `rng`: Seedable shared random source

pub mod casters;
pub mod events;
pub mod marker;
pub mod maze;
pub mod monster;
pub mod player;
pub mod rng;
pub mod shading;
