//! First-person raycasting maze game.
//!
//! Re-exports:
//! - `core`: Maze generation, entities, raycasting (no I/O)
//! - `game`: Screens, session rules, per-tick intents
//! - `config`: Game settings and command-line flags
//! - `error`: Error types
//! - `render`: raylib framebuffer renderer (feature `frontend`)
//! - `audio_manager`: rodio sound effects (feature `frontend`)
//! - `process_events`: raylib input to intents (feature `frontend`)

pub mod config;
pub mod core;
pub mod error;
pub mod game;

#[cfg(feature = "frontend")]
pub mod audio_manager;
#[cfg(feature = "frontend")]
pub mod process_events;
#[cfg(feature = "frontend")]
pub mod render;
