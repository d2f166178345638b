//! Rendering utilities and 3D renderer.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer
//! - `palette`: Indexed colors with the wall gradient
//! - `line`: Bresenham integer line drawing
//! - `render3d`: Column renderer for walls, ceiling and floor
//! - `minimap`: Top-down overlay
//! - `screens`: Title / game over / clear text and HUD

pub mod framebuffer;
pub mod line;
pub mod minimap;
pub mod palette;
pub mod render3d;
pub mod screens;
