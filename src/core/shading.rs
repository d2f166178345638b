//! Palette-index shading for wall columns.
//!
//! Indices `0..16` are the base palette; `GRADIENT_BASE..GRADIENT_BASE + 16`
//! are the white-to-blue shades the renderer installs once at startup.

use crate::core::casters::{HitKind, Intersect};

pub const BLACK: u8 = 0;
pub const TEAL: u8 = 3;
pub const STEEL: u8 = 5;
pub const LIGHT_BLUE: u8 = 6;
pub const WHITE: u8 = 7;
pub const RED: u8 = 8;
pub const ORANGE: u8 = 9;
pub const YELLOW: u8 = 10;
pub const GREEN: u8 = 11;
pub const BLUE: u8 = 12;

pub const BASE_COLORS: usize = 16;
pub const GRADIENT_BASE: u8 = BASE_COLORS as u8;
pub const GRADIENT_STEPS: u8 = 16;

pub const NEAR: f32 = 2.0;
pub const MID: f32 = 4.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ShadingMode {
    /// Three distance bands.
    Banded,
    /// Sixteen shades from white (near) to blue (far).
    #[default]
    Gradient,
}

/// Palette index for a hit, or `None` when nothing should be drawn.
pub fn wall_shade(hit: &Intersect, mode: ShadingMode, far: f32) -> Option<u8> {
    match hit.impact {
        HitKind::OutOfBounds => None,
        HitKind::Goal => Some(RED),
        HitKind::Wall => Some(match mode {
            ShadingMode::Banded => banded(hit.distance),
            ShadingMode::Gradient => gradient(hit.distance, far),
        }),
    }
}

fn banded(d: f32) -> u8 {
    if d < NEAR {
        WHITE
    } else if d < MID {
        LIGHT_BLUE
    } else {
        STEEL
    }
}

/// `GRADIENT_BASE + floor(min(d, far) / far * 15)`.
pub fn gradient(d: f32, far: f32) -> u8 {
    let far = far.max(f32::EPSILON);
    let t = d.clamp(0.0, far) / far;
    GRADIENT_BASE + (t * (GRADIENT_STEPS - 1) as f32).floor() as u8
}
