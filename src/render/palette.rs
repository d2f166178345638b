//! Indexed palette: 16 base colors plus the white-to-blue wall gradient.
use raylib::prelude::Color;

use crate::core::shading::{BASE_COLORS, GRADIENT_STEPS};

const fn rgb(hex: u32) -> Color {
    Color::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

const BASE: [Color; BASE_COLORS] = [
    rgb(0x000000),
    rgb(0x2B335F),
    rgb(0x7E2072),
    rgb(0x19959C),
    rgb(0x8B4852),
    rgb(0x395C98),
    rgb(0xA9C1FF),
    rgb(0xEEEEEE),
    rgb(0xD4186C),
    rgb(0xD38441),
    rgb(0xE9C35B),
    rgb(0x70C6A9),
    rgb(0x7696DE),
    rgb(0xA3A3A3),
    rgb(0xFF9798),
    rgb(0xEDC7B0),
];

const GRADIENT_NEAR: Color = Color::new(255, 255, 255, 255);
const GRADIENT_FAR: Color = Color::new(0, 0, 255, 255);

#[inline]
fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let f = |x: u8, y: u8| -> u8 { ((x as f32) * (1.0 - t) + (y as f32) * t).round() as u8 };
    Color::new(f(a.r, b.r), f(a.g, b.g), f(a.b, b.b), 255)
}

pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Base colors with the gradient shades installed after them.
    pub fn new() -> Self {
        let mut colors = BASE.to_vec();
        let last = (GRADIENT_STEPS - 1) as f32;
        colors.extend(
            (0..GRADIENT_STEPS).map(|i| lerp_color(GRADIENT_NEAR, GRADIENT_FAR, i as f32 / last)),
        );
        Self { colors }
    }

    /// Unknown indices render black.
    #[inline]
    pub fn color(&self, index: u8) -> Color {
        self.colors.get(index as usize).copied().unwrap_or(Color::BLACK)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
