//! Bresenham integer line drawing.
use raylib::prelude::Color;

use crate::render::framebuffer::Framebuffer;

pub fn line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel_color(x as u32, y as u32, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_both_endpoints_and_diagonal() {
        let mut fb = Framebuffer::new(5, 5);
        line(&mut fb, 0, 0, 4, 4, Color::WHITE);
        for i in 0..5 {
            assert_eq!(fb.get_pixel(i, i), Color::WHITE);
        }
        assert_eq!(fb.get_pixel(1, 0), Color::BLACK);
    }

    #[test]
    fn offscreen_points_are_skipped() {
        let mut fb = Framebuffer::new(3, 3);
        line(&mut fb, -2, 1, 2, 1, Color::WHITE);
        assert_eq!(fb.get_pixel(0, 1), Color::WHITE);
        assert_eq!(fb.get_pixel(2, 1), Color::WHITE);
    }
}
