//! Top-down overlay in the corner of the 3D view.
use crate::core::shading::{BLACK, BLUE, GREEN, ORANGE, RED, WHITE, YELLOW};
use crate::game::session::World;
use crate::render::framebuffer::Framebuffer;
use crate::render::palette::Palette;

pub const MAP_SCALE: u32 = 2;

fn draw_cell(fb: &mut Framebuffer, palette: &Palette, x: usize, y: usize, shade: u8) {
    fb.fill_rect(
        x as u32 * MAP_SCALE,
        y as u32 * MAP_SCALE,
        MAP_SCALE,
        MAP_SCALE,
        palette.color(shade),
    );
}

pub fn render_minimap(fb: &mut Framebuffer, world: &World, palette: &Palette) {
    let maze = &world.maze;
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let shade = if maze.is_wall(x, y) { WHITE } else { BLACK };
            draw_cell(fb, palette, x, y, shade);
        }
    }

    if let Some((gx, gy)) = world.active_goal() {
        draw_cell(fb, palette, gx, gy, RED);
    }
    if let Some(key) = world.key {
        draw_cell(fb, palette, key.x, key.y, YELLOW);
    }
    for trap in &world.traps {
        draw_cell(fb, palette, trap.x, trap.y, BLUE);
    }
    for m in &world.monsters {
        draw_cell(fb, palette, m.x, m.y, ORANGE);
    }

    let s = MAP_SCALE as f32;
    fb.fill_circle(
        (world.player.x * s) as i32,
        (world.player.y * s) as i32,
        (MAP_SCALE / 2) as i32,
        palette.color(GREEN),
    );
}
