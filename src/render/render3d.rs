//! 3D view: one ray per column step, shaded wall columns, black outlines.
use crate::config::GameConfig;
use crate::core::casters::{HitKind, cast_ray, project_column, ray_angle};
use crate::core::shading::{BLACK, TEAL, wall_shade};
use crate::game::session::World;
use crate::render::framebuffer::Framebuffer;
use crate::render::line::line;
use crate::render::palette::Palette;

pub fn render_3d(fb: &mut Framebuffer, world: &World, palette: &Palette, config: &GameConfig) {
    let w = fb.width;
    let h = fb.height;
    let step = config.column_step.max(1);
    let max_distance = config.ray_bound(world.stage);
    let goal = world.active_goal();
    let ceiling = palette.color(BLACK);
    let floor = palette.color(TEAL);
    let outline = palette.color(BLACK);

    let mut prev: Option<(u32, u32, u32)> = None; // (x, top, bottom) of the last wall column
    for x in (0..w).step_by(step as usize) {
        let a = ray_angle(world.player.angle, x, w);
        let hit = cast_ray(&world.maze, &world.player, goal, a, max_distance);
        let span = project_column(h, hit.distance);

        fb.vline(x, 0, span.top, step, ceiling);
        fb.vline(x, span.bottom, h, step, floor);

        match wall_shade(&hit, config.shading, config.gradient_far) {
            Some(shade) => {
                fb.vline(x, span.top, span.bottom, step, palette.color(shade));
                if let Some((px, ptop, pbottom)) = prev {
                    line(fb, px as i32, ptop as i32, x as i32, span.top as i32, outline);
                    let (b0, b1) = (pbottom.saturating_sub(1), span.bottom.saturating_sub(1));
                    line(fb, px as i32, b0 as i32, x as i32, b1 as i32, outline);
                }
                prev = Some((x, span.top, span.bottom));
            }
            None => {
                debug_assert_eq!(hit.impact, HitKind::OutOfBounds);
                fb.vline(x, span.top, span.bottom, step, ceiling);
                prev = None;
            }
        }
    }
}
