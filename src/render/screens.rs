//! Text screens and the in-game HUD, drawn at window resolution.
use raylib::prelude::*;

use crate::core::shading::{RED, WHITE, YELLOW};
use crate::game::screen::Screen;
use crate::game::session::World;
use crate::render::palette::Palette;

const FONT: i32 = 20;

fn centered(d: &mut impl RaylibDraw, text: &str, window_w: i32, y: i32, size: i32, color: Color) {
    let x = (window_w - measure_text(text, size)) / 2;
    d.draw_text(text, x, y, size, color);
}

/// Text for the current screen. The playing screen only gets the HUD; its 3D
/// view comes from the framebuffer.
pub fn render_screen(
    d: &mut impl RaylibDraw,
    screen: &Screen,
    world: &World,
    palette: &Palette,
    stages: u32,
    window_w: i32,
    window_h: i32,
) {
    let white = palette.color(WHITE);
    let mid = window_h / 2;
    match screen {
        Screen::Title(title) => {
            let cycle = palette.color((title.frame / 4 % 16) as u8);
            centered(d, "MAZE ADVENTURE", window_w, mid - 60, FONT * 2, cycle);
            centered(d, "PRESS SPACE TO START", window_w, mid + 20, FONT, white);
        }
        Screen::Playing(_) => {
            let hud = format!("STAGE {}/{}", world.stage, stages);
            d.draw_text(&hud, window_w - measure_text(&hud, FONT) - 10, 10, FONT, white);
            if world.has_key {
                d.draw_text("KEY", window_w - measure_text("KEY", FONT) - 10, 36, FONT, palette.color(YELLOW));
            }
        }
        Screen::GameOver(over) => {
            centered(d, "GAME OVER", window_w, mid - 40, FONT * 2, palette.color(RED));
            centered(d, &format!("CAUGHT ON STAGE {}", over.stage), window_w, mid + 10, FONT, white);
            centered(d, "PRESS R TO RESTART", window_w, mid + 40, FONT, white);
        }
        Screen::Clear(clear) => {
            centered(d, "CONGRATULATIONS!", window_w, mid - 40, FONT * 2, palette.color(YELLOW));
            centered(d, &format!("YOU CLEARED ALL {} STAGES!", clear.stages), window_w, mid + 10, FONT, white);
            centered(d, "PRESS R TO RESTART", window_w, mid + 40, FONT, white);
        }
    }
}
