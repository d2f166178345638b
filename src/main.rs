// main.rs
use anyhow::anyhow;
use clap::Parser;
use log::info;
use raylib::prelude::*;

use maze_adventure::audio_manager::AudioManager;
use maze_adventure::config::Cli;
use maze_adventure::game::Game;
use maze_adventure::game::screen::Screen;
use maze_adventure::process_events::{MouseDrag, process_events};
use maze_adventure::render::framebuffer::Framebuffer;
use maze_adventure::render::minimap::render_minimap;
use maze_adventure::render::palette::Palette;
use maze_adventure::render::render3d::render_3d;
use maze_adventure::render::screens::render_screen;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config()?;
    let (fb_w, fb_h, scale) = (config.screen_width, config.screen_height, config.window_scale);
    let window_w = (fb_w * scale) as i32;
    let window_h = (fb_h * scale) as i32;
    info!(
        "starting {}x{} maze, {} stages, {:?} shading",
        config.maze_width, config.maze_height, config.stages, config.shading
    );

    let mut game = Game::new(config)?;

    let (mut window, raylib_thread) = raylib::init()
        .size(window_w, window_h)
        .title("Maze Adventure")
        .build();
    window.set_target_fps(60);

    // Palette is built once, gradient included
    let palette = Palette::new();
    let mut framebuffer = Framebuffer::new(fb_w, fb_h);
    let image = Image::gen_image_color(fb_w as i32, fb_h as i32, Color::BLACK);
    let mut texture = window
        .load_texture_from_image(&raylib_thread, &image)
        .map_err(|e| anyhow!("could not create frame texture: {e}"))?;

    let audio = AudioManager::new();
    let mut drag = MouseDrag::default();

    while !window.window_should_close() {
        let turn_speed = game.session.config.turn_speed;
        let input = process_events(&window, &mut drag, turn_speed);
        let events = game.tick(&input)?;
        if let Some(audio) = &audio {
            for event in &events {
                audio.play_event(event);
            }
        }

        framebuffer.clear();
        if let Screen::Playing(_) = game.screen() {
            render_3d(&mut framebuffer, &game.session.world, &palette, &game.session.config);
            render_minimap(&mut framebuffer, &game.session.world, &palette);
        }
        framebuffer.upload_to_texture(&mut texture);

        let stages = game.session.config.stages;
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        d.draw_texture_ex(&texture, Vector2::new(0.0, 0.0), 0.0, scale as f32, Color::WHITE);
        render_screen(
            &mut d,
            game.screen(),
            &game.session.world,
            &palette,
            stages,
            window_w,
            window_h,
        );
    }

    info!("bye");
    Ok(())
}
