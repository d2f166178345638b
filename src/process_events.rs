//! Keyboard and mouse to game intents.
use raylib::prelude::*;

use crate::game::Intents;

/// Mouse-drag rotation per pixel, in radians.
const DRAG_TURN: f32 = 0.02;
/// Vertical drag needed before it counts as walking.
const DRAG_WALK_PX: i32 = 4;

/// Tracks an in-progress left-button drag between frames.
#[derive(Default)]
pub struct MouseDrag {
    dragging: bool,
    last_x: i32,
    anchor_y: i32,
}

pub fn process_events(window: &RaylibHandle, drag: &mut MouseDrag, turn_speed: f32) -> Intents {
    let mut intents = Intents {
        forward: window.is_key_down(KeyboardKey::KEY_UP) || window.is_key_down(KeyboardKey::KEY_W),
        backward: window.is_key_down(KeyboardKey::KEY_DOWN) || window.is_key_down(KeyboardKey::KEY_S),
        regenerate: window.is_key_pressed(KeyboardKey::KEY_G),
        start: window.is_key_pressed(KeyboardKey::KEY_SPACE)
            || window.is_key_pressed(KeyboardKey::KEY_ENTER)
            || window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        restart: window.is_key_pressed(KeyboardKey::KEY_R),
        ..Intents::default()
    };

    if window.is_key_down(KeyboardKey::KEY_LEFT) || window.is_key_down(KeyboardKey::KEY_A) {
        intents.turn -= turn_speed;
    }
    if window.is_key_down(KeyboardKey::KEY_RIGHT) || window.is_key_down(KeyboardKey::KEY_D) {
        intents.turn += turn_speed;
    }

    let (mx, my) = (window.get_mouse_x(), window.get_mouse_y());
    if window.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        if drag.dragging {
            intents.turn += (mx - drag.last_x) as f32 * DRAG_TURN;
            let dy = my - drag.anchor_y;
            if !intents.forward && !intents.backward && dy.abs() > DRAG_WALK_PX {
                intents.forward = dy < 0;
                intents.backward = dy > 0;
            }
        } else {
            drag.dragging = true;
            drag.anchor_y = my;
        }
        drag.last_x = mx;
    } else {
        drag.dragging = false;
    }

    intents
}
