//! Game orchestration: screens, session rules and per-tick intents.
//!
//! Re-exports:
//! - `session`: World building, placement and the playing rules
//! - `screen`: Title / playing / game over / clear state machine

pub mod screen;
pub mod session;

use crate::config::GameConfig;
use crate::core::events::GameEvent;
use crate::error::{ConfigError, MazeError};
use screen::Screen;
use session::Session;

/// Input already resolved into game intents for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intents {
    pub forward: bool,
    pub backward: bool,
    /// Radians to rotate this tick (positive turns right).
    pub turn: f32,
    pub regenerate: bool,
    pub start: bool,
    pub restart: bool,
}

pub struct Game {
    pub session: Session,
    screen: Screen,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            session: Session::new(config)?,
            screen: Screen::default(),
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Runs one logic tick and returns what happened.
    pub fn tick(&mut self, input: &Intents) -> Result<Vec<GameEvent>, MazeError> {
        let mut events = Vec::new();
        if let Some(mut next) = self.screen.on_tick(&mut self.session, input, &mut events)? {
            next.on_enter(&mut self.session, &mut events)?;
            self.screen = next;
        }
        Ok(events)
    }
}
