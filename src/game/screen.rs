//! Screen state machine: title, playing, game over, clear.
//!
//! Each state is its own record. The game drives `on_enter` and `on_tick`;
//! the renderer matches on the variant to draw it.

use crate::core::events::GameEvent;
use crate::error::MazeError;
use crate::game::Intents;
use crate::game::session::{Outcome, Session};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Title {
    /// Ticks spent on the title, drives the cycling title color.
    pub frame: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playing;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub stage: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clear {
    pub stages: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Title(Title),
    Playing(Playing),
    GameOver(GameOver),
    Clear(Clear),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Title(Title::default())
    }
}

impl Screen {
    pub fn on_enter(&mut self, session: &mut Session, events: &mut Vec<GameEvent>) -> Result<(), MazeError> {
        if let Screen::Playing(_) = self {
            session.start_game()?;
            events.push(GameEvent::GameStarted);
        }
        Ok(())
    }

    /// Returns the next screen when this one is done.
    pub fn on_tick(
        &mut self,
        session: &mut Session,
        input: &Intents,
        events: &mut Vec<GameEvent>,
    ) -> Result<Option<Screen>, MazeError> {
        let next = match self {
            Screen::Title(title) => {
                title.frame += 1;
                input.start.then(|| Screen::Playing(Playing))
            }
            Screen::Playing(_) => match session.update(input, events)? {
                Outcome::Continue => None,
                Outcome::Caught => Some(Screen::GameOver(GameOver {
                    stage: session.world.stage,
                })),
                Outcome::Cleared => Some(Screen::Clear(Clear {
                    stages: session.config.stages,
                })),
            },
            Screen::GameOver(_) | Screen::Clear(_) => input.restart.then(Screen::default),
        };
        Ok(next)
    }
}
