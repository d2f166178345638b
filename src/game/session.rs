//! Play session: the current world, its rules, and stage progression.
use std::cmp::Reverse;

use log::{debug, info, warn};

use crate::config::GameConfig;
use crate::core::events::GameEvent;
use crate::core::marker::{Marker, sample_cells};
use crate::core::maze::Maze;
use crate::core::monster::Monster;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::error::{ConfigError, MazeError};
use crate::game::Intents;

/// Fires once every `interval` ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepTimer {
    interval: u32,
    elapsed: u32,
}

impl StepTimer {
    pub fn new(interval: u32) -> Self {
        Self { interval: interval.max(1), elapsed: 0 }
    }

    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            return true;
        }
        false
    }
}

/// Everything that lives in one maze instance.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub maze: Maze,
    pub player: Player,
    pub monsters: Vec<Monster>,
    pub traps: Vec<Marker>,
    /// `None` once collected.
    pub key: Option<Marker>,
    pub goal: Marker,
    pub has_key: bool,
    pub stage: u32,
    pub monster_timer: StepTimer,
}

impl World {
    /// The goal only exists for rendering and collision once the key is held.
    pub fn active_goal(&self) -> Option<(usize, usize)> {
        self.has_key.then(|| self.goal.cell())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Caught,
    Cleared,
}

pub struct Session {
    pub config: GameConfig,
    pub rng: GameRng,
    pub world: World,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = config.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
        info!("session seed {}", rng.seed());
        let world = build_world(&config, &mut rng, 1, false)?;
        Ok(Self { config, rng, world })
    }

    pub fn start_game(&mut self) -> Result<(), MazeError> {
        self.world = build_world(&self.config, &mut self.rng, 1, false)?;
        Ok(())
    }

    /// New maze for the same stage; a collected key stays collected.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        let (stage, has_key) = (self.world.stage, self.world.has_key);
        self.world = build_world(&self.config, &mut self.rng, stage, has_key)?;
        Ok(())
    }

    /// One playing tick: intents, movement, monsters, then collisions in the
    /// order monster, trap, key, goal.
    pub fn update(&mut self, input: &Intents, events: &mut Vec<GameEvent>) -> Result<Outcome, MazeError> {
        if input.regenerate {
            self.regenerate()?;
            events.push(GameEvent::MazeRegenerated);
        }

        let world = &mut self.world;
        world.player.turn(input.turn);
        let walk = match (input.forward, input.backward) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        if walk != 0.0 {
            world.player.advance(&world.maze, walk * self.config.move_speed);
        }

        if world.monster_timer.tick() {
            let mut stepped = false;
            for monster in &mut world.monsters {
                stepped |= monster.step(&world.maze, &mut self.rng);
            }
            if stepped {
                events.push(GameEvent::MonsterStepped);
            }
        }

        if world.monsters.iter().any(|m| m.collides_with(&world.player)) {
            info!("caught on stage {}", world.stage);
            events.push(GameEvent::PlayerCaught);
            return Ok(Outcome::Caught);
        }

        if world.traps.iter().any(|t| t.collides_with(&world.player)) {
            info!("trap triggered at {:?}", world.player.cell());
            events.push(GameEvent::TrapTriggered);
            self.regenerate()?;
            return Ok(Outcome::Continue);
        }

        if world.key.is_some_and(|k| k.collides_with(&world.player)) {
            world.key = None;
            world.has_key = true;
            events.push(GameEvent::KeyCollected);
        }

        if world.has_key && world.goal.collides_with(&world.player) {
            let stage = world.stage;
            events.push(GameEvent::GoalReached { stage });
            if stage >= self.config.stages {
                info!("all {stage} stages cleared");
                events.push(GameEvent::GameCleared);
                return Ok(Outcome::Cleared);
            }
            self.world = build_world(&self.config, &mut self.rng, stage + 1, false)?;
            info!("advanced to stage {}", stage + 1);
            events.push(GameEvent::StageAdvanced { stage: stage + 1 });
        }

        Ok(Outcome::Continue)
    }
}

/// Generates a maze for `stage` and places the player, key, traps and
/// monsters. All markers come out of one shared pool, so none share a cell,
/// and the pool excludes the goal and the safe zone around the start.
pub fn build_world(
    config: &GameConfig,
    rng: &mut GameRng,
    stage: u32,
    has_key: bool,
) -> Result<World, MazeError> {
    let (width, height) = config.maze_size(stage);
    let maze = Maze::generate(width, height, rng)?;
    let player = Player::spawn(&maze);
    let start = maze.start();
    let (gx, gy) = maze.goal();
    let goal = Marker::new(gx, gy);

    let distance = |(x, y): (usize, usize)| x.abs_diff(start.0) + y.abs_diff(start.1);
    let (mut pool, mut near): (Vec<_>, Vec<_>) = maze
        .empty_cells()
        .into_iter()
        .filter(|&cell| cell != start && cell != goal.cell())
        .partition(|&cell| distance(cell) >= config.safe_radius);

    // Too few cells outside the safe zone: borrow the farthest ones inside it.
    let needed = usize::from(!has_key) + config.traps + config.monsters;
    if pool.len() < needed {
        let short = needed - pool.len();
        warn!(
            "stage {stage}: only {} cells outside the safe radius, using {} closer ones",
            pool.len(),
            short.min(near.len())
        );
        near.sort_by_key(|&cell| Reverse(distance(cell)));
        pool.extend(near.into_iter().take(short));
    }

    let key = if has_key {
        None
    } else {
        sample_cells(&mut pool, 1, start, rng)
            .first()
            .map(|&(x, y)| Marker::new(x, y))
    };
    let traps = sample_cells(&mut pool, config.traps, start, rng)
        .into_iter()
        .map(|(x, y)| Marker::new(x, y))
        .collect();
    let monsters = sample_cells(&mut pool, config.monsters, start, rng)
        .into_iter()
        .map(|(x, y)| Monster::new(x, y))
        .collect();
    debug!("stage {stage} world built, {} free cells left", pool.len());

    Ok(World {
        maze,
        player,
        monsters,
        traps,
        key,
        goal,
        has_key,
        stage,
        monster_timer: StepTimer::new(config.monster_interval),
    })
}
