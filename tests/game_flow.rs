use maze_adventure::config::GameConfig;
use maze_adventure::core::events::GameEvent;
use maze_adventure::core::monster::Monster;
use maze_adventure::core::player::Player;
use maze_adventure::game::screen::{GameOver, Screen};
use maze_adventure::game::{Game, Intents};

fn config() -> GameConfig {
    GameConfig {
        maze_width: 11,
        maze_height: 11,
        stages: 1,
        traps: 3,
        monsters: 2,
        monster_interval: 5,
        seed: Some(2024),
        ..GameConfig::default()
    }
}

fn press_start() -> Intents {
    Intents { start: true, ..Intents::default() }
}

#[test]
fn title_waits_for_start() {
    let mut game = Game::new(config()).unwrap();
    for _ in 0..10 {
        assert!(game.tick(&Intents::default()).unwrap().is_empty());
    }
    assert!(matches!(game.screen(), Screen::Title(t) if t.frame == 10));

    let events = game.tick(&press_start()).unwrap();
    assert_eq!(events, vec![GameEvent::GameStarted]);
    assert_eq!(game.screen(), &Screen::Playing(Default::default()));
    assert_eq!(game.session.world.stage, 1);
    assert_eq!(game.session.world.player.cell(), (1, 1));
}

#[test]
fn caught_then_restart_returns_to_title() {
    let mut game = Game::new(config()).unwrap();
    game.tick(&press_start()).unwrap();
    game.session.world.monsters = vec![Monster::new(1, 1)];

    let events = game.tick(&Intents::default()).unwrap();
    assert!(events.contains(&GameEvent::PlayerCaught));
    assert_eq!(game.screen(), &Screen::GameOver(GameOver { stage: 1 }));

    game.tick(&press_start()).unwrap();
    assert!(matches!(game.screen(), Screen::GameOver(_)));
    game.tick(&Intents { restart: true, ..Intents::default() }).unwrap();
    assert!(matches!(game.screen(), Screen::Title(_)));
}

#[test]
fn last_goal_clears_the_game() {
    let mut game = Game::new(config()).unwrap();
    game.tick(&press_start()).unwrap();
    let world = &mut game.session.world;
    world.monsters.clear();
    world.traps.clear();
    world.key = None;
    world.has_key = true;
    let goal = world.goal;
    world.player = Player::new(goal.x as f32 + 0.5, goal.y as f32 + 0.5, 0.0);

    let events = game.tick(&Intents::default()).unwrap();
    assert_eq!(events, vec![GameEvent::GoalReached { stage: 1 }, GameEvent::GameCleared]);
    assert!(matches!(game.screen(), Screen::Clear(c) if c.stages == 1));
}

#[test]
fn regenerate_intent_rebuilds_maze() {
    let mut game = Game::new(config()).unwrap();
    game.tick(&press_start()).unwrap();
    let events = game
        .tick(&Intents { regenerate: true, ..Intents::default() })
        .unwrap();
    assert_eq!(events.first(), Some(&GameEvent::MazeRegenerated));
    assert_eq!(game.session.world.player.cell(), (1, 1));
}

#[test]
fn monsters_move_on_their_cadence() {
    let mut game = Game::new(config()).unwrap();
    game.tick(&press_start()).unwrap();
    game.session.world.traps.clear();
    game.session.world.key = None;
    let before = game.session.world.monsters.clone();

    for _ in 0..4 {
        let events = game.tick(&Intents::default()).unwrap();
        assert!(!events.contains(&GameEvent::MonsterStepped));
    }
    assert_eq!(game.session.world.monsters, before);
    let events = game.tick(&Intents::default()).unwrap();
    assert!(events.contains(&GameEvent::MonsterStepped));
    assert_ne!(game.session.world.monsters, before);
}

#[test]
fn fixed_seed_replays_identically() {
    let script: Vec<Intents> = (0..300)
        .map(|i| Intents {
            forward: i % 3 != 0,
            turn: if i % 40 < 10 { 0.05 } else { 0.0 },
            ..Intents::default()
        })
        .collect();

    let run = || {
        let mut game = Game::new(config()).unwrap();
        game.tick(&press_start()).unwrap();
        let mut log = Vec::new();
        for input in &script {
            log.extend(game.tick(input).unwrap());
        }
        (log, game.session.world.clone(), game.screen().clone())
    };
    assert_eq!(run(), run());
}
