/// Things that happened during a tick, for sound and score collaborators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    MonsterStepped,
    TrapTriggered,
    KeyCollected,
    GoalReached { stage: u32 },
    StageAdvanced { stage: u32 },
    MazeRegenerated,
    PlayerCaught,
    GameCleared,
}
