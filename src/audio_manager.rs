//! Sound effects for game events.
//!
//! Sounds are loaded from `assets/` when present; a missing file falls back to
//! a short synthesized tone so every event is still audible.

use std::{fs::File, io::Read, io::BufReader, io::Cursor, sync::Arc, time::Duration};

use log::{debug, warn};
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::core::events::GameEvent;

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Arc<Vec<u8>>> {
    let found = paths.iter().find_map(|p| load_bytes(p));
    if found.is_none() {
        debug!("no sound file among {paths:?}, using tone");
    }
    found.map(Arc::new)
}

/// One effect: a decoded file if we have it, else a tone.
struct Effect {
    data: Option<Arc<Vec<u8>>>,
    tone_hz: f32,
    tone_ms: u64,
    volume: f32,
}

impl Effect {
    fn new(paths: &[&str], tone_hz: f32, tone_ms: u64, volume: f32) -> Self {
        Self {
            data: load_bytes_any(paths),
            tone_hz,
            tone_ms,
            volume,
        }
    }
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    step: Effect,
    trap: Effect,
    key: Effect,
    goal: Effect,
    caught: Effect,
    start: Effect,
}

impl AudioManager {
    /// `None` when there is no usable output device.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(out) => out,
            Err(e) => {
                warn!("audio disabled: {e}");
                return None;
            }
        };
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            handle,
            sfx_sink,
            step: Effect::new(&["assets/sfx_monster_step.wav", "assets/sounds/step.wav"], 110.0, 60, 0.25),
            trap: Effect::new(&["assets/sfx_trap.wav", "assets/sounds/trap.wav"], 180.0, 300, 0.5),
            key: Effect::new(&["assets/sfx_key.wav", "assets/sounds/key.wav"], 880.0, 150, 0.4),
            goal: Effect::new(&["assets/sfx_goal.wav", "assets/sounds/goal.wav"], 660.0, 400, 0.4),
            caught: Effect::new(&["assets/sfx_caught.wav", "assets/sounds/caught.wav"], 90.0, 600, 0.6),
            start: Effect::new(&["assets/sfx_start.wav", "assets/sounds/start.wav"], 440.0, 120, 0.3),
        })
    }

    pub fn play_event(&self, event: &GameEvent) {
        let effect = match event {
            GameEvent::MonsterStepped => &self.step,
            GameEvent::TrapTriggered => &self.trap,
            GameEvent::KeyCollected => &self.key,
            GameEvent::GoalReached { .. } | GameEvent::GameCleared => &self.goal,
            GameEvent::PlayerCaught => &self.caught,
            GameEvent::GameStarted | GameEvent::StageAdvanced { .. } => &self.start,
            GameEvent::MazeRegenerated => return,
        };
        self.play(effect);
    }

    fn play(&self, effect: &Effect) {
        match &effect.data {
            Some(d) => {
                if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                    // own sink so overlapping events all play
                    if let Ok(sink) = Sink::try_new(&self.handle) {
                        sink.append(dec.amplify(effect.volume.clamp(0.0, 2.5)));
                        sink.detach();
                    }
                }
            }
            None => {
                let tone = SineWave::new(effect.tone_hz)
                    .take_duration(Duration::from_millis(effect.tone_ms))
                    .amplify(effect.volume.clamp(0.0, 1.0));
                self.sfx_sink.append(tone);
            }
        }
    }
}
