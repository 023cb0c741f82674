//! Headless demo driver
//!
//! Runs a seeded session with a trivial autopilot and logs what happens.
//! Useful for balance checks and for eyeballing determinism: the same seed
//! always produces the same run.

use phantom_plunder::audio::{AudioSink, SoundCue, cue_for};
use phantom_plunder::render::scene;
use phantom_plunder::sim::{Dir, GameEvent, GamePhase, GameState, InputEvent, PlacementError, handle_input, tick};
use phantom_plunder::tuning::Tuning;

/// Frame budget for the demo run
const MAX_FRAMES: u32 = 50_000;

/// Sink that logs each cue instead of playing it
#[derive(Default)]
struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {:?} ({})", cue, cue.file_name());
    }
}

/// Head for the nearest coin, one axis at a time
fn autopilot(state: &GameState) -> Option<Dir> {
    let player = state.player.pos;
    let nearest = state
        .coins
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(player)
                .total_cmp(&b.pos.distance_squared(player))
        })?
        .pos;

    let delta = nearest - player;
    if delta.x.abs() >= delta.y.abs() {
        Some(if delta.x < 0.0 { Dir::Left } else { Dir::Right })
    } else {
        Some(if delta.y < 0.0 { Dir::Up } else { Dir::Down })
    }
}

fn main() -> Result<(), PlacementError> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    log::info!("starting demo run with seed {seed}");

    let mut state = GameState::new(seed, Tuning::default());
    let mut audio = LogAudio;

    // Title -> instructions -> playing
    handle_input(&mut state, InputEvent::Confirm)?;
    handle_input(&mut state, InputEvent::Confirm)?;

    let mut events = Vec::new();
    for frame in 0..MAX_FRAMES {
        if let Some(dir) = autopilot(&state) {
            handle_input(&mut state, InputEvent::Press(dir))?;
        }

        events.clear();
        tick(&mut state, &mut events);
        for event in &events {
            if let Some(cue) = cue_for(*event) {
                audio.play(cue);
            }
            if matches!(event, GameEvent::LevelUp) {
                log::info!("frame {frame}: advanced to level {}", state.level);
            }
        }

        match state.phase {
            GamePhase::GameOver => {
                log::info!(
                    "frame {frame}: caught at level {} with score {}",
                    state.level,
                    state.score
                );
                break;
            }
            GamePhase::Victory => {
                log::info!("frame {frame}: victory with score {}", state.score);
                break;
            }
            _ => {}
        }
    }

    log::debug!("final frame draws {} commands", scene(&state).len());
    println!(
        "seed {seed}: ended in {:?} at level {} with score {}",
        state.phase, state.level, state.score
    );
    Ok(())
}
