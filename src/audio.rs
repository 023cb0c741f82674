//! Sound cue contract
//!
//! The core maps frame events to cues; an external backend owns playback,
//! volume, and mixing. `play` is fire-and-forget.

use crate::sim::GameEvent;

/// Sound effect cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Coin collected
    Coin,
    /// Advanced to the next level
    LevelUp,
    /// Player caught
    GameOver,
}

impl SoundCue {
    /// Resource name the loader should resolve
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Coin => "coinsound.mp3",
            SoundCue::LevelUp => "levelup.mp3",
            SoundCue::GameOver => "gameover.mp3",
        }
    }
}

/// Cue for a frame event, if that event makes a sound. Victory is silent;
/// the level-up fanfare only plays on an actual advance.
pub fn cue_for(event: GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::CoinCollected => Some(SoundCue::Coin),
        GameEvent::LevelUp => Some(SoundCue::LevelUp),
        GameEvent::GameOver => Some(SoundCue::GameOver),
        GameEvent::Victory => None,
    }
}

/// Playback backend the platform layer provides
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// No-op sink for tests and headless runs
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}
