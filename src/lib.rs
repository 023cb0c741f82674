//! Phantom Plunder - a top-down coin-grab arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, level generation, game state)
//! - `render`: Semantic draw commands for an external renderer
//! - `audio`: Sound cue contract for an external audio backend
//! - `assets`: Opaque asset handles resolved by an external loader
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_W: f32 = 600.0;
    pub const ARENA_H: f32 = 600.0;
    /// Thickness of the perimeter wall
    pub const BORDER_SIZE: f32 = 10.0;

    /// Final level; clearing its coins wins the run
    pub const MAX_LEVEL: u32 = 10;

    /// Cap on rejection-sampling attempts per placed entity
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

    /// HUD text sizes
    pub const GAME_OVER_TEXT_SIZE: f32 = 26.0;
    pub const LEVEL_SCORE_TEXT_SIZE: f32 = 18.0;
}
