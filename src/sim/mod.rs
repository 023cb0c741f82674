//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete update per frame tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, rect_overlap};
pub use level::{LevelLayout, PlacementError, generate_level};
pub use state::{Coin, Enemy, GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{Dir, GameEvent, InputEvent, handle_input, tick};
