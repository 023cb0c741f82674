//! Data-driven game balance
//!
//! Every gameplay knob lives here so difficulty can be adjusted without
//! touching the simulation. Defaults reproduce the shipped balance; a JSON
//! blob can override any subset of fields.

use serde::{Deserialize, Serialize};

/// Balance knobs for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Coins spawned per level, scaled by level number
    pub num_coins: u32,
    /// Enemies spawned per level, scaled by level number
    pub num_enemies: u32,
    /// Interior obstacles per level (constant, not level-scaled)
    pub num_obstacles: u32,

    /// Player movement speed (pixels per frame)
    pub player_speed: f32,
    /// Player sprite size
    pub player_size: f32,
    /// Player collision box (much smaller than the sprite, forgiving)
    pub player_collision_size: f32,

    /// Coin sprite/pickup size
    pub coin_size: f32,
    /// Coin drift speed bound: each axis gets a uniform draw in ±this
    pub coin_max_speed: f32,

    /// Enemy sprite size
    pub enemy_size: f32,
    /// Enemy hitbox size (the contact rule uses sprite halves)
    pub enemy_hitbox_size: f32,
    /// Enemy pursuit speed (pixels per frame)
    pub enemy_speed: f32,

    /// Interior obstacle side length range
    pub obstacle_min_side: f32,
    pub obstacle_max_side: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            num_coins: 5,
            num_enemies: 1,
            num_obstacles: 4,

            player_speed: 5.0,
            player_size: 40.0,
            player_collision_size: 10.0,

            coin_size: 20.0,
            coin_max_speed: 2.0,

            enemy_size: 40.0,
            enemy_hitbox_size: 10.0,
            enemy_speed: 2.0,

            obstacle_min_side: 20.0,
            obstacle_max_side: 100.0,
        }
    }
}

impl Tuning {
    /// Coin count for a given level
    pub fn coins_for_level(&self, level: u32) -> u32 {
        self.num_coins * level
    }

    /// Enemy count for a given level
    pub fn enemies_for_level(&self, level: u32) -> u32 {
        self.num_enemies * level
    }

    /// Parse a (possibly partial) JSON override; unspecified fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
