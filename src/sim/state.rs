//! Game state and core simulation types
//!
//! Entities carry state plus their own per-frame update rules; everything a
//! frame mutates hangs off [`GameState`], which the frame-driving caller owns
//! and threads through `tick` and the input handler. No globals.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Title,
    /// Instructions screen, waiting for confirm
    Instructions,
    /// Active gameplay
    Playing,
    /// Player was caught; waiting for confirm to retry
    GameOver,
    /// Level ten cleared. Terminal.
    Victory,
}

/// The player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite size
    pub size: f32,
    /// Collision box, much smaller than the sprite
    pub collision_size: f32,
    /// Speed applied per axis of held input
    pub speed: f32,
}

impl Player {
    /// Spawn at the arena center (game start)
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(ARENA_W / 2.0, ARENA_H / 2.0),
            vel: Vec2::ZERO,
            size: tuning.player_size,
            collision_size: tuning.player_collision_size,
            speed: tuning.player_speed,
        }
    }

    /// Advance one frame: integrate velocity, then clamp into the inset
    /// playfield accounting for the sprite's half-size.
    pub fn update(&mut self) {
        self.pos += self.vel;

        let half = self.size / 2.0;
        self.pos.x = self.pos.x.clamp(BORDER_SIZE + half, ARENA_W - BORDER_SIZE - half);
        self.pos.y = self.pos.y.clamp(BORDER_SIZE + half, ARENA_H - BORDER_SIZE - half);
    }

    /// Set velocity from a direction vector; `(0, 0)` stops movement
    /// (key release).
    pub fn set_direction(&mut self, dx: f32, dy: f32) {
        self.vel = Vec2::new(dx, dy) * self.speed;
    }

    /// True iff this player's circle overlaps the coin's circle
    pub fn can_collect(&self, coin: &Coin) -> bool {
        super::circles_overlap(self.pos, self.size / 2.0, coin.pos, coin.size / 2.0)
    }
}

/// A drifting coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Coin {
    /// Spawn at a position with a random constant drift, each axis drawn
    /// independently in ±`coin_max_speed`.
    pub fn spawn(pos: Vec2, tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let m = tuning.coin_max_speed;
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-m..m), rng.random_range(-m..m)),
            size: tuning.coin_size,
        }
    }

    /// Advance one frame: drift, then reflect off the border walls.
    ///
    /// The bounce negates the crossed component only; position is not
    /// clamped, so a brief overshoot past the boundary is tolerated.
    pub fn update(&mut self) {
        self.pos += self.vel;

        if self.pos.x < BORDER_SIZE || self.pos.x > ARENA_W - BORDER_SIZE {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < BORDER_SIZE || self.pos.y > ARENA_H - BORDER_SIZE {
            self.vel.y = -self.vel.y;
        }
    }
}

/// A ghost. Dormant until the player makes noise, then homes forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Sprite size; also the contact circle diameter
    pub size: f32,
    /// Hitbox size; the contact rule uses sprite halves, so this stays a
    /// balance knob until contact tightens
    pub hitbox_size: f32,
    /// Pursuit speed (pixels per frame)
    pub speed: f32,
    /// One-way pursuit trigger; never cleared within a level
    pub alerted: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: tuning.enemy_size,
            hitbox_size: tuning.enemy_hitbox_size,
            speed: tuning.enemy_speed,
            alerted: false,
        }
    }

    /// Advance one frame: if alerted, step `speed` along the unit vector
    /// toward the player's current position. The heading is recomputed every
    /// frame, so pursuit is homing, not path-predictive.
    pub fn update(&mut self, player_pos: Vec2) {
        if self.alerted {
            let dir = (player_pos - self.pos).normalize_or_zero();
            self.pos += dir * self.speed;
        }
    }

    /// Flip the pursuit trigger. Idempotent, irreversible for the level.
    pub fn alert(&mut self) {
        self.alerted = true;
    }
}

/// Rendering cue for obstacles; collision behavior is identical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// One of the four perimeter walls
    Border,
    /// Randomly placed interior block
    Interior,
}

/// A static axis-aligned rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Vec2,
    /// Full extents (width, height)
    pub size: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(center: Vec2, size: Vec2, kind: ObstacleKind) -> Self {
        Self { center, size, kind }
    }

    /// True iff a `pw`×`ph` probe centered at `point` overlaps this rectangle
    pub fn hits(&self, point: Vec2, pw: f32, ph: f32) -> bool {
        super::rect_overlap(self.center, self.size.x, self.size.y, point, pw, ph)
    }
}

/// Complete session state, owned by the frame-driving caller
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Current level (1..=MAX_LEVEL)
    pub level: u32,
    /// Coins collected this run
    pub score: u32,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub obstacles: Vec<Obstacle>,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh session on the title screen
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            level: 1,
            score: 0,
            player: Player::new(&tuning),
            coins: Vec::new(),
            enemies: Vec::new(),
            obstacles: Vec::new(),
            tuning,
        }
    }

    /// Replace the live collections with a fresh layout for the current level
    pub fn load_level(&mut self) -> Result<(), super::PlacementError> {
        let layout = super::generate_level(self.level, &self.tuning, &mut self.rng)?;
        self.coins = layout.coins;
        self.enemies = layout.enemies;
        self.obstacles = layout.obstacles;
        log::info!(
            "level {} loaded: {} coins, {} enemies, {} obstacles",
            self.level,
            self.coins.len(),
            self.enemies.len(),
            self.obstacles.len()
        );
        Ok(())
    }

    /// Begin play from the instructions screen: player at arena center,
    /// level 1 generated.
    pub fn start(&mut self) -> Result<(), super::PlacementError> {
        self.player = Player::new(&self.tuning);
        self.level = 1;
        self.score = 0;
        self.load_level()?;
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Full reset after game over: counters zeroed, level regenerated, player
    /// re-placed clear of the new obstacles and enemies.
    pub fn reset(&mut self) -> Result<(), super::PlacementError> {
        self.level = 1;
        self.score = 0;
        self.load_level()?;
        self.player.vel = Vec2::ZERO;
        self.player.pos =
            super::level::place_player(&self.player, &self.obstacles, &self.enemies, &mut self.rng)?;
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Flip the pursuit trigger on every live enemy ("detection by sound")
    pub fn alert_enemies(&mut self) {
        for enemy in &mut self.enemies {
            enemy.alert();
        }
    }

    /// True iff the player's collision box overlaps any obstacle or the
    /// player's circle overlaps any enemy's circle.
    pub fn player_caught(&self) -> bool {
        let p = &self.player;
        self.obstacles
            .iter()
            .any(|o| o.hits(p.pos, p.collision_size, p.collision_size))
            || self
                .enemies
                .iter()
                .any(|e| super::circles_overlap(p.pos, p.size / 2.0, e.pos, e.size / 2.0))
    }
}
