//! Bounded rejection-sampling level generator
//!
//! Placement draws uniform candidates from the inset playfield and keeps the
//! first one clear of every obstacle placed so far. Coins and enemies are
//! only validated against obstacles, never against each other; coin/coin and
//! coin/enemy overlap is allowed by design.
//!
//! Every sampling loop is capped at `MAX_PLACEMENT_ATTEMPTS` so a layout
//! dense enough to leave no valid point fails fast instead of spinning.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use thiserror::Error;

use super::state::{Coin, Enemy, Obstacle, ObstacleKind, Player};
use crate::consts::*;
use crate::tuning::Tuning;

/// Placement gave up after the attempt cap
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no valid position for {what} after {attempts} attempts")]
    Exhausted { what: &'static str, attempts: u32 },
}

/// A freshly generated level, ready to swap into the session
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub obstacles: Vec<Obstacle>,
}

/// Generate the entity layout for `level`.
///
/// Order matters: the four border walls go in first, then coins and enemies
/// are sampled clear of them, then interior obstacles are sampled clear of
/// all obstacles placed so far. Interior obstacles therefore may land on a
/// coin or enemy spawn point; only obstacle/obstacle overlap is rejected.
pub fn generate_level(
    level: u32,
    tuning: &Tuning,
    rng: &mut Pcg32,
) -> Result<LevelLayout, PlacementError> {
    let mut obstacles = border_walls();

    let mut coins = Vec::with_capacity(tuning.coins_for_level(level) as usize);
    for _ in 0..tuning.coins_for_level(level) {
        let pos = sample_clear_point("coin", &obstacles, rng)?;
        coins.push(Coin::spawn(pos, tuning, rng));
    }

    let mut enemies = Vec::with_capacity(tuning.enemies_for_level(level) as usize);
    for _ in 0..tuning.enemies_for_level(level) {
        let pos = sample_clear_point("enemy", &obstacles, rng)?;
        enemies.push(Enemy::new(pos, tuning));
    }

    for _ in 0..tuning.num_obstacles {
        let obstacle = sample_interior_obstacle(&obstacles, tuning, rng)?;
        obstacles.push(obstacle);
    }

    Ok(LevelLayout { coins, enemies, obstacles })
}

/// The four perimeter walls. Deterministic, always first in the list.
fn border_walls() -> Vec<Obstacle> {
    let b = BORDER_SIZE;
    vec![
        // top
        Obstacle::new(
            Vec2::new(ARENA_W / 2.0, b / 2.0),
            Vec2::new(ARENA_W, b),
            ObstacleKind::Border,
        ),
        // left
        Obstacle::new(
            Vec2::new(b / 2.0, ARENA_H / 2.0),
            Vec2::new(b, ARENA_H),
            ObstacleKind::Border,
        ),
        // bottom
        Obstacle::new(
            Vec2::new(ARENA_W / 2.0, ARENA_H - b / 2.0),
            Vec2::new(ARENA_W, b),
            ObstacleKind::Border,
        ),
        // right
        Obstacle::new(
            Vec2::new(ARENA_W - b / 2.0, ARENA_H / 2.0),
            Vec2::new(b, ARENA_H),
            ObstacleKind::Border,
        ),
    ]
}

/// Sample a point in the inset playfield clear of every obstacle so far
fn sample_clear_point(
    what: &'static str,
    obstacles: &[Obstacle],
    rng: &mut Pcg32,
) -> Result<Vec2, PlacementError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(BORDER_SIZE..ARENA_W - BORDER_SIZE),
            rng.random_range(BORDER_SIZE..ARENA_H - BORDER_SIZE),
        );
        if !obstacles.iter().any(|o| o.hits(candidate, 0.0, 0.0)) {
            return Ok(candidate);
        }
    }
    log::warn!("placement exhausted for {what} against {} obstacles", obstacles.len());
    Err(PlacementError::Exhausted { what, attempts: MAX_PLACEMENT_ATTEMPTS })
}

/// Sample an interior obstacle clear of every obstacle so far.
///
/// The extra bias (`x > 100`, `y < ARENA_H - 50`) keeps a navigable lane
/// along the left edge and bottom, near the player's start.
fn sample_interior_obstacle(
    obstacles: &[Obstacle],
    tuning: &Tuning,
    rng: &mut Pcg32,
) -> Result<Obstacle, PlacementError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let center = Vec2::new(
            rng.random_range(BORDER_SIZE..ARENA_W - BORDER_SIZE),
            rng.random_range(BORDER_SIZE..ARENA_H - BORDER_SIZE),
        );
        let size = Vec2::new(
            rng.random_range(tuning.obstacle_min_side..tuning.obstacle_max_side),
            rng.random_range(tuning.obstacle_min_side..tuning.obstacle_max_side),
        );
        let in_safe_zone = center.x <= 100.0 || center.y >= ARENA_H - 50.0;
        let overlapping = obstacles.iter().any(|o| o.hits(center, size.x, size.y));
        if !overlapping && !in_safe_zone {
            return Ok(Obstacle::new(center, size, ObstacleKind::Interior));
        }
    }
    log::warn!("placement exhausted for interior obstacle against {} obstacles", obstacles.len());
    Err(PlacementError::Exhausted { what: "obstacle", attempts: MAX_PLACEMENT_ATTEMPTS })
}

/// Re-place the player for a retry: uniform in the playfield inset by an
/// extra 50px, clear of every obstacle (padded by the collision box) and
/// every enemy (contact circle), so the fresh run cannot end on frame one.
pub fn place_player(
    player: &Player,
    obstacles: &[Obstacle],
    enemies: &[Enemy],
    rng: &mut Pcg32,
) -> Result<Vec2, PlacementError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(BORDER_SIZE + 50.0..ARENA_W - BORDER_SIZE - 50.0),
            rng.random_range(BORDER_SIZE + 50.0..ARENA_H - BORDER_SIZE - 50.0),
        );
        let blocked = obstacles
            .iter()
            .any(|o| o.hits(candidate, player.collision_size, player.collision_size))
            || enemies.iter().any(|e| {
                super::circles_overlap(candidate, player.size / 2.0, e.pos, e.size / 2.0)
            });
        if !blocked {
            return Ok(candidate);
        }
    }
    log::warn!("placement exhausted for player retry spot");
    Err(PlacementError::Exhausted { what: "player", attempts: MAX_PLACEMENT_ATTEMPTS })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn layout_for(level: u32, seed: u64) -> LevelLayout {
        let mut rng = Pcg32::seed_from_u64(seed);
        generate_level(level, &Tuning::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_entity_counts_scale_with_level() {
        let tuning = Tuning::default();
        for level in 1..=MAX_LEVEL {
            let layout = layout_for(level, 42);
            assert_eq!(layout.coins.len() as u32, tuning.coins_for_level(level));
            assert_eq!(layout.enemies.len() as u32, tuning.enemies_for_level(level));
            let borders = layout
                .obstacles
                .iter()
                .filter(|o| o.kind == ObstacleKind::Border)
                .count();
            assert_eq!(borders, 4);
            assert_eq!(layout.obstacles.len() as u32, 4 + tuning.num_obstacles);
        }
    }

    #[test]
    fn test_obstacles_disjoint() {
        let layout = layout_for(10, 99);
        for (i, a) in layout.obstacles.iter().enumerate() {
            for b in layout.obstacles.iter().skip(i + 1) {
                // Interior obstacles are accepted center-vs-rect both ways,
                // so check the acceptance predicate used at generation time.
                if a.kind == ObstacleKind::Interior {
                    assert!(!b.hits(a.center, a.size.x, a.size.y));
                }
                if b.kind == ObstacleKind::Interior {
                    assert!(!a.hits(b.center, b.size.x, b.size.y));
                }
            }
        }
    }

    #[test]
    fn test_spawn_points_clear_of_border_walls() {
        let layout = layout_for(5, 7);
        let borders: Vec<_> = layout
            .obstacles
            .iter()
            .filter(|o| o.kind == ObstacleKind::Border)
            .collect();
        for coin in &layout.coins {
            assert!(!borders.iter().any(|o| o.hits(coin.pos, 0.0, 0.0)));
        }
        for enemy in &layout.enemies {
            assert!(!borders.iter().any(|o| o.hits(enemy.pos, 0.0, 0.0)));
        }
    }

    #[test]
    fn test_interior_obstacles_respect_safe_zone() {
        for seed in 0..20u64 {
            let layout = layout_for(3, seed);
            for o in layout.obstacles.iter().filter(|o| o.kind == ObstacleKind::Interior) {
                assert!(o.center.x > 100.0);
                assert!(o.center.y < ARENA_H - 50.0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = layout_for(4, 1234);
        let b = layout_for(4, 1234);
        for (ca, cb) in a.coins.iter().zip(&b.coins) {
            assert_eq!(ca.pos, cb.pos);
            assert_eq!(ca.vel, cb.vel);
        }
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.center, ob.center);
            assert_eq!(oa.size, ob.size);
        }
    }

    #[test]
    fn test_placement_exhaustion_fails_fast() {
        // One giant obstacle covering the whole playfield leaves no clear
        // point for a coin.
        let wall = vec![Obstacle::new(
            Vec2::new(ARENA_W / 2.0, ARENA_H / 2.0),
            Vec2::new(ARENA_W * 2.0, ARENA_H * 2.0),
            ObstacleKind::Interior,
        )];
        let mut rng = Pcg32::seed_from_u64(0);
        let err = sample_clear_point("coin", &wall, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PlacementError::Exhausted { what: "coin", attempts: MAX_PLACEMENT_ATTEMPTS }
        );
    }

    #[test]
    fn test_player_retry_spot_is_survivable() {
        let mut rng = Pcg32::seed_from_u64(11);
        let tuning = Tuning::default();
        let layout = generate_level(6, &tuning, &mut rng).unwrap();
        let player = Player::new(&tuning);
        let pos = place_player(&player, &layout.obstacles, &layout.enemies, &mut rng).unwrap();

        assert!(!layout
            .obstacles
            .iter()
            .any(|o| o.hits(pos, player.collision_size, player.collision_size)));
        assert!(!layout
            .enemies
            .iter()
            .any(|e| crate::sim::circles_overlap(pos, player.size / 2.0, e.pos, e.size / 2.0)));
    }
}
