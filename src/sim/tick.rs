//! Per-frame session loop and input transitions
//!
//! The external frame scheduler calls [`tick`] once per rendering tick; the
//! platform layer forwards discrete key events through [`handle_input`]
//! between ticks. Input only mutates velocity/phase fields that the next
//! tick reads, so there is no locking anywhere.

use glam::Vec2;

use super::level::PlacementError;
use super::state::{GamePhase, GameState};
use crate::consts::MAX_LEVEL;

/// Movement directions the input source can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn as_vec(self) -> Vec2 {
        match self {
            Dir::Up => Vec2::new(0.0, -1.0),
            Dir::Down => Vec2::new(0.0, 1.0),
            Dir::Left => Vec2::new(-1.0, 0.0),
            Dir::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Discrete input events delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter/confirm: advances title, instructions, and retry screens
    Confirm,
    /// Movement key pressed
    Press(Dir),
    /// Movement key released
    Release(Dir),
}

/// Things that happened during a frame, for the audio/presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A coin was collected (one event per coin)
    CoinCollected,
    /// Advanced to the next level
    LevelUp,
    /// The player was caught
    GameOver,
    /// Level ten cleared
    Victory,
}

/// Apply one input event. Each event maps to exactly one transition for the
/// current phase; everything else is ignored.
pub fn handle_input(state: &mut GameState, event: InputEvent) -> Result<(), PlacementError> {
    match (state.phase, event) {
        (GamePhase::Title, InputEvent::Confirm) => {
            state.phase = GamePhase::Instructions;
        }
        (GamePhase::Instructions, InputEvent::Confirm) => {
            state.start()?;
        }
        (GamePhase::Playing, InputEvent::Press(dir)) => {
            let v = dir.as_vec();
            state.player.set_direction(v.x, v.y);
        }
        // Releasing any tracked key stops movement, matching a single-axis
        // control scheme where the last press wins.
        (GamePhase::Playing, InputEvent::Release(_)) => {
            state.player.set_direction(0.0, 0.0);
        }
        (GamePhase::GameOver, InputEvent::Confirm) => {
            state.reset()?;
        }
        _ => {}
    }
    Ok(())
}

/// Advance the session by one frame.
///
/// A no-op outside the Playing phase; game-over and victory freeze the world
/// until an input transition resumes it. Events that fired this frame are
/// appended to `events` for the presentation layer.
pub fn tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.player.update();

    for coin in &mut state.coins {
        coin.update();
    }

    // Collection sweep: every coin inside the pickup circle is removed this
    // frame. Each pickup scores and re-broadcasts the noise alert.
    let player = state.player.clone();
    let before = state.coins.len();
    state.coins.retain(|c| !player.can_collect(c));
    let collected = before - state.coins.len();
    if collected > 0 {
        state.score += collected as u32;
        state.alert_enemies();
        for _ in 0..collected {
            events.push(GameEvent::CoinCollected);
        }
    }

    let player_pos = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.update(player_pos);
    }

    if state.player_caught() {
        state.phase = GamePhase::GameOver;
        state.player.vel = Vec2::ZERO;
        events.push(GameEvent::GameOver);
        log::info!("caught at level {} with score {}", state.level, state.score);
        return;
    }

    if state.coins.is_empty() {
        if state.level < MAX_LEVEL {
            state.level += 1;
            match state.load_level() {
                Ok(()) => events.push(GameEvent::LevelUp),
                Err(err) => {
                    // Leave the level as-is; next frame redraws from fresh
                    // RNG state and tries again.
                    state.level -= 1;
                    log::warn!("level {} generation failed: {err}", state.level + 1);
                }
            }
        } else {
            state.phase = GamePhase::Victory;
            events.push(GameEvent::Victory);
            log::info!("victory with score {}", state.score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coin, Enemy, Obstacle, ObstacleKind};
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        handle_input(&mut state, InputEvent::Confirm).unwrap();
        handle_input(&mut state, InputEvent::Confirm).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    /// Clear the generated layout down to the border walls so tests can
    /// stage exact scenarios.
    fn clear_arena(state: &mut GameState) {
        state.coins.clear();
        state.enemies.clear();
        state.obstacles.retain(|o| o.kind == ObstacleKind::Border);
    }

    fn coin_at(state: &GameState, pos: glam::Vec2) -> Coin {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut coin = Coin::spawn(pos, &state.tuning, &mut rng);
        coin.vel = Vec2::ZERO;
        coin
    }

    #[test]
    fn test_tick_is_noop_outside_playing() {
        let mut state = GameState::new(1, Tuning::default());
        let mut events = Vec::new();
        tick(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Title);
    }

    #[test]
    fn test_confirm_walks_title_to_playing() {
        let mut state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Title);
        handle_input(&mut state, InputEvent::Confirm).unwrap();
        assert_eq!(state.phase, GamePhase::Instructions);
        handle_input(&mut state, InputEvent::Confirm).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.coins.len(), 5);
    }

    #[test]
    fn test_press_and_release_drive_velocity() {
        let mut state = playing_state(2);
        handle_input(&mut state, InputEvent::Press(Dir::Left)).unwrap();
        assert_eq!(state.player.vel, Vec2::new(-5.0, 0.0));
        handle_input(&mut state, InputEvent::Press(Dir::Down)).unwrap();
        assert_eq!(state.player.vel, Vec2::new(0.0, 5.0));
        handle_input(&mut state, InputEvent::Release(Dir::Down)).unwrap();
        assert_eq!(state.player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_collect_scores_alerts_and_emits() {
        let mut state = playing_state(3);
        clear_arena(&mut state);
        state.enemies.push(Enemy::new(Vec2::new(500.0, 500.0), &Tuning::default()));
        state.coins.push(coin_at(&state, state.player.pos + Vec2::new(5.0, 0.0)));
        state.coins.push(coin_at(&state, Vec2::new(500.0, 100.0)));

        let mut events = Vec::new();
        tick(&mut state, &mut events);

        assert_eq!(state.score, 1);
        assert_eq!(state.coins.len(), 1);
        assert!(state.enemies[0].alerted);
        assert_eq!(events, vec![GameEvent::CoinCollected]);
    }

    #[test]
    fn test_obstacle_contact_freezes_until_reset() {
        let mut state = playing_state(4);
        clear_arena(&mut state);
        state.coins.push(coin_at(&state, Vec2::new(500.0, 100.0)));
        state.obstacles.push(Obstacle::new(
            state.player.pos,
            Vec2::new(40.0, 40.0),
            ObstacleKind::Interior,
        ));

        let mut events = Vec::new();
        tick(&mut state, &mut events);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(events, vec![GameEvent::GameOver]);

        // Frozen: movement input is ignored and ticks are no-ops
        handle_input(&mut state, InputEvent::Press(Dir::Right)).unwrap();
        assert_eq!(state.player.vel, Vec2::ZERO);
        let pos = state.player.pos;
        tick(&mut state, &mut events);
        assert_eq!(state.player.pos, pos);

        // Confirm retries from scratch
        handle_input(&mut state, InputEvent::Confirm).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_enemy_contact_ends_game() {
        let mut state = playing_state(5);
        clear_arena(&mut state);
        state.coins.push(coin_at(&state, Vec2::new(500.0, 100.0)));
        // Inside the contact circle (size/2 + size/2 = 40)
        state
            .enemies
            .push(Enemy::new(state.player.pos + Vec2::new(30.0, 0.0), &Tuning::default()));

        let mut events = Vec::new();
        tick(&mut state, &mut events);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_last_coin_advances_level() {
        let mut state = playing_state(6);
        state.level = 9;
        clear_arena(&mut state);
        state.coins.push(coin_at(&state, state.player.pos));

        let mut events = Vec::new();
        tick(&mut state, &mut events);

        assert_eq!(state.level, 10);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(events, vec![GameEvent::CoinCollected, GameEvent::LevelUp]);
        // Fresh level-10 layout
        assert_eq!(state.coins.len(), 50);
        assert_eq!(state.enemies.len(), 10);
        assert!(state.enemies.iter().all(|e| !e.alerted));
    }

    #[test]
    fn test_last_coin_at_level_ten_is_victory() {
        let mut state = playing_state(7);
        state.level = 10;
        clear_arena(&mut state);
        state.coins.push(coin_at(&state, state.player.pos));

        let mut events = Vec::new();
        tick(&mut state, &mut events);

        assert_eq!(state.phase, GamePhase::Victory);
        assert_eq!(events, vec![GameEvent::CoinCollected, GameEvent::Victory]);
        // Terminal: nothing regenerates and further ticks change nothing
        assert!(state.coins.is_empty());
        assert!(state.enemies.is_empty());
        let snapshot_score = state.score;
        tick(&mut state, &mut events);
        assert_eq!(state.phase, GamePhase::Victory);
        assert_eq!(state.score, snapshot_score);
    }
}
