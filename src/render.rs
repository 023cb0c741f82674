//! Semantic draw commands
//!
//! [`scene`] turns the current session into an ordered list of draw commands
//! in arena coordinates. An external renderer walks the list and does the
//! pixel work; the core decides only what goes where.

use glam::Vec2;

use crate::assets::AssetId;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, ObstacleKind};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One draw call, back-to-front
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Draw an image centered at `center`, scaled to `size`
    Sprite { asset: AssetId, center: Vec2, size: Vec2 },
    /// Draw a filled rectangle; `kind` selects the wall vs block fill
    Rect { center: Vec2, size: Vec2, kind: ObstacleKind },
    /// Draw a text line
    Text { text: String, pos: Vec2, size: f32, align: Align },
}

fn text(text: &str, x: f32, y: f32, size: f32, align: Align) -> DrawCmd {
    DrawCmd::Text { text: text.to_string(), pos: Vec2::new(x, y), size, align }
}

fn full_screen(asset: AssetId) -> DrawCmd {
    DrawCmd::Sprite {
        asset,
        center: Vec2::new(ARENA_W / 2.0, ARENA_H / 2.0),
        size: Vec2::new(ARENA_W, ARENA_H),
    }
}

/// Build the frame's draw list for the current phase
pub fn scene(state: &GameState) -> Vec<DrawCmd> {
    let cx = ARENA_W / 2.0;
    let cy = ARENA_H / 2.0;

    match state.phase {
        GamePhase::Title => vec![
            full_screen(AssetId::TitleBackground),
            text("Welcome to Phantom Plunder", cx, cy - 50.0, 32.0, Align::Center),
            text("Press ENTER to begin your quest!", cx, cy + 50.0, 20.0, Align::Center),
        ],
        GamePhase::Instructions => vec![
            full_screen(AssetId::Ghost),
            text("You are a pirate who recently died.", cx, cy - 50.0, 18.0, Align::Center),
            text(
                "The ghost offers you a chance at revival if you can complete",
                cx,
                cy,
                18.0,
                Align::Center,
            ),
            text(
                "ten stages of collecting moving coins while avoiding detection by sound.",
                cx,
                cy + 50.0,
                18.0,
                Align::Center,
            ),
            text("Press ENTER to begin your quest!", cx, cy + 150.0, 20.0, Align::Center),
        ],
        GamePhase::Playing => playfield(state),
        GamePhase::GameOver => {
            let mut cmds = playfield(state);
            cmds.push(text(
                "Game Over. Press ENTER to Retry",
                cx,
                cy,
                GAME_OVER_TEXT_SIZE,
                Align::Center,
            ));
            cmds.push(text(
                "No matter how hard you try to stay silent,",
                cx,
                cy + 50.0,
                GAME_OVER_TEXT_SIZE - 10.0,
                Align::Center,
            ));
            cmds.push(text(
                "death always comes for you",
                cx,
                cy + 70.0,
                GAME_OVER_TEXT_SIZE - 10.0,
                Align::Center,
            ));
            cmds
        }
        GamePhase::Victory => vec![
            full_screen(AssetId::GameBackground),
            text("You cleared all ten stages!", cx, cy - 50.0, 32.0, Align::Center),
            text("The ghost keeps its word. Welcome back to life.", cx, cy, 20.0, Align::Center),
            text(
                &format!("Final score: {}", state.score),
                cx,
                cy + 50.0,
                20.0,
                Align::Center,
            ),
        ],
    }
}

/// The in-game scene: background, entities, walls, HUD
fn playfield(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = vec![full_screen(AssetId::GameBackground)];

    let p = &state.player;
    cmds.push(DrawCmd::Sprite {
        asset: AssetId::Pirate,
        center: p.pos,
        size: Vec2::splat(p.size),
    });

    for coin in &state.coins {
        cmds.push(DrawCmd::Sprite {
            asset: AssetId::Coin,
            center: coin.pos,
            size: Vec2::splat(coin.size),
        });
    }

    for enemy in &state.enemies {
        cmds.push(DrawCmd::Sprite {
            asset: AssetId::Ghost,
            center: enemy.pos,
            size: Vec2::splat(enemy.size),
        });
    }

    for obstacle in &state.obstacles {
        cmds.push(DrawCmd::Rect {
            center: obstacle.center,
            size: obstacle.size,
            kind: obstacle.kind,
        });
    }

    cmds.push(text(
        &format!("Level: {}", state.level),
        20.0,
        30.0,
        LEVEL_SCORE_TEXT_SIZE,
        Align::Left,
    ));
    cmds.push(text(
        &format!("Score: {}", state.score),
        20.0,
        60.0,
        LEVEL_SCORE_TEXT_SIZE,
        Align::Left,
    ));

    cmds
}
