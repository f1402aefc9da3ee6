//! Output boundary between the simulation and a presentation layer
//!
//! A renderer implements [`RenderSink`] and gets a borrowed snapshot of the
//! world every tick. HUD text goes through [`HudSink`], which only hears about
//! score/lives/level when one of them changes.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Enemy, GamePhase, GameSession, Gem, Player, Spike};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderFrame<'a> {
    /// Subtract from world x to get screen x
    pub camera: f32,
    pub player: &'a Player,
    pub terrain: &'a [Vec2],
    pub gems: &'a [Gem],
    pub spikes: &'a [Spike],
    pub enemies: &'a [Enemy],
    /// GameOver frames carry the final score for the overlay
    pub phase: GamePhase,
    pub score: u64,
}

impl<'a> RenderFrame<'a> {
    pub fn from_session(state: &'a GameSession) -> Self {
        Self {
            camera: state.camera,
            player: &state.player,
            terrain: state.terrain.samples(),
            gems: &state.gems,
            spikes: &state.spikes,
            enemies: &state.enemies,
            phase: state.phase,
            score: state.score,
        }
    }

    /// Gems still to be drawn
    pub fn visible_gems(&self) -> impl Iterator<Item = &'a Gem> + 'a {
        let gems: &'a [Gem] = self.gems;
        gems.iter().filter(|g| !g.collected)
    }
}

/// Consumes one frame per tick
pub trait RenderSink {
    fn render(&mut self, frame: &RenderFrame<'_>);
}

/// HUD values plus the start button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
}

impl HudSnapshot {
    pub fn from_session(state: &GameSession) -> Self {
        Self {
            score: state.score,
            lives: state.lives,
            level: state.level,
            phase: state.phase,
        }
    }

    /// Label for the start/restart button
    pub fn start_label(&self) -> &'static str {
        match self.phase {
            GamePhase::Idle => "Start Game",
            GamePhase::Running => "Restart Game",
            GamePhase::GameOver => "Play Again",
        }
    }
}

/// Receives HUD snapshots when they change
pub trait HudSink {
    fn update(&mut self, hud: &HudSnapshot);
}

/// Discards every frame (headless runs)
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn render(&mut self, _frame: &RenderFrame<'_>) {}
}

/// Reports HUD changes through the log
#[derive(Debug, Default)]
pub struct LogHud;

impl HudSink for LogHud {
    fn update(&mut self, hud: &HudSnapshot) {
        log::info!(
            "Score: {}  Lives: {}  Level: {}  [{}]",
            hud.score,
            hud.lives,
            hud.level,
            hud.start_label()
        );
    }
}
