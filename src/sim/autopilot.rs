//! Demo-mode autopilot
//!
//! Produces held inputs from the current session so the game can play itself
//! in attract mode and headless runs. Purely a function of state; it never
//! touches the RNG, so demo runs stay deterministic.

use super::state::{GameSession, Player};
use super::tick::TickInput;

/// How close (camera space) a hazard must be before we hop over it
const HAZARD_LOOKAHEAD: f32 = 70.0;
/// Horizontal slack when lining up under a target
const TARGET_SLACK: f32 = 8.0;
/// Horizontal distance at which we jump for a target above
const JUMP_REACH: f32 = 40.0;

/// Camera-space x offset from the ball to a world-space x
fn offset_to(player: &Player, world_x: f32, camera: f32) -> f32 {
    world_x - camera - player.pos.x
}

/// Pick inputs for the next tick
pub fn demo_input(state: &GameSession) -> TickInput {
    let player = &state.player;
    let camera = state.camera;

    // Chase the nearest gem; once they're gone, hunt enemies
    let gem_target = state
        .gems
        .iter()
        .filter(|g| !g.collected)
        .map(|g| (offset_to(player, g.pos.x, camera), g.pos.y))
        .min_by(|a, b| a.0.abs().total_cmp(&b.0.abs()));
    let target = gem_target.or_else(|| {
        state
            .enemies
            .iter()
            .map(|e| (offset_to(player, e.pos.x + e.width / 2.0, camera), e.top()))
            .min_by(|a, b| a.0.abs().total_cmp(&b.0.abs()))
    });

    let mut input = TickInput::default();
    match target {
        Some((dx, _)) if dx < -TARGET_SLACK => input.left = true,
        Some((dx, _)) if dx > TARGET_SLACK => input.right = true,
        Some(_) => {}
        None => input.right = true,
    }

    // Jump for targets overhead
    if let Some((dx, y)) = target {
        if dx.abs() < JUMP_REACH && y < player.top() {
            input.jump = true;
        }
    }

    // Hop over hazards in the direction of travel
    let heading = if input.left { -1.0 } else { 1.0 };
    let hazard_ahead = |x: f32, width: f32| {
        let dx = offset_to(player, x + width / 2.0, camera) * heading;
        dx > 0.0 && dx < HAZARD_LOOKAHEAD
    };
    if state.spikes.iter().any(|s| hazard_ahead(s.pos.x, s.width))
        || (gem_target.is_some() && state.enemies.iter().any(|e| hazard_ahead(e.pos.x, e.width)))
    {
        input.jump = true;
    }

    input
}
