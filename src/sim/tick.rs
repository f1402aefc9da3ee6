//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by exactly one step.

use super::collision::{
    ball_enemy_overlap, ball_gem_overlap, ball_spike_overlap, is_stomp, resolve_terrain,
};
use super::enemy::move_enemies;
use super::state::{GameEvent, GamePhase, GameSession, Player};
use crate::camera_offset;
use crate::consts::*;

/// Held inputs sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Apply gravity and control input, then move the ball
///
/// Left wins when both directions are held.
pub fn integrate_player(player: &mut Player, input: &TickInput) {
    player.vel.y += GRAVITY;

    if input.left {
        player.vel.x = -MOVE_SPEED;
    } else if input.right {
        player.vel.x = MOVE_SPEED;
    } else {
        player.vel.x *= AIR_DECAY;
    }

    if input.jump && player.on_ground {
        player.vel.y = JUMP_VELOCITY;
        player.on_ground = false;
    }

    player.pos += player.vel;
}

/// Advance the session by one fixed timestep
///
/// Returns the events the tick produced. Outside `Running` this does nothing.
/// Reaching game over part-way through skips the rest of the tick.
pub fn tick(state: &mut GameSession, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    integrate_player(&mut state.player, input);

    // Camera follow
    state.camera = camera_offset(state.player.pos.x, state.dims.width);

    if state.terrain.needs_extension(state.camera, state.dims.width) {
        state.terrain.extend();
    }

    resolve_terrain(&mut state.player, &state.terrain, state.camera);

    collect_gems(state, &mut events);

    check_spikes(state, &mut events);
    if !state.is_running() {
        return events;
    }

    check_enemies(state, &mut events);
    if !state.is_running() {
        return events;
    }

    move_enemies(&mut state.enemies, &state.terrain);

    if state.is_level_complete() {
        state.level_up(&mut events);
    }

    // Fell off the bottom of the screen
    if state.player.pos.y > state.dims.height + state.player.radius {
        events.push(GameEvent::FellOut);
        state.lose_life(&mut events);
    }

    events
}

fn collect_gems(state: &mut GameSession, events: &mut Vec<GameEvent>) {
    let camera = state.camera;
    let mut points = 0;
    for (index, gem) in state.gems.iter_mut().enumerate() {
        if !gem.collected && ball_gem_overlap(&state.player, gem, camera) {
            gem.collected = true;
            points += GEM_SCORE;
            events.push(GameEvent::GemCollected { index });
        }
    }
    state.add_score(points);
}

/// Every overlapping spike costs a life, even several in one tick
fn check_spikes(state: &mut GameSession, events: &mut Vec<GameEvent>) {
    for i in 0..state.spikes.len() {
        if ball_spike_overlap(&state.player, &state.spikes[i], state.camera) {
            state.lose_life(events);
            if !state.is_running() {
                return;
            }
        }
    }
}

/// Each enemy present at the start of the check is tested once, against the
/// ball as left by the enemies before it
fn check_enemies(state: &mut GameSession, events: &mut Vec<GameEvent>) {
    let snapshot = state.enemies.clone();
    for enemy in &snapshot {
        if !ball_enemy_overlap(&state.player, enemy, state.camera) {
            continue;
        }

        if is_stomp(&state.player, enemy) {
            state.player.vel.y = STOMP_BOUNCE;
            state.enemies.retain(|e| e.id != enemy.id);
            state.add_score(ENEMY_SCORE);
            events.push(GameEvent::EnemyStomped { id: enemy.id });
            log::debug!("Enemy {} stomped", enemy.id);
        } else {
            state.lose_life(events);
            if !state.is_running() {
                return;
            }
        }
    }
}
