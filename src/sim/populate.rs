//! Level content generation
//!
//! Scatters gems, spikes and enemies uniformly over the first two screen
//! widths. Placement is independent per entity; overlaps are allowed.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameSession, Gem, Spike};

/// Number of gems on a level
pub fn gem_count(level: u32) -> usize {
    5 + 2 * level as usize
}

/// Number of spikes on a level
pub fn spike_count(level: u32) -> usize {
    3 + level as usize
}

/// Number of enemies on a level
pub fn enemy_count(level: u32) -> usize {
    level as usize
}

/// Clear and refill the level content for `state.level`
pub fn populate_level(state: &mut GameSession) {
    let level = state.level;
    let width = state.dims.width;
    let height = state.dims.height;
    let span = width * 2.0;

    state.gems.clear();
    state.spikes.clear();
    state.enemies.clear();

    for _ in 0..gem_count(level) {
        let x = state.rng.random_range(0.0..span);
        let y = state.rng.random_range(height - 350.0..height - 150.0);
        state.gems.push(Gem::new(Vec2::new(x, y)));
    }

    for _ in 0..spike_count(level) {
        let x = state.rng.random_range(0.0..span);
        state.spikes.push(Spike::new(Vec2::new(x, height - 80.0)));
    }

    for _ in 0..enemy_count(level) {
        let x = state.rng.random_range(0.0..span);
        let speed = state.rng.random_range(1.0..2.0);
        let direction = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let id = state.next_entity_id();
        state
            .enemies
            .push(Enemy::new(id, Vec2::new(x, height - 120.0), speed, direction));
    }

    log::debug!(
        "Level {}: {} gems, {} spikes, {} enemies",
        level,
        state.gems.len(),
        state.spikes.len(),
        state.enemies.len()
    );
}
