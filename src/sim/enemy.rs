//! Enemy patrol movement
//!
//! Enemies slide horizontally at a fixed height and turn around where the
//! ground drops away or where the generated terrain ends. Unlike the ball,
//! edge detection compares world x against world terrain x with no camera
//! shift.

use super::state::Enemy;
use super::terrain::Terrain;
use crate::consts::*;

/// Advance one enemy by a tick
pub fn move_enemy(enemy: &mut Enemy, terrain: &Terrain) {
    enemy.pos.x += enemy.speed * enemy.direction;

    match terrain.height_at(enemy.pos.x) {
        Some(ground_y) if enemy.pos.y < ground_y - ENEMY_EDGE_TOLERANCE => enemy.reverse(),
        Some(_) => {}
        None => enemy.reverse(),
    }
}

/// Advance every enemy by a tick
pub fn move_enemies(enemies: &mut [Enemy], terrain: &Terrain) {
    for enemy in enemies {
        move_enemy(enemy, terrain);
    }
}
