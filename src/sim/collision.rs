//! Collision detection for the ball against terrain and entities
//!
//! Entities live in world coordinates while the ball is tested in camera
//! space, so every check shifts the entity left by the camera offset.

use glam::Vec2;

use super::state::{Enemy, Gem, Player, Spike};
use super::terrain::{Terrain, segment_height_at};
use crate::consts::*;

/// Ground height under the ball for one terrain segment, if touching
///
/// The segment counts when its camera-space x range overlaps the ball's
/// horizontal extent; contact needs the ball's bottom at or below the line
/// and its top no more than `GROUND_TOLERANCE` below it.
pub fn ball_segment_contact(player: &Player, a: Vec2, b: Vec2, camera: f32) -> Option<f32> {
    let seg_left = a.x - camera;
    let seg_right = b.x - camera;
    if player.right() <= seg_left || player.left() >= seg_right {
        return None;
    }

    let ground_y = segment_height_at(a, b, player.pos.x + camera);
    if player.bottom() >= ground_y && player.top() <= ground_y + GROUND_TOLERANCE {
        Some(ground_y)
    } else {
        None
    }
}

/// Settle the ball onto the terrain
///
/// Every touching segment is applied in order, so the last one wins when the
/// ball straddles several. Returns whether the ball ended up grounded.
pub fn resolve_terrain(player: &mut Player, terrain: &Terrain, camera: f32) -> bool {
    debug_assert!(!terrain.is_empty(), "terrain accessed before generation");
    player.on_ground = false;

    for (a, b) in terrain.segments() {
        if let Some(ground_y) = ball_segment_contact(player, a, b, camera) {
            player.pos.y = ground_y - player.radius;
            player.vel.y = 0.0;
            player.on_ground = true;
            player.vel.x *= FRICTION;
        }
    }

    player.on_ground
}

/// Whether the ball touches a gem
pub fn ball_gem_overlap(player: &Player, gem: &Gem, camera: f32) -> bool {
    let gem_pos = Vec2::new(gem.pos.x - camera, gem.pos.y);
    player.pos.distance(gem_pos) < player.radius + gem.radius
}

/// Whether the ball is on a spike
///
/// There is no upper bound on the ball's height beyond the base tolerance;
/// anything low enough and horizontally within reach counts.
pub fn ball_spike_overlap(player: &Player, spike: &Spike, camera: f32) -> bool {
    let left = spike.pos.x - camera;
    player.bottom() >= spike.pos.y - SPIKE_TOLERANCE
        && player.pos.x > left - player.radius
        && player.pos.x < left + spike.width + player.radius
}

/// Whether the ball's bounding box overlaps an enemy
pub fn ball_enemy_overlap(player: &Player, enemy: &Enemy, camera: f32) -> bool {
    let left = enemy.pos.x - camera;
    player.right() > left
        && player.left() < left + enemy.width
        && player.bottom() > enemy.top()
        && player.top() < enemy.pos.y
}

/// Whether an overlapping contact is a stomp from above
pub fn is_stomp(player: &Player, enemy: &Enemy) -> bool {
    player.vel.y > 0.0 && player.top() < enemy.top() + STOMP_TOLERANCE
}
