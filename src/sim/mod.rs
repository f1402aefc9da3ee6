//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod enemy;
pub mod populate;
pub mod state;
pub mod terrain;
pub mod tick;

pub use autopilot::demo_input;
pub use collision::{
    ball_enemy_overlap, ball_gem_overlap, ball_segment_contact, ball_spike_overlap, is_stomp,
    resolve_terrain,
};
pub use enemy::{move_enemies, move_enemy};
pub use populate::{enemy_count, gem_count, populate_level, spike_count};
pub use state::{Enemy, GameEvent, GamePhase, GameSession, Gem, Player, ScreenDims, Spike};
pub use terrain::{Terrain, segment_height_at, waveform_y};
pub use tick::{TickInput, integrate_player, tick};
