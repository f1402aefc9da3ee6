//! Gem Roller - A side-scrolling ball platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `platform`: Frame driver, render/HUD sinks and input mapping
//! - `settings`: Data-driven configuration loaded from JSON

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (ticks per second)
    pub const TICK_HZ: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default screen (canvas) dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Terrain samples across one screen width
    pub const TERRAIN_SEGMENTS: usize = 20;

    /// Player (ball) defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = 100.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.4;
    /// Horizontal speed multiplier applied on each ground contact
    pub const FRICTION: f32 = 0.99;
    /// Horizontal speed decay per tick with no direction held
    pub const AIR_DECAY: f32 = 0.9;
    /// Horizontal speed while a direction is held
    pub const MOVE_SPEED: f32 = 5.0;
    /// Vertical velocity set by a jump
    pub const JUMP_VELOCITY: f32 = -12.0;
    /// Vertical velocity set by stomping an enemy
    pub const STOMP_BOUNCE: f32 = -10.0;
    /// Vertical band below the terrain line that still counts as contact
    pub const GROUND_TOLERANCE: f32 = 10.0;

    /// Terrain waveform
    pub const TERRAIN_BASE_OFFSET: f32 = 100.0;
    pub const TERRAIN_AMPLITUDE: f32 = 30.0;
    pub const TERRAIN_FREQUENCY: f32 = 0.5;
    /// Terrain is kept this many screen widths ahead of the camera
    pub const TERRAIN_LOOKAHEAD: f32 = 1.5;

    /// Gem defaults
    pub const GEM_RADIUS: f32 = 8.0;
    pub const GEM_SCORE: u64 = 50;

    /// Spike defaults
    pub const SPIKE_SIZE: f32 = 20.0;
    pub const SPIKE_TOLERANCE: f32 = 5.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 25.0;
    pub const ENEMY_SCORE: u64 = 100;
    /// Height above the ground at which an enemy turns around
    pub const ENEMY_EDGE_TOLERANCE: f32 = 5.0;
    /// Vertical band below an enemy's top that still counts as a stomp
    pub const STOMP_TOLERANCE: f32 = 10.0;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_LEVEL: u32 = 1;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Camera offset that keeps the player at screen centre once past it
#[inline]
pub fn camera_offset(player_x: f32, screen_width: f32) -> f32 {
    (player_x - screen_width / 2.0).max(0.0)
}
