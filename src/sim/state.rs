//! Game state and core simulation types
//!
//! Everything a session owns lives in [`GameSession`]. Restarting replaces
//! its contents wholesale rather than patching individual fields.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::populate::populate_level;
use super::terrain::Terrain;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    Idle,
    /// Active gameplay, ticks are processed
    Running,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GemCollected { index: usize },
    EnemyStomped { id: u32 },
    LifeLost { lives_left: u32 },
    FellOut,
    LevelUp { level: u32 },
    GameOver { score: u64 },
}

/// Visible area and terrain resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenDims {
    pub width: f32,
    pub height: f32,
    pub segments: usize,
}

impl Default for ScreenDims {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            segments: TERRAIN_SEGMENTS,
        }
    }
}

impl ScreenDims {
    pub fn segment_width(&self) -> f32 {
        self.width / self.segments as f32
    }
}

/// The player's ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub on_ground: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SPAWN_X, SPAWN_Y),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            on_ground: false,
        }
    }
}

impl Player {
    /// Move back to the spawn point with no velocity
    ///
    /// `on_ground` is left alone; the next terrain pass recomputes it.
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(SPAWN_X, SPAWN_Y);
        self.vel = Vec2::ZERO;
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A collectible gem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gem {
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
}

impl Gem {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: GEM_RADIUS,
            collected: false,
        }
    }
}

/// A static hazard; `pos` is the left end of its base line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Spike {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            width: SPIKE_SIZE,
            height: SPIKE_SIZE,
        }
    }
}

/// A patrolling enemy; `pos` is its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed magnitude per tick
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, speed: f32, direction: f32) -> Self {
        Self {
            id,
            pos,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            speed,
            direction,
        }
    }

    /// y of the enemy's top edge
    pub fn top(&self) -> f32 {
        self.pos.y - self.height
    }

    pub fn reverse(&mut self) {
        self.direction = -self.direction;
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG driving level population
    pub rng: Pcg32,
    /// Screen dimensions the level is laid out for
    pub dims: ScreenDims,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    /// Processed tick counter
    pub time_ticks: u64,
    /// Horizontal camera offset (world units)
    pub camera: f32,
    pub player: Player,
    pub terrain: Terrain,
    pub gems: Vec<Gem>,
    pub spikes: Vec<Spike>,
    pub enemies: Vec<Enemy>,
    /// Next entity ID
    next_id: u32,
}

impl GameSession {
    /// Create an idle session: terrain is laid out but no level content yet
    pub fn new(seed: u64, dims: ScreenDims) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            dims,
            phase: GamePhase::Idle,
            score: 0,
            lives: STARTING_LIVES,
            level: STARTING_LEVEL,
            time_ticks: 0,
            camera: 0.0,
            player: Player::default(),
            terrain: Terrain::generate(&dims),
            gems: Vec::new(),
            spikes: Vec::new(),
            enemies: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Begin a fresh run. Returns false (and changes nothing) while running.
    ///
    /// The RNG keeps its stream across restarts so consecutive runs differ.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = STARTING_LEVEL;
        self.time_ticks = 0;
        self.player = Player::default();
        self.camera = 0.0;
        self.regenerate();
        self.phase = GamePhase::Running;

        log::info!(
            "Session started (seed {}): {} gems, {} spikes, {} enemies",
            self.seed,
            self.gems.len(),
            self.spikes.len(),
            self.enemies.len()
        );
        true
    }

    /// Fresh terrain and level content for the current level
    fn regenerate(&mut self) {
        self.terrain = Terrain::generate(&self.dims);
        populate_level(self);
    }

    /// Put the player back at spawn and the camera at the origin
    pub fn reset_player(&mut self) {
        self.player.respawn();
        self.camera = 0.0;
    }

    /// Take one life. The last one ends the run.
    pub fn lose_life(&mut self, events: &mut Vec<GameEvent>) {
        if !self.is_running() {
            return;
        }

        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives_left: self.lives,
        });

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over at level {} with score {}", self.level, self.score);
        } else {
            log::debug!("Life lost, {} remaining", self.lives);
            self.reset_player();
        }
    }

    /// True when every gem is collected and every enemy defeated
    pub fn is_level_complete(&self) -> bool {
        self.gems.iter().all(|g| g.collected) && self.enemies.is_empty()
    }

    /// Advance to the next level with new terrain and content
    pub fn level_up(&mut self, events: &mut Vec<GameEvent>) {
        self.level += 1;
        self.regenerate();
        self.reset_player();
        events.push(GameEvent::LevelUp { level: self.level });
        log::info!("Level {} reached (score {})", self.level, self.score);
    }

    /// Award points (score only ever grows within a run)
    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(seed: u64) -> GameSession {
        let mut state = GameSession::new(seed, ScreenDims::default());
        assert!(state.start());
        state
    }

    #[test]
    fn test_new_session_is_idle() {
        let state = GameSession::new(1, ScreenDims::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.terrain.len(), TERRAIN_SEGMENTS + 2);
        assert!(state.gems.is_empty());
    }

    #[test]
    fn test_start_populates_level_one() {
        let state = running(42);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.gems.len(), 7);
        assert_eq!(state.spikes.len(), 4);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut state = running(42);
        state.score = 500;
        state.gems[0].collected = true;
        assert!(!state.start());
        assert_eq!(state.score, 500);
        assert!(state.gems[0].collected);
    }

    #[test]
    fn test_lose_life_respawns() {
        let mut state = running(3);
        state.player.pos = Vec2::new(700.0, 250.0);
        state.player.vel = Vec2::new(5.0, 3.0);
        state.camera = 300.0;

        let mut events = Vec::new();
        state.lose_life(&mut events);

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.camera, 0.0);
        assert_eq!(events, vec![GameEvent::LifeLost { lives_left: 2 }]);
    }

    #[test]
    fn test_last_life_ends_run() {
        let mut state = running(3);
        state.lives = 1;
        state.score = 250;

        let mut events = Vec::new();
        state.lose_life(&mut events);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 250 }));

        // Further losses after the run ended do nothing
        state.lose_life(&mut events);
        assert_eq!(state.lives, 0);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_level_complete_rule() {
        let mut state = running(9);
        assert!(!state.is_level_complete());

        for gem in &mut state.gems {
            gem.collected = true;
        }
        assert!(!state.is_level_complete(), "enemy still alive");

        state.enemies.clear();
        assert!(state.is_level_complete());

        state.gems[3].collected = false;
        assert!(!state.is_level_complete(), "one gem left");
    }

    #[test]
    fn test_level_up_repopulates() {
        let mut state = running(11);
        state.player.pos.x = 900.0;
        let mut events = Vec::new();
        state.level_up(&mut events);

        assert_eq!(state.level, 2);
        assert_eq!(state.gems.len(), 9);
        assert_eq!(state.spikes.len(), 5);
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.player.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        assert_eq!(state.terrain.len(), TERRAIN_SEGMENTS + 2);
        assert_eq!(events, vec![GameEvent::LevelUp { level: 2 }]);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = running(5);
        state.level = 4;
        state.score = 1200;
        state.lives = 1;
        state.lose_life(&mut Vec::new());
        assert_eq!(state.phase, GamePhase::GameOver);

        assert!(state.start());
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.gems.len(), 7);
        assert_eq!(state.spikes.len(), 4);
        assert_eq!(state.enemies.len(), 1);
        assert!(state.gems.iter().all(|g| !g.collected));
    }

    #[test]
    fn test_session_serializes() {
        let state = running(77);
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.gems, state.gems);
        assert_eq!(restored.enemies, state.enemies);
        assert_eq!(restored.terrain, state.terrain);
    }
}
