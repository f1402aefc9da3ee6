//! Fixed-rate frame driver
//!
//! Owns the session and the one tick schedule that advances it. Starting a
//! session cancels the previous schedule before arming a new one, so a
//! restart can never leave two update streams running.

use super::input::{Command, InputState, Key};
use super::sink::{HudSink, HudSnapshot, RenderFrame, RenderSink};
use crate::consts::MAX_SUBSTEPS;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameSession, TickInput, demo_input, tick};

/// Longest real frame time fed to the accumulator (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

/// Tick schedule: one accumulator tagged with a generation
#[derive(Debug, Clone, Copy, Default)]
struct Schedule {
    generation: u64,
    accumulator: f32,
    active: bool,
}

pub struct FrameDriver<R: RenderSink, H: HudSink> {
    session: GameSession,
    input: InputState,
    demo: bool,
    dt: f32,
    schedule: Schedule,
    last_hud: Option<HudSnapshot>,
    render: R,
    hud: H,
}

impl<R: RenderSink, H: HudSink> FrameDriver<R, H> {
    /// Create a driver with an idle session and push the initial HUD
    pub fn new(settings: &Settings, seed: u64, render: R, hud: H) -> Self {
        let mut driver = Self {
            session: GameSession::new(seed, settings.dims()),
            input: InputState::default(),
            demo: settings.demo,
            dt: settings.tick_dt(),
            schedule: Schedule::default(),
            last_hud: None,
            render,
            hud,
        };
        driver.publish();
        driver
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn render_sink(&self) -> &R {
        &self.render
    }

    pub fn hud_sink(&self) -> &H {
        &self.hud
    }

    /// Whether a tick schedule is armed
    pub fn is_scheduled(&self) -> bool {
        self.schedule.active
    }

    /// Generation of the current schedule; bumps on every start
    pub fn generation(&self) -> u64 {
        self.schedule.generation
    }

    /// Start a new run. Does nothing while one is already running.
    pub fn start(&mut self) -> bool {
        if !self.session.start() {
            return false;
        }

        // Cancel whatever was scheduled before arming the new schedule
        self.cancel();
        self.schedule = Schedule {
            generation: self.schedule.generation + 1,
            accumulator: 0.0,
            active: true,
        };
        log::debug!("Tick schedule {} armed", self.schedule.generation);

        self.publish();
        true
    }

    fn cancel(&mut self) {
        if self.schedule.active {
            log::debug!("Tick schedule {} cancelled", self.schedule.generation);
        }
        self.schedule.active = false;
        self.schedule.accumulator = 0.0;
    }

    /// Forward a key press; Space may start a run
    pub fn key_down(&mut self, key: Key) {
        let running = self.session.is_running();
        if let Some(Command::Start) = self.input.key_down(key, running) {
            self.start();
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Inputs the next tick will use
    fn next_input(&self) -> TickInput {
        if self.demo {
            demo_input(&self.session)
        } else {
            self.input.tick_input()
        }
    }

    /// Run exactly one tick if scheduled, then render and update the HUD
    pub fn step(&mut self) -> Vec<GameEvent> {
        if !self.schedule.active {
            return Vec::new();
        }

        let input = self.next_input();
        let events = tick(&mut self.session, &input);
        for event in &events {
            log::trace!("{:?}", event);
        }

        if self.session.phase == GamePhase::GameOver {
            self.cancel();
        }

        self.publish();
        events
    }

    /// Feed real elapsed time; runs as many whole ticks as have accrued
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !self.schedule.active {
            return 0;
        }

        self.schedule.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.schedule.active
            && self.schedule.accumulator >= self.dt
            && substeps < MAX_SUBSTEPS
        {
            self.schedule.accumulator -= self.dt;
            self.step();
            substeps += 1;
        }
        substeps
    }

    /// Send the current frame to the renderer and the HUD if it changed
    fn publish(&mut self) {
        self.render.render(&RenderFrame::from_session(&self.session));

        let hud = HudSnapshot::from_session(&self.session);
        if self.last_hud != Some(hud) {
            self.hud.update(&hud);
            self.last_hud = Some(hud);
        }
    }
}
