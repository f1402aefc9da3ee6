//! Gem Roller entry point
//!
//! Headless native runner: loads settings, starts a session and drives it in
//! real time, reporting HUD changes through the log.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use gem_roller::Settings;
use gem_roller::platform::{FrameDriver, LogHud, NullRender};
use gem_roller::sim::GamePhase;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Gem Roller (native) starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Seed: {}", seed);

    if !settings.demo {
        log::warn!("No input device in headless mode; the ball will only roll");
    }

    let mut driver = FrameDriver::new(&settings, seed, NullRender, LogHud);
    driver.start();

    let max_ticks = settings.max_ticks.unwrap_or(u64::MAX);
    let frame = Duration::from_secs_f32(settings.tick_dt());
    let mut last = Instant::now();

    while driver.is_scheduled() && driver.session().time_ticks < max_ticks {
        std::thread::sleep(frame);
        let now = Instant::now();
        driver.advance((now - last).as_secs_f32());
        last = now;
    }

    let session = driver.session();
    match session.phase {
        GamePhase::GameOver => log::info!(
            "Game over! Final score {} at level {}",
            session.score,
            session.level
        ),
        _ => log::info!(
            "Stopped after {} ticks: score {}, level {}, lives {}",
            session.time_ticks,
            session.score,
            session.level,
            session.lives
        ),
    }
}
