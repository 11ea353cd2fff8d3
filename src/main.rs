//! Test Drive entry point
//!
//! Without a windowing backend the binary runs the headless host: the game
//! plays itself (autopilot) and reports the result in the log.

use anyhow::Context;

use test_drive::audio::LogAudio;
use test_drive::host::{HeadlessHost, run};
use test_drive::telemetry::LogTracker;
use test_drive::{Game, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Test Drive (headless) starting...");

    let mut settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).with_context(|| format!("loading {path}"))?,
        None => Settings::default(),
    };
    settings.validate()?;
    if !settings.autopilot {
        log::info!("No input devices in headless mode, enabling autopilot");
        settings.autopilot = true;
    }

    let mut host = HeadlessHost::new(settings.viewport_size, settings.max_frames);
    let audio = LogAudio::new(settings.audio);
    let game = Game::new(settings, audio);

    let (_audio, summary) = run(game, &mut host, &LogTracker);
    log::info!(
        "Finished in {:?} after {} frames with score {}",
        summary.phase,
        summary.frames,
        summary.score
    );
    Ok(())
}
