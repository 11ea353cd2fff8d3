//! Driver loop
//!
//! The embedding environment implements `Host` (window, devices, renderer);
//! `run` calls the game's lifecycle methods in order, one update and one
//! draw per frame.

use glam::Vec2;

use crate::audio::AudioService;
use crate::consts::{FRAME_DT, MAX_FRAME_DT};
use crate::game::{Flow, Game};
use crate::input::{InputSnapshot, Key};
use crate::render::{DrawList, Renderer};
use crate::sim::GamePhase;
use crate::telemetry::ActivityTracker;

/// Per-frame information the host may use when sampling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub index: u64,
    pub phase: GamePhase,
}

/// Services supplied by the embedding environment
pub trait Host {
    type Renderer: Renderer;

    /// Sample devices once. `None` means the window was closed.
    fn poll_input(&mut self, frame: &FrameInfo) -> Option<InputSnapshot>;
    /// Seconds since the previous frame
    fn frame_delta(&mut self) -> f32;
    fn renderer(&mut self) -> &mut Self::Renderer;
    /// Show the frame that was just drawn
    fn present(&mut self) {}
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub phase: GamePhase,
    pub score: u64,
}

/// Drive `game` until it asks to exit or the host closes, then shut it down.
///
/// Returns the audio handle along with a summary of the run.
pub fn run<A, H>(mut game: Game<A>, host: &mut H, tracker: &dyn ActivityTracker) -> (A, RunSummary)
where
    A: AudioService,
    H: Host,
{
    game.initialize(tracker);
    game.load_content();

    let mut frames = 0u64;
    loop {
        let info = FrameInfo {
            index: frames,
            phase: game.phase(),
        };
        let Some(snapshot) = host.poll_input(&info) else {
            log::info!("Host closed after {} frames", frames);
            break;
        };

        let dt = host.frame_delta();
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        game.set_viewport(host.renderer().viewport());
        if game.update(snapshot, dt) == Flow::Exit {
            break;
        }

        game.draw(host.renderer());
        host.present();
        frames += 1;

        if frames % 600 == 0 {
            log::trace!("Frame {} ({:?})", frames, game.phase());
        }
    }

    let summary = RunSummary {
        frames,
        phase: game.phase(),
        score: game.state().player.score,
    };
    (game.shutdown(), summary)
}

/// Scripted host with no window: fixed step, draws into a `DrawList`.
///
/// Presses Enter on the second frame, then presses Escape once the session
/// has been complete for `linger_frames` or the frame budget runs out.
#[derive(Debug)]
pub struct HeadlessHost {
    renderer: DrawList,
    max_frames: u64,
    linger_frames: u64,
    success_since: Option<u64>,
}

impl HeadlessHost {
    pub fn new(viewport: Vec2, max_frames: u64) -> Self {
        Self {
            renderer: DrawList::new(viewport),
            max_frames,
            linger_frames: 60,
            success_since: None,
        }
    }

    pub fn with_linger(mut self, frames: u64) -> Self {
        self.linger_frames = frames;
        self
    }

    /// Change the size of the surface frames are drawn into
    pub fn resize(&mut self, viewport: Vec2) {
        self.renderer.set_viewport(viewport);
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.renderer
    }
}

impl Host for HeadlessHost {
    type Renderer = DrawList;

    fn poll_input(&mut self, frame: &FrameInfo) -> Option<InputSnapshot> {
        if frame.phase == GamePhase::Success && self.success_since.is_none() {
            self.success_since = Some(frame.index);
        }
        let lingered = self
            .success_since
            .is_some_and(|since| frame.index >= since + self.linger_frames);

        if lingered || frame.index >= self.max_frames {
            return Some(InputSnapshot::with_keys([Key::Escape]));
        }
        if frame.index == 1 {
            return Some(InputSnapshot::with_keys([Key::Enter]));
        }
        Some(InputSnapshot::default())
    }

    fn frame_delta(&mut self) -> f32 {
        FRAME_DT
    }

    fn renderer(&mut self) -> &mut DrawList {
        &mut self.renderer
    }
}
