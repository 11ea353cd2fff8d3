//! Session controller
//!
//! `Game` owns everything a run needs and exposes the four lifecycle steps
//! a host drives: initialize, load content, update, draw.

use glam::Vec2;

use crate::audio::{AudioService, MusicTrack, SoundEffect};
use crate::input::{InputSnapshot, InputTracker};
use crate::render::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, SessionState, tick};
use crate::telemetry::ActivityTracker;

/// What the host should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Game<A: AudioService> {
    settings: Settings,
    state: SessionState,
    input: InputTracker,
    audio: A,
}

impl<A: AudioService> Game<A> {
    /// Create a game on the Opening screen with an owned audio handle
    pub fn new(settings: Settings, audio: A) -> Self {
        let seed = settings.resolve_seed();
        let state = SessionState::new(seed, settings.world_config());
        Self {
            settings,
            state,
            input: InputTracker::new(),
            audio,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// One-time startup work before any content is loaded
    pub fn initialize(&mut self, tracker: &dyn ActivityTracker) {
        tracker.track(&self.settings.activity);
        log::info!("Game initialized (seed {})", self.state.seed);
    }

    /// Start the title screen music
    pub fn load_content(&mut self) {
        self.audio.play_music(MusicTrack::Opening, true);
    }

    /// Size of the host's drawing surface, used by the camera
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.state.set_viewport(viewport);
    }

    /// Advance one frame from a fresh input sample
    pub fn update(&mut self, snapshot: InputSnapshot, dt: f32) -> Flow {
        self.input.advance(snapshot);

        if self.input.quit_requested() {
            log::info!("Quit requested in {:?}", self.state.phase);
            return Flow::Exit;
        }

        let input = self.input.tick_input(self.settings.autopilot);
        tick(&mut self.state, &input, dt);

        for event in self.state.drain_events() {
            self.dispatch(event);
        }
        Flow::Continue
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        draw_frame(&self.state, renderer);
    }

    /// Stop playback and hand the audio handle back to the host
    pub fn shutdown(mut self) -> A {
        self.audio.stop_music();
        log::info!(
            "Shutting down after {} frames, score {}",
            self.state.frame,
            self.state.player.score
        );
        self.audio
    }

    fn dispatch(&mut self, event: GameEvent) {
        log::trace!("Event: {:?}", event);
        match event {
            GameEvent::SessionStarted => {
                self.audio.stop_music();
                self.audio.play_music(MusicTrack::World, true);
            }
            GameEvent::ItemCollected { .. } => {
                self.audio.play_effect(SoundEffect::Collect);
            }
            GameEvent::SessionCompleted { score } => {
                log::info!("Session complete with score {}", score);
                self.audio.stop_music();
                self.audio.play_music(MusicTrack::Completion, false);
            }
        }
    }
}
