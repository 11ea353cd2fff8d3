//! Audio playback seam
//!
//! The game never touches a process-wide player. It owns one `AudioService`
//! handle, acquired at startup and handed back at shutdown.

use serde::{Deserialize, Serialize};

/// Background and one-shot music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Title screen loop
    Opening,
    /// World loop while playing
    World,
    /// Played once when every item is collected
    Completion,
}

impl MusicTrack {
    /// Content asset name
    pub fn asset_name(&self) -> &'static str {
        match self {
            MusicTrack::Opening => "Assets/Opening Music Track",
            MusicTrack::World => "Assets/World Music Track",
            MusicTrack::Completion => "Assets/Completion Track",
        }
    }
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Item picked up
    Collect,
}

impl SoundEffect {
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Collect => "Assets/Collect",
        }
    }
}

/// Playback operations the game needs from the host
pub trait AudioService {
    /// Start a track, replacing whatever music is playing
    fn play_music(&mut self, track: MusicTrack, looping: bool);
    fn stop_music(&mut self);
    /// Fire-and-forget effect
    fn play_effect(&mut self, effect: SoundEffect);
}

/// Volume levels (each 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mixer {
    pub master_volume: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Mixer {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Mixer {
    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_music_volume(&self) -> f32 {
        self.effective(self.music_volume)
    }

    pub fn effective_sfx_volume(&self) -> f32 {
        self.effective(self.sfx_volume)
    }

    fn effective(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * channel).clamp(0.0, 1.0)
        }
    }
}

/// Headless audio: tracks what would be playing and logs it
#[derive(Debug, Default)]
pub struct LogAudio {
    mixer: Mixer,
    current: Option<(MusicTrack, bool)>,
    effects_played: u64,
}

impl LogAudio {
    pub fn new(mixer: Mixer) -> Self {
        log::debug!(
            "Audio ready (music {:.2}, sfx {:.2})",
            mixer.effective_music_volume(),
            mixer.effective_sfx_volume()
        );
        Self {
            mixer,
            current: None,
            effects_played: 0,
        }
    }

    /// Track currently playing and whether it loops
    pub fn current(&self) -> Option<(MusicTrack, bool)> {
        self.current
    }

    pub fn effects_played(&self) -> u64 {
        self.effects_played
    }

    pub fn mixer_mut(&mut self) -> &mut Mixer {
        &mut self.mixer
    }
}

impl AudioService for LogAudio {
    fn play_music(&mut self, track: MusicTrack, looping: bool) {
        log::info!(
            "Music: {} (looping: {}, volume {:.2})",
            track.asset_name(),
            looping,
            self.mixer.effective_music_volume()
        );
        self.current = Some((track, looping));
    }

    fn stop_music(&mut self) {
        if let Some((track, _)) = self.current.take() {
            log::debug!("Music stopped: {}", track.asset_name());
        }
    }

    fn play_effect(&mut self, effect: SoundEffect) {
        let vol = self.mixer.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        self.effects_played += 1;
        log::debug!("Effect: {} (volume {:.2})", effect.asset_name(), vol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixer_clamps_and_mutes() {
        let mut mixer = Mixer::default();
        mixer.set_master_volume(2.0);
        mixer.set_sfx_volume(-1.0);
        assert_eq!(mixer.master_volume, 1.0);
        assert_eq!(mixer.effective_sfx_volume(), 0.0);

        mixer.set_sfx_volume(0.5);
        assert!((mixer.effective_sfx_volume() - 0.5).abs() < 1e-6);
        mixer.set_muted(true);
        assert_eq!(mixer.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_log_audio_tracks_music() {
        let mut audio = LogAudio::new(Mixer::default());
        assert_eq!(audio.current(), None);
        audio.play_music(MusicTrack::Opening, true);
        assert_eq!(audio.current(), Some((MusicTrack::Opening, true)));
        audio.play_music(MusicTrack::World, true);
        assert_eq!(audio.current(), Some((MusicTrack::World, true)));
        audio.stop_music();
        assert_eq!(audio.current(), None);
    }

    #[test]
    fn test_muted_effects_are_skipped() {
        let mut audio = LogAudio::new(Mixer::default());
        audio.play_effect(SoundEffect::Collect);
        assert_eq!(audio.effects_played(), 1);
        audio.mixer_mut().set_muted(true);
        audio.play_effect(SoundEffect::Collect);
        assert_eq!(audio.effects_played(), 1);
    }
}
