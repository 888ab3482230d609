//! Background music session
//!
//! The playing/muted flag lives here, owned by the display. A rejected
//! play request leaves the session muted and is never propagated.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Audio backend failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Playback rejected: {0}")]
    Rejected(String),
}

/// Audio output driven by the session
pub trait AudioSink: Send {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
}

/// Sink that accepts every request and produces no sound
#[derive(Clone, Debug, Default)]
pub struct SilentSink {
    pub playing: bool,
    pub volume: f32,
}

impl AudioSink for SilentSink {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}

/// Visible playback state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Playing,
    Muted,
}

impl PlaybackState {
    /// Toggle button glyph
    pub fn indicator(self) -> &'static str {
        match self {
            PlaybackState::Playing => "🎵",
            PlaybackState::Muted => "🔇",
        }
    }
}

/// Startup playback behavior
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackSettings {
    pub volume: f32,
    pub autoplay: bool,
    /// Compact mode never autoplays
    pub compact: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        PlaybackSettings {
            volume: 0.3,
            autoplay: true,
            compact: false,
        }
    }
}

/// Playback session - the only owner of the playing flag
pub struct PlaybackSession<A: AudioSink> {
    sink: A,
    state: PlaybackState,
    rejections: u64,
}

impl<A: AudioSink> PlaybackSession<A> {
    /// New sessions start muted
    pub fn new(sink: A) -> Self {
        PlaybackSession {
            sink,
            state: PlaybackState::Muted,
            rejections: 0,
        }
    }

    /// Apply volume and, unless disabled, attempt autoplay
    pub fn start(&mut self, settings: PlaybackSettings) -> PlaybackState {
        self.sink.set_volume(settings.volume);
        if settings.autoplay && !settings.compact {
            self.try_play();
        } else {
            debug!(compact = settings.compact, "autoplay skipped");
            self.state = PlaybackState::Muted;
        }
        self.state
    }

    /// Pause when playing, otherwise attempt to play
    pub fn toggle(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::Playing => {
                self.sink.pause();
                self.state = PlaybackState::Muted;
                info!("music paused");
            }
            PlaybackState::Muted => self.try_play(),
        }
        self.state
    }

    fn try_play(&mut self) {
        match self.sink.play() {
            Ok(()) => {
                self.state = PlaybackState::Playing;
                info!("music playing");
            }
            Err(e) => {
                self.rejections += 1;
                self.state = PlaybackState::Muted;
                warn!("Could not play music: {}", e);
            }
        }
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Play requests the sink has refused so far
    pub fn rejections(&self) -> u64 {
        self.rejections
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }
}
