//! Playback-transport state for the recitation audio.
//!
//! Pure state only: the caller owns the clock and the actual audio output.
//! `advance` takes elapsed wall time as an argument, so the same call sequence
//! always produces the same state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Playback-rate choices offered by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackRate {
    Slow,
    #[default]
    Normal,
    Faster,
    Fast,
}

impl PlaybackRate {
    pub const ALL: [PlaybackRate; 4] = [
        PlaybackRate::Slow,
        PlaybackRate::Normal,
        PlaybackRate::Faster,
        PlaybackRate::Fast,
    ];

    pub fn factor(self) -> f32 {
        match self {
            PlaybackRate::Slow => 0.75,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::Faster => 1.25,
            PlaybackRate::Fast => 1.5,
        }
    }

    /// Match a stored factor back to a rate. Anything outside the fixed set is
    /// rejected so corrupted preferences fall back to the default.
    pub fn from_factor(factor: f32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| (rate.factor() - factor).abs() < 1e-3)
    }

    /// Next rate in the cycle, wrapping from fastest back to slowest.
    pub fn next(self) -> Self {
        match self {
            PlaybackRate::Slow => PlaybackRate::Normal,
            PlaybackRate::Normal => PlaybackRate::Faster,
            PlaybackRate::Faster => PlaybackRate::Fast,
            PlaybackRate::Fast => PlaybackRate::Slow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackRate::Slow => "0.75×",
            PlaybackRate::Normal => "1×",
            PlaybackRate::Faster => "1.25×",
            PlaybackRate::Fast => "1.5×",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    Playing,
    Paused,
}

/// Transport position, rate, and play state for one recitation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    position: Duration,
    duration: Duration,
    state: TransportState,
    rate: PlaybackRate,
}

impl Transport {
    /// A paused transport at the start of a recitation of the given length.
    pub fn new(duration: Duration) -> Self {
        Self {
            position: Duration::ZERO,
            duration,
            state: TransportState::Paused,
            rate: PlaybackRate::Normal,
        }
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    pub fn is_playing(&self) -> bool {
        self.state == TransportState::Playing
    }

    pub fn play(&mut self) {
        // Playing again from the end restarts the recitation.
        if self.position >= self.duration {
            self.position = Duration::ZERO;
        }
        self.state = TransportState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = TransportState::Paused;
    }

    pub fn toggle(&mut self) {
        match self.state {
            TransportState::Playing => self.pause(),
            TransportState::Paused => self.play(),
        }
    }

    /// Seek to an absolute position, clamped to the recitation length.
    pub fn seek_to(&mut self, position: Duration) {
        self.position = position.min(self.duration);
    }

    /// Seek by a signed offset in seconds, saturating at both ends.
    pub fn seek_by(&mut self, offset_secs: i64) {
        let offset = Duration::from_secs(offset_secs.unsigned_abs());
        if offset_secs < 0 {
            self.position = self.position.saturating_sub(offset);
        } else {
            self.position = (self.position + offset).min(self.duration);
        }
    }

    pub fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
    }

    pub fn cycle_rate(&mut self) {
        self.rate = self.rate.next();
    }

    /// Advance by elapsed wall time, scaled by the playback rate. Pauses
    /// automatically when the end is reached.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.state != TransportState::Playing {
            return;
        }
        self.position += elapsed.mul_f32(self.rate.factor());
        if self.position >= self.duration {
            self.position = self.duration;
            self.state = TransportState::Paused;
        }
    }

    /// Fraction of the recitation played, in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}
