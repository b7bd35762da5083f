//! Audio collaborator.
//!
//! Playback failures never affect game state: the session logs them and
//! carries on.

use thiserror::Error;

use crate::rules::SoundCue;

/// Audio device or resource failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("audio device unavailable")]
    DeviceUnavailable,
    #[error("sound cue {0:?} is not loaded")]
    CueNotLoaded(SoundCue),
    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Plays sound cues.
pub trait AudioPlayer {
    fn play(&mut self, cue: SoundCue) -> Result<(), PlaybackError>;
}

/// Audio player that plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play(&mut self, _cue: SoundCue) -> Result<(), PlaybackError> {
        Ok(())
    }
}

impl<A: AudioPlayer + ?Sized> AudioPlayer for Box<A> {
    fn play(&mut self, cue: SoundCue) -> Result<(), PlaybackError> {
        (**self).play(cue)
    }
}
