//! Effects emitted by round transitions.
//!
//! The engine never calls audio or timer APIs itself. Each transition
//! returns effect descriptors; the host (usually a
//! [`GameSession`](crate::runtime::GameSession)) interprets them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::FlipBackToken;

/// Sound cues the audio collaborator knows how to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Correct,
    Incorrect,
}

/// A one-shot advisory signal for collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A pair was matched.
    PlayCorrectSound,
    /// Two different cards were picked.
    PlayIncorrectSound,
    /// The last pair was matched. Emitted once per round.
    RoundWon,
    /// Deliver `token` back to the round after `delay` to flip the
    /// mismatched pair face-down.
    ScheduleFlipBack { token: FlipBackToken, delay: Duration },
}

impl Effect {
    /// The sound to play for this effect, if any.
    #[must_use]
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            Effect::PlayCorrectSound => Some(SoundCue::Correct),
            Effect::PlayIncorrectSound => Some(SoundCue::Incorrect),
            Effect::RoundWon | Effect::ScheduleFlipBack { .. } => None,
        }
    }
}

/// Effects from one transition. A selection yields at most two.
pub type Effects = SmallVec<[Effect; 3]>;
