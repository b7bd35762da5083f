//! Collaborator seams and the session that drives them.
//!
//! - `Scheduler` / `ManualScheduler`: delayed flip-back delivery
//! - `AudioPlayer` / `SilentAudio`: sound cues
//! - `GameSession`: owns a round and wires effects to collaborators

pub mod audio;
pub mod session;
pub mod timer;

pub use audio::{AudioPlayer, PlaybackError, SilentAudio};
pub use session::GameSession;
pub use timer::{ManualScheduler, Scheduler, TimerHandle};
