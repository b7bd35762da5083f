//! Timer collaborator.
//!
//! A `Scheduler` delays delivery of a flip-back token. When the delay
//! elapses the host hands the token to
//! [`GameSession::on_timer`](super::GameSession::on_timer).
//!
//! `ManualScheduler` is a virtual clock: nothing fires until the host calls
//! [`ManualScheduler::advance`]. Frame-driven hosts advance it once per tick;
//! tests advance it explicitly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::FlipBackToken;

/// Handle for cancelling a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// One-shot delayed delivery of flip-back tokens.
pub trait Scheduler {
    /// Deliver `token` once after `delay`.
    fn schedule_once(&mut self, delay: Duration, token: FlipBackToken) -> TimerHandle;

    /// Cancel a scheduled timer.
    ///
    /// Idempotent: cancelling an unknown, fired or already cancelled handle
    /// does nothing.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug)]
struct ScheduledTimer {
    handle: TimerHandle,
    due: Duration,
    token: FlipBackToken,
}

/// Deterministic scheduler driven by an explicit clock.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: u64,
    scheduled: Vec<ScheduledTimer>,
}

impl ManualScheduler {
    /// Create a scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.scheduled.len()
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.scheduled.iter().any(|t| t.handle == handle)
    }

    /// Move the clock forward and return the tokens that came due, earliest
    /// first. Timers due at the same instant fire in scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<FlipBackToken> {
        self.now += by;
        let now = self.now;

        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.scheduled.drain(..).partition(|t| t.due <= now);
        self.scheduled = rest;

        due.sort_by_key(|t| (t.due, t.handle.0));
        due.into_iter().map(|t| t.token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration, token: FlipBackToken) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.scheduled.push(ScheduledTimer {
            handle,
            due: self.now + delay,
            token,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.scheduled.retain(|t| t.handle != handle);
    }
}
