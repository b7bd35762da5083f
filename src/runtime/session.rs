//! A playable game: one round plus its collaborators.
//!
//! `GameSession` owns the round, the dealing RNG, the scheduler and the
//! audio player. It turns rule effects into collaborator calls:
//! - sound effects go to the `AudioPlayer` (failures are logged, not raised)
//! - `ScheduleFlipBack` goes to the `Scheduler`
//! - `RoundWon` is logged; the host shows its banner and calls `new_round`
//!
//! ## Stale timers
//!
//! `new_round` cancels the live timer handle, and the round itself rejects
//! tokens from earlier generations. A timer that slips through cancellation
//! still cannot touch the new round's cards.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::audio::AudioPlayer;
use super::timer::{ManualScheduler, Scheduler, TimerHandle};
use crate::core::{ConfigError, FlipBackToken, GameRng, Round, RoundConfig};
use crate::rules::{Effect, Effects, FlipBackOutcome, SoundCue};

/// Game host state.
pub struct GameSession<S: Scheduler, A: AudioPlayer> {
    config: RoundConfig,
    rng: GameRng,
    round: Round,
    scheduler: S,
    audio: A,
    timer: Option<TimerHandle>,
}

impl<S: Scheduler, A: AudioPlayer> GameSession<S, A> {
    /// Validate `config` and deal the first round.
    pub fn new(config: RoundConfig, scheduler: S, audio: A) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = config.make_rng();
        let round = Round::deal(config.symbols(), config.reveal_delay_ms, &mut rng, 0);
        info!(seed = rng.seed(), pairs = config.pair_count, "session started");

        Ok(Self {
            config,
            rng,
            round,
            scheduler,
            audio,
            timer: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Clone of the current round for a renderer. O(1) in deck size.
    #[must_use]
    pub fn snapshot(&self) -> Round {
        self.round.clone()
    }

    /// Live flip-back timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Discard the current round and deal a fresh one.
    ///
    /// Used both after a win and for a manual reset.
    pub fn new_round(&mut self) {
        self.cancel_timer();

        let generation = self.round.next_generation();
        self.round = Round::deal(
            self.config.symbols(),
            self.config.reveal_delay_ms,
            &mut self.rng,
            generation,
        );
        info!(generation, "dealt new round");
    }

    /// Select a card and act on the resulting effects.
    ///
    /// Invalid selections are ignored and return no effects.
    pub fn select_card(&mut self, index: usize) -> Effects {
        let effects = self.round.select(index);
        for effect in &effects {
            self.dispatch(*effect);
        }
        effects
    }

    /// Deliver a fired flip-back token.
    pub fn on_timer(&mut self, token: FlipBackToken) -> FlipBackOutcome {
        let outcome = self.round.flip_back(token);
        if outcome == FlipBackOutcome::Applied {
            self.timer = None;
        }
        outcome
    }

    fn dispatch(&mut self, effect: Effect) {
        match effect {
            Effect::PlayCorrectSound | Effect::PlayIncorrectSound => {
                if let Some(cue) = effect.sound_cue() {
                    self.play(cue);
                }
            }
            Effect::ScheduleFlipBack { token, delay } => {
                self.cancel_timer();
                self.timer = Some(self.scheduler.schedule_once(delay, token));
                debug!(?token, ?delay, "flip-back scheduled");
            }
            Effect::RoundWon => {
                info!(
                    generation = self.round.generation(),
                    turns = self.round.turns(),
                    mismatches = self.round.mismatches(),
                    "player won the round"
                );
            }
        }
    }

    fn play(&mut self, cue: SoundCue) {
        if let Err(err) = self.audio.play(cue) {
            warn!(?cue, error = %err, "sound playback failed");
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            debug!(?handle, "flip-back timer cancelled");
        }
    }
}

impl<A: AudioPlayer> GameSession<ManualScheduler, A> {
    /// Advance the virtual clock and deliver every token that came due.
    ///
    /// Returns how many flip-backs were applied.
    pub fn advance(&mut self, by: Duration) -> usize {
        let fired = self.scheduler.advance(by);
        fired
            .into_iter()
            .filter(|&token| self.on_timer(token) == FlipBackOutcome::Applied)
            .count()
    }
}
