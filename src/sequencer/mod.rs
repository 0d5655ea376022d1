//! Step sequencer and replay engine
//!
//! A [`Sequencer`] holds one [`Operation`] and a playback cursor over its
//! steps. The visualization state is never edited directly: it is always
//! the left fold of [`Visualization::apply_step`] over the steps from 0
//! through the cursor, starting from [`Visualization::initial_state`].
//!
//! # Moving the cursor
//!
//! - [`Sequencer::next`] applies the next step on top of the current state.
//! - [`Sequencer::go_to`] and [`Sequencer::previous`] rebuild the state from
//!   the initial snapshot and replay forward. Steps are not invertible (a
//!   removal loses the removed value), so going backwards is always a
//!   replay.
//!
//! A freshly selected or reset operation shows the untouched initial
//! snapshot at cursor 0. The sequencer remembers how many leading steps are
//! already folded into its state, so `next` catches up on any that were
//! skipped and `next` from `k` always matches `go_to(k + 1)`.
//!
//! # Playback
//!
//! Auto-advance is driven from outside through [`playback::Ticker`]; see
//! [`playback`] for how stale timers are kept from firing.

pub mod playback;

use crate::script::{Operation, Step};
use playback::{Playback, TimerToken, BASE_INTERVAL, MAX_SPEED, MIN_SPEED};
use std::fmt;
use std::time::Duration;

/// The action semantics of one kind of visualization
pub trait Visualization {
    type State: Clone + PartialEq + fmt::Debug;
    type Action: fmt::Debug;

    /// The snapshot every replay starts from
    fn initial_state(&self) -> Self::State;

    /// Apply one step to `state`
    ///
    /// Must be deterministic and total over the action vocabulary: unknown
    /// actions and out-of-range payloads leave the state unchanged rather
    /// than panicking.
    fn apply_step(&self, state: Self::State, step: &Step<Self::Action>) -> Self::State;
}

/// Playback cursor snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub index: usize,
    pub len: usize,
    pub playing: bool,
    pub speed: f64,
}

impl Cursor {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Fraction of the operation shown so far, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 / self.len as f64
    }
}

/// Replays one operation of a visualization
#[derive(Debug)]
pub struct Sequencer<V: Visualization> {
    viz: V,
    operation: Operation<V::Action>,
    state: V::State,
    index: usize,
    /// Number of leading steps folded into `state`
    applied: usize,
    playback: Playback,
    revision: u64,
}

impl<V: Visualization> Sequencer<V> {
    pub fn new(viz: V, operation: Operation<V::Action>) -> Self {
        Self::with_base_interval(viz, operation, BASE_INTERVAL)
    }

    pub fn with_base_interval(
        viz: V,
        operation: Operation<V::Action>,
        base_interval: Duration,
    ) -> Self {
        let state = viz.initial_state();
        Sequencer {
            viz,
            operation,
            state,
            index: 0,
            applied: 0,
            playback: Playback::new(base_interval),
            revision: 0,
        }
    }

    // ========== Accessors ==========

    pub fn viz(&self) -> &V {
        &self.viz
    }

    pub fn operation(&self) -> &Operation<V::Action> {
        &self.operation
    }

    pub fn state(&self) -> &V::State {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            index: self.index,
            len: self.operation.len(),
            playing: self.playback.is_playing(),
            speed: self.playback.speed(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn speed(&self) -> f64 {
        self.playback.speed()
    }

    /// Current time between automatic steps
    pub fn interval(&self) -> Duration {
        self.playback.interval()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index >= self.operation.last_index()
    }

    pub fn current_step(&self) -> Option<&Step<V::Action>> {
        self.operation.step(self.index)
    }

    /// Progress message of the current step, or the operation's description
    pub fn message(&self) -> &str {
        match self.current_step() {
            Some(step) if !step.message.is_empty() => &step.message,
            _ => self.operation.description(),
        }
    }

    /// Bumped on every observable change; renderers compare it to skip
    /// redundant work
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========== Operation and data ==========

    /// Replace the active operation and reset to its start
    pub fn select_operation(&mut self, operation: Operation<V::Action>) {
        tracing::debug!(operation = operation.id(), steps = operation.len(), "select operation");
        self.operation = operation;
        self.restart();
    }

    /// Replace the visualization (initial data or presentation options) and
    /// reset to the start of the current operation
    pub fn set_viz(&mut self, viz: V) {
        self.viz = viz;
        self.restart();
    }

    /// Back to cursor 0 with the initial snapshot, paused
    ///
    /// Step 0 is not applied afterwards, unlike `go_to(0)`, so the two can
    /// show different states at the same cursor.
    pub fn reset(&mut self) {
        tracing::debug!(operation = self.operation.id(), "reset");
        self.restart();
    }

    fn restart(&mut self) {
        self.playback.stop();
        self.state = self.viz.initial_state();
        self.index = 0;
        self.applied = 0;
        self.touch();
    }

    // ========== Navigation ==========

    /// Rebuild the state as if only steps `0..=index` had ever run
    ///
    /// Out-of-range targets are clamped to the last step. Seeking stops
    /// playback so no pending tick can land on the new position.
    ///
    /// `go_to(0)` applies step 0, so from a fresh or reset sequencer it can
    /// change the state without moving the cursor.
    pub fn go_to(&mut self, index: usize) {
        let target = index.min(self.operation.last_index());
        if target != index {
            tracing::debug!(requested = index, target, "seek target clamped");
        }

        if self.playback.stop() {
            tracing::debug!("playback stopped by seek");
        }

        self.state = self.replay_through(target);
        self.index = target;
        self.applied = (target + 1).min(self.operation.len());
        self.touch();
    }

    /// Apply the next step; no-op at the last step
    ///
    /// Reaching the last step stops playback.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            if self.playback.stop() {
                tracing::debug!("playback stopped at last step");
                self.touch();
            }
            return false;
        }

        let target = self.index + 1;
        let mut state = self.state.clone();
        for step in &self.operation.steps()[self.applied..=target] {
            tracing::trace!(action = ?step.action, phase = %step.phase, "apply step");
            state = self.viz.apply_step(state, step);
        }
        self.state = state;
        self.index = target;
        self.applied = target + 1;

        if self.is_last() {
            if self.playback.stop() {
                tracing::debug!("playback finished");
            }
        } else {
            // Manual steps restart the auto-advance interval
            self.playback.rearm();
        }

        self.touch();
        true
    }

    /// Replay to the previous step; no-op at step 0
    pub fn previous(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.go_to(self.index - 1);
        true
    }

    fn replay_through(&self, target: usize) -> V::State {
        self.operation
            .steps()
            .iter()
            .take(target + 1)
            .fold(self.viz.initial_state(), |state, step| {
                self.viz.apply_step(state, step)
            })
    }

    // ========== Playback ==========

    /// Start auto-advance
    ///
    /// At the last step this restarts the operation from the beginning
    /// first, so play always produces motion. An operation with a single
    /// step has nowhere to advance and stays paused.
    pub fn play(&mut self) {
        if self.playback.is_playing() {
            return;
        }
        if self.is_last() {
            self.restart();
        }
        if self.is_last() {
            return;
        }

        self.playback.start();
        tracing::debug!(
            operation = self.operation.id(),
            interval_ms = self.playback.interval().as_millis() as u64,
            "playback started"
        );
        self.touch();
    }

    pub fn pause(&mut self) {
        if self.playback.stop() {
            tracing::debug!(index = self.index, "playback paused");
            self.touch();
        }
    }

    pub fn toggle_play(&mut self) {
        if self.playback.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Set the speed multiplier; never moves the cursor
    ///
    /// Values are clamped to `[MIN_SPEED, MAX_SPEED]`. Non-finite or
    /// non-positive values are ignored and false is returned.
    pub fn set_speed(&mut self, multiplier: f64) -> bool {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            tracing::warn!(multiplier, "ignoring invalid speed multiplier");
            return false;
        }

        let speed = multiplier.clamp(MIN_SPEED, MAX_SPEED);
        self.playback.set_speed(speed);
        tracing::debug!(speed, "speed changed");
        self.touch();
        true
    }

    /// Token for the currently armed auto-advance timer, if playing
    pub fn timer(&self) -> Option<TimerToken> {
        self.playback.token()
    }

    /// Handle a timer tick; stale tokens are ignored
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if !self.playback.is_current(token) {
            tracing::trace!("ignoring stale timer tick");
            return false;
        }
        self.next()
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
