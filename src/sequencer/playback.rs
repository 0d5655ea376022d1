//! Playback timing
//!
//! Auto-advance is a repeating deferred callback. The [`Sequencer`] never
//! owns a clock; instead it hands out [`TimerToken`]s while playing and only
//! honours a token whose generation is still current. Every transition that
//! could leave a scheduled tick pointing at the wrong state (pause, seek,
//! reset, operation switch, speed change, reaching the end) bumps the
//! generation, so a tick armed before the transition is dropped instead of
//! advancing the new state.
//!
//! [`Ticker`] is the event-loop side: call [`Ticker::poll`] with the current
//! time on every iteration and it arms, re-arms and fires the sequencer's
//! timer as needed.

use super::{Sequencer, Visualization};
use std::time::{Duration, Instant};

/// Time between automatic steps at 1x speed
pub const BASE_INTERVAL: Duration = Duration::from_millis(1500);

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 10.0;

/// Speed multipliers offered by the UI
pub const SPEED_PRESETS: [f64; 3] = [0.5, 1.0, 2.0];

/// The preset after `speed`, wrapping back to the slowest
pub fn next_preset(speed: f64) -> f64 {
    SPEED_PRESETS
        .iter()
        .copied()
        .find(|&preset| preset > speed + f64::EPSILON)
        .unwrap_or(SPEED_PRESETS[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// Handle for one armed auto-advance timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    pub interval: Duration,
}

/// Play/pause flag, speed multiplier and timer generation
#[derive(Debug, Clone)]
pub struct Playback {
    state: PlaybackState,
    speed: f64,
    base_interval: Duration,
    generation: u64,
}

impl Playback {
    pub fn new(base_interval: Duration) -> Self {
        Playback {
            state: PlaybackState::Paused,
            speed: 1.0,
            base_interval,
            generation: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Base interval scaled by `1 / speed`
    pub fn interval(&self) -> Duration {
        self.base_interval.div_f64(self.speed)
    }

    /// Returns false if already playing
    pub(crate) fn start(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        self.state = PlaybackState::Playing;
        self.rearm();
        true
    }

    /// Returns false if already paused
    pub(crate) fn stop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.state = PlaybackState::Paused;
        self.rearm();
        true
    }

    /// `speed` must already be validated and clamped by the caller
    pub(crate) fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
        self.rearm();
    }

    /// Invalidate every outstanding token
    pub(crate) fn rearm(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn token(&self) -> Option<TimerToken> {
        self.is_playing().then(|| TimerToken {
            generation: self.generation,
            interval: self.interval(),
        })
    }

    pub fn is_current(&self, token: TimerToken) -> bool {
        self.is_playing() && token.generation == self.generation
    }
}

/// Drives a sequencer's auto-advance from a polling event loop
#[derive(Debug, Default)]
pub struct Ticker {
    armed: Option<(TimerToken, Instant)>,
}

impl Ticker {
    pub fn new() -> Self {
        Ticker { armed: None }
    }

    /// Fire the sequencer's timer if it is due at `now`
    ///
    /// Returns true if the cursor advanced. A token that changed since the
    /// last poll is re-armed a full interval from `now`.
    pub fn poll<V: Visualization>(&mut self, sequencer: &mut Sequencer<V>, now: Instant) -> bool {
        let Some(token) = sequencer.timer() else {
            self.armed = None;
            return false;
        };

        match self.armed {
            Some((armed, due)) if armed == token => {
                if now < due {
                    return false;
                }
                let advanced = sequencer.fire(token);
                self.armed = sequencer.timer().map(|next| (next, now + next.interval));
                advanced
            }
            _ => {
                self.armed = Some((token, now + token.interval));
                false
            }
        }
    }

    /// When the armed timer is due, if any
    pub fn due(&self) -> Option<Instant> {
        self.armed.map(|(_, due)| due)
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_scales_with_speed() {
        let mut playback = Playback::new(BASE_INTERVAL);
        assert_eq!(playback.interval(), Duration::from_millis(1500));

        playback.set_speed(2.0);
        assert_eq!(playback.interval(), Duration::from_millis(750));

        playback.set_speed(0.5);
        assert_eq!(playback.interval(), Duration::from_millis(3000));
    }

    #[test]
    fn test_next_preset_wraps() {
        assert_eq!(next_preset(0.5), 1.0);
        assert_eq!(next_preset(1.0), 2.0);
        assert_eq!(next_preset(2.0), 0.5);
        assert_eq!(next_preset(0.75), 1.0);
        assert_eq!(next_preset(7.0), 0.5);
    }

    #[test]
    fn test_tokens_only_while_playing() {
        let mut playback = Playback::new(BASE_INTERVAL);
        assert!(playback.token().is_none());

        assert!(playback.start());
        assert!(!playback.start());
        let token = playback.token().unwrap();
        assert!(playback.is_current(token));

        assert!(playback.stop());
        assert!(!playback.is_current(token));
        assert!(playback.token().is_none());
    }

    #[test]
    fn test_restart_invalidates_old_token() {
        let mut playback = Playback::new(BASE_INTERVAL);
        playback.start();
        let old = playback.token().unwrap();
        playback.stop();
        playback.start();

        let new = playback.token().unwrap();
        assert_ne!(old, new);
        assert!(!playback.is_current(old));
        assert!(playback.is_current(new));
    }
}
