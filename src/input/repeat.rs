//! Backspace auto-repeat and caret blink timers.
//!
//! Both timers are advanced by the host's frame delta. Durations are kept as
//! [`Duration`] so repeated small steps add up exactly.

use std::time::Duration;

/// Default delay before a held key starts repeating.
pub const DEFAULT_REPEAT_DELAY: Duration = Duration::from_millis(300);
/// Default interval between repeats once repeating.
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(50);
/// Default caret blink period; the caret shows during the first half.
pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_secs(1);

const MIN_REPEAT_INTERVAL: Duration = Duration::from_millis(1);

/// State of a held key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatState {
    /// Not held, or held after an action that does not repeat.
    #[default]
    Idle,
    /// Held, still inside the initial delay.
    PressedOnce,
    /// Held past the initial delay, firing every interval.
    Repeating,
}

/// Auto-repeat timer for a held key.
///
/// After [`arm`](Self::arm), repeats fire when the hold time reaches
/// `delay + k * interval` for `k = 1, 2, ...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyRepeatTimer {
    state: RepeatState,
    delay: Duration,
    interval: Duration,
    held: Duration,
    next_fire: Duration,
}

impl Default for KeyRepeatTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_DELAY, DEFAULT_REPEAT_INTERVAL)
    }
}

impl KeyRepeatTimer {
    /// Create an idle timer.
    ///
    /// The interval is clamped to at least one millisecond.
    #[must_use]
    pub fn new(delay: Duration, interval: Duration) -> Self {
        Self {
            state: RepeatState::Idle,
            delay,
            interval: interval.max(MIN_REPEAT_INTERVAL),
            held: Duration::ZERO,
            next_fire: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn state(&self) -> RepeatState {
        self.state
    }

    /// How long the key has been held since it was armed.
    #[must_use]
    pub fn held(&self) -> Duration {
        self.held
    }

    /// Start a new hold that will repeat.
    pub fn arm(&mut self) {
        self.state = RepeatState::PressedOnce;
        self.held = Duration::ZERO;
        self.next_fire = self.delay + self.interval;
    }

    /// Return to idle; further advances fire nothing.
    pub fn reset(&mut self) {
        self.state = RepeatState::Idle;
        self.held = Duration::ZERO;
        self.next_fire = Duration::ZERO;
    }

    /// Advance the hold time, returning how many repeats are due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.state == RepeatState::Idle {
            return 0;
        }
        self.held += dt;
        if self.state == RepeatState::PressedOnce && self.held >= self.delay {
            self.state = RepeatState::Repeating;
        }
        let mut fired = 0;
        while self.state == RepeatState::Repeating && self.held >= self.next_fire {
            fired += 1;
            self.next_fire += self.interval;
        }
        fired
    }
}

/// Caret blink phase accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkTimer {
    phase: Duration,
    period: Duration,
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_PERIOD)
    }
}

impl BlinkTimer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            phase: Duration::ZERO,
            period,
        }
    }

    /// Advance the phase, wrapping at the period.
    pub fn advance(&mut self, dt: Duration) {
        let period = self.period.as_nanos();
        if period == 0 {
            return;
        }
        let phase = (self.phase + dt).as_nanos() % period;
        // phase < period, and period came from a Duration, so it fits.
        self.phase = Duration::from_nanos(u64::try_from(phase).unwrap_or(0));
    }

    /// Restart the phase so the caret is visible.
    pub fn reset(&mut self) {
        self.phase = Duration::ZERO;
    }

    #[must_use]
    pub fn phase(&self) -> Duration {
        self.phase
    }

    /// Whether the caret is in the visible half of the cycle.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.phase < self.period / 2
    }
}
