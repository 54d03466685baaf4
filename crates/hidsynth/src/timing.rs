//! Fixed delays between the steps of a synthesized action.
use std::{thread, time::Duration};

/// Delays used while posting events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// How long a mouse button stays down during a click or drag step.
    pub click_hold: Duration,
    /// How long a key stays down within one stroke.
    pub key_hold: Duration,
    /// Pause between consecutive strokes while typing.
    pub char_delay: Duration,
}

impl Timing {
    /// Default mouse button hold, in milliseconds.
    pub const CLICK_HOLD_MS: u64 = 50;
    /// Default key hold, in milliseconds.
    pub const KEY_HOLD_MS: u64 = 10;
    /// Default pause between typed strokes, in milliseconds.
    pub const CHAR_DELAY_MS: u64 = 10;

    /// Timing from millisecond values.
    pub fn from_millis(click_hold: u64, key_hold: u64, char_delay: u64) -> Self {
        Self {
            click_hold: Duration::from_millis(click_hold),
            key_hold: Duration::from_millis(key_hold),
            char_delay: Duration::from_millis(char_delay),
        }
    }

    /// No delays at all. Used by tests and recorders.
    pub fn instant() -> Self {
        Self::from_millis(0, 0, 0)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_millis(Self::CLICK_HOLD_MS, Self::KEY_HOLD_MS, Self::CHAR_DELAY_MS)
    }
}

/// Sleep for `d` unless it is zero.
pub(crate) fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}
