//! Tick-driven countdown timers.
//!
//! Both timers count whole frames. They never underflow and can be ticked
//! indefinitely after finishing.

use serde::{Deserialize, Serialize};

/// Shared surface of the two countdown flavours.
pub trait TickTimer {
    /// Advance the countdown by one frame.
    fn tick(&mut self);
    /// Whether the countdown is at zero this frame.
    fn is_finished(&self) -> bool;
    /// Frames left before the countdown reaches zero.
    fn remaining(&self) -> u32;
    /// Configured length of one countdown.
    fn duration(&self) -> u32;
}

/// One-shot countdown. Once finished it stays finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedTimer {
    duration: u32,
    remaining: u32,
}

impl FixedTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }
}

impl TickTimer for FixedTimer {
    fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn duration(&self) -> u32 {
        self.duration
    }
}

/// Auto-reloading countdown.
///
/// Reports finished on exactly one frame per cycle, then reloads on the
/// following tick, so a timer of duration `D` fires on frames `D, 2D, 3D, …`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatingTimer {
    duration: u32,
    remaining: u32,
}

impl RepeatingTimer {
    /// # Panics
    ///
    /// Panics if `duration` is zero. A zero-length cycle has no meaning and
    /// scenario validation rejects it before any timer is built.
    pub fn new(duration: u32) -> Self {
        assert!(duration > 0, "repeating timer duration must be positive");
        Self {
            duration,
            remaining: duration,
        }
    }
}

impl TickTimer for RepeatingTimer {
    fn tick(&mut self) {
        if self.remaining == 0 {
            self.remaining = self.duration;
        }
        self.remaining -= 1;
    }

    fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn duration(&self) -> u32 {
        self.duration
    }
}
