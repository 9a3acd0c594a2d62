//! The two time sources of the game.
//!
//! Physics runs on logical ticks produced by `FixedStep` from elapsed wall
//! time.  The pause countdown runs directly on wall time, so it keeps its pace
//! however many ticks a frame produced.

use std::time::{Duration, Instant};

/// Length of one physics tick (~60 per second).
pub const PHYSICS_TICK: Duration = Duration::from_millis(16);

/// Longest frame gap fed to the accumulator; anything longer (a stall, a
/// suspended terminal) is clamped so physics does not run away.
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100);

/// Wall-clock sample for one tick.
#[derive(Clone, Copy, Debug)]
pub struct TickContext {
    pub now: Instant,
}

impl TickContext {
    pub fn at(now: Instant) -> Self {
        TickContext { now }
    }
}

/// Fixed-step accumulator: turns frame-to-frame elapsed time into a whole
/// number of physics ticks.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    accumulated: Duration,
    last: Option<Instant>,
}

impl FixedStep {
    pub fn new(step: Duration) -> Self {
        FixedStep {
            step,
            accumulated: Duration::ZERO,
            last: None,
        }
    }

    /// Number of ticks due at `now`.  The first call only primes the clock.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };
        let dt = now.saturating_duration_since(last).min(MAX_FRAME_DT);
        self.accumulated += dt;

        let mut ticks = 0;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            ticks += 1;
        }
        ticks
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(PHYSICS_TICK)
    }
}

// ── Pause countdown ───────────────────────────────────────────────────────────

pub const COUNTDOWN_FROM: u8 = 3;
pub const COUNTDOWN_STEP: Duration = Duration::from_millis(1000);

/// 3, 2, 1, go: one step per `COUNTDOWN_STEP` of wall time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PauseCountdown {
    remaining: u8,
    last_step: Instant,
}

impl PauseCountdown {
    pub fn start(now: Instant) -> Self {
        PauseCountdown {
            remaining: COUNTDOWN_FROM,
            last_step: now,
        }
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Step at most once per call.  Returns `true` once the count reaches 0.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.remaining > 0 && now.saturating_duration_since(self.last_step) >= COUNTDOWN_STEP {
            self.remaining -= 1;
            self.last_step = now;
        }
        self.remaining == 0
    }
}
