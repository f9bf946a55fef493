//! Count-up animation for the stats strip.
//!
//! A counter starts the first time it scrolls into view and counts from 0 to
//! its target in equal steps. It never restarts.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Visible fraction of an element needed to start the animation.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Number of increments from 0 to the target.
pub const STEPS: u32 = 100;

/// Time between increments.
pub const STEP_INTERVAL: Duration = Duration::from_millis(20);

/// A labelled statistic, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Running { started: Instant },
    Done,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    phase: Phase,
    step: u32,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            phase: Phase::Waiting,
            step: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Whether the element is still observed for visibility.
    pub fn is_observing(&self) -> bool {
        self.phase == Phase::Waiting
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Report how much of the element is visible.
    ///
    /// Starts the animation the first time the ratio reaches the threshold
    /// and returns true in that case only.
    pub fn observe(&mut self, intersection_ratio: f64, now: Instant) -> bool {
        if self.phase != Phase::Waiting || intersection_ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        self.phase = Phase::Running { started: now };
        true
    }

    /// Catch up with the steps due by `now`.
    pub fn tick(&mut self, now: Instant) {
        let Phase::Running { started } = self.phase else {
            return;
        };
        let elapsed = now.saturating_duration_since(started);
        let due = (elapsed.as_millis() / STEP_INTERVAL.as_millis()).min(STEPS as u128) as u32;
        self.step = self.step.max(due);
        if self.step >= STEPS {
            self.phase = Phase::Done;
        }
    }

    /// Number currently displayed.
    pub fn value(&self) -> u64 {
        if self.step >= STEPS {
            return self.target;
        }
        // floor(step * target / STEPS) without going through floats
        (self.target as u128 * self.step as u128 / STEPS as u128) as u64
    }
}
