//! Flip scheduling and the spin animation clock.
//!
//! A [`FlipSchedule`] fixes how many full spins a flip sweeps through and how
//! long each half-turn takes. A [`FlipAnimation`] tracks elapsed time against
//! that schedule and derives everything a frame needs from it: an oscillating
//! squash factor, cumulative rotation for the coin face, and a one-shot
//! completion signal.

use std::time::Duration;
use thiserror::Error;

/// Degrees swept during one half-cycle of the spin.
const HALF_TURN_DEGREES: f32 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("flip repetitions must be at least 1")]
    ZeroRepetitions,
    #[error("half-cycle duration must be non-zero")]
    ZeroHalfCycle,
}

/// Validated flip timing parameters.
///
/// Existence of a value proves the schedule is usable: at least one
/// repetition and a non-zero half-cycle. Raw configuration values go
/// through [`FlipSchedule::new`] at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipSchedule {
    repetitions: u32,
    half_cycle: Duration,
}

impl FlipSchedule {
    /// Full spins per flip when nothing is configured.
    pub const DEFAULT_REPETITIONS: u32 = 5;
    /// Time for one half-turn when nothing is configured.
    pub const DEFAULT_HALF_CYCLE: Duration = Duration::from_millis(200);

    pub fn new(repetitions: u32, half_cycle: Duration) -> Result<Self, ScheduleError> {
        if repetitions == 0 {
            return Err(ScheduleError::ZeroRepetitions);
        }
        if half_cycle.is_zero() {
            return Err(ScheduleError::ZeroHalfCycle);
        }
        Ok(Self {
            repetitions,
            half_cycle,
        })
    }

    #[must_use]
    pub const fn repetitions(&self) -> u32 {
        self.repetitions
    }

    #[must_use]
    pub const fn half_cycle(&self) -> Duration {
        self.half_cycle
    }

    /// Wall time from flip start to settle.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.half_cycle
            .saturating_mul(self.repetitions.saturating_mul(2))
    }

    /// Cumulative rotation swept by a finished spin.
    #[must_use]
    pub fn total_degrees(&self) -> f32 {
        self.repetitions as f32 * 2.0 * HALF_TURN_DEGREES
    }
}

impl Default for FlipSchedule {
    fn default() -> Self {
        Self {
            repetitions: Self::DEFAULT_REPETITIONS,
            half_cycle: Self::DEFAULT_HALF_CYCLE,
        }
    }
}

/// Coarse animation state for frame rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

/// Elapsed-time clock for one flip run.
///
/// The clock only moves when [`FlipAnimation::advance`] is called, so frames
/// and tests drive it with whatever deltas they like. All derived views are
/// pure functions of elapsed time.
#[derive(Debug, Clone)]
pub struct FlipAnimation {
    schedule: FlipSchedule,
    elapsed: Duration,
    completion_taken: bool,
}

impl FlipAnimation {
    #[must_use]
    pub fn new(schedule: FlipSchedule) -> Self {
        Self {
            schedule,
            elapsed: Duration::ZERO,
            completion_taken: false,
        }
    }

    #[must_use]
    pub const fn schedule(&self) -> FlipSchedule {
        self.schedule
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Rewind to the start and re-arm the completion signal.
    ///
    /// Restarting before the signal is taken discards it, so a superseded
    /// run can never deliver a stale completion.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.completion_taken = false;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.schedule.total_duration()
    }

    /// Oscillating squash factor in `0.0..=1.0`.
    ///
    /// Rises over one half-cycle, falls over the next, touching 1.0 and 0.0
    /// exactly at half-cycle boundaries. Holds 0.0 once finished.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.is_finished() {
            return 0.0;
        }
        let half = self.schedule.half_cycle().as_nanos();
        let segment = self.elapsed.as_nanos() / half;
        let within = (self.elapsed.as_nanos() % half) as f32 / half as f32;
        if segment % 2 == 0 { within } else { 1.0 - within }
    }

    /// Cumulative rotation about the vertical axis, in degrees.
    ///
    /// Grows monotonically while the spin runs and caps at the schedule's
    /// total sweep, so a settled coin always sits face-on.
    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        let half = self.schedule.half_cycle().as_secs_f32();
        let swept = self.elapsed.as_secs_f32() / half * HALF_TURN_DEGREES;
        swept.min(self.schedule.total_degrees())
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }

    /// One-shot completion signal.
    ///
    /// Returns `true` exactly once per run, the first time it is polled after
    /// the clock reaches the schedule's total duration. [`Self::restart`]
    /// re-arms it.
    pub fn take_completion(&mut self) -> bool {
        if self.is_finished() && !self.completion_taken {
            self.completion_taken = true;
            true
        } else {
            false
        }
    }
}
