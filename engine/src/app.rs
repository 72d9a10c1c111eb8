//! The application state machine.
//!
//! [`App`] owns everything the UI reads: flip state, session tallies,
//! pending feedback pulses, and display options. All mutation funnels
//! through [`App::trigger_flip`] and [`App::advance`]; rendering reads but
//! never writes.

use crate::config::TossConfig;
use crate::feedback::{FeedbackEvent, FeedbackQueue};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use toss_types::{FlipAnimation, FlipSchedule, Outcome, UiOptions};

/// Spinner cadence: one UI tick per 100ms of advanced time.
const UI_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Where the coin is in its flip lifecycle.
///
/// `Flipping` carries the animation clock and nothing else, so an airborne
/// coin structurally cannot show a settled outcome.
#[derive(Debug, Clone)]
enum FlipState {
    Idle { outcome: Option<Outcome> },
    Flipping { animation: FlipAnimation },
}

/// Running tallies for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub flips: u32,
    pub heads: u32,
    pub tails: u32,
}

impl SessionStats {
    fn record(&mut self, outcome: Outcome) {
        self.flips += 1;
        match outcome {
            Outcome::Head => self.heads += 1,
            Outcome::Tail => self.tails += 1,
        }
    }
}

pub struct App {
    state: FlipState,
    schedule: FlipSchedule,
    rng: StdRng,
    feedback: FeedbackQueue,
    stats: SessionStats,
    options: UiOptions,
    bell_enabled: bool,
    should_quit: bool,
    tick: usize,
    tick_accum: Duration,
    last_frame: Instant,
}

impl App {
    #[must_use]
    pub fn new(config: &TossConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic constructor for tests.
    #[must_use]
    pub fn with_rng(config: &TossConfig, rng: StdRng) -> Self {
        Self {
            state: FlipState::Idle { outcome: None },
            schedule: config.schedule(),
            rng,
            feedback: FeedbackQueue::new(),
            stats: SessionStats::default(),
            options: config.ui_options(),
            bell_enabled: config.bell_enabled(),
            should_quit: false,
            tick: 0,
            tick_accum: Duration::ZERO,
            last_frame: Instant::now(),
        }
    }

    /// Start a flip.
    ///
    /// Clears any previous outcome and puts the coin in the air. Triggering
    /// while a flip is already airborne is a silent no-op; the running spin
    /// is left untouched.
    pub fn trigger_flip(&mut self) {
        if self.is_flipping() {
            tracing::debug!("flip trigger ignored while airborne");
            return;
        }
        self.state = FlipState::Flipping {
            animation: FlipAnimation::new(self.schedule),
        };
        self.feedback.push(FeedbackEvent::FlipStarted);
        tracing::debug!(repetitions = self.schedule.repetitions(), "flip started");
    }

    /// Move time forward: drive the spin, settle a finished flip, and step
    /// the coarse UI tick.
    ///
    /// Settling draws the outcome, records it, and queues the settle pulse.
    /// Each flip settles at most once; the animation's one-shot completion
    /// signal guarantees it.
    pub fn advance(&mut self, delta: Duration) {
        self.advance_ui_tick(delta);

        let settled = match &mut self.state {
            FlipState::Flipping { animation } => {
                animation.advance(delta);
                animation.take_completion()
            }
            FlipState::Idle { .. } => false,
        };

        if settled {
            let outcome = if self.rng.random_bool(0.5) {
                Outcome::Head
            } else {
                Outcome::Tail
            };
            self.state = FlipState::Idle {
                outcome: Some(outcome),
            };
            self.stats.record(outcome);
            self.feedback.push(FeedbackEvent::FlipSettled);
            tracing::debug!(outcome = outcome.as_str(), "flip settled");
        }
    }

    fn advance_ui_tick(&mut self, delta: Duration) {
        self.tick_accum = self.tick_accum.saturating_add(delta);
        let interval = UI_TICK_INTERVAL.as_nanos();
        let steps = self.tick_accum.as_nanos() / interval;
        if steps > 0 {
            self.tick = self.tick.wrapping_add(steps as usize);
            // Remainder is < 100ms so it always fits u64 nanoseconds.
            self.tick_accum = Duration::from_nanos((self.tick_accum.as_nanos() % interval) as u64);
        }
    }

    #[must_use]
    pub fn is_flipping(&self) -> bool {
        matches!(self.state, FlipState::Flipping { .. })
    }

    /// The settled outcome, if any. `None` while flipping and before the
    /// first flip.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match &self.state {
            FlipState::Idle { outcome } => *outcome,
            FlipState::Flipping { .. } => None,
        }
    }

    /// Cumulative spin rotation for the current frame, in degrees.
    ///
    /// Zero whenever the coin is at rest, so settled frames render face-on.
    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        match &self.state {
            FlipState::Flipping { animation } => animation.rotation_degrees(),
            FlipState::Idle { .. } => 0.0,
        }
    }

    /// The face to draw: the settled outcome, or head before the first flip.
    #[must_use]
    pub fn coin_face(&self) -> Outcome {
        self.outcome().unwrap_or_default()
    }

    /// Text for the result line under the coin.
    #[must_use]
    pub fn result_label(&self) -> &'static str {
        if self.is_flipping() {
            return "Wait ...";
        }
        match self.outcome() {
            Some(outcome) => outcome.label(),
            None => "",
        }
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn bell_enabled(&self) -> bool {
        self.bell_enabled
    }

    pub fn toggle_bell(&mut self) {
        self.bell_enabled = !self.bell_enabled;
    }

    /// Drain pending feedback pulses in arrival order.
    pub fn take_feedback_events(&mut self) -> Vec<FeedbackEvent> {
        self.feedback.take()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }
}
