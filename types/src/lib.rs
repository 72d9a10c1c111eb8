//! Core domain types for Toss.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod animation;
pub use animation::{AnimPhase, FlipAnimation, FlipSchedule, ScheduleError};

use std::fmt;

// ============================================================================
// Coin Outcome
// ============================================================================

/// The face a settled coin shows.
///
/// `Head` is the default because the coin rests head-up before the first flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Head,
    Tail,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Head => "head",
            Outcome::Tail => "tail",
        }
    }

    /// Uppercase form used on the result line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Head => "HEAD",
            Outcome::Tail => "TAIL",
        }
    }

    /// The face printed on the other side of the coin.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Outcome::Head => Outcome::Tail,
            Outcome::Tail => Outcome::Head,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// UI Options
// ============================================================================

/// Rendering and accessibility preferences.
///
/// These only change how frames are drawn. Flip timing and outcome selection
/// are identical whichever options are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    /// Draw with plain ASCII glyphs instead of Unicode blocks.
    pub ascii_only: bool,
    /// Use a brighter palette on the dark background.
    pub high_contrast: bool,
    /// Hold the coin face-on instead of animating the spin.
    pub reduced_motion: bool,
}

// ============================================================================
// Tests
// ============================================================================
