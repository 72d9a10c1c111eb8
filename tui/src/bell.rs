//! Terminal bell feedback.
//!
//! The closest a terminal gets to haptics: a BEL pulse when the coin leaves
//! the hand and another when it settles. Delivery is best-effort; the caller
//! logs failures and moves on, so feedback can never disturb flip state.

use std::io::{self, Stdout, Write};

use toss_engine::FeedbackEvent;

pub struct TerminalBell {
    out: Stdout,
}

impl TerminalBell {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Emit one pulse for a feedback event.
    pub fn pulse(&mut self, event: FeedbackEvent) -> io::Result<()> {
        match event {
            FeedbackEvent::FlipStarted | FeedbackEvent::FlipSettled => {
                self.out.write_all(b"\x07")?;
                self.out.flush()
            }
        }
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}
