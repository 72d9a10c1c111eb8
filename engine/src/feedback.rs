//! Haptic-style feedback pulses.
//!
//! The engine queues a discrete pulse when a flip starts and another when it
//! settles. The frontend drains the queue once per frame and delivers the
//! pulses however it can. Delivery is best-effort: a sink failure is logged
//! and dropped, never fed back into flip state.

/// A single feedback pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// The coin just left the hand.
    FlipStarted,
    /// The coin just settled on an outcome.
    FlipSettled,
}

/// FIFO queue of pending pulses.
///
/// There is deliberately no deduplication here: every pulse is meant to be
/// felt, including repeats of the same kind.
#[derive(Debug, Default)]
pub struct FeedbackQueue {
    pending: Vec<FeedbackEvent>,
}

impl FeedbackQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: FeedbackEvent) {
        self.pending.push(event);
    }

    /// Take all pending pulses in arrival order, clearing the queue.
    pub fn take(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
