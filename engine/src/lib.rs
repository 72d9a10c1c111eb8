//! Core engine for Toss - the flip state machine.
//!
//! This crate owns all mutable application state, with no TUI dependencies.
//! The frontend forwards input, advances time once per frame, and reads
//! projected state back out. Nothing here touches the terminal.

mod app;
mod config;
mod feedback;

pub use app::{App, SessionStats};
pub use config::{AppConfig, ConfigError, FlipConfig, TossConfig, config_path};
pub use feedback::FeedbackEvent;

// Re-export domain types for downstream crates
pub use toss_types::{AnimPhase, FlipAnimation, FlipSchedule, Outcome, ScheduleError, UiOptions};
