//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use toss_engine::{App, TossConfig};
use toss_types::Outcome;

/// Typical frame delta used to advance the app in tests.
pub const FRAME: Duration = Duration::from_millis(16);

/// Build an app with the default config and a deterministic rng.
pub fn seeded_app(seed: u64) -> App {
    App::with_rng(&TossConfig::default(), StdRng::seed_from_u64(seed))
}

/// Build an app from raw config TOML and a deterministic rng.
pub fn app_from_toml(source: &str, seed: u64) -> App {
    let config: TossConfig = toml::from_str(source).expect("test config parses");
    App::with_rng(&config, StdRng::seed_from_u64(seed))
}

/// Advance frame by frame until the coin settles.
pub fn settle(app: &mut App) {
    for _ in 0..1_000 {
        if !app.is_flipping() {
            return;
        }
        app.advance(FRAME);
    }
    panic!("coin never settled");
}

/// Run one complete flip and return the settled outcome.
pub fn flip_once(app: &mut App) -> Outcome {
    app.trigger_flip();
    settle(app);
    app.outcome().expect("settled flip has an outcome")
}
