//! Distribution checks over the random outcome source.

use toss_engine::Outcome;

use crate::common::{app_from_toml, flip_once};

/// Fast schedule so ten thousand flips stay cheap.
const FAST: &str = r"
[flip]
repetitions = 1
half_cycle_ms = 1
";

/// Heads over ten thousand flips stays within two points of even.
#[test]
fn ten_thousand_flips_land_near_even() {
    let mut app = app_from_toml(FAST, 0xC01F);
    let mut heads = 0u32;

    for _ in 0..10_000 {
        if flip_once(&mut app) == Outcome::Head {
            heads += 1;
        }
    }

    let ratio = f64::from(heads) / 10_000.0;
    assert!((ratio - 0.5).abs() < 0.02, "heads ratio drifted: {ratio}");
}

/// The same seed produces the same outcome sequence.
#[test]
fn seeded_apps_flip_identically() {
    let mut left = app_from_toml(FAST, 42);
    let mut right = app_from_toml(FAST, 42);

    for _ in 0..100 {
        assert_eq!(flip_once(&mut left), flip_once(&mut right));
    }
}

/// Different seeds diverge somewhere in a short run.
#[test]
fn different_seeds_diverge() {
    let mut left = app_from_toml(FAST, 1);
    let mut right = app_from_toml(FAST, 2);

    let diverged = (0..100).any(|_| flip_once(&mut left) != flip_once(&mut right));
    assert!(diverged, "one hundred flips matched across different seeds");
}
