//! Config file round trips: what lands on disk drives the app.

use std::fs;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

use toss_engine::{App, TossConfig};

/// A full config file shapes UI options, bell, and flight timing.
#[test]
fn config_file_drives_the_app() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\n\
         ascii_only = true\n\
         high_contrast = true\n\
         bell = false\n\
         \n\
         [flip]\n\
         repetitions = 1\n\
         half_cycle_ms = 20\n",
    )
    .unwrap();

    let config = TossConfig::load_from(path)
        .expect("config loads")
        .expect("config file exists");
    let mut app = App::with_rng(&config, StdRng::seed_from_u64(1));

    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
    assert!(!app.bell_enabled());

    app.trigger_flip();
    app.advance(Duration::from_millis(40));
    assert!(!app.is_flipping(), "one 20ms spin settles within 40ms");
}

/// Unusable flip values on disk fall back to the default schedule.
#[test]
fn unusable_flip_values_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[flip]\nrepetitions = 0\n").unwrap();

    let config = TossConfig::load_from(path)
        .expect("config loads")
        .expect("config file exists");
    let mut app = App::with_rng(&config, StdRng::seed_from_u64(2));

    app.trigger_flip();
    app.advance(Duration::from_millis(1_999));
    assert!(app.is_flipping(), "default schedule flies for two seconds");

    app.advance(Duration::from_millis(1));
    assert!(!app.is_flipping());
}

/// A parse failure reports the offending path to the caller.
#[test]
fn parse_error_reports_the_offending_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not valid toml [").unwrap();

    let err = TossConfig::load_from(path.clone()).expect_err("bad toml is rejected");
    assert_eq!(err.path(), &path);
}
