use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use std::{env, fs};
use toss_types::{FlipSchedule, UiOptions};

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

/// Raw on-disk configuration, loaded from `~/.toss/config.toml`.
///
/// Values here are unvalidated `Option`s. The resolver methods
/// ([`TossConfig::schedule`], [`TossConfig::ui_options`]) turn them into
/// usable state, falling back to defaults when a value is missing or
/// unusable.
#[derive(Debug, Default, Deserialize)]
pub struct TossConfig {
    pub app: Option<AppConfig>,
    pub flip: Option<FlipConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Display and feedback options.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// bell = true
/// ```
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the coin and spinner.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Hold the coin face-on instead of animating the spin.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Ring the terminal bell when a flip starts and settles.
    #[serde(default = "default_true")]
    pub bell: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            bell: true,
        }
    }
}

/// Flip timing overrides.
///
/// ```toml
/// [flip]
/// repetitions = 5
/// half_cycle_ms = 200
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct FlipConfig {
    /// Full spins per flip. Default: 5.
    pub repetitions: Option<u32>,
    /// Milliseconds per half-turn. Default: 200.
    pub half_cycle_ms: Option<u64>,
}

impl TossConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(path)
    }

    /// Load from an explicit path. A missing file is `Ok(None)`.
    pub fn load_from(path: PathBuf) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve the flip schedule.
    ///
    /// Unusable values (zero repetitions, zero half-cycle) are rejected by
    /// [`FlipSchedule::new`]; the whole section then falls back to the
    /// default schedule with a warning.
    #[must_use]
    pub fn schedule(&self) -> FlipSchedule {
        let Some(flip) = &self.flip else {
            return FlipSchedule::default();
        };
        let repetitions = flip
            .repetitions
            .unwrap_or(FlipSchedule::DEFAULT_REPETITIONS);
        let half_cycle = flip
            .half_cycle_ms
            .map(Duration::from_millis)
            .unwrap_or(FlipSchedule::DEFAULT_HALF_CYCLE);
        match FlipSchedule::new(repetitions, half_cycle) {
            Ok(schedule) => schedule,
            Err(err) => {
                tracing::warn!("Invalid [flip] config ({err}); using the default schedule");
                FlipSchedule::default()
            }
        }
    }

    /// Resolve display options.
    ///
    /// `TOSS_ASCII=1` forces ASCII glyphs even when the `[app]` section does
    /// not request them.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        let env_ascii = env::var("TOSS_ASCII").is_ok_and(|value| value == "1");
        UiOptions {
            ascii_only: app.is_some_and(|app| app.ascii_only) || env_ascii,
            high_contrast: app.is_some_and(|app| app.high_contrast),
            reduced_motion: app.is_some_and(|app| app.reduced_motion),
        }
    }

    /// Whether terminal-bell feedback starts enabled.
    #[must_use]
    pub fn bell_enabled(&self) -> bool {
        self.app.as_ref().is_none_or(|app| app.bell)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".toss").join("config.toml"))
}
