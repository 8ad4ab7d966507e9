//! Startup configuration
//!
//! Reads the clock's TOML configuration once at startup. The file is never
//! written back: nothing the user does in a session outlives the process.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::error::CoreError;
use crate::location::Location;
use crate::meetings::MeetingStore;
use crate::overlap::{OverlapClassifier, WorkWindow, WORK_END, WORK_START};
use crate::rings::RingAssignment;
use crate::state::{AppState, Mode, ThemeName};
use crate::time_engine::{TimeEngine, UtcOffsets};

/// File stem of the configuration file
pub const CONFIG_NAME: &str = "meeting_overlap";
/// Default refresh interval of the current time
pub const DEFAULT_TICK_SECONDS: u64 = 60;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] CoreError),

    #[error("tick_seconds must be greater than zero")]
    ZeroTick,
}

/// Get the base configuration directory shared by the clocks
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "clock-series", "clocks").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a specific clock
pub fn config_path(clock_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", clock_name)))
}

/// Load configuration for a specific clock
///
/// Returns `None` if the config file doesn't exist.
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_config<T: DeserializeOwned>(clock_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    parse_config(&contents).map(Some)
}

pub fn parse_config<T: DeserializeOwned>(contents: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Which location starts on which ring, by location key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingsConfig {
    pub outer: String,
    pub middle: String,
    pub inner: String,
}

impl Default for RingsConfig {
    fn default() -> Self {
        Self {
            outer: Location::London.key().to_string(),
            middle: Location::Connecticut.key().to_string(),
            inner: Location::Dallas.key().to_string(),
        }
    }
}

/// A meeting present when the clock starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMeeting {
    pub utc_hour: u32,
    pub title: String,
    #[serde(default)]
    pub essential: bool,
}

/// Contents of `meeting_overlap.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Whole-hour UTC offset per location key
    pub offsets: BTreeMap<String, i32>,
    pub work_start: f64,
    pub work_end: f64,
    pub tick_seconds: u64,
    pub rings: RingsConfig,
    pub theme: ThemeName,
    pub mode: Mode,
    pub meetings: Vec<SeedMeeting>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        let defaults = UtcOffsets::default();
        Self {
            offsets: Location::ALL
                .iter()
                .map(|loc| (loc.key().to_string(), defaults.get(*loc)))
                .collect(),
            work_start: WORK_START,
            work_end: WORK_END,
            tick_seconds: DEFAULT_TICK_SECONDS,
            rings: RingsConfig::default(),
            theme: ThemeName::default(),
            mode: Mode::default(),
            meetings: vec![SeedMeeting {
                utc_hour: 16,
                title: "Sync Call".to_string(),
                essential: true,
            }],
        }
    }
}

/// Everything the shell needs to start the clock
#[derive(Debug, Clone)]
pub struct ClockSetup {
    pub classifier: OverlapClassifier,
    pub state: AppState,
    pub tick_interval: Duration,
}

impl ClockConfig {
    /// Load the config file, falling back to defaults when there is none
    pub fn load() -> Result<Self, ConfigError> {
        Ok(load_config(CONFIG_NAME)?.unwrap_or_default())
    }

    /// Offsets for every location; keys not listed keep their defaults
    pub fn utc_offsets(&self) -> Result<UtcOffsets, CoreError> {
        self.offsets
            .iter()
            .try_fold(UtcOffsets::default(), |offsets, (key, hours)| {
                offsets.with_offset(key.parse()?, *hours)
            })
    }

    pub fn work_window(&self) -> Result<WorkWindow, CoreError> {
        WorkWindow::new(self.work_start, self.work_end)
    }

    pub fn ring_assignment(&self) -> Result<RingAssignment, CoreError> {
        RingAssignment::new(
            self.rings.outer.parse()?,
            self.rings.middle.parse()?,
            self.rings.inner.parse()?,
        )
    }

    pub fn tick_interval(&self) -> Result<Duration, ConfigError> {
        if self.tick_seconds == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(Duration::from_secs(self.tick_seconds))
    }

    pub fn meeting_store(&self) -> Result<MeetingStore, CoreError> {
        let mut store = MeetingStore::new();
        for seed in &self.meetings {
            store.add(seed.utc_hour, &seed.title, seed.essential)?;
        }
        Ok(store)
    }

    /// Validate the whole file and build the initial state at `now`
    pub fn build(&self, now: DateTime<Utc>) -> Result<ClockSetup, ConfigError> {
        let engine = TimeEngine::new(self.utc_offsets()?);
        let classifier = OverlapClassifier::new(engine, self.work_window()?);
        let state = AppState::new(self.ring_assignment()?, self.meeting_store()?, now)
            .with_theme(self.theme, self.mode);

        Ok(ClockSetup {
            classifier,
            state,
            tick_interval: self.tick_interval()?,
        })
    }
}
