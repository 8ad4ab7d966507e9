//! Time Engine - hour arithmetic between the tracked locations
//!
//! Every location carries a fixed whole-hour UTC offset. Hours are real numbers
//! on a 24-hour circle; every result is normalized into [0, 24).

use chrono::{DateTime, Timelike, Utc};

use crate::error::{CoreError, Result};
use crate::location::Location;

/// Length of the dial in hours
pub const HOURS_PER_DAY: f64 = 24.0;

/// Wrap any hour value into [0, 24)
pub fn normalize_hour(hour: f64) -> f64 {
    let wrapped = hour.rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= HOURS_PER_DAY {
        0.0
    } else {
        wrapped
    }
}

/// Format the whole hour of `hour` as two digits (e.g., "07")
pub fn format_hour(hour: f64) -> String {
    format!("{:02}", normalize_hour(hour).floor() as u32)
}

/// Fixed UTC offsets, in whole hours, for each location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffsets {
    hours: [i32; 3],
}

impl UtcOffsets {
    pub const MIN: i32 = -12;
    pub const MAX: i32 = 14;

    /// Build an offset table, rejecting offsets outside -12..=14
    pub fn new(dallas: i32, connecticut: i32, london: i32) -> Result<Self> {
        Self::default()
            .with_offset(Location::Dallas, dallas)?
            .with_offset(Location::Connecticut, connecticut)?
            .with_offset(Location::London, london)
    }

    /// Return a copy with one location's offset replaced
    pub fn with_offset(mut self, location: Location, hours: i32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&hours) {
            return Err(CoreError::InvalidOffset(hours));
        }
        self.hours[location.index()] = hours;
        Ok(self)
    }

    pub fn get(&self, location: Location) -> i32 {
        self.hours[location.index()]
    }
}

impl Default for UtcOffsets {
    fn default() -> Self {
        Self { hours: [-6, -5, 0] }
    }
}

/// Stateless conversion between UTC and location-local hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeEngine {
    offsets: UtcOffsets,
}

impl TimeEngine {
    pub fn new(offsets: UtcOffsets) -> Self {
        Self { offsets }
    }

    pub fn offsets(&self) -> UtcOffsets {
        self.offsets
    }

    pub fn offset(&self, location: Location) -> i32 {
        self.offsets.get(location)
    }

    /// Local hour at `location` for the given UTC hour
    pub fn to_local(&self, utc_hour: f64, location: Location) -> f64 {
        normalize_hour(utc_hour + self.offset(location) as f64 + HOURS_PER_DAY)
    }

    /// UTC hour for the given local hour at `location`
    pub fn to_utc(&self, hour: f64, location: Location) -> f64 {
        normalize_hour(hour - self.offset(location) as f64 + HOURS_PER_DAY)
    }

    /// Convert a local hour at `from` into the local hour at `to`
    ///
    /// Always goes through UTC so negative offsets need no special casing.
    pub fn convert(&self, hour: f64, from: Location, to: Location) -> f64 {
        self.to_local(self.to_utc(hour, from), to)
    }

    /// Discrete UTC slot (0-23) holding the given reference-local hour
    pub fn utc_slot(&self, reference_hour: f64, reference: Location) -> u32 {
        (self.to_utc(reference_hour, reference).round() as u32) % 24
    }
}

/// Fractional UTC hour of an instant (e.g., 14.5 at 14:30 UTC)
pub fn utc_hour_of(instant: DateTime<Utc>) -> f64 {
    instant.hour() as f64 + instant.minute() as f64 / 60.0
}

/// Fractional UTC hour right now
pub fn current_utc_hour() -> f64 {
    utc_hour_of(Utc::now())
}
