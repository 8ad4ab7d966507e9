//! Locations and rings
//!
//! The clock tracks a closed set of three locations, drawn on a closed set of
//! three concentric rings. Both sets are plain enums so an unknown key is
//! rejected when it is parsed instead of producing an undefined offset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the three tracked locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Dallas,
    Connecticut,
    London,
}

impl Location {
    /// All locations, in canonical order
    pub const ALL: [Location; 3] = [Location::Dallas, Location::Connecticut, Location::London];

    /// Lower-case key used in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            Location::Dallas => "dallas",
            Location::Connecticut => "connecticut",
            Location::London => "london",
        }
    }

    /// Human readable name (e.g., "Dallas")
    pub fn name(&self) -> &'static str {
        match self {
            Location::Dallas => "Dallas",
            Location::Connecticut => "Connecticut",
            Location::London => "London",
        }
    }

    /// Three letter upper-case code shown on the dial (e.g., "DAL")
    pub fn code(&self) -> &'static str {
        match self {
            Location::Dallas => "DAL",
            Location::Connecticut => "CON",
            Location::London => "LON",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Location::Dallas => 0,
            Location::Connecticut => 1,
            Location::London => 2,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dallas" => Ok(Location::Dallas),
            "connecticut" => Ok(Location::Connecticut),
            "london" => Ok(Location::London),
            _ => Err(CoreError::InvalidLocation(s.to_string())),
        }
    }
}

/// One of the three concentric display bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingId {
    Outer,
    Middle,
    Inner,
}

impl RingId {
    /// All rings, outermost first
    pub const ALL: [RingId; 3] = [RingId::Outer, RingId::Middle, RingId::Inner];

    pub fn key(&self) -> &'static str {
        match self {
            RingId::Outer => "outer",
            RingId::Middle => "middle",
            RingId::Inner => "inner",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RingId::Outer => "Outer",
            RingId::Middle => "Middle",
            RingId::Inner => "Inner",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            RingId::Outer => 0,
            RingId::Middle => 1,
            RingId::Inner => 2,
        }
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RingId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outer" => Ok(RingId::Outer),
            "middle" => Ok(RingId::Middle),
            "inner" => Ok(RingId::Inner),
            _ => Err(CoreError::InvalidRing(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parse() {
        assert_eq!("london".parse::<Location>().unwrap(), Location::London);
        assert_eq!(" Dallas ".parse::<Location>().unwrap(), Location::Dallas);
        assert_eq!(
            "tokyo".parse::<Location>(),
            Err(CoreError::InvalidLocation("tokyo".to_string()))
        );
    }

    #[test]
    fn test_location_codes() {
        let codes: Vec<&str> = Location::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["DAL", "CON", "LON"]);
    }

    #[test]
    fn test_ring_parse() {
        assert_eq!("middle".parse::<RingId>().unwrap(), RingId::Middle);
        assert!(matches!("center".parse::<RingId>(), Err(CoreError::InvalidRing(_))));
    }

    #[test]
    fn test_indices_are_distinct() {
        for (i, loc) in Location::ALL.iter().enumerate() {
            assert_eq!(loc.index(), i);
        }
        for (i, ring) in RingId::ALL.iter().enumerate() {
            assert_eq!(ring.index(), i);
        }
    }
}
