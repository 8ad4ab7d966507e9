//! Application state snapshot and transitions
//!
//! The hosting shell keeps one [`AppState`] and replaces it with the result of
//! [`AppState::transition`] for every user action or clock tick. Everything on
//! screen is re-derived from the latest snapshot.

use chrono::{DateTime, Timelike, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::location::{Location, RingId};
use crate::meetings::{MeetingId, MeetingStore};
use crate::rings::RingAssignment;
use crate::time_engine::{utc_hour_of, TimeEngine};

/// Named color theme; the color tables themselves live with the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Minimalist,
    Bold,
    Professional,
    Playful,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Minimalist,
        ThemeName::Bold,
        ThemeName::Professional,
        ThemeName::Playful,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Minimalist => "Minimalist",
            ThemeName::Bold => "Bold",
            ThemeName::Professional => "Professional",
            ThemeName::Playful => "Playful",
        }
    }
}

/// Light or dark variant of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

/// A clicked hour slot, captured in every location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedSlot {
    pub utc_hour: u32,
    /// Local hour per location, in `Location::ALL` order
    pub local_hours: [(Location, f64); 3],
}

impl SelectedSlot {
    /// Capture the slot at `reference_hour` of the `reference` location
    pub fn capture(engine: &TimeEngine, reference_hour: u32, reference: Location) -> Self {
        let hour = reference_hour as f64;
        Self {
            utc_hour: engine.utc_slot(hour, reference),
            local_hours: Location::ALL.map(|loc| (loc, engine.convert(hour, reference, loc))),
        }
    }

    pub fn hour_in(&self, location: Location) -> f64 {
        self.local_hours[location.index()].1
    }
}

/// Everything a user action can change
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Reassign { ring: RingId, location: Location },
    /// A slot was clicked; the hour is local to the outer-ring location
    SelectSlot { reference_hour: u32 },
    ClearSelection,
    AddMeeting { utc_hour: u32, title: String, essential: bool },
    RemoveMeeting(MeetingId),
    SetTheme(ThemeName),
    ToggleMode,
    Tick(DateTime<Utc>),
}

/// Immutable snapshot of the running view
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub rings: RingAssignment,
    pub meetings: MeetingStore,
    pub selected: Option<SelectedSlot>,
    /// Fractional UTC hour of the last tick
    pub current_utc_hour: f64,
    /// Minute of the last tick, shown in the center readout
    pub current_minute: u32,
    pub theme: ThemeName,
    pub mode: Mode,
}

impl AppState {
    pub fn new(rings: RingAssignment, meetings: MeetingStore, now: DateTime<Utc>) -> Self {
        Self {
            rings,
            meetings,
            selected: None,
            current_utc_hour: utc_hour_of(now),
            current_minute: now.minute(),
            theme: ThemeName::default(),
            mode: Mode::default(),
        }
    }

    pub fn with_theme(mut self, theme: ThemeName, mode: Mode) -> Self {
        self.theme = theme;
        self.mode = mode;
        self
    }

    /// Location on the outer ring, which indexes the dial
    pub fn reference(&self) -> Location {
        self.rings.reference()
    }

    /// Apply one action, returning the next snapshot
    ///
    /// `self` is never modified; on error the caller keeps the current state.
    pub fn transition(&self, engine: &TimeEngine, action: Action) -> Result<AppState> {
        let mut next = self.clone();
        match action {
            Action::Reassign { ring, location } => {
                next.rings = self.rings.reassign(ring, location);
                debug!("Rings reassigned: {}", next.rings.describe());
            }
            Action::SelectSlot { reference_hour } => {
                if reference_hour >= 24 {
                    warn!("Ignored selection of invalid hour {}", reference_hour);
                    return Err(CoreError::InvalidHour(reference_hour));
                }
                let slot = SelectedSlot::capture(engine, reference_hour, self.reference());
                debug!("Selected UTC slot {:02}:00", slot.utc_hour);
                next.selected = Some(slot);
            }
            Action::ClearSelection => next.selected = None,
            Action::AddMeeting {
                utc_hour,
                title,
                essential,
            } => {
                next.meetings.add(utc_hour, &title, essential)?;
            }
            Action::RemoveMeeting(id) => {
                next.meetings.remove(id);
            }
            Action::SetTheme(theme) => next.theme = theme,
            Action::ToggleMode => next.mode = self.mode.toggled(),
            Action::Tick(now) => {
                next.current_utc_hour = utc_hour_of(now);
                next.current_minute = now.minute();
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, hour, minute, 0).unwrap()
    }

    fn initial() -> AppState {
        AppState::new(RingAssignment::default(), MeetingStore::new(), at(15, 30))
    }

    #[test]
    fn test_new_reads_clock() {
        let state = initial();
        assert_eq!(state.current_utc_hour, 15.5);
        assert_eq!(state.current_minute, 30);
        assert_eq!(state.reference(), Location::London);
    }

    #[test]
    fn test_reassign_transition() {
        let engine = TimeEngine::default();
        let state = initial();
        let next = state
            .transition(
                &engine,
                Action::Reassign {
                    ring: RingId::Outer,
                    location: Location::Dallas,
                },
            )
            .unwrap();
        assert_eq!(next.reference(), Location::Dallas);
        assert_eq!(state.reference(), Location::London);
        assert!(next.rings.is_bijection());
    }

    #[test]
    fn test_select_slot_captures_all_locations() {
        let engine = TimeEngine::default();
        let state = initial()
            .transition(
                &engine,
                Action::Reassign {
                    ring: RingId::Outer,
                    location: Location::Dallas,
                },
            )
            .unwrap();
        let next = state
            .transition(&engine, Action::SelectSlot { reference_hour: 10 })
            .unwrap();
        let slot = next.selected.unwrap();
        assert_eq!(slot.utc_hour, 16);
        assert_eq!(slot.hour_in(Location::Dallas), 10.0);
        assert_eq!(slot.hour_in(Location::Connecticut), 11.0);
        assert_eq!(slot.hour_in(Location::London), 16.0);
    }

    #[test]
    fn test_select_invalid_hour() {
        let engine = TimeEngine::default();
        assert_eq!(
            initial().transition(&engine, Action::SelectSlot { reference_hour: 24 }),
            Err(CoreError::InvalidHour(24))
        );
    }

    #[test]
    fn test_meeting_add_and_remove() {
        let engine = TimeEngine::default();
        let state = initial();
        let added = state
            .transition(
                &engine,
                Action::AddMeeting {
                    utc_hour: 16,
                    title: "Sync Call".to_string(),
                    essential: true,
                },
            )
            .unwrap();
        assert_eq!(added.meetings.len(), 1);
        assert!(state.meetings.is_empty());

        let id = added.meetings.meetings()[0].id;
        let removed = added.transition(&engine, Action::RemoveMeeting(id)).unwrap();
        assert!(removed.meetings.is_empty());
    }

    #[test]
    fn test_rejected_meeting_keeps_state() {
        let engine = TimeEngine::default();
        let state = initial();
        let result = state.transition(
            &engine,
            Action::AddMeeting {
                utc_hour: 10,
                title: " ".to_string(),
                essential: false,
            },
        );
        assert_eq!(result, Err(CoreError::EmptyTitle));
        assert!(state.meetings.is_empty());
    }

    #[test]
    fn test_theme_and_tick() {
        let engine = TimeEngine::default();
        let state = initial()
            .transition(&engine, Action::SetTheme(ThemeName::Playful))
            .and_then(|s| s.transition(&engine, Action::ToggleMode))
            .and_then(|s| s.transition(&engine, Action::Tick(at(8, 45))))
            .unwrap();
        assert_eq!(state.theme, ThemeName::Playful);
        assert_eq!(state.mode, Mode::Dark);
        assert_eq!(state.current_utc_hour, 8.75);
        assert_eq!(state.current_minute, 45);
    }
}
