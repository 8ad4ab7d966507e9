//! Overlap Core - shared logic for the meeting overlap clock
//!
//! Hour arithmetic across three fixed-offset locations, work-hour overlap
//! classification, ring assignment, radial geometry of the 24-hour dial, and
//! the in-memory meeting store, tied together by an immutable state snapshot.

pub mod config;
pub mod error;
pub mod face;
pub mod geometry;
pub mod location;
pub mod meetings;
pub mod overlap;
pub mod rings;
pub mod state;
pub mod time_engine;

pub use config::{ClockConfig, ClockSetup, ConfigError};
pub use error::CoreError;
pub use face::{derive_face, overlap_summary, slot_detail, ClockFace, OverlapSummary, SlotDetail};
pub use geometry::{Point, SlotFill};
pub use location::{Location, RingId};
pub use meetings::{Meeting, MeetingId, MeetingStore};
pub use overlap::{OverlapClassifier, WorkWindow};
pub use rings::RingAssignment;
pub use state::{Action, AppState, Mode, SelectedSlot, ThemeName};
pub use time_engine::{current_utc_hour, format_hour, TimeEngine, UtcOffsets};
