//! Clock face derivation
//!
//! Turns an [`AppState`] snapshot into everything the renderer and the info
//! panels need: one segment per ring and hour, the now indicator, readouts, and
//! the overlap summaries. Nothing here is cached; call again after every
//! transition.

use crate::geometry::{
    build_segment_path, label_position, marker_position, now_indicator, slot_fill, NowIndicator,
    Point, SegmentPath, SlotFill,
};
use crate::location::{Location, RingId};
use crate::meetings::{Meeting, MeetingId};
use crate::overlap::OverlapClassifier;
use crate::state::AppState;
use crate::time_engine::format_hour;

/// Marker for the first meeting booked in a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeetingMarker {
    pub meeting_id: MeetingId,
    pub position: Point,
    pub essential: bool,
}

/// One drawable hour slot of one ring
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentView {
    pub ring: RingId,
    pub location: Location,
    /// Hour slot in the reference location (0-23)
    pub reference_hour: u32,
    /// The same moment in this ring's location
    pub display_hour: f64,
    /// Two-digit label text
    pub label: String,
    pub label_position: Point,
    pub fill: SlotFill,
    pub path: SegmentPath,
    pub utc_hour: u32,
    /// Only set on the outer ring
    pub marker: Option<MeetingMarker>,
}

/// Current time line in the center disc, one per ring
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub ring: RingId,
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    /// 72 segments, ring by ring from the outside in
    pub segments: Vec<SegmentView>,
    pub now: NowIndicator,
    pub readouts: Vec<Readout>,
    /// What hour 0 of the reference reads on each ring
    pub top_label: String,
}

pub fn derive_face(state: &AppState, classifier: &OverlapClassifier) -> ClockFace {
    let engine = classifier.engine();
    let reference = state.reference();

    let mut segments = Vec::with_capacity(72);
    for (ring, location) in state.rings.iter() {
        let band = ring.band();
        for hour in 0..24u32 {
            let h = hour as f64;
            let display_hour = engine.convert(h, reference, location);
            let label_pos = label_position(h, band.outer_radius, band.inner_radius);
            let utc_hour = engine.utc_slot(h, reference);

            let marker = if ring == RingId::Outer {
                state.meetings.find_by_utc_hour(utc_hour).map(|m| MeetingMarker {
                    meeting_id: m.id,
                    position: marker_position(label_pos),
                    essential: m.essential,
                })
            } else {
                None
            };

            segments.push(SegmentView {
                ring,
                location,
                reference_hour: hour,
                display_hour,
                label: format_hour(display_hour),
                label_position: label_pos,
                fill: slot_fill(classifier, h, reference, location),
                path: build_segment_path(h, band.outer_radius, band.inner_radius),
                utc_hour,
                marker,
            });
        }
    }

    let readouts = state
        .rings
        .iter()
        .map(|(ring, location)| Readout {
            ring,
            location,
            text: format!(
                "{}:{:02} {}",
                format_hour(engine.to_local(state.current_utc_hour, location)),
                state.current_minute,
                location.code()
            ),
        })
        .collect();

    let top_label = state
        .rings
        .iter()
        .map(|(_, location)| {
            format!(
                "{} {}",
                format_hour(engine.convert(0.0, reference, location)),
                location.code()
            )
        })
        .collect::<Vec<_>>()
        .join(" / ");

    ClockFace {
        segments,
        now: now_indicator(engine.to_local(state.current_utc_hour, reference)),
        readouts,
        top_label,
    }
}

/// Detail panel content for the selected slot
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDetail {
    pub utc_hour: u32,
    /// e.g. "16:00 LON = 11:00 CON = 10:00 DAL"
    pub heading: String,
    pub full_overlap: bool,
    /// Locations outside work hours, London first
    pub idle: Vec<Location>,
    /// Every meeting in the slot, not just the first
    pub meetings: Vec<Meeting>,
}

impl SlotDetail {
    /// Status line under the heading
    pub fn status(&self) -> String {
        if self.full_overlap {
            "✓ All three cities in working hours".to_string()
        } else {
            let names: Vec<&str> = self.idle.iter().map(|l| l.name()).collect();
            format!("⚠ {} outside working hours", names.join(", "))
        }
    }
}

pub fn slot_detail(state: &AppState, classifier: &OverlapClassifier) -> Option<SlotDetail> {
    let slot = state.selected?;
    let reference = state.reference();
    let reference_hour = classifier.engine().to_local(slot.utc_hour as f64, reference);

    let heading = Location::ALL
        .iter()
        .rev()
        .map(|&loc| format!("{}:00 {}", format_hour(slot.hour_in(loc)), loc.code()))
        .collect::<Vec<_>>()
        .join(" = ");

    Some(SlotDetail {
        utc_hour: slot.utc_hour,
        heading,
        full_overlap: classifier.is_full_overlap(reference_hour, reference),
        idle: classifier.idle_locations(reference_hour, reference),
        meetings: state.meetings.at_utc_hour(slot.utc_hour).cloned().collect(),
    })
}

/// A meeting outside the overlap window, with its reference-local hour
#[derive(Debug, Clone, PartialEq)]
pub struct OutsideMeeting {
    pub meeting: Meeting,
    pub reference_hour: f64,
    /// e.g. "Standup — 09:00 LON"
    pub line: String,
}

/// Overlap summary panel content
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapSummary {
    pub reference: Location,
    pub slots: Vec<u32>,
    pub inside: Vec<Meeting>,
    pub outside: Vec<OutsideMeeting>,
}

impl OverlapSummary {
    /// e.g. "14:00, 15:00, 16:00, 17:00 London"
    pub fn slot_line(&self) -> String {
        let hours: Vec<String> = self.slots.iter().map(|h| format!("{:02}:00", h)).collect();
        format!("{} {}", hours.join(", "), self.reference.name())
    }
}

pub fn overlap_summary(state: &AppState, classifier: &OverlapClassifier) -> OverlapSummary {
    let reference = state.reference();
    let (inside, outside) = state.meetings.partition_by_overlap(classifier, reference);

    let outside = outside
        .into_iter()
        .map(|m| {
            let reference_hour = classifier.engine().to_local(m.utc_hour as f64, reference);
            OutsideMeeting {
                line: format!(
                    "{} — {}:00 {}",
                    m.title,
                    format_hour(reference_hour),
                    reference.code()
                ),
                meeting: m.clone(),
                reference_hour,
            }
        })
        .collect();

    OverlapSummary {
        reference,
        slots: classifier.overlap_slots(reference),
        inside: inside.into_iter().cloned().collect(),
        outside,
    }
}
