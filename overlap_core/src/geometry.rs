//! Geometry module - radial layout of the 24-hour dial
//!
//! Pure functions mapping hours to angles, angles to points, and hour slots to
//! annulus wedges. Coordinates live on a 400x400 logical canvas with the
//! origin in the top-left corner and y growing downwards, so increasing
//! angles run clockwise.

use std::f64::consts::PI;

use crate::location::{Location, RingId};
use crate::overlap::OverlapClassifier;
use crate::time_engine::{normalize_hour, HOURS_PER_DAY};

/// Side of the logical canvas
pub const CANVAS_SIZE: f64 = 400.0;
/// Center of the dial
pub const CENTER: Point = Point { x: 200.0, y: 200.0 };
/// Radius of the dial background disc
pub const BACKGROUND_RADIUS: f64 = 196.0;
/// Radius of the center readout disc
pub const CENTER_RADIUS: f64 = 40.0;
/// Degrees covered by one hour slot
pub const DEGREES_PER_HOUR: f64 = 360.0 / HOURS_PER_DAY;
/// Horizontal offset of a meeting marker from its slot label
pub const MARKER_OFFSET: f64 = 10.0;
pub const MARKER_RADIUS: f64 = 4.0;
/// Radii of the dashed ring dividers
pub const DIVIDER_RADII: [f64; 2] = [156.0, 116.0];

/// A point on the logical canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Radial extent of one ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBand {
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl RingBand {
    pub fn mid_radius(&self) -> f64 {
        (self.outer_radius + self.inner_radius) / 2.0
    }

    pub fn contains_radius(&self, radius: f64) -> bool {
        radius >= self.inner_radius && radius <= self.outer_radius
    }
}

impl RingId {
    /// Radial band this ring occupies on the canvas
    pub fn band(&self) -> RingBand {
        match self {
            RingId::Outer => RingBand {
                outer_radius: 192.0,
                inner_radius: 156.0,
            },
            RingId::Middle => RingBand {
                outer_radius: 152.0,
                inner_radius: 116.0,
            },
            RingId::Inner => RingBand {
                outer_radius: 112.0,
                inner_radius: 70.0,
            },
        }
    }
}

/// Angle in degrees for an hour; hour 0 sits at 12 o'clock
pub fn hour_to_angle(hour: f64) -> f64 {
    (hour / HOURS_PER_DAY) * 360.0 - 90.0
}

/// Inverse of [`hour_to_angle`], normalized into [0, 24)
pub fn angle_to_hour(angle_deg: f64) -> f64 {
    normalize_hour((angle_deg + 90.0) / 360.0 * HOURS_PER_DAY)
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg * PI / 180.0;
    Point {
        x: center.x + radius * rad.cos(),
        y: center.y + radius * rad.sin(),
    }
}

/// Closed annulus wedge covering one hour slot of one ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPath {
    pub start_angle: f64,
    pub end_angle: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_start: Point,
}

impl SegmentPath {
    pub fn span_degrees(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG path data: outer arc, line in, inner arc back, close
    pub fn to_svg(&self) -> String {
        format!(
            "M {} {} A {} {} 0 0 1 {} {} L {} {} A {} {} 0 0 0 {} {} Z",
            self.outer_start.x,
            self.outer_start.y,
            self.outer_radius,
            self.outer_radius,
            self.outer_end.x,
            self.outer_end.y,
            self.inner_end.x,
            self.inner_end.y,
            self.inner_radius,
            self.inner_radius,
            self.inner_start.x,
            self.inner_start.y
        )
    }

    /// Polygon approximation in the same order as [`SegmentPath::to_svg`]
    ///
    /// `steps` is the number of chords per arc (at least 1). The outer arc runs
    /// start to end, the inner arc end to start, giving a simple polygon.
    pub fn outline(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let mut points = Vec::with_capacity(2 * (steps + 1));
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let angle = self.start_angle + t * self.span_degrees();
            points.push(polar_to_cartesian(CENTER, self.outer_radius, angle));
        }
        for i in (0..=steps).rev() {
            let t = i as f64 / steps as f64;
            let angle = self.start_angle + t * self.span_degrees();
            points.push(polar_to_cartesian(CENTER, self.inner_radius, angle));
        }
        points
    }
}

/// Wedge for the slot `[hour, hour + 1)` between the two radii
pub fn build_segment_path(hour: f64, outer_radius: f64, inner_radius: f64) -> SegmentPath {
    let start_angle = hour_to_angle(hour);
    let end_angle = hour_to_angle(hour + 1.0);

    SegmentPath {
        start_angle,
        end_angle,
        outer_radius,
        inner_radius,
        outer_start: polar_to_cartesian(CENTER, outer_radius, start_angle),
        outer_end: polar_to_cartesian(CENTER, outer_radius, end_angle),
        inner_end: polar_to_cartesian(CENTER, inner_radius, end_angle),
        inner_start: polar_to_cartesian(CENTER, inner_radius, start_angle),
    }
}

/// Label anchor: mid-angle of the slot, halfway between the radii
pub fn label_position(hour: f64, outer_radius: f64, inner_radius: f64) -> Point {
    let mid_angle = (hour_to_angle(hour) + hour_to_angle(hour + 1.0)) / 2.0;
    polar_to_cartesian(CENTER, (outer_radius + inner_radius) / 2.0, mid_angle)
}

/// Meeting marker sits just right of the slot label
pub fn marker_position(label: Point) -> Point {
    Point {
        x: label.x + MARKER_OFFSET,
        y: label.y,
    }
}

/// Highlight for the current moment
#[derive(Debug, Clone, PartialEq)]
pub struct NowIndicator {
    /// Whole hour slot containing the current time
    pub slot_hour: u32,
    /// Slot outline per ring, outermost first
    pub outlines: [SegmentPath; 3],
    /// Exact angle of the current time
    pub angle: f64,
    pub line_start: Point,
    pub line_end: Point,
}

/// Outline the current hour slot on every ring plus a radial line at the
/// exact fractional angle
pub fn now_indicator(current_exact_hour: f64) -> NowIndicator {
    let exact = normalize_hour(current_exact_hour);
    let slot_hour = exact.floor() as u32;
    let outline = |ring: RingId| {
        let band = ring.band();
        build_segment_path(slot_hour as f64, band.outer_radius, band.inner_radius)
    };
    let angle = hour_to_angle(exact);

    NowIndicator {
        slot_hour,
        outlines: [outline(RingId::Outer), outline(RingId::Middle), outline(RingId::Inner)],
        angle,
        line_start: polar_to_cartesian(CENTER, RingId::Inner.band().inner_radius, angle),
        line_end: polar_to_cartesian(CENTER, RingId::Outer.band().outer_radius, angle),
    }
}

/// Find the ring and hour slot under a canvas point
pub fn hit_test(point: Point) -> Option<(RingId, u32)> {
    let radius = point.distance(CENTER);
    let ring = RingId::ALL
        .iter()
        .copied()
        .find(|ring| ring.band().contains_radius(radius))?;

    let angle = (point.y - CENTER.y).atan2(point.x - CENTER.x).to_degrees();
    let hour = (angle_to_hour(angle).floor() as u32).min(23);
    Some((ring, hour))
}

/// Dash segments (start, end angles in degrees) for a divider circle
///
/// Alternates `dash_degrees` drawn with `dash_degrees` skipped.
pub fn divider_dashes(dash_degrees: f64) -> Vec<(f64, f64)> {
    if dash_degrees <= 0.0 {
        return Vec::new();
    }
    let count = (360.0 / (2.0 * dash_degrees)).floor() as usize;
    (0..count)
        .map(|i| {
            let start = i as f64 * 2.0 * dash_degrees;
            (start, start + dash_degrees)
        })
        .collect()
}

/// Semantic fill for one segment; colors are resolved by the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotFill {
    Default,
    Overlap,
    Working(Location),
}

/// Pick the fill for the segment of `ring_location` at `reference_hour`
///
/// Full overlap wins over a working location, which wins over default.
pub fn slot_fill(
    classifier: &OverlapClassifier,
    reference_hour: f64,
    reference: Location,
    ring_location: Location,
) -> SlotFill {
    if classifier.is_full_overlap(reference_hour, reference) {
        SlotFill::Overlap
    } else if classifier.is_working(reference_hour, reference, ring_location) {
        SlotFill::Working(ring_location)
    } else {
        SlotFill::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hour_to_angle() {
        assert_eq!(hour_to_angle(0.0), -90.0);
        assert_eq!(hour_to_angle(6.0), 0.0);
        assert_eq!(hour_to_angle(12.0), 90.0);
        assert_eq!(hour_to_angle(18.0), 180.0);
    }

    #[test]
    fn test_angle_to_hour() {
        assert!(approx(angle_to_hour(-90.0), 0.0));
        assert!(approx(angle_to_hour(0.0), 6.0));
        assert!(approx(angle_to_hour(-135.0), 21.0));
    }

    #[test]
    fn test_polar_to_cartesian() {
        let top = polar_to_cartesian(CENTER, 100.0, -90.0);
        assert!(approx(top.x, 200.0));
        assert!(approx(top.y, 100.0));
        let right = polar_to_cartesian(CENTER, 100.0, 0.0);
        assert!(approx(right.x, 300.0));
        assert!(approx(right.y, 200.0));
    }

    #[test]
    fn test_segment_spans_one_hour() {
        for h in 0..24 {
            let seg = build_segment_path(h as f64, 192.0, 156.0);
            assert_eq!(seg.start_angle, hour_to_angle(h as f64));
            assert_eq!(seg.end_angle, hour_to_angle(h as f64 + 1.0));
            assert!(approx(seg.span_degrees(), DEGREES_PER_HOUR));
        }
    }

    #[test]
    fn test_segment_corners() {
        let seg = build_segment_path(0.0, 192.0, 156.0);
        assert!(approx(seg.outer_start.x, 200.0));
        assert!(approx(seg.outer_start.y, 8.0));
        assert!(approx(seg.inner_start.y, 44.0));
        // Slot 0 runs clockwise towards the right of 12 o'clock
        assert!(seg.outer_end.x > seg.outer_start.x);
        assert!(approx(seg.inner_end.distance(CENTER), 156.0));
    }

    #[test]
    fn test_segment_svg_order() {
        let svg = build_segment_path(6.0, 192.0, 156.0).to_svg();
        assert!(svg.starts_with("M 392 200 A 192 192 0 0 1 "));
        assert!(svg.contains(" A 156 156 0 0 0 "));
        assert!(svg.ends_with(" Z"));
    }

    #[test]
    fn test_outline_is_closed_loop_of_both_arcs() {
        let seg = build_segment_path(3.0, 152.0, 116.0);
        let points = seg.outline(4);
        assert_eq!(points.len(), 10);
        assert!(approx(points[0].distance(seg.outer_start), 0.0));
        assert!(approx(points[4].distance(seg.outer_end), 0.0));
        assert!(approx(points[5].distance(seg.inner_end), 0.0));
        assert!(approx(points[9].distance(seg.inner_start), 0.0));
    }

    #[test]
    fn test_label_position_is_centered() {
        let label = label_position(0.0, 192.0, 156.0);
        assert!(approx(label.distance(CENTER), 174.0));
        let angle = (label.y - CENTER.y).atan2(label.x - CENTER.x).to_degrees();
        assert!(approx(angle, -82.5));
    }

    #[test]
    fn test_marker_position() {
        let marker = marker_position(Point::new(50.0, 60.0));
        assert_eq!(marker, Point::new(60.0, 60.0));
    }

    #[test]
    fn test_now_indicator() {
        let now = now_indicator(14.5);
        assert_eq!(now.slot_hour, 14);
        assert_eq!(now.angle, hour_to_angle(14.5));
        assert_eq!(now.outlines[0].start_angle, hour_to_angle(14.0));
        assert_eq!(now.outlines[2].inner_radius, 70.0);
        assert!(approx(now.line_start.distance(CENTER), 70.0));
        assert!(approx(now.line_end.distance(CENTER), 192.0));
    }

    #[test]
    fn test_hit_test() {
        // Just clockwise of 12 o'clock on the outer ring
        let p = polar_to_cartesian(CENTER, 170.0, hour_to_angle(0.5));
        assert_eq!(hit_test(p), Some((RingId::Outer, 0)));

        let p = polar_to_cartesian(CENTER, 130.0, hour_to_angle(17.2));
        assert_eq!(hit_test(p), Some((RingId::Middle, 17)));

        let p = polar_to_cartesian(CENTER, 90.0, hour_to_angle(23.9));
        assert_eq!(hit_test(p), Some((RingId::Inner, 23)));

        // Gap between rings, center disc, outside the dial
        assert_eq!(hit_test(polar_to_cartesian(CENTER, 154.0, 0.0)), None);
        assert_eq!(hit_test(CENTER), None);
        assert_eq!(hit_test(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_divider_dashes() {
        let dashes = divider_dashes(1.0);
        assert_eq!(dashes.len(), 180);
        assert_eq!(dashes[1], (2.0, 3.0));
        assert!(divider_dashes(0.0).is_empty());
    }

    #[test]
    fn test_slot_fill_priority() {
        let classifier = OverlapClassifier::default();
        assert_eq!(
            slot_fill(&classifier, 15.0, Location::London, Location::Dallas),
            SlotFill::Overlap
        );
        // UTC 9: London works, Dallas does not
        assert_eq!(
            slot_fill(&classifier, 9.0, Location::London, Location::London),
            SlotFill::Working(Location::London)
        );
        assert_eq!(
            slot_fill(&classifier, 9.0, Location::London, Location::Dallas),
            SlotFill::Default
        );
    }
}
