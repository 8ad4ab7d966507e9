//! Drawing module - renders the derived clock face with nannou
//!
//! The core lays the dial out on a 400x400 canvas with y pointing down. The
//! [`DialLayout`] maps that canvas into the window's y-up coordinates.

use nannou::prelude::*;
use overlap_core::face::{ClockFace, SegmentView};
use overlap_core::geometry::{
    divider_dashes, polar_to_cartesian, SegmentPath, BACKGROUND_RADIUS, CANVAS_SIZE, CENTER,
    CENTER_RADIUS, DIVIDER_RADII, MARKER_RADIUS,
};
use overlap_core::Point;

use crate::theme::Palette;

/// Chords per arc when approximating wedges
const ARC_STEPS: usize = 6;

/// Placement of the logical canvas inside the window
#[derive(Debug, Clone, Copy)]
pub struct DialLayout {
    /// Window position of the canvas center
    pub center: Point2,
    /// Window units per canvas unit
    pub scale: f32,
}

impl DialLayout {
    /// Fit the dial into the window area left free by the egui panels
    pub fn calculate(window_rect: Rect, left_panel_width: f32, top_panel_height: f32) -> Self {
        let padding = 24.0;
        let free = Rect::from_corners(
            pt2(window_rect.left() + left_panel_width, window_rect.bottom()),
            pt2(window_rect.right(), window_rect.top() - top_panel_height),
        );
        let size = (free.w().min(free.h()) - 2.0 * padding).max(100.0);

        DialLayout {
            center: free.xy(),
            scale: size / CANVAS_SIZE as f32,
        }
    }

    pub fn to_screen(&self, p: Point) -> Point2 {
        pt2(
            self.center.x + (p.x - CENTER.x) as f32 * self.scale,
            self.center.y - (p.y - CENTER.y) as f32 * self.scale,
        )
    }

    pub fn to_canvas(&self, screen: Point2) -> Point {
        Point::new(
            CENTER.x + ((screen.x - self.center.x) / self.scale) as f64,
            CENTER.y - ((screen.y - self.center.y) / self.scale) as f64,
        )
    }

    fn len(&self, canvas_units: f64) -> f32 {
        canvas_units as f32 * self.scale
    }

    fn font(&self, canvas_size: f64) -> u32 {
        (self.len(canvas_size).round() as u32).max(6)
    }
}

/// Draw the whole dial
pub fn draw_clock(draw: &Draw, face: &ClockFace, palette: &Palette, layout: &DialLayout) {
    draw.ellipse()
        .xy(layout.center)
        .radius(layout.len(BACKGROUND_RADIUS))
        .color(palette.dial_bg)
        .stroke(palette.dial_border)
        .stroke_weight(2.0);

    for segment in &face.segments {
        draw_segment(draw, segment, palette, layout);
    }

    draw_dividers(draw, palette, layout);
    draw_now_indicator(draw, face, palette, layout);
    draw_center(draw, face, palette, layout);

    draw.text(&face.top_label)
        .xy(layout.to_screen(Point::new(CENTER.x, 12.0)))
        .color(palette.top_label)
        .font_size(layout.font(9.0))
        .w(layout.len(CANVAS_SIZE));
}

fn draw_segment(draw: &Draw, segment: &SegmentView, palette: &Palette, layout: &DialLayout) {
    let points = wedge_points(&segment.path, layout);

    draw.polygon()
        .points(points.clone())
        .color(palette.fill(segment.fill));
    draw_closed_outline(draw, points, palette.segment_stroke, 1.0);

    draw.text(&segment.label)
        .xy(layout.to_screen(segment.label_position))
        .color(palette.text_primary)
        .font_size(layout.font(8.0))
        .w(layout.len(30.0));

    if let Some(marker) = segment.marker {
        draw.ellipse()
            .xy(layout.to_screen(marker.position))
            .radius(layout.len(MARKER_RADIUS))
            .color(palette.meeting(marker.essential))
            .stroke(palette.background)
            .stroke_weight(1.0);
    }
}

/// Dashed circles between the rings
fn draw_dividers(draw: &Draw, palette: &Palette, layout: &DialLayout) {
    for radius in DIVIDER_RADII {
        for (start, end) in divider_dashes(1.0) {
            draw.line()
                .start(layout.to_screen(polar_to_cartesian(CENTER, radius, start)))
                .end(layout.to_screen(polar_to_cartesian(CENTER, radius, end)))
                .color(palette.ring_divider)
                .weight(1.0);
        }
    }
}

fn draw_now_indicator(draw: &Draw, face: &ClockFace, palette: &Palette, layout: &DialLayout) {
    for outline in &face.now.outlines {
        draw_closed_outline(draw, wedge_points(outline, layout), palette.now_highlight, 3.0);
    }

    draw.line()
        .start(layout.to_screen(face.now.line_start))
        .end(layout.to_screen(face.now.line_end))
        .color(palette.now_line)
        .weight(2.0)
        .caps_round();
}

fn draw_center(draw: &Draw, face: &ClockFace, palette: &Palette, layout: &DialLayout) {
    draw.ellipse()
        .xy(layout.center)
        .radius(layout.len(CENTER_RADIUS))
        .color(palette.center_bg)
        .stroke(palette.center_border)
        .stroke_weight(2.0);

    draw.text("NOW")
        .xy(layout.to_screen(Point::new(CENTER.x, 188.0)))
        .color(palette.text_muted)
        .font_size(layout.font(8.0))
        .w(layout.len(70.0));

    for (i, readout) in face.readouts.iter().enumerate() {
        let y = 200.0 + 11.0 * i as f64;
        draw.text(&readout.text)
            .xy(layout.to_screen(Point::new(CENTER.x, y)))
            .color(palette.readout(readout.ring))
            .font_size(layout.font(9.0))
            .w(layout.len(76.0));
    }
}

fn wedge_points(path: &SegmentPath, layout: &DialLayout) -> Vec<Point2> {
    path.outline(ARC_STEPS)
        .into_iter()
        .map(|p| layout.to_screen(p))
        .collect()
}

fn draw_closed_outline(draw: &Draw, mut points: Vec<Point2>, color: Srgb<u8>, weight: f32) {
    if let Some(&first) = points.first() {
        points.push(first);
    }
    draw.polyline().weight(weight).color(color).points(points);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_round_trip() {
        let window = Rect::from_w_h(1200.0, 800.0);
        let layout = DialLayout::calculate(window, 340.0, 120.0);
        let p = Point::new(37.5, 310.0);
        let back = layout.to_canvas(layout.to_screen(p));
        assert!((back.x - p.x).abs() < 1e-3);
        assert!((back.y - p.y).abs() < 1e-3);
    }

    #[test]
    fn test_canvas_top_is_screen_up() {
        let layout = DialLayout {
            center: pt2(0.0, 0.0),
            scale: 1.0,
        };
        let top = layout.to_screen(Point::new(200.0, 8.0));
        assert_eq!(top, pt2(0.0, 192.0));
    }

    #[test]
    fn test_layout_fits_free_area() {
        let window = Rect::from_w_h(1200.0, 800.0);
        let layout = DialLayout::calculate(window, 340.0, 120.0);
        // 680 tall free area, minus padding
        assert!((layout.scale - 632.0 / 400.0).abs() < 1e-4);
        assert_eq!(layout.center, pt2(170.0, -60.0));
    }
}
