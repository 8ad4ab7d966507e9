//! Theme palettes
//!
//! Four named themes, each with a light and a dark variant. The clock face only
//! asks for semantic roles; this module decides what color each role is.

use nannou::prelude::*;
use nannou_egui::egui;
use overlap_core::{Location, Mode, RingId, SlotFill, ThemeName};

/// Colors for every semantic role used by the clock and its panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Srgb<u8>,
    pub card_bg: Srgb<u8>,
    pub card_border: Srgb<u8>,
    pub text_primary: Srgb<u8>,
    pub text_secondary: Srgb<u8>,
    pub text_muted: Srgb<u8>,
    pub segment_default: Srgb<u8>,
    pub segment_stroke: Srgb<u8>,
    pub segment_overlap: Srgb<u8>,
    pub segment_dallas: Srgb<u8>,
    pub segment_connecticut: Srgb<u8>,
    pub segment_london: Srgb<u8>,
    pub dial_bg: Srgb<u8>,
    pub dial_border: Srgb<u8>,
    pub center_bg: Srgb<u8>,
    pub center_border: Srgb<u8>,
    pub ring_divider: Srgb<u8>,
    pub now_highlight: Srgb<u8>,
    pub now_line: Srgb<u8>,
    pub readout_outer: Srgb<u8>,
    pub readout_middle: Srgb<u8>,
    pub readout_inner: Srgb<u8>,
    pub top_label: Srgb<u8>,
    pub button_primary_bg: Srgb<u8>,
    pub button_primary_text: Srgb<u8>,
    pub success_text: Srgb<u8>,
    pub warning_text: Srgb<u8>,
    pub meeting_essential: Srgb<u8>,
    pub meeting_non_essential: Srgb<u8>,
}

impl Palette {
    /// Look up the palette for a theme and mode
    pub fn of(theme: ThemeName, mode: Mode) -> &'static Palette {
        match (theme, mode) {
            (ThemeName::Minimalist, Mode::Light) => &MINIMALIST_LIGHT,
            (ThemeName::Minimalist, Mode::Dark) => &MINIMALIST_DARK,
            (ThemeName::Bold, Mode::Light) => &BOLD_LIGHT,
            (ThemeName::Bold, Mode::Dark) => &BOLD_DARK,
            (ThemeName::Professional, Mode::Light) => &PROFESSIONAL_LIGHT,
            (ThemeName::Professional, Mode::Dark) => &PROFESSIONAL_DARK,
            (ThemeName::Playful, Mode::Light) => &PLAYFUL_LIGHT,
            (ThemeName::Playful, Mode::Dark) => &PLAYFUL_DARK,
        }
    }

    pub fn fill(&self, fill: SlotFill) -> Srgb<u8> {
        match fill {
            SlotFill::Default => self.segment_default,
            SlotFill::Overlap => self.segment_overlap,
            SlotFill::Working(location) => self.location(location),
        }
    }

    pub fn location(&self, location: Location) -> Srgb<u8> {
        match location {
            Location::Dallas => self.segment_dallas,
            Location::Connecticut => self.segment_connecticut,
            Location::London => self.segment_london,
        }
    }

    pub fn readout(&self, ring: RingId) -> Srgb<u8> {
        match ring {
            RingId::Outer => self.readout_outer,
            RingId::Middle => self.readout_middle,
            RingId::Inner => self.readout_inner,
        }
    }

    pub fn meeting(&self, essential: bool) -> Srgb<u8> {
        if essential {
            self.meeting_essential
        } else {
            self.meeting_non_essential
        }
    }
}

/// Convert a palette color for use in egui widgets
pub fn to_egui(color: Srgb<u8>) -> egui::Color32 {
    egui::Color32::from_rgb(color.red, color.green, color.blue)
}

const fn hex(rgb: u32) -> Srgb<u8> {
    Srgb {
        red: ((rgb >> 16) & 0xff) as u8,
        green: ((rgb >> 8) & 0xff) as u8,
        blue: (rgb & 0xff) as u8,
        standard: std::marker::PhantomData,
    }
}

const MINIMALIST_LIGHT: Palette = Palette {
    background: hex(0xffffff),
    card_bg: hex(0xf9fafb),
    card_border: hex(0xe5e7eb),
    text_primary: hex(0x374151),
    text_secondary: hex(0x6b7280),
    text_muted: hex(0x9ca3af),
    segment_default: hex(0xffffff),
    segment_stroke: hex(0xf9f9f9),
    segment_overlap: hex(0x007acc),
    segment_dallas: hex(0xe5e7eb),
    segment_connecticut: hex(0xd1d5db),
    segment_london: hex(0xf3f4f6),
    dial_bg: hex(0xf9fafb),
    dial_border: hex(0xe5e7eb),
    center_bg: hex(0xf8fafc),
    center_border: hex(0xe2e8f0),
    ring_divider: hex(0xf9f9f9),
    now_highlight: hex(0x007acc),
    now_line: hex(0x007acc),
    readout_outer: hex(0x007acc),
    readout_middle: hex(0x007acc),
    readout_inner: hex(0x007acc),
    top_label: hex(0x6b7280),
    button_primary_bg: hex(0x007acc),
    button_primary_text: hex(0xffffff),
    success_text: hex(0x16a34a),
    warning_text: hex(0xd97706),
    meeting_essential: hex(0x22c55e),
    meeting_non_essential: hex(0xec4899),
};

const MINIMALIST_DARK: Palette = Palette {
    background: hex(0x1e1e1e),
    card_bg: hex(0x252526),
    card_border: hex(0x3c3c3c),
    text_primary: hex(0xd4d4d4),
    text_secondary: hex(0x9ca3af),
    text_muted: hex(0x6b7280),
    segment_default: hex(0x2d2d30),
    segment_stroke: hex(0x3c3c3c),
    segment_overlap: hex(0x007acc),
    segment_dallas: hex(0x3a3a3c),
    segment_connecticut: hex(0x454545),
    segment_london: hex(0x505050),
    dial_bg: hex(0x252526),
    dial_border: hex(0x3c3c3c),
    center_bg: hex(0x2d2d30),
    center_border: hex(0x3c3c3c),
    ring_divider: hex(0x3c3c3c),
    now_highlight: hex(0x007acc),
    now_line: hex(0x007acc),
    readout_outer: hex(0x007acc),
    readout_middle: hex(0x007acc),
    readout_inner: hex(0x007acc),
    top_label: hex(0x9ca3af),
    button_primary_bg: hex(0x007acc),
    button_primary_text: hex(0xffffff),
    success_text: hex(0x4ade80),
    warning_text: hex(0xfbbf24),
    meeting_essential: hex(0x22c55e),
    meeting_non_essential: hex(0xec4899),
};

const BOLD_LIGHT: Palette = Palette {
    background: hex(0xffffff),
    card_bg: hex(0xffffff),
    card_border: hex(0xec4899),
    text_primary: hex(0x1f2937),
    text_secondary: hex(0x374151),
    text_muted: hex(0x6b7280),
    segment_default: hex(0xffffff),
    segment_stroke: hex(0xf3f4f6),
    segment_overlap: hex(0xec4899),
    segment_dallas: hex(0xfce7f3),
    segment_connecticut: hex(0xdbeafe),
    segment_london: hex(0xecfccb),
    dial_bg: hex(0xffffff),
    dial_border: hex(0xec4899),
    center_bg: hex(0xfdf2f8),
    center_border: hex(0xec4899),
    ring_divider: hex(0xf3f4f6),
    now_highlight: hex(0xec4899),
    now_line: hex(0x1f2937),
    readout_outer: hex(0xec4899),
    readout_middle: hex(0x3b82f6),
    readout_inner: hex(0x84cc16),
    top_label: hex(0x1f2937),
    button_primary_bg: hex(0xec4899),
    button_primary_text: hex(0xffffff),
    success_text: hex(0x65a30d),
    warning_text: hex(0xd97706),
    meeting_essential: hex(0x84cc16),
    meeting_non_essential: hex(0xec4899),
};

const BOLD_DARK: Palette = Palette {
    background: hex(0x1e1e1e),
    card_bg: hex(0x2d2d30),
    card_border: hex(0xc586c0),
    text_primary: hex(0xffffff),
    text_secondary: hex(0xd4d4d4),
    text_muted: hex(0x9ca3af),
    segment_default: hex(0x252526),
    segment_stroke: hex(0x3c3c3c),
    segment_overlap: hex(0xc586c0),
    segment_dallas: hex(0x3d2d3a),
    segment_connecticut: hex(0x2d3a4a),
    segment_london: hex(0x3a3d2d),
    dial_bg: hex(0x252526),
    dial_border: hex(0xc586c0),
    center_bg: hex(0x3d2d3a),
    center_border: hex(0xc586c0),
    ring_divider: hex(0x3c3c3c),
    now_highlight: hex(0xc586c0),
    now_line: hex(0xffffff),
    readout_outer: hex(0xc586c0),
    readout_middle: hex(0x569cd6),
    readout_inner: hex(0xce9178),
    top_label: hex(0xd4d4d4),
    button_primary_bg: hex(0xc586c0),
    button_primary_text: hex(0xffffff),
    success_text: hex(0xce9178),
    warning_text: hex(0xfbbf24),
    meeting_essential: hex(0xce9178),
    meeting_non_essential: hex(0xc586c0),
};

const PROFESSIONAL_LIGHT: Palette = Palette {
    background: hex(0xf8fafc),
    card_bg: hex(0xffffff),
    card_border: hex(0xcbd5e1),
    text_primary: hex(0x1e3a8a),
    text_secondary: hex(0x374151),
    text_muted: hex(0x64748b),
    segment_default: hex(0xffffff),
    segment_stroke: hex(0xf1f5f9),
    segment_overlap: hex(0xf59e0b),
    segment_dallas: hex(0xdbeafe),
    segment_connecticut: hex(0xe0e7ff),
    segment_london: hex(0xfef3c7),
    dial_bg: hex(0xffffff),
    dial_border: hex(0xcbd5e1),
    center_bg: hex(0xf8fafc),
    center_border: hex(0xcbd5e1),
    ring_divider: hex(0xf1f5f9),
    now_highlight: hex(0x0ea5e9),
    now_line: hex(0x1e3a8a),
    readout_outer: hex(0x1e3a8a),
    readout_middle: hex(0x0ea5e9),
    readout_inner: hex(0xf59e0b),
    top_label: hex(0x64748b),
    button_primary_bg: hex(0x1e3a8a),
    button_primary_text: hex(0xffffff),
    success_text: hex(0x16a34a),
    warning_text: hex(0xd97706),
    meeting_essential: hex(0x0ea5e9),
    meeting_non_essential: hex(0xf59e0b),
};

const PROFESSIONAL_DARK: Palette = Palette {
    background: hex(0x1e293b),
    card_bg: hex(0x334155),
    card_border: hex(0x475569),
    text_primary: hex(0xe2e8f0),
    text_secondary: hex(0xcbd5e1),
    text_muted: hex(0x94a3b8),
    segment_default: hex(0x334155),
    segment_stroke: hex(0x475569),
    segment_overlap: hex(0x14b8a6),
    segment_dallas: hex(0x1e3a5f),
    segment_connecticut: hex(0x1e2f4a),
    segment_london: hex(0x3a3520),
    dial_bg: hex(0x334155),
    dial_border: hex(0x475569),
    center_bg: hex(0x1e293b),
    center_border: hex(0x475569),
    ring_divider: hex(0x475569),
    now_highlight: hex(0x14b8a6),
    now_line: hex(0xe2e8f0),
    readout_outer: hex(0x14b8a6),
    readout_middle: hex(0x22d3ee),
    readout_inner: hex(0xf59e0b),
    top_label: hex(0xcbd5e1),
    button_primary_bg: hex(0x14b8a6),
    button_primary_text: hex(0xffffff),
    success_text: hex(0x5eead4),
    warning_text: hex(0xfbbf24),
    meeting_essential: hex(0x14b8a6),
    meeting_non_essential: hex(0xf59e0b),
};

const PLAYFUL_LIGHT: Palette = Palette {
    background: hex(0xfef3c7),
    card_bg: hex(0xffffff),
    card_border: hex(0xe9d5ff),
    text_primary: hex(0x7c2d12),
    text_secondary: hex(0x92400e),
    text_muted: hex(0xa16207),
    segment_default: hex(0xffffff),
    segment_stroke: hex(0xfef3c7),
    segment_overlap: hex(0xa78bfa),
    segment_dallas: hex(0xfed7aa),
    segment_connecticut: hex(0xd1fae5),
    segment_london: hex(0xe9d5ff),
    dial_bg: hex(0xfffbeb),
    dial_border: hex(0xe9d5ff),
    center_bg: hex(0xfef3c7),
    center_border: hex(0xe9d5ff),
    ring_divider: hex(0xfef3c7),
    now_highlight: hex(0xa78bfa),
    now_line: hex(0x7c2d12),
    readout_outer: hex(0xea580c),
    readout_middle: hex(0x059669),
    readout_inner: hex(0xa855f7),
    top_label: hex(0x92400e),
    button_primary_bg: hex(0xa855f7),
    button_primary_text: hex(0xffffff),
    success_text: hex(0x047857),
    warning_text: hex(0xc2410c),
    meeting_essential: hex(0x059669),
    meeting_non_essential: hex(0xa855f7),
};

const PLAYFUL_DARK: Palette = Palette {
    background: hex(0x2d2d30),
    card_bg: hex(0x3a3a3c),
    card_border: hex(0xbd63c5),
    text_primary: hex(0xe2e8f0),
    text_secondary: hex(0xcbd5e1),
    text_muted: hex(0x94a3b8),
    segment_default: hex(0x3a3a3c),
    segment_stroke: hex(0x4a4a4c),
    segment_overlap: hex(0xbd63c5),
    segment_dallas: hex(0x4a3520),
    segment_connecticut: hex(0x204a3a),
    segment_london: hex(0x3d204a),
    dial_bg: hex(0x3a3a3c),
    dial_border: hex(0xbd63c5),
    center_bg: hex(0x2d2d30),
    center_border: hex(0xbd63c5),
    ring_divider: hex(0x4a4a4c),
    now_highlight: hex(0xbd63c5),
    now_line: hex(0xe2e8f0),
    readout_outer: hex(0xce9178),
    readout_middle: hex(0x569cd6),
    readout_inner: hex(0xbd63c5),
    top_label: hex(0xcbd5e1),
    button_primary_bg: hex(0xbd63c5),
    button_primary_text: hex(0xffffff),
    success_text: hex(0x569cd6),
    warning_text: hex(0xce9178),
    meeting_essential: hex(0x569cd6),
    meeting_non_essential: hex(0xbd63c5),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        let c = hex(0x007acc);
        assert_eq!((c.red, c.green, c.blue), (0, 122, 204));
    }

    #[test]
    fn test_every_theme_has_both_modes() {
        for theme in ThemeName::ALL {
            assert_ne!(
                Palette::of(theme, Mode::Light).background,
                Palette::of(theme, Mode::Dark).background
            );
        }
    }

    #[test]
    fn test_fill_roles() {
        let palette = Palette::of(ThemeName::Bold, Mode::Light);
        assert_eq!(palette.fill(SlotFill::Overlap), palette.segment_overlap);
        assert_eq!(palette.fill(SlotFill::Default), palette.segment_default);
        assert_eq!(
            palette.fill(SlotFill::Working(Location::London)),
            palette.segment_london
        );
    }
}
