//! UI module - egui panels around the dial
//!
//! Provides:
//! - Header (top panel): ring legend, theme buttons, light/dark toggle, ring selectors
//! - Info panel (left panel): selected slot detail, meeting form, overlap summary
//!
//! Panels never touch the state directly; they return the actions to apply.

use nannou_egui::egui;
use overlap_core::face::{OverlapSummary, SlotDetail};
use overlap_core::{Action, AppState, Location, Mode, RingId, ThemeName};

use crate::theme::{to_egui, Palette};

/// Text typed into the add-meeting form
#[derive(Debug, Default)]
pub struct MeetingDraft {
    pub title: String,
    pub essential: bool,
}

impl MeetingDraft {
    /// Turn the draft into an add action and reset the form
    ///
    /// Returns `None` while the title is blank.
    pub fn submit(&mut self, utc_hour: u32) -> Option<Action> {
        if self.title.trim().is_empty() {
            return None;
        }
        let action = Action::AddMeeting {
            utc_hour,
            title: std::mem::take(&mut self.title),
            essential: self.essential,
        };
        self.essential = false;
        Some(action)
    }
}

/// Match egui's base visuals to the light/dark mode
pub fn apply_visuals(ctx: &egui::Context, mode: Mode) {
    let visuals = match mode {
        Mode::Light => egui::Visuals::light(),
        Mode::Dark => egui::Visuals::dark(),
    };
    ctx.set_visuals(visuals);
}

/// Draw the header panel
pub fn draw_header(
    ctx: &egui::Context,
    state: &AppState,
    palette: &Palette,
    height: f32,
) -> Vec<Action> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("header_panel")
        .resizable(false)
        .exact_height(height)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("Timezone Meeting Clock").color(to_egui(palette.text_primary)),
                );
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(state.rings.describe())
                        .color(to_egui(palette.text_secondary)),
                );
            });

            ui.horizontal(|ui| {
                for theme in ThemeName::ALL {
                    if ui
                        .selectable_label(state.theme == theme, theme.label())
                        .clicked()
                        && state.theme != theme
                    {
                        actions.push(Action::SetTheme(theme));
                    }
                }

                ui.separator();

                let mode_label = match state.mode {
                    Mode::Light => "☀ Light",
                    Mode::Dark => "☾ Dark",
                };
                if ui
                    .button(mode_label)
                    .on_hover_text("Switch between light and dark")
                    .clicked()
                {
                    actions.push(Action::ToggleMode);
                }
            });

            ui.horizontal(|ui| {
                for ring in RingId::ALL {
                    if let Some(action) = ring_selector(ui, state, ring) {
                        actions.push(action);
                    }
                    ui.add_space(8.0);
                }

                ui.separator();
                draw_legend(ui, palette);
            });
            ui.add_space(6.0);
        });

    actions
}

fn ring_selector(ui: &mut egui::Ui, state: &AppState, ring: RingId) -> Option<Action> {
    let current = state.rings.location_on(ring);
    let mut chosen = current;

    ui.label(format!("{} Ring", ring.name()));
    egui::ComboBox::from_id_source(ring.key())
        .selected_text(current.name())
        .show_ui(ui, |ui| {
            for location in Location::ALL {
                ui.selectable_value(&mut chosen, location, location.name());
            }
        });

    (chosen != current).then_some(Action::Reassign {
        ring,
        location: chosen,
    })
}

fn draw_legend(ui: &mut egui::Ui, palette: &Palette) {
    swatch(ui, to_egui(palette.segment_overlap), "All Overlap", palette);
    for location in Location::ALL {
        swatch(ui, to_egui(palette.location(location)), location.name(), palette);
    }
}

fn swatch(ui: &mut egui::Ui, color: egui::Color32, label: &str, palette: &Palette) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(egui::RichText::new(label).small().color(to_egui(palette.text_secondary)));
}

/// Draw the info panel with slot detail and overlap summaries
pub fn draw_info_panel(
    ctx: &egui::Context,
    detail: Option<&SlotDetail>,
    summary: &OverlapSummary,
    draft: &mut MeetingDraft,
    palette: &Palette,
    width: f32,
) -> Vec<Action> {
    let mut actions = Vec::new();

    egui::SidePanel::left("info_panel")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                match detail {
                    Some(detail) => draw_slot_detail(ui, detail, draft, palette, &mut actions),
                    None => {
                        ui.label(
                            egui::RichText::new("Click an hour on the dial to plan a meeting.")
                                .color(to_egui(palette.text_muted)),
                        );
                    }
                }

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                draw_summary(ui, summary, palette, &mut actions);
            });
        });

    actions
}

fn draw_slot_detail(
    ui: &mut egui::Ui,
    detail: &SlotDetail,
    draft: &mut MeetingDraft,
    palette: &Palette,
    actions: &mut Vec<Action>,
) {
    let card = egui::Frame::group(ui.style())
        .fill(to_egui(palette.card_bg))
        .stroke(egui::Stroke::new(1.0, to_egui(palette.card_border)));

    card.show(ui, |ui| {
        ui.label(
            egui::RichText::new(&detail.heading)
                .strong()
                .color(to_egui(palette.text_primary)),
        );

        let status_color = if detail.full_overlap {
            palette.success_text
        } else {
            palette.warning_text
        };
        ui.label(egui::RichText::new(detail.status()).color(to_egui(status_color)));
        ui.add_space(6.0);

        for meeting in &detail.meetings {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("●").color(to_egui(palette.meeting(meeting.essential))));
                ui.label(egui::RichText::new(&meeting.title).color(to_egui(palette.text_primary)));
                if ui.small_button("✕").on_hover_text("Remove meeting").clicked() {
                    actions.push(Action::RemoveMeeting(meeting.id));
                }
            });
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Title:");
            ui.text_edit_singleline(&mut draft.title);
        });
        ui.checkbox(&mut draft.essential, "Essential for cross-city collaboration");

        let add = egui::Button::new(
            egui::RichText::new("+ Add Meeting at This Time")
                .color(to_egui(palette.button_primary_text)),
        )
        .fill(to_egui(palette.button_primary_bg));
        if ui.add(add).clicked() {
            if let Some(action) = draft.submit(detail.utc_hour) {
                actions.push(action);
            }
        }

        if ui.button("Close").clicked() {
            actions.push(Action::ClearSelection);
        }
    });
}

fn draw_summary(
    ui: &mut egui::Ui,
    summary: &OverlapSummary,
    palette: &Palette,
    actions: &mut Vec<Action>,
) {
    let success = to_egui(palette.success_text);
    ui.label(
        egui::RichText::new(format!("Full Overlap: {} hours available", summary.slots.len()))
            .strong()
            .color(success),
    );
    ui.label(egui::RichText::new(summary.slot_line()).small().color(success));
    ui.label(
        egui::RichText::new(format!("{} meetings in overlap window", summary.inside.len()))
            .small()
            .color(success),
    );

    if summary.outside.is_empty() {
        return;
    }

    let warning = to_egui(palette.warning_text);
    ui.add_space(10.0);
    ui.label(
        egui::RichText::new("⚠ Meetings Outside Overlap")
            .strong()
            .color(warning),
    );
    for outside in &summary.outside {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&outside.line).color(warning));
            if ui.small_button("Remove").clicked() {
                actions.push(Action::RemoveMeeting(outside.meeting.id));
            }
        });
    }
}
