//! Meeting Overlap Clock
//!
//! A 24-hour radial dial with one ring per location. Hours where all three
//! locations are at work are highlighted, and meetings can be pinned to any
//! hour by clicking its slot.

mod drawing;
mod theme;
mod ticker;
mod ui;

use std::time::Instant;

use chrono::Utc;
use flexi_logger::{Logger, LoggerHandle};
use log::{debug, error, info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;
use overlap_core::{
    derive_face, geometry, overlap_summary, slot_detail, Action, AppState, ClockConfig,
    OverlapClassifier,
};

use crate::drawing::{draw_clock, DialLayout};
use crate::theme::Palette;
use crate::ticker::Ticker;
use crate::ui::{apply_visuals, draw_header, draw_info_panel, MeetingDraft};

const LEFT_PANEL_WIDTH: f32 = 340.0;
const TOP_PANEL_HEIGHT: f32 = 110.0;

fn main() {
    nannou::app(model).update(update).exit(exit).run();
}

struct Model {
    state: AppState,
    classifier: OverlapClassifier,
    ticker: Ticker,
    draft: MeetingDraft,
    egui: Egui,
    _logger: Option<LoggerHandle>,
}

impl Model {
    /// Apply an action; rejected actions leave the state untouched
    fn dispatch(&mut self, action: Action) {
        match self.state.transition(self.classifier.engine(), action) {
            Ok(next) => self.state = next,
            Err(e) => warn!("Action rejected: {}", e),
        }
    }

    fn palette(&self) -> &'static Palette {
        Palette::of(self.state.theme, self.state.mode)
    }
}

fn start_logger() -> Option<LoggerHandle> {
    match Logger::try_with_env_or_str("info").and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    }
}

fn model(app: &App) -> Model {
    let logger = start_logger();

    let setup = match ClockConfig::load().and_then(|config| config.build(Utc::now())) {
        Ok(setup) => setup,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Starting with {} and {} meetings",
        setup.state.rings.describe(),
        setup.state.meetings.len()
    );

    let window_id = match app
        .new_window()
        .title("Meeting Overlap Clock")
        .size(1100, 760)
        .min_size(900, 620)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(e) => {
            error!("Failed to open window: {}", e);
            std::process::exit(1);
        }
    };
    let Some(window) = app.window(window_id) else {
        error!("Window closed during startup");
        std::process::exit(1);
    };
    let egui = Egui::from_window(&window);

    let ticker = Ticker::new(setup.tick_interval, Instant::now());
    debug!("Refreshing the current time every {:?}", ticker.interval());

    Model {
        state: setup.state,
        classifier: setup.classifier,
        ticker,
        draft: MeetingDraft::default(),
        egui,
        _logger: logger,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    if model.ticker.poll(Instant::now()) {
        model.dispatch(Action::Tick(Utc::now()));
    }

    let palette = model.palette();
    let detail = slot_detail(&model.state, &model.classifier);
    let summary = overlap_summary(&model.state, &model.classifier);

    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();
    apply_visuals(&ctx, model.state.mode);

    let mut actions = draw_header(&ctx, &model.state, palette, TOP_PANEL_HEIGHT);
    actions.extend(draw_info_panel(
        &ctx,
        detail.as_ref(),
        &summary,
        &mut model.draft,
        palette,
        LEFT_PANEL_WIDTH,
    ));
    drop(ctx);

    for action in actions {
        model.dispatch(action);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let palette = model.palette();

    draw.background().color(palette.background);

    let layout = DialLayout::calculate(app.window_rect(), LEFT_PANEL_WIDTH, TOP_PANEL_HEIGHT);
    let face = derive_face(&model.state, &model.classifier);
    draw_clock(&draw, &face, palette, &layout);

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("Failed to render dial: {:?}", e);
    }
    if let Err(e) = model.egui.draw_to_frame(&frame) {
        error!("Failed to render panels: {:?}", e);
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Escape && model.state.selected.is_some() {
        model.dispatch(Action::ClearSelection);
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    let layout = DialLayout::calculate(app.window_rect(), LEFT_PANEL_WIDTH, TOP_PANEL_HEIGHT);
    let canvas = layout.to_canvas(app.mouse.position());
    if let Some((ring, reference_hour)) = geometry::hit_test(canvas) {
        debug!("Clicked {} ring at hour {}", ring, reference_hour);
        model.dispatch(Action::SelectSlot { reference_hour });
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

fn exit(_app: &App, mut model: Model) {
    model.ticker.cancel();
    info!("Clock stopped");
}
