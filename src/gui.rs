use crate::countdown::CountdownItem;
use crate::interactivity::InteractivityController;
use crate::locale::unit_label;
use crate::placement::{OncePlacement, WorkArea};
use crate::settings::Settings;
use crate::win_util::{self, OverlayStyleOps};
use chrono::{Local, NaiveDate};
use eframe::egui;
use std::time::{Duration, Instant};

pub struct OverlayApp {
    items: Vec<CountdownItem>,
    settings: Settings,
    chinese: bool,
    today: NaiveDate,
    last_refresh: Instant,
    controller: Option<InteractivityController<OverlayStyleOps>>,
    placement: OncePlacement,
}

impl OverlayApp {
    pub fn new(items: Vec<CountdownItem>, settings: Settings, chinese: bool) -> Self {
        Self {
            items,
            settings,
            chinese,
            today: Local::now().date_naive(),
            last_refresh: Instant::now(),
            controller: None,
            placement: OncePlacement::new(),
        }
    }

    /// The overlay window only has a usable HWND once the native window
    /// exists, so the controller is attached lazily and retried until
    /// initialization succeeds.
    fn ensure_controller(&mut self, frame: &eframe::Frame) {
        if self.controller.is_some() {
            return;
        }
        let Some(ops) = win_util::style_ops(frame) else {
            return;
        };
        let mut controller = InteractivityController::new(ops);
        match controller.initialize() {
            Ok(()) => {
                tracing::debug!(base = ?controller.base_style(), "overlay controller initialized");
                self.controller = Some(controller);
            }
            Err(err) => tracing::warn!(%err, "overlay controller init failed, will retry"),
        }
    }

    /// Re-read the calendar date on a coarse interval so the counts roll over
    /// shortly after midnight.
    fn refresh_today_if_due(&mut self) {
        if self.last_refresh.elapsed() >= self.settings.refresh_interval() {
            self.today = Local::now().date_naive();
            self.last_refresh = Instant::now();
        }
    }

    fn place_window(&mut self, ctx: &egui::Context) {
        if self.placement.applied() {
            return;
        }
        let (outer, monitor) =
            ctx.input(|i| (i.viewport().outer_rect, i.viewport().monitor_size));
        let Some(outer) = outer else {
            return;
        };
        let right = self.settings.right_margin_pct;
        let bottom = self.settings.bottom_margin_pct;
        let ppp = ctx.pixels_per_point();

        let target = if let Some(area) = win_util::work_area() {
            // Working area is in physical pixels; egui positions in points.
            self.placement
                .resolve(area, outer.width() * ppp, outer.height() * ppp, right, bottom)
                .map(|(x, y)| egui::pos2(x / ppp, y / ppp))
        } else if let Some(size) = monitor {
            let area = WorkArea {
                x: 0.0,
                y: 0.0,
                width: size.x,
                height: size.y,
            };
            self.placement
                .resolve(area, outer.width(), outer.height(), right, bottom)
                .map(|(x, y)| egui::pos2(x, y))
        } else {
            None
        };

        if let Some(pos) = target {
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // The repaint loop doubles as the tick source for modifier polling;
        // the contract only needs bounded latency, not literal per-vsync.
        ctx.request_repaint_after(Duration::from_millis(16));

        self.ensure_controller(frame);
        if let Some(controller) = &mut self.controller {
            controller.on_tick(win_util::modifier_down());
            // Only reachable while interactive: a pass-through window never
            // receives the press in the first place.
            if ctx.input(|i| i.pointer.primary_pressed()) {
                controller.on_drag_requested();
            }
        }

        self.refresh_today_if_due();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_black_alpha(110))
                    .rounding(10.0)
                    .inner_margin(egui::Margin::symmetric(18.0, 12.0)),
            )
            .show(ctx, |ui| {
                for item in &self.items {
                    let days = item.days_remaining(self.today);
                    ui.label(
                        egui::RichText::new(&item.title)
                            .size(14.0)
                            .color(egui::Color32::from_gray(220)),
                    );
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(days.to_string())
                                .size(42.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        ui.label(
                            egui::RichText::new(unit_label(days, self.chinese))
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                    ui.add_space(6.0);
                }
            });

        self.place_window(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}
