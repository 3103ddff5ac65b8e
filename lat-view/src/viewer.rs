//! Interactive hard-disk configuration viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the packing parameters and the
//! generated configuration and implements [`eframe::App`] to draw the box
//! with its 3x3 periodic tiling and to rebuild the configuration when the
//! parameters are edited.

use eframe::App;
use glam::Vec2;
use lat_core::{
    config::Config,
    error::LatticeError,
    lattice::{self, LatticeKind},
    packing, pbc,
};

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The generation pipeline: [`Config`], box length, position set.
/// - UI state (pan/zoom, last build error).
/// - eframe/egui callbacks for drawing and parameter editing.
///
/// Edits in the side panel only take effect when Rebuild is clicked; a
/// failed rebuild keeps the previous configuration on screen and shows the
/// error instead.
pub struct Viewer {
    cfg: Config,
    box_len: f32,
    positions: Vec<Vec2>,
    build_error: Option<String>,

    zoom: f32,
    pan: egui::Vec2,
}

impl Viewer {
    /// Runs the generation pipeline for `cfg` and wraps the result in a
    /// viewer with the camera framing the whole box.
    pub fn new(cfg: Config) -> Result<Self, LatticeError> {
        let (box_len, positions) = Self::generate(&cfg)?;
        Ok(Self {
            cfg,
            box_len,
            positions,
            build_error: None,
            zoom: Self::framing_zoom(box_len),
            pan: egui::vec2(0.0, 0.0),
        })
    }

    /// Box edge length of the current configuration.
    pub fn box_len(&self) -> f32 {
        self.box_len
    }

    /// Wrapped disk centers of the current configuration.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Zoom level that makes the box roughly fill a default window.
    fn framing_zoom(box_len: f32) -> f32 {
        480.0 / box_len
    }

    /// Box length and positions for the given parameters.
    fn generate(cfg: &Config) -> Result<(f32, Vec<Vec2>), LatticeError> {
        let l = packing::box_length(cfg.n, cfg.eta, cfg.sigma)?;
        let positions = lattice::build(cfg, l, &mut cfg.rng())?;
        Ok((l, positions))
    }

    /// Re-runs the pipeline with the edited parameters.
    ///
    /// On success the new configuration replaces the old one; on failure the
    /// old configuration stays on screen and the error is shown in the
    /// config panel.
    fn rebuild(&mut self) {
        match Self::generate(&self.cfg) {
            Ok((l, positions)) => {
                log::info!("placed {} disks, L = {l:.5}", positions.len());
                self.box_len = l;
                self.positions = positions;
                self.build_error = None;
            }
            Err(e) => {
                log::warn!("rebuild failed: {e}");
                self.build_error = Some(e.to_string());
            }
        }
    }

    /// Converts a world-space position to screen-space.
    ///
    /// The box center maps to the center of `rect`, world coordinates are
    /// scaled by `zoom` and offset by `pan`, and the y-axis is flipped so
    /// that positive y goes up in world space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        let half = self.box_len * 0.5;
        egui::pos2(
            center.x + (p.x - half) * self.zoom + self.pan.x,
            center.y - (p.y - half) * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`] (up to floating point rounding).
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let half = self.box_len * 0.5;
        let x = (p.x - center.x - self.pan.x) / self.zoom + half;
        let y = (center.y - p.y + self.pan.y) / self.zoom + half;
        Vec2::new(x, y)
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (rebuild, camera reset, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Rebuild").clicked() {
                    self.rebuild();
                }
                if ui.button("Reset view").clicked() {
                    self.zoom = Self::framing_zoom(self.box_len);
                    self.pan = egui::vec2(0.0, 0.0);
                }
                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 10.0..=2000.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (disk count, box length, realized eta).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "η realized = {:.4}",
                    packing::packing_fraction(self.positions.len(), self.cfg.sigma, self.box_len)
                ));
                ui.label(format!("L = {:.5}", self.box_len));
                ui.separator();
                ui.label(format!("disks = {}", self.positions.len()));
            });
        });
    }

    /// Builds the right-hand panel for editing the packing parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Packing");

                ui.separator();
                ui.label("Lattice");
                if ui
                    .selectable_label(matches!(self.cfg.lattice, LatticeKind::Square), "▦ Square")
                    .clicked()
                {
                    self.cfg.lattice = LatticeKind::Square;
                }
                if ui
                    .selectable_label(matches!(self.cfg.lattice, LatticeKind::Hex), "⬡ Hex")
                    .clicked()
                {
                    self.cfg.lattice = LatticeKind::Hex;
                }

                ui.separator();
                ui.label("Parameters");
                Self::labeled_drag_usize(ui, "n:", &mut self.cfg.n, 1..=100_000, 1.0);
                Self::labeled_drag_f32(ui, "eta:", &mut self.cfg.eta, 0.01..=0.99, 0.005);
                Self::labeled_drag_f32(ui, "sigma:", &mut self.cfg.sigma, 0.01..=10.0, 0.01);

                ui.separator();
                ui.label("Hex jitter");
                Self::labeled_drag_f32(ui, "jitter:", &mut self.cfg.jitter, 0.0..=1.0, 0.005);
                ui.horizontal(|ui| {
                    ui.label("seed:");
                    ui.add(egui::DragValue::new(&mut self.cfg.seed).speed(1.0));
                });

                ui.separator();
                ui.label("Square spacing pad");
                Self::labeled_drag_f32(ui, "pad:", &mut self.cfg.spacing_pad, 0.0..=2.0, 0.01);

                ui.separator();
                if ui.button("Rebuild").clicked() {
                    self.rebuild();
                }
                if ui.button("Reset to defaults").clicked() {
                    self.cfg = Config::default();
                    self.rebuild();
                }

                if let Some(err) = &self.build_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err.as_str());
                }
            });
    }

    /// Builds the central panel where the tiled configuration is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            // Zoom around the mouse cursor.
            if ui.ctx().input(|i| i.raw_scroll_delta.y != 0.0) {
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    self.zoom = (self.zoom * factor).clamp(10.0, 2000.0);

                    let screen_after = self.world_to_screen(world_before, rect);

                    let delta = pointer_screen - screen_after;
                    self.pan += delta;
                }
            }

            // Draw every periodic image as a filled disk. The pad keeps
            // exactly the images whose circles can reach into the box.
            let pad = self.cfg.sigma / 2.0;
            let r = (pad * self.zoom).max(1.0);
            let stroke = egui::Stroke::new(0.5, egui::Color32::BLACK);
            for image in pbc::periodic_images(&self.positions, self.box_len, pad) {
                let p = self.world_to_screen(image, rect);
                painter.circle(p, r, egui::Color32::LIGHT_BLUE, stroke);
            }

            // Box outline on top of the disks.
            let l = self.box_len;
            let corners = [
                Vec2::new(0.0, 0.0),
                Vec2::new(l, 0.0),
                Vec2::new(l, l),
                Vec2::new(0.0, l),
            ];
            let outline: Vec<egui::Pos2> = corners
                .iter()
                .map(|&c| self.world_to_screen(c, rect))
                .collect();
            painter.add(egui::Shape::closed_line(
                outline,
                egui::Stroke::new(1.0, egui::Color32::WHITE),
            ));
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new(Config::default()).unwrap();
        // Use non-trivial zoom and pan to exercise the math.
        viewer.zoom = 120.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.6, 0.4),
            Vec2::new(3.2, 2.9),
        ];

        let eps = 1e-4;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn new_runs_the_demo_pipeline() {
        let viewer = Viewer::new(Config::default()).unwrap();

        // 10x10 square grid at the stock parameters.
        assert_eq!(viewer.positions().len(), 100);
        assert!((viewer.box_len() - 3.22412).abs() < 1e-4);
        assert!(viewer.build_error.is_none());
    }

    #[test]
    fn new_rejects_degenerate_parameters() {
        let cfg = Config {
            eta: 1.5,
            ..Config::default()
        };
        assert!(matches!(
            Viewer::new(cfg),
            Err(LatticeError::InvalidParameter { name: "eta", .. })
        ));
    }

    #[test]
    fn rebuild_switches_lattice_kind() {
        let mut viewer = Viewer::new(Config::default()).unwrap();
        viewer.cfg.lattice = LatticeKind::Hex;

        viewer.rebuild();

        assert!(viewer.build_error.is_none());
        assert_eq!(viewer.positions().len(), 100);
    }

    #[test]
    fn failed_rebuild_keeps_previous_configuration() {
        let mut viewer = Viewer::new(Config::default()).unwrap();
        let old_len = viewer.box_len();
        let old_positions = viewer.positions().to_vec();

        // The legacy half-unit pad oversubscribes the grid (16 sites for
        // 100 disks), so this rebuild must fail.
        viewer.cfg.spacing_pad = 0.5;
        viewer.rebuild();

        let err = viewer.build_error.as_deref().unwrap();
        assert!(err.contains("100"), "{err}");
        assert_eq!(viewer.box_len(), old_len);
        assert_eq!(viewer.positions(), old_positions.as_slice());
    }

    #[test]
    fn failed_rebuild_reports_invalid_parameters() {
        let mut viewer = Viewer::new(Config::default()).unwrap();
        viewer.cfg.eta = 1.5;

        viewer.rebuild();

        let err = viewer.build_error.as_deref().unwrap();
        assert!(err.contains("eta"), "{err}");
    }
}
