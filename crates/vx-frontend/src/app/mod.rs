//! Main application module
//!
//! Per-frame order: drain the action queue, draw the menu bar, compute the
//! screen layout, paint the canvas, draw the bar regions, arbitrate the
//! pointer, forward input to the 3D view, then show the active popup.

pub mod input;
pub mod layout;
mod menu;
mod popups;

use std::sync::Arc;

pub use layout::{LayoutMode, ScreenLayout};
pub use menu::render_menu_bar;
pub use popups::{PopupFlags, PopupKind, Popups};

use crate::actions::dispatch_action;
use crate::config::AppConfig;
use crate::panels::{PanelId, PanelSwitcher};
use crate::state::{AppAction, SharedAppState, create_shared_state};
use crate::theme::{self, Sizes, UiTheme};
use crate::view::{PlaceholderView, ViewRenderer};
use input::{Region, RegionId, arbitrate, gather_view_inputs};

/// One fixed-rect floating window for a bar region
fn bar_area(
    ctx: &egui::Context,
    id: &'static str,
    rect: egui::Rect,
    alpha: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Area::new(egui::Id::new(id))
        .movable(false)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            theme::bar_frame(ctx, alpha).show(ui, |ui| {
                ui.set_min_width(rect.width() - 16.0);
                ui.set_max_width(rect.width());
                ui.set_max_height(rect.height());
                add_contents(ui);
            });
        });
}

/// Main application
pub struct VoxEditorApp {
    config: AppConfig,
    app_state: SharedAppState,
    switcher: PanelSwitcher,
    popups: Popups,
    view: Box<dyn ViewRenderer>,
    sizes: Sizes,
    /// Last theme pushed to the egui context
    applied_theme: Option<UiTheme>,
    click_feedback_installed: bool,
}

impl VoxEditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load(cc.storage);
        let mut app = Self {
            config,
            app_state: create_shared_state(),
            switcher: PanelSwitcher::new(),
            popups: Popups::default(),
            view: Box::new(PlaceholderView::default()),
            sizes: Sizes::default(),
            applied_theme: None,
            click_feedback_installed: false,
        };
        app.sync_click_feedback();
        app
    }

    /// Swap in a real renderer once an engine is available
    pub fn with_view(mut self, view: Box<dyn ViewRenderer>) -> Self {
        self.view = view;
        self
    }

    fn sync_click_feedback(&mut self) {
        if self.config.click_sound == self.click_feedback_installed {
            return;
        }
        self.click_feedback_installed = self.config.click_sound;
        self.switcher.set_click_feedback(
            self.config
                .click_sound
                // Audio backend is not wired up; the hook keeps the
                // side-effect point where the sound call belongs.
                .then(|| Arc::new(|| tracing::debug!("click")) as Arc<dyn Fn() + Send + Sync>),
        );
    }

    /// Process pending actions
    fn process_actions(&mut self) {
        let actions = self.app_state.lock().take_pending_actions();
        for action in actions {
            dispatch_action(action, &self.app_state);
        }
    }

    fn top_bar_ui(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("↶").on_hover_text("Undo").clicked() {
                self.app_state.lock().queue_action(AppAction::Undo);
            }
            if ui.button("↷").on_hover_text("Redo").clicked() {
                self.app_state.lock().queue_action(AppAction::Redo);
            }
            ui.separator();

            let (tool, color) = {
                let state = self.app_state.lock();
                (state.current_tool, state.painter.color)
            };
            ui.label(tool.name());
            let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
            ui.painter().rect_filled(
                rect,
                3.0,
                egui::Color32::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]),
            );
        });
    }

    fn bottom_bar_ui(&self, ui: &mut egui::Ui) {
        let (hint, help) = {
            let state = self.app_state.lock();
            (state.hint_text.clone(), state.help_text.clone())
        };
        ui.horizontal(|ui| {
            ui.label(hint.unwrap_or_default());
            ui.add_space(180.0);
            ui.label(help.unwrap_or_default());
        });
    }

    /// Rotation bar widgets: nudge the camera yaw in steps
    fn rotation_bar_ui(&self, ui: &mut egui::Ui) {
        let step = 15_f32.to_radians();
        ui.vertical(|ui| {
            if ui.button("⟲").on_hover_text("Rotate left").clicked() {
                self.rotate_camera(step);
            }
            if ui.button("⟳").on_hover_text("Rotate right").clicked() {
                self.rotate_camera(-step);
            }
        });
    }

    fn rotate_camera(&self, angle: f32) {
        let mut state = self.app_state.lock();
        if let Some(camera) = state.image.active_camera_mut() {
            camera.rotation = glam::Quat::from_rotation_y(angle) * camera.rotation;
        }
    }

    /// Icon strip plus the active panel content
    fn left_column_ui(&mut self, ui: &mut egui::Ui) {
        let app_state = self.app_state.clone();
        let icon_size = self.sizes.icons_height;
        ui.horizontal_top(|ui| {
            self.switcher.render_tabs(ui, icon_size);
            if self.switcher.current().is_some() {
                ui.separator();
                self.switcher.render_active(ui, &app_state);
            }
        });
    }
}

impl eframe::App for VoxEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.config.theme) {
            theme::apply_theme(ctx, self.config.theme);
            self.applied_theme = Some(self.config.theme);
        }
        self.sync_click_feedback();

        self.process_actions();

        // Menu bar, independent of the layout mode.
        render_menu_bar(ctx, &self.app_state, &mut self.popups);

        // Per-frame flag; the Export panel re-arms it while visible.
        self.app_state.lock().show_export_viewport = false;

        self.switcher.set_panel_width(self.sizes.panel_width);
        let safe_rect = ctx.available_rect();
        let screen = layout::compute(
            self.config.layout,
            safe_rect,
            &self.sizes,
            self.switcher.open_width(),
            self.config.rotation_bar,
        );

        // Canvas first, painted below every bar window.
        let render_mode = {
            let state = self.app_state.lock();
            self.switcher.current() == Some(PanelId::Render) && state.pathtracer.running
        };
        let painter = ctx.layer_painter(egui::LayerId::background());
        self.view.render(&painter, screen.canvas, render_mode);
        self.app_state.lock().viewport = screen.canvas;

        // Bar regions, recorded topmost-first for arbitration.
        let mut overlays = Vec::new();

        if let Some(rect) = screen.rotation_bar {
            bar_area(ctx, "rotation_bar", rect, screen.alpha, |ui| {
                self.rotation_bar_ui(ui);
            });
            overlays.push(Region::new(RegionId::RotationBar, rect));
        }

        bar_area(ctx, "top_bar", screen.top_bar, screen.alpha, |ui| {
            self.top_bar_ui(ui);
        });
        overlays.push(Region::new(RegionId::TopBar, screen.top_bar));

        let left_rect = screen.left_panel;
        bar_area(ctx, "left_panel", left_rect, screen.alpha, |ui| {
            self.left_column_ui(ui);
        });
        overlays.push(Region::new(RegionId::LeftPanel, left_rect));

        if let Some(rect) = screen.bottom_bar {
            bar_area(ctx, "bottom_bar", rect, screen.alpha, |ui| {
                self.bottom_bar_ui(ui);
            });
            overlays.push(Region::new(RegionId::BottomBar, rect));
        }

        // Pointer arbitration: a bar window above the canvas owns the
        // pointer even when the canvas is hovered underneath.
        let pointer = ctx.input(|i| i.pointer.hover_pos());
        let owner = arbitrate(pointer, &overlays, screen.canvas);
        if owner == Some(RegionId::Canvas) && !ctx.is_pointer_over_area() {
            let viewport = self.app_state.lock().viewport;
            debug_assert_eq!(viewport.size(), screen.canvas.size());
            let inputs = gather_view_inputs(ctx, viewport);
            let has_keyboard = !ctx.wants_keyboard_input();
            self.view.on_input(viewport, &inputs, has_keyboard);
        }

        self.popups.show(ctx, &self.app_state, &mut self.config);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config.save(storage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Layout-mode changes must only affect geometry; the switcher keeps
    // its selection across a mode change.
    #[test]
    fn mode_change_preserves_panel_selection() {
        let mut config = AppConfig::default();
        let mut switcher = PanelSwitcher::new();
        switcher.toggle(PanelId::Layers);

        config.layout = LayoutMode::Compact;
        let sizes = Sizes::default();
        let safe = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 800.0));
        let compact = layout::compute(
            config.layout,
            safe,
            &sizes,
            switcher.open_width(),
            config.rotation_bar,
        );
        config.layout = LayoutMode::Normal;
        let normal = layout::compute(
            config.layout,
            safe,
            &sizes,
            switcher.open_width(),
            config.rotation_bar,
        );

        assert_eq!(switcher.current(), Some(PanelId::Layers));
        assert_eq!(compact.left_panel.width(), normal.left_panel.width());
    }
}
