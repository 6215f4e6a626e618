//! Side panels and the panel switcher
//!
//! The left column holds a vertical tab strip with one entry per panel.
//! Selection is mutually exclusive: clicking an inactive tab opens that
//! panel, clicking the active tab closes it, and the panel header carries
//! its own close affordance.

mod cameras;
mod export;
mod image;
mod layers;
mod light;
mod material;
mod palette;
mod render;
mod tools;
mod view;

pub use cameras::CamerasPanel;
pub use export::ExportPanel;
pub use image::ImagePanel;
pub use layers::LayersPanel;
pub use light::LightPanel;
pub use material::MaterialPanel;
pub use palette::PalettePanel;
pub use render::RenderPanel;
pub use tools::ToolsPanel;
pub use view::ViewPanel;

use std::sync::Arc;

use crate::state::SharedAppState;

/// Identity of a side panel; the declaration order is the tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Tools,
    Palette,
    Layers,
    View,
    Material,
    Light,
    Cameras,
    Image,
    Render,
    Export,
}

impl PanelId {
    pub const ALL: [PanelId; 10] = [
        PanelId::Tools,
        PanelId::Palette,
        PanelId::Layers,
        PanelId::View,
        PanelId::Material,
        PanelId::Light,
        PanelId::Cameras,
        PanelId::Image,
        PanelId::Render,
        PanelId::Export,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PanelId::Tools => "Tools",
            PanelId::Palette => "Palette",
            PanelId::Layers => "Layers",
            PanelId::View => "View",
            PanelId::Material => "Material",
            PanelId::Light => "Light",
            PanelId::Cameras => "Cameras",
            PanelId::Image => "Image",
            PanelId::Render => "Render",
            PanelId::Export => "Export",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PanelId::Tools => "🖌",
            PanelId::Palette => "🎨",
            PanelId::Layers => "🗂",
            PanelId::View => "👁",
            PanelId::Material => "💎",
            PanelId::Light => "💡",
            PanelId::Cameras => "📷",
            PanelId::Image => "🖼",
            PanelId::Render => "✨",
            PanelId::Export => "📤",
        }
    }
}

/// Panel content rendered while its tab is selected
pub trait Panel {
    fn id(&self) -> PanelId;

    /// Draw the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState);
}

fn make_panels() -> Vec<Box<dyn Panel>> {
    vec![
        Box::new(ToolsPanel::default()),
        Box::new(PalettePanel::default()),
        Box::new(LayersPanel::default()),
        Box::new(ViewPanel::default()),
        Box::new(MaterialPanel::default()),
        Box::new(LightPanel::default()),
        Box::new(CamerasPanel::default()),
        Box::new(ImagePanel::default()),
        Box::new(RenderPanel::default()),
        Box::new(ExportPanel::default()),
    ]
}

/// Hook fired on tab clicks (click sound)
pub type ClickFeedback = Arc<dyn Fn() + Send + Sync>;

/// Owns which panel is visible and renders the tab strip plus the active
/// panel content
pub struct PanelSwitcher {
    current: Option<PanelId>,
    /// Content width of the last rendered panel; kept while the panel is
    /// closing so the left column can still size itself
    panel_width: f32,
    panels: Vec<Box<dyn Panel>>,
    feedback: Option<ClickFeedback>,
}

impl Default for PanelSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSwitcher {
    pub fn new() -> Self {
        Self {
            current: None,
            panel_width: crate::theme::Sizes::default().panel_width,
            panels: make_panels(),
            feedback: None,
        }
    }

    /// Install the click-feedback hook
    pub fn set_click_feedback(&mut self, feedback: Option<ClickFeedback>) {
        self.feedback = feedback;
    }

    pub fn current(&self) -> Option<PanelId> {
        self.current
    }

    /// Panel content width while a panel is open
    pub fn open_width(&self) -> Option<f32> {
        self.current.map(|_| self.panel_width)
    }

    pub fn set_panel_width(&mut self, width: f32) {
        self.panel_width = width;
    }

    /// Select `id`, or close it if it is already the current panel
    pub fn toggle(&mut self, id: PanelId) {
        if let Some(feedback) = &self.feedback {
            feedback();
        }
        self.current = if self.current == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Draw the vertical tab strip; at most one tab is active afterwards
    pub fn render_tabs(&mut self, ui: &mut egui::Ui, icon_size: f32) {
        let mut clicked = None;
        ui.vertical(|ui| {
            for id in PanelId::ALL {
                let selected = self.current == Some(id);
                let label = egui::RichText::new(id.icon()).size(icon_size * 0.6);
                let response = ui
                    .add_sized(
                        [icon_size, icon_size],
                        egui::SelectableLabel::new(selected, label),
                    )
                    .on_hover_text(id.name());
                if response.clicked() {
                    clicked = Some(id);
                }
            }
        });
        if let Some(id) = clicked {
            self.toggle(id);
        }
    }

    /// Draw the active panel, if any: a header with a close affordance,
    /// then the panel content
    pub fn render_active(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let Some(id) = self.current else {
            return;
        };

        let mut close = false;
        ui.vertical(|ui| {
            ui.set_width(self.panel_width);
            ui.horizontal(|ui| {
                ui.strong(id.name());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").on_hover_text("Close panel").clicked() {
                        close = true;
                    }
                });
            });
            ui.separator();

            // Unique widget ids per panel name so state does not bleed
            // between panels sharing widget layouts.
            ui.push_id(("panel", id.name()), |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(id.name())
                    .show(ui, |ui| {
                        if let Some(panel) = self.panels.iter_mut().find(|p| p.id() == id) {
                            panel.ui(ui, app_state);
                        }
                    });
            });
        });

        if close {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn toggle_selects_and_deselects() {
        let mut switcher = PanelSwitcher::new();
        assert_eq!(switcher.current(), None);

        switcher.toggle(PanelId::Tools);
        assert_eq!(switcher.current(), Some(PanelId::Tools));

        // Clicking the active tab closes it.
        switcher.toggle(PanelId::Tools);
        assert_eq!(switcher.current(), None);
    }

    #[test]
    fn selection_is_mutually_exclusive() {
        let mut switcher = PanelSwitcher::new();
        switcher.toggle(PanelId::Tools);
        switcher.toggle(PanelId::Layers);
        assert_eq!(switcher.current(), Some(PanelId::Layers));
    }

    #[test]
    fn double_toggle_from_closed_returns_to_closed() {
        let mut switcher = PanelSwitcher::new();
        switcher.toggle(PanelId::Palette);
        switcher.toggle(PanelId::Palette);
        assert_eq!(switcher.current(), None);
    }

    #[test]
    fn open_width_tracks_selection() {
        let mut switcher = PanelSwitcher::new();
        switcher.set_panel_width(240.0);
        assert_eq!(switcher.open_width(), None);

        switcher.toggle(PanelId::View);
        assert_eq!(switcher.open_width(), Some(240.0));

        switcher.close();
        assert_eq!(switcher.open_width(), None);
        // The recorded width survives closing.
        switcher.toggle(PanelId::View);
        assert_eq!(switcher.open_width(), Some(240.0));
    }

    #[test]
    fn click_feedback_fires_on_every_toggle() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let mut switcher = PanelSwitcher::new();
        switcher.set_click_feedback(Some(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })));

        switcher.toggle(PanelId::Tools);
        switcher.toggle(PanelId::Tools);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn every_panel_id_has_a_panel() {
        let panels = make_panels();
        for id in PanelId::ALL {
            assert!(panels.iter().any(|p| p.id() == id), "missing {:?}", id);
        }
        assert_eq!(panels.len(), PanelId::ALL.len());
    }
}
