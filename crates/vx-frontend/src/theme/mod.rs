//! Theme module for UI styling

mod dark;
mod light;
pub mod palette;

use serde::{Deserialize, Serialize};

/// Selected color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

/// Widget sizes the layout composer builds its geometry from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizes {
    /// Side of the square tab/tool icons
    pub icons_height: f32,
    /// Height of a standard widget row
    pub item_height: f32,
    /// Horizontal padding around bar content
    pub item_padding_h: f32,
    /// Content width of an open side panel
    pub panel_width: f32,
}

impl Default for Sizes {
    fn default() -> Self {
        Self {
            icons_height: 32.0,
            item_height: 18.0,
            item_padding_h: 4.0,
            panel_width: 260.0,
        }
    }
}

/// Apply the selected theme to the egui context
pub fn apply_theme(ctx: &egui::Context, theme: UiTheme) {
    let visuals = match theme {
        UiTheme::Dark => dark::visuals(),
        UiTheme::Light => light::visuals(),
    };
    ctx.set_visuals(visuals);
}

/// Frame used for the floating bar windows; `alpha` is 1 for the opaque
/// normal layout and below 1 for compact overlays
pub fn bar_frame(ctx: &egui::Context, alpha: f32) -> egui::Frame {
    let fill = ctx.style().visuals.panel_fill;
    egui::Frame::window(&ctx.style()).fill(fill.gamma_multiply(alpha))
}
