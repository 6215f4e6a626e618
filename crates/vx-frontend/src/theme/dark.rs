//! Dark theme visuals for egui

use egui::{Color32, CornerRadius, Shadow, Stroke, Visuals};

use super::palette;

/// Create dark theme visuals
pub fn visuals() -> Visuals {
    let mut v = Visuals::dark();

    v.panel_fill = palette::BG_PANEL;
    v.window_fill = palette::BG_ELEVATED;
    v.extreme_bg_color = palette::BG_BASE;
    v.faint_bg_color = palette::BG_INPUT;

    v.selection.bg_fill = palette::ACCENT_SUBTLE;
    v.selection.stroke = Stroke::new(1.0, palette::ACCENT_PRIMARY);
    v.hyperlink_color = palette::ACCENT_PRIMARY;
    v.override_text_color = Some(palette::TEXT_PRIMARY);

    v.widgets.noninteractive.bg_fill = palette::BG_INPUT;
    v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette::BORDER_SUBTLE);
    v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette::TEXT_SECONDARY);
    v.widgets.inactive.bg_fill = palette::BG_INPUT;
    v.widgets.inactive.fg_stroke = Stroke::new(1.0, palette::TEXT_PRIMARY);
    v.widgets.hovered.bg_fill = palette::BG_HOVER;
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, palette::BORDER_NORMAL);
    v.widgets.active.bg_fill = palette::ACCENT_PRIMARY;
    v.widgets.active.bg_stroke = Stroke::new(1.0, palette::ACCENT_PRIMARY);
    v.widgets.open.bg_fill = palette::BG_ELEVATED;

    v.window_corner_radius = CornerRadius::same(6);
    v.window_stroke = Stroke::new(1.0, palette::BORDER_SUBTLE);
    v.window_shadow = Shadow {
        offset: [0, 4],
        blur: 16,
        spread: 0,
        color: Color32::from_black_alpha(80),
    };
    v.menu_corner_radius = CornerRadius::same(4);
    v.striped = true;
    v.slider_trailing_fill = true;

    v
}
