//! Light theme visuals for egui

use egui::{Color32, CornerRadius, Shadow, Stroke, Visuals};

use super::palette::{self, light};

/// Create light theme visuals
pub fn visuals() -> Visuals {
    let mut v = Visuals::light();

    v.panel_fill = light::BG_PANEL;
    v.window_fill = light::BG_ELEVATED;
    v.extreme_bg_color = light::BG_BASE;
    v.faint_bg_color = light::BG_INPUT;

    v.selection.bg_fill = palette::ACCENT_SUBTLE;
    v.selection.stroke = Stroke::new(1.0, palette::ACCENT_PRIMARY);
    v.hyperlink_color = palette::ACCENT_PRIMARY;
    v.override_text_color = Some(light::TEXT_PRIMARY);

    v.widgets.noninteractive.bg_fill = light::BG_INPUT;
    v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, light::BORDER_SUBTLE);
    v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, light::TEXT_SECONDARY);
    v.widgets.inactive.bg_fill = light::BG_INPUT;
    v.widgets.inactive.fg_stroke = Stroke::new(1.0, light::TEXT_PRIMARY);
    v.widgets.hovered.bg_fill = light::BG_HOVER;
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, light::BORDER_NORMAL);
    v.widgets.active.bg_fill = palette::ACCENT_PRIMARY;
    v.widgets.active.bg_stroke = Stroke::new(1.0, palette::ACCENT_PRIMARY);
    v.widgets.open.bg_fill = light::BG_ELEVATED;

    v.window_corner_radius = CornerRadius::same(6);
    v.window_stroke = Stroke::new(1.0, light::BORDER_SUBTLE);
    v.window_shadow = Shadow {
        offset: [0, 4],
        blur: 16,
        spread: 0,
        color: Color32::from_black_alpha(30),
    };
    v.menu_corner_radius = CornerRadius::same(4);
    v.striped = true;
    v.slider_trailing_fill = true;

    v
}
