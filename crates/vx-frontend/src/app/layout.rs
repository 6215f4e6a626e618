//! Screen layout composer
//!
//! Computes the frame's region rectangles from the safe area, the theme
//! sizes and the panel-switcher width. Two modes: `Normal` stacks opaque
//! bars around the canvas, `Compact` gives the canvas the whole safe area
//! and floats translucent bars on top of it.

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::theme::Sizes;

/// Which screen composition to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    Normal,
    /// Overlay layout for small screens: bars float over the canvas
    Compact,
}

/// Opacity of floating windows in compact mode
pub const COMPACT_ALPHA: f32 = 0.85;

/// Region rectangles for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub mode: LayoutMode,
    pub top_bar: Rect,
    pub left_panel: Rect,
    /// Status bar, normal mode only
    pub bottom_bar: Option<Rect>,
    /// Rotation bar on the right edge, compact mode only
    pub rotation_bar: Option<Rect>,
    pub canvas: Rect,
    /// Window opacity for the bar regions
    pub alpha: f32,
}

/// Height of the top tool bar
pub fn top_bar_height(sizes: &Sizes) -> f32 {
    sizes.icons_height + 2.0 * sizes.item_padding_h
}

/// Width of the left column: icon strip plus the open panel, if any
pub fn left_panel_width(sizes: &Sizes, panel_width: Option<f32>) -> f32 {
    panel_width.unwrap_or(0.0) + sizes.icons_height + 2.0 * sizes.item_padding_h
}

/// Compute the frame's regions.
///
/// `safe_rect` is the screen area below the menu bar. `panel_width` is
/// `Some(width)` while a side panel is open; a closed panel collapses the
/// left column to the icon strip so the canvas reflows immediately.
pub fn compute(
    mode: LayoutMode,
    safe_rect: Rect,
    sizes: &Sizes,
    panel_width: Option<f32>,
    rotation_bar: bool,
) -> ScreenLayout {
    let top_h = top_bar_height(sizes);
    let left_w = left_panel_width(sizes, panel_width);

    match mode {
        LayoutMode::Normal => {
            let bottom_h = sizes.item_height + 2.0 * sizes.item_padding_h;
            let top_bar = Rect::from_min_size(safe_rect.min, Vec2::new(safe_rect.width(), top_h));
            let left_panel = Rect::from_min_max(
                Pos2::new(safe_rect.left(), safe_rect.top() + top_h),
                Pos2::new(safe_rect.left() + left_w, safe_rect.bottom() - bottom_h),
            );
            let bottom_bar = Rect::from_min_max(
                Pos2::new(safe_rect.left() + left_w, safe_rect.bottom() - bottom_h),
                Pos2::new(safe_rect.right(), safe_rect.bottom()),
            );
            let canvas = Rect::from_min_max(
                Pos2::new(safe_rect.left() + left_w, safe_rect.top() + top_h),
                Pos2::new(safe_rect.right(), safe_rect.bottom() - bottom_h),
            );
            ScreenLayout {
                mode,
                top_bar,
                left_panel,
                bottom_bar: Some(bottom_bar),
                rotation_bar: None,
                canvas,
                alpha: 1.0,
            }
        }
        LayoutMode::Compact => {
            let canvas = safe_rect.shrink(1.0);
            let top_bar = Rect::from_min_size(safe_rect.min, Vec2::new(safe_rect.width(), top_h));
            let left_panel = Rect::from_min_max(
                Pos2::new(safe_rect.left(), safe_rect.top() + top_h),
                Pos2::new(safe_rect.left() + left_w, safe_rect.bottom()),
            );
            let rotation_bar = rotation_bar.then(|| {
                Rect::from_min_max(
                    Pos2::new(safe_rect.right() - sizes.item_height, safe_rect.top() + top_h),
                    Pos2::new(safe_rect.right(), safe_rect.bottom()),
                )
            });
            ScreenLayout {
                mode,
                top_bar,
                left_panel,
                bottom_bar: None,
                rotation_bar,
                canvas,
                alpha: COMPACT_ALPHA,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safe_rect() -> Rect {
        Rect::from_min_size(Pos2::new(0.0, 20.0), Vec2::new(1280.0, 780.0))
    }

    #[test]
    fn normal_mode_stacks_regions() {
        let sizes = Sizes::default();
        let layout = compute(LayoutMode::Normal, safe_rect(), &sizes, Some(260.0), false);
        let top_h = top_bar_height(&sizes);
        let left_w = left_panel_width(&sizes, Some(260.0));
        let bottom = layout.bottom_bar.unwrap();

        assert_eq!(layout.top_bar.height(), top_h);
        assert_eq!(layout.top_bar.width(), 1280.0);
        assert_eq!(layout.left_panel.width(), left_w);
        assert_eq!(layout.canvas.left(), left_w);
        assert_eq!(layout.canvas.top(), 20.0 + top_h);
        assert_eq!(layout.canvas.bottom(), bottom.top());
        assert_eq!(bottom.left(), left_w);
        assert_eq!(layout.alpha, 1.0);
        assert!(layout.rotation_bar.is_none());
    }

    #[test]
    fn closed_panel_collapses_left_column() {
        let sizes = Sizes::default();
        let open = compute(LayoutMode::Normal, safe_rect(), &sizes, Some(260.0), false);
        let closed = compute(LayoutMode::Normal, safe_rect(), &sizes, None, false);

        let strip = sizes.icons_height + 2.0 * sizes.item_padding_h;
        assert_eq!(closed.left_panel.width(), strip);
        assert_eq!(open.left_panel.width() - closed.left_panel.width(), 260.0);
        // The canvas reflows to take the freed width.
        assert_eq!(
            closed.canvas.width() - open.canvas.width(),
            260.0
        );
    }

    #[test]
    fn compact_mode_canvas_fills_safe_area() {
        let sizes = Sizes::default();
        let layout = compute(LayoutMode::Compact, safe_rect(), &sizes, Some(260.0), true);

        assert_eq!(layout.canvas, safe_rect().shrink(1.0));
        assert!(layout.bottom_bar.is_none());
        assert_eq!(layout.alpha, COMPACT_ALPHA);
        let rotation = layout.rotation_bar.unwrap();
        assert_eq!(rotation.width(), sizes.item_height);
        assert_eq!(rotation.right(), safe_rect().right());
        // Overlays sit inside the canvas area.
        assert!(safe_rect().contains_rect(layout.left_panel));
    }

    #[test]
    fn left_column_width_matches_in_both_modes() {
        let sizes = Sizes::default();
        for width in [None, Some(180.0), Some(260.0)] {
            let normal = compute(LayoutMode::Normal, safe_rect(), &sizes, width, false);
            let compact = compute(LayoutMode::Compact, safe_rect(), &sizes, width, false);
            assert_eq!(normal.left_panel.width(), compact.left_panel.width());
            assert_eq!(normal.left_panel.width(), left_panel_width(&sizes, width));
        }
    }
}
