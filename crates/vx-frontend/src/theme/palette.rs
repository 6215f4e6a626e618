//! Color palette for the UI theme

use egui::Color32;

// Background hierarchy (dark to light)

/// Canvas background
pub const BG_BASE: Color32 = Color32::from_rgb(22, 22, 26);
/// Panel background
pub const BG_PANEL: Color32 = Color32::from_rgb(32, 32, 38);
/// Elevated surfaces (overlays, popups)
pub const BG_ELEVATED: Color32 = Color32::from_rgb(40, 40, 47);
/// Input field background
pub const BG_INPUT: Color32 = Color32::from_rgb(48, 48, 56);
/// Hover state background
pub const BG_HOVER: Color32 = Color32::from_rgb(58, 58, 68);

// Borders

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(52, 52, 60);
pub const BORDER_NORMAL: Color32 = Color32::from_rgb(68, 68, 78);

// Text hierarchy

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 228, 233);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(158, 158, 168);

// Accent (amber, voxel-editor house color)

pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(255, 170, 60);
pub const ACCENT_SUBTLE: Color32 = Color32::from_rgba_premultiplied(255, 170, 60, 30);

/// Error color for status messages
pub const ERROR: Color32 = Color32::from_rgb(255, 90, 90);

/// Light theme colors
pub mod light {
    use egui::Color32;

    pub const BG_BASE: Color32 = Color32::from_rgb(244, 244, 247);
    pub const BG_PANEL: Color32 = Color32::from_rgb(250, 250, 252);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BG_INPUT: Color32 = Color32::from_rgb(238, 238, 242);
    pub const BG_HOVER: Color32 = Color32::from_rgb(228, 228, 234);

    pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(218, 218, 224);
    pub const BORDER_NORMAL: Color32 = Color32::from_rgb(198, 198, 208);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 32, 38);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(92, 92, 102);
}
