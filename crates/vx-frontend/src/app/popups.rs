//! Modal popups opened from the menu
//!
//! One popup may be open at a time. Content renderers return true to close
//! the popup. The import-options popup carries its format name and options
//! draft in the popup itself, so the transient state dies with it.

use vx_core::FormatOptions;

use crate::config::AppConfig;
use crate::state::{AppAction, SharedAppState};
use crate::theme::UiTheme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupFlags {
    /// Take up most of the screen
    pub full: bool,
    pub resizable: bool,
}

impl PopupFlags {
    pub const FULL_RESIZE: PopupFlags = PopupFlags {
        full: true,
        resizable: true,
    };
}

/// The popup contents the menu can open
#[derive(Debug, Clone, PartialEq)]
pub enum PopupKind {
    Settings,
    About,
    AboutScripts,
    /// Options collected before an import is dispatched
    ImportOptions {
        format: String,
        options: FormatOptions,
    },
}

impl PopupKind {
    fn title(&self) -> &str {
        match self {
            PopupKind::Settings => "Settings",
            PopupKind::About => "About",
            PopupKind::AboutScripts => "Scripts",
            PopupKind::ImportOptions { .. } => "Import",
        }
    }
}

/// Single-slot popup holder
#[derive(Default)]
pub struct Popups {
    active: Option<(PopupKind, PopupFlags)>,
}

impl Popups {
    pub fn open(&mut self, kind: PopupKind, flags: PopupFlags) {
        self.active = Some((kind, flags));
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Render the active popup, if any
    pub fn show(&mut self, ctx: &egui::Context, app_state: &SharedAppState, config: &mut AppConfig) {
        let Some((kind, flags)) = &mut self.active else {
            return;
        };

        let mut window = egui::Window::new(kind.title())
            .collapsible(false)
            .resizable(flags.resizable)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO);
        if flags.full {
            let size = ctx.screen_rect().shrink(60.0).size();
            window = window.min_size(size);
        }

        let mut close = false;
        window.show(ctx, |ui| {
            close = match kind {
                PopupKind::Settings => settings_content(ui, config),
                PopupKind::About => about_content(ui),
                PopupKind::AboutScripts => about_scripts_content(ui),
                PopupKind::ImportOptions { format, options } => {
                    import_options_content(ui, app_state, format, options)
                }
            };
        });

        if close {
            self.active = None;
        }
    }
}

fn settings_content(ui: &mut egui::Ui, config: &mut AppConfig) -> bool {
    ui.label("Theme");
    ui.horizontal(|ui| {
        ui.selectable_value(&mut config.theme, UiTheme::Dark, "Dark");
        ui.selectable_value(&mut config.theme, UiTheme::Light, "Light");
    });

    ui.separator();
    ui.label("Layout");
    ui.horizontal(|ui| {
        use crate::app::LayoutMode;
        ui.selectable_value(&mut config.layout, LayoutMode::Normal, "Normal");
        ui.selectable_value(&mut config.layout, LayoutMode::Compact, "Compact");
    });

    ui.separator();
    ui.checkbox(&mut config.click_sound, "Click sound");
    ui.checkbox(&mut config.rotation_bar, "Rotation bar (compact layout)");

    ui.separator();
    ui.button("Close").clicked()
}

fn about_content(ui: &mut egui::Ui) -> bool {
    ui.heading("VX Editor");
    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
    ui.label("A 3D voxel editor.");
    ui.separator();
    ui.button("OK").clicked()
}

fn about_scripts_content(ui: &mut egui::Ui) -> bool {
    ui.label(
        "Scripts appear in the Scripts menu once they are registered. \
         Each script runs against the current document.",
    );
    ui.separator();
    ui.button("OK").clicked()
}

/// Generic options editor over the format's JSON options template
fn import_options_content(
    ui: &mut egui::Ui,
    app_state: &SharedAppState,
    format: &str,
    options: &mut FormatOptions,
) -> bool {
    if let Some(object) = options.as_object_mut() {
        for (key, value) in object.iter_mut() {
            let replacement = match value {
                serde_json::Value::Bool(b) => {
                    ui.checkbox(b, key.as_str());
                    None
                }
                serde_json::Value::Number(n) => {
                    let mut v = n.as_f64().unwrap_or(0.0);
                    if ui
                        .add(egui::DragValue::new(&mut v).prefix(format!("{key}: ")))
                        .changed()
                    {
                        serde_json::Number::from_f64(v).map(serde_json::Value::Number)
                    } else {
                        None
                    }
                }
                serde_json::Value::String(s) => {
                    ui.horizontal(|ui| {
                        ui.label(key.as_str());
                        ui.text_edit_singleline(s);
                    });
                    None
                }
                _ => None,
            };
            if let Some(replacement) = replacement {
                *value = replacement;
            }
        }
    } else {
        ui.weak("This format has no import options.");
    }

    ui.separator();
    if ui.button("OK").clicked() {
        app_state.lock().queue_action(AppAction::ImportFile {
            format: format.to_string(),
            path: None,
            options: options.clone(),
        });
        return true;
    }
    ui.button("Cancel").clicked()
}
