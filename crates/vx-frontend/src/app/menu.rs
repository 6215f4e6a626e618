//! Menu bar rendering
//!
//! Menu items never mutate the document directly: they queue actions on
//! the session, open a popup, or fire a file dialog whose cancellation
//! silently drops the item.

use vx_core::{Image, ViewPreset};

use crate::app::popups::{PopupFlags, PopupKind, Popups};
use crate::state::{AppAction, SharedAppState};

/// Save is possible only when the content key moved past the saved one
pub(crate) fn save_enabled(image: &Image) -> bool {
    image.key() != image.saved_key()
}

/// Render the menu bar
pub fn render_menu_bar(ctx: &egui::Context, app_state: &SharedAppState, popups: &mut Popups) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| file_menu(ui, ctx, app_state, popups));
            ui.menu_button("Edit", |ui| edit_menu(ui, app_state, popups));
            ui.menu_button("View", |ui| view_menu(ui, app_state));
            ui.menu_button("Scripts", |ui| scripts_menu(ui, app_state, popups));
            ui.menu_button("Help", |ui| help_menu(ui, popups));
        });
    });
}

fn file_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    app_state: &SharedAppState,
    popups: &mut Popups,
) {
    if ui.button("New").clicked() {
        app_state.lock().queue_action(AppAction::NewImage);
        ui.close_menu();
    }

    let can_save = save_enabled(&app_state.lock().image);
    if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
        app_state.lock().queue_action(AppAction::Save { path: None });
        ui.close_menu();
    }
    if ui.button("Save as").clicked() {
        app_state.lock().queue_action(AppAction::SaveAs);
        ui.close_menu();
    }
    if ui.button("Open").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("VX document", &["vx"])
            .pick_file()
        {
            app_state.lock().queue_action(AppAction::Open { path });
        }
        ui.close_menu();
    }

    ui.menu_button("Import...", |ui| {
        if ui.button("image plane").clicked() {
            // Cancel leaves the document untouched.
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg"])
                .pick_file()
            {
                app_state
                    .lock()
                    .queue_action(AppAction::ImportImagePlane { path });
            }
            ui.close_menu();
        }

        let importers: Vec<(String, bool)> = {
            let state = app_state.lock();
            state
                .formats
                .import_formats()
                .map(|f| (f.name().to_string(), f.has_options()))
                .collect()
        };
        for (name, has_options) in importers {
            if !ui.button(&name).clicked() {
                continue;
            }
            if has_options {
                // Collect the options first; the popup dispatches the
                // import itself.
                let options = {
                    let state = app_state.lock();
                    state
                        .formats
                        .find(&name)
                        .map(|f| f.default_options())
                        .unwrap_or_default()
                };
                popups.open(
                    PopupKind::ImportOptions {
                        format: name,
                        options,
                    },
                    PopupFlags::default(),
                );
            } else {
                app_state.lock().queue_action(AppAction::ImportFile {
                    format: name,
                    path: None,
                    options: vx_core::FormatOptions::Null,
                });
            }
            ui.close_menu();
        }
    });

    ui.menu_button("Export As..", |ui| {
        let exporters: Vec<(String, Vec<String>)> = {
            let state = app_state.lock();
            state
                .formats
                .export_formats()
                .map(|f| {
                    (
                        f.name().to_string(),
                        f.extensions().iter().map(|e| e.to_string()).collect(),
                    )
                })
                .collect()
        };
        for (name, extensions) in exporters {
            if ui.button(&name).clicked() {
                let ext_refs: Vec<&str> = extensions.iter().map(|s| s.as_str()).collect();
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter(&name, &ext_refs)
                    .save_file()
                {
                    app_state
                        .lock()
                        .queue_action(AppAction::ExportFile { format: name, path });
                }
                ui.close_menu();
            }
        }
    });

    if ui.button("Quit").clicked() {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

fn edit_menu(ui: &mut egui::Ui, app_state: &SharedAppState, popups: &mut Popups) {
    let items = [
        ("Clear", AppAction::ClearLayer),
        ("Undo", AppAction::Undo),
        ("Redo", AppAction::Redo),
        ("Copy", AppAction::Copy),
        ("Paste", AppAction::Paste),
    ];
    for (label, action) in items {
        if ui.button(label).clicked() {
            app_state.lock().queue_action(action);
            ui.close_menu();
        }
    }
    ui.separator();
    if ui.button("Settings").clicked() {
        popups.open(PopupKind::Settings, PopupFlags::FULL_RESIZE);
        ui.close_menu();
    }
}

fn view_menu(ui: &mut egui::Ui, app_state: &SharedAppState) {
    let presets = [
        ("Left", ViewPreset::Left),
        ("Right", ViewPreset::Right),
        ("Front", ViewPreset::Front),
        ("Top", ViewPreset::Top),
    ];
    for (label, preset) in presets {
        if ui.button(label).clicked() {
            app_state.lock().queue_action(AppAction::SetView(preset));
            ui.close_menu();
        }
    }
    if ui.button("Toggle ortho").clicked() {
        app_state.lock().queue_action(AppAction::ToggleOrtho);
        ui.close_menu();
    }
    if ui.button("Default").clicked() {
        app_state
            .lock()
            .queue_action(AppAction::SetView(ViewPreset::Default));
        ui.close_menu();
    }
}

fn scripts_menu(ui: &mut egui::Ui, app_state: &SharedAppState, popups: &mut Popups) {
    if ui.button("About Scripts").clicked() {
        popups.open(PopupKind::AboutScripts, PopupFlags::default());
        ui.close_menu();
    }
    let names = app_state.lock().scripts.names();
    if !names.is_empty() {
        ui.separator();
    }
    for name in names {
        if ui.button(&name).clicked() {
            app_state.lock().queue_action(AppAction::RunScript(name));
            ui.close_menu();
        }
    }
}

fn help_menu(ui: &mut egui::Ui, popups: &mut Popups) {
    if ui.button("About").clicked() {
        popups.open(PopupKind::About, PopupFlags::default());
        ui.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_disabled_on_fresh_document() {
        let image = Image::new("fresh");
        assert!(!save_enabled(&image));
    }

    #[test]
    fn save_enabled_after_edit_until_saved() {
        let mut image = Image::new("doc");
        image.add_layer("edit");
        assert!(save_enabled(&image));
        image.mark_saved();
        assert!(!save_enabled(&image));
    }
}
