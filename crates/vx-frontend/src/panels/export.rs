//! Export panel: output settings
//!
//! While visible it raises the per-frame export-viewport flag so the
//! canvas can preview the output framing.

use crate::panels::{Panel, PanelId};
use crate::state::{AppAction, SharedAppState};

#[derive(Default)]
pub struct ExportPanel;

impl Panel for ExportPanel {
    fn id(&self) -> PanelId {
        PanelId::Export
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (mut export, export_formats): (_, Vec<String>) = {
            let mut state = app_state.lock();
            // Reset every frame by the app; visible panel re-arms it.
            state.show_export_viewport = true;
            (
                state.export.clone(),
                state
                    .formats
                    .export_formats()
                    .map(|f| f.name().to_string())
                    .collect(),
            )
        };

        ui.horizontal(|ui| {
            ui.label("Size");
            ui.add(egui::DragValue::new(&mut export.width).range(16..=8192));
            ui.label("x");
            ui.add(egui::DragValue::new(&mut export.height).range(16..=8192));
        });
        ui.checkbox(&mut export.transparent_background, "Transparent background");

        ui.separator();
        for format in export_formats {
            if ui.button(format!("Export as {format}...")).clicked() {
                let extensions: Vec<String> = {
                    let state = app_state.lock();
                    state
                        .formats
                        .find(&format)
                        .map(|f| f.extensions().iter().map(|e| e.to_string()).collect())
                        .unwrap_or_default()
                };
                let ext_refs: Vec<&str> = extensions.iter().map(|s| s.as_str()).collect();
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter(&format, &ext_refs)
                    .save_file()
                {
                    app_state.lock().queue_action(AppAction::ExportFile {
                        format: format.clone(),
                        path,
                    });
                }
            }
        }

        app_state.lock().export = export;
    }
}
