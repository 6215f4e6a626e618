//! Image panel: document properties

use crate::panels::{Panel, PanelId};
use crate::state::SharedAppState;

pub struct ImagePanel {
    /// Edit buffer; committed on "Rename" so every keystroke does not
    /// become an undo step
    name_edit: Option<String>,
}

impl Default for ImagePanel {
    fn default() -> Self {
        Self { name_edit: None }
    }
}

impl Panel for ImagePanel {
    fn id(&self) -> PanelId {
        PanelId::Image
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (name, path, layer_count, dirty) = {
            let state = app_state.lock();
            (
                state.image.name.clone(),
                state.image.path.clone(),
                state.image.layers.len(),
                state.is_dirty(),
            )
        };

        let edit = self.name_edit.get_or_insert_with(|| name.clone());
        ui.horizontal(|ui| {
            ui.label("Name");
            ui.text_edit_singleline(edit);
        });
        if *edit != name && ui.button("Rename").clicked() {
            app_state.lock().image.rename(edit.clone());
        }

        ui.separator();
        match path {
            Some(path) => ui.label(format!("File: {}", path.display())),
            None => ui.weak("Not saved yet"),
        };
        ui.label(format!("Layers: {layer_count}"));
        if dirty {
            ui.colored_label(crate::theme::palette::ERROR, "Unsaved changes");
        }
    }
}
