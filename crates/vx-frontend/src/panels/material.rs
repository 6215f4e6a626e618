//! Material panel

use crate::panels::{Panel, PanelId};
use crate::state::SharedAppState;

#[derive(Default)]
pub struct MaterialPanel;

impl Panel for MaterialPanel {
    fn id(&self) -> PanelId {
        PanelId::Material
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut material = app_state.lock().material.clone();

        ui.add(egui::Slider::new(&mut material.metallic, 0.0..=1.0).text("Metallic"));
        ui.add(egui::Slider::new(&mut material.roughness, 0.0..=1.0).text("Roughness"));
        ui.horizontal(|ui| {
            ui.label("Base color");
            ui.color_edit_button_srgba_unmultiplied(&mut material.base_color);
        });

        app_state.lock().material = material;
    }
}
