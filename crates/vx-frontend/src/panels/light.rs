//! Light panel

use crate::panels::{Panel, PanelId};
use crate::state::SharedAppState;

#[derive(Default)]
pub struct LightPanel;

impl Panel for LightPanel {
    fn id(&self) -> PanelId {
        PanelId::Light
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut light = app_state.lock().light.clone();

        ui.add(egui::Slider::new(&mut light.pitch, -90.0..=90.0).text("Pitch"));
        ui.add(egui::Slider::new(&mut light.yaw, 0.0..=360.0).text("Yaw"));
        ui.add(egui::Slider::new(&mut light.intensity, 0.0..=4.0).text("Intensity"));
        ui.checkbox(&mut light.fixed, "Fixed to camera");

        app_state.lock().light = light;
    }
}
