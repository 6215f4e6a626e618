//! View panel: camera orientation and projection settings

use vx_core::ViewPreset;

use crate::panels::{Panel, PanelId};
use crate::state::SharedAppState;

#[derive(Default)]
pub struct ViewPanel;

impl Panel for ViewPanel {
    fn id(&self) -> PanelId {
        PanelId::View
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (ortho, distance) = {
            let state = app_state.lock();
            match state.image.active_camera() {
                Some(camera) => (camera.ortho, camera.distance),
                None => {
                    drop(state);
                    ui.weak("No active camera");
                    return;
                }
            }
        };

        ui.label("View");
        egui::Grid::new("view_presets").num_columns(3).show(ui, |ui| {
            let presets = [
                ("Left", ViewPreset::Left),
                ("Right", ViewPreset::Right),
                ("Front", ViewPreset::Front),
                ("Top", ViewPreset::Top),
                ("Default", ViewPreset::Default),
            ];
            for (i, (label, preset)) in presets.into_iter().enumerate() {
                if ui.button(label).clicked() {
                    app_state.lock().image.set_view(preset);
                }
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });

        ui.separator();

        let mut ortho_now = ortho;
        if ui.checkbox(&mut ortho_now, "Orthographic").changed() {
            app_state.lock().image.toggle_ortho();
        }

        let mut dist = distance;
        if ui
            .add(egui::Slider::new(&mut dist, 16.0..=1024.0).text("Distance"))
            .changed()
        {
            let mut state = app_state.lock();
            if let Some(camera) = state.image.active_camera_mut() {
                camera.distance = dist;
            }
        }
    }
}
