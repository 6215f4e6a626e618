//! Cameras panel: named camera list

use uuid::Uuid;

use crate::panels::{Panel, PanelId};
use crate::state::SharedAppState;

#[derive(Default)]
pub struct CamerasPanel;

impl Panel for CamerasPanel {
    fn id(&self) -> PanelId {
        PanelId::Cameras
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (cameras, active): (Vec<(Uuid, String)>, Option<Uuid>) = {
            let state = app_state.lock();
            (
                state
                    .image
                    .cameras
                    .iter()
                    .map(|c| (c.id, c.name.clone()))
                    .collect(),
                state.image.active_camera,
            )
        };

        let mut select = None;
        let mut delete = None;
        for (id, name) in &cameras {
            ui.horizontal(|ui| {
                if ui.selectable_label(active == Some(*id), name).clicked() {
                    select = Some(*id);
                }
                if cameras.len() > 1 && ui.small_button("🗑").clicked() {
                    delete = Some(*id);
                }
            });
        }

        ui.separator();
        if ui.button("➕ Add camera").clicked() {
            let mut state = app_state.lock();
            let name = format!("Camera {}", state.image.cameras.len() + 1);
            state.image.add_camera(name);
        }

        if let Some(id) = select {
            app_state.lock().image.active_camera = Some(id);
        }
        if let Some(id) = delete {
            app_state.lock().image.delete_camera(id);
        }
    }
}
