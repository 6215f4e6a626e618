//! Layers panel: layer stack with visibility and ordering controls

use uuid::Uuid;

use crate::panels::{Panel, PanelId};
use crate::state::SharedAppState;

#[derive(Default)]
pub struct LayersPanel;

impl Panel for LayersPanel {
    fn id(&self) -> PanelId {
        PanelId::Layers
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (layers, active): (Vec<(Uuid, String, bool)>, Option<Uuid>) = {
            let state = app_state.lock();
            (
                state
                    .image
                    .layers
                    .iter()
                    .map(|l| (l.id, l.name.clone(), l.visible))
                    .collect(),
                state.image.active_layer,
            )
        };

        enum LayerOp {
            Select(Uuid),
            SetVisible(Uuid, bool),
            Add,
            Delete(Uuid),
            Move(Uuid, i32),
        }
        let mut op = None;

        // Top-most layer first, like the visual stacking order.
        for (id, name, visible) in layers.iter().rev() {
            ui.horizontal(|ui| {
                let mut v = *visible;
                if ui.checkbox(&mut v, "").on_hover_text("Visible").changed() {
                    op = Some(LayerOp::SetVisible(*id, v));
                }
                if ui.selectable_label(active == Some(*id), name).clicked() {
                    op = Some(LayerOp::Select(*id));
                }
            });
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("➕").on_hover_text("Add layer").clicked() {
                op = Some(LayerOp::Add);
            }
            if let Some(id) = active {
                if ui.button("🗑").on_hover_text("Delete layer").clicked() {
                    op = Some(LayerOp::Delete(id));
                }
                if ui.button("⬆").on_hover_text("Move up").clicked() {
                    op = Some(LayerOp::Move(id, 1));
                }
                if ui.button("⬇").on_hover_text("Move down").clicked() {
                    op = Some(LayerOp::Move(id, -1));
                }
            }
        });

        if let Some(op) = op {
            let mut state = app_state.lock();
            match op {
                LayerOp::Select(id) => state.image.active_layer = Some(id),
                LayerOp::SetVisible(id, v) => state.image.set_layer_visible(id, v),
                LayerOp::Add => {
                    let name = format!("Layer {}", state.image.layers.len() + 1);
                    state.image.add_layer(name);
                }
                LayerOp::Delete(id) => state.image.delete_layer(id),
                LayerOp::Move(id, delta) => state.image.move_layer(id, delta),
            }
        }
    }
}
