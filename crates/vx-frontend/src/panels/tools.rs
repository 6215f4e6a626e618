//! Tools panel: sculpting tool selection and brush options

use crate::panels::{Panel, PanelId};
use crate::state::{EditorTool, PaintMode, SharedAppState};

#[derive(Default)]
pub struct ToolsPanel;

impl Panel for ToolsPanel {
    fn id(&self) -> PanelId {
        PanelId::Tools
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (mut tool, mut mode, mut smoothness) = {
            let state = app_state.lock();
            (
                state.current_tool,
                state.painter.mode,
                state.painter.smoothness,
            )
        };

        ui.label("Tool");
        egui::Grid::new("tool_grid").num_columns(2).show(ui, |ui| {
            for (i, candidate) in EditorTool::ALL.into_iter().enumerate() {
                if ui
                    .selectable_label(tool == candidate, candidate.name())
                    .clicked()
                {
                    tool = candidate;
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

        ui.separator();
        ui.label("Mode");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, PaintMode::Add, "Add");
            ui.selectable_value(&mut mode, PaintMode::Sub, "Sub");
            ui.selectable_value(&mut mode, PaintMode::Paint, "Paint");
        });

        ui.separator();
        ui.add(egui::Slider::new(&mut smoothness, 0.0..=1.0).text("Smoothness"));

        let mut state = app_state.lock();
        if state.current_tool != tool {
            state.current_tool = tool;
            state.help_text = Some(format!("{}: left click to apply", tool.name()));
        }
        state.painter.mode = mode;
        state.painter.smoothness = smoothness;
    }
}
