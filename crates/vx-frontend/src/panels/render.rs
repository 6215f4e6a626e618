//! Render panel: path tracer controls
//!
//! While this panel is current and the tracer is running, the canvas is
//! drawn in render mode instead of the interactive view.

use crate::panels::{Panel, PanelId};
use crate::state::SharedAppState;

#[derive(Default)]
pub struct RenderPanel;

impl Panel for RenderPanel {
    fn id(&self) -> PanelId {
        PanelId::Render
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut pathtracer = app_state.lock().pathtracer.clone();

        let mut samples = pathtracer.num_samples;
        ui.add(
            egui::Slider::new(&mut samples, 16..=4096)
                .logarithmic(true)
                .text("Samples"),
        );
        pathtracer.num_samples = samples;

        ui.horizontal(|ui| {
            if pathtracer.running {
                if ui.button("⏹ Stop").clicked() {
                    pathtracer.running = false;
                }
                ui.add(egui::ProgressBar::new(pathtracer.progress).show_percentage());
            } else if ui.button("▶ Start").clicked() {
                pathtracer.running = true;
                pathtracer.progress = 0.0;
            }
        });

        app_state.lock().pathtracer = pathtracer;
    }
}
