//! Palette panel: color swatch grid

use crate::panels::{Panel, PanelId};
use crate::state::SharedAppState;

/// Default swatches, a compact voxel-art ramp
const DEFAULT_PALETTE: &[[u8; 4]] = &[
    [255, 255, 255, 255],
    [200, 200, 200, 255],
    [128, 128, 128, 255],
    [64, 64, 64, 255],
    [0, 0, 0, 255],
    [136, 0, 21, 255],
    [237, 28, 36, 255],
    [255, 127, 39, 255],
    [255, 242, 0, 255],
    [34, 177, 76, 255],
    [0, 162, 232, 255],
    [63, 72, 204, 255],
    [163, 73, 164, 255],
    [255, 174, 201, 255],
    [185, 122, 87, 255],
    [136, 84, 50, 255],
];

const SWATCH_SIZE: f32 = 22.0;
const COLUMNS: usize = 8;

#[derive(Default)]
pub struct PalettePanel;

impl Panel for PalettePanel {
    fn id(&self) -> PanelId {
        PanelId::Palette
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut color = app_state.lock().painter.color;

        ui.horizontal(|ui| {
            ui.label("Color");
            let mut rgba = color;
            if ui
                .color_edit_button_srgba_unmultiplied(&mut rgba)
                .changed()
            {
                color = rgba;
            }
        });

        ui.separator();

        egui::Grid::new("palette_grid")
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                for (i, swatch) in DEFAULT_PALETTE.iter().enumerate() {
                    let fill = egui::Color32::from_rgba_unmultiplied(
                        swatch[0], swatch[1], swatch[2], swatch[3],
                    );
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                        egui::Sense::click(),
                    );
                    let selected = *swatch == color;
                    let stroke = if selected {
                        egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
                    } else {
                        egui::Stroke::new(1.0, ui.visuals().widgets.inactive.bg_stroke.color)
                    };
                    ui.painter().rect(rect, 2.0, fill, stroke, egui::StrokeKind::Inside);
                    if response.clicked() {
                        color = *swatch;
                    }
                    if i % COLUMNS == COLUMNS - 1 {
                        ui.end_row();
                    }
                }
            });

        app_state.lock().painter.color = color;
    }
}
