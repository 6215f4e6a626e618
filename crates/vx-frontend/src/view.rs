//! 3D view seam
//!
//! The voxel renderer lives outside this crate; the shell only needs
//! something to paint the canvas rectangle and to receive the inputs the
//! arbitration pass routes to it.

use egui::{Align2, Color32, FontId, Painter, Rect};

use crate::app::input::ViewInputs;
use crate::theme::palette;

/// What the canvas region delegates to each frame
pub trait ViewRenderer: Send {
    /// Paint the 3D view into `viewport`. `render_mode` is true while the
    /// Render panel is current and the path tracer is running.
    fn render(&mut self, painter: &Painter, viewport: Rect, render_mode: bool);

    /// Pointer/keyboard input in canvas-local coordinates, forwarded only
    /// when the canvas owns the pointer this frame.
    fn on_input(&mut self, viewport: Rect, inputs: &ViewInputs, has_keyboard: bool);
}

/// Stand-in renderer used until an engine is wired up
#[derive(Default)]
pub struct PlaceholderView {
    last_drag: Option<egui::Pos2>,
}

impl ViewRenderer for PlaceholderView {
    fn render(&mut self, painter: &Painter, viewport: Rect, render_mode: bool) {
        painter.rect_filled(viewport, 0.0, palette::BG_BASE);
        let label = if render_mode {
            "path tracing..."
        } else {
            "3D view"
        };
        painter.text(
            viewport.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(16.0),
            Color32::GRAY,
        );
    }

    fn on_input(&mut self, viewport: Rect, inputs: &ViewInputs, _has_keyboard: bool) {
        // Nothing to drive yet; track the drag so a future camera-orbit
        // hookup has the state it needs.
        if inputs.primary_down {
            if let (Some(prev), Some(pos)) = (self.last_drag, inputs.pos) {
                tracing::trace!(?viewport, delta = ?(pos - prev), "view drag");
            }
            self.last_drag = inputs.pos;
        } else {
            self.last_drag = None;
        }
    }
}
