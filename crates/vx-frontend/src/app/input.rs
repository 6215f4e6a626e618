//! Pointer arbitration and 3D-view input forwarding
//!
//! Exactly one region may own the pointer each frame. Overlapping bar
//! windows are checked top-to-bottom in z-order before the canvas, so
//! interacting with an overlay never leaks through to the 3D view below.

use egui::{Modifiers, Pos2, Rect, Vec2};

/// Identity of a screen region competing for the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionId {
    RotationBar,
    TopBar,
    LeftPanel,
    BottomBar,
    Canvas,
}

/// A candidate region for this frame's pointer event
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub id: RegionId,
    pub rect: Rect,
}

impl Region {
    pub fn new(id: RegionId, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// Decide which single region owns the pointer this frame.
///
/// `overlays` is ordered topmost first; the canvas is always last in
/// z-order. Returns `None` when the pointer is outside every region.
pub fn arbitrate(pointer: Option<Pos2>, overlays: &[Region], canvas: Rect) -> Option<RegionId> {
    let pos = pointer?;
    for region in overlays {
        if region.rect.contains(pos) {
            return Some(region.id);
        }
    }
    canvas.contains(pos).then_some(RegionId::Canvas)
}

/// Pointer and keyboard state forwarded to the 3D view, in canvas-local
/// coordinates
#[derive(Debug, Clone, Default)]
pub struct ViewInputs {
    /// Pointer position relative to the canvas origin
    pub pos: Option<Pos2>,
    pub primary_down: bool,
    pub secondary_down: bool,
    pub middle_down: bool,
    pub scroll_delta: Vec2,
    pub modifiers: Modifiers,
}

/// Collect this frame's inputs in the canvas referential
pub fn gather_view_inputs(ctx: &egui::Context, canvas: Rect) -> ViewInputs {
    ctx.input(|input| ViewInputs {
        pos: input
            .pointer
            .latest_pos()
            .map(|p| (p - canvas.min).to_pos2()),
        primary_down: input.pointer.primary_down(),
        secondary_down: input.pointer.secondary_down(),
        middle_down: input.pointer.middle_down(),
        scroll_delta: input.smooth_scroll_delta,
        modifiers: input.modifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(800.0, 600.0))
    }

    #[test]
    fn overlay_suppresses_canvas() {
        // Top bar overlays the canvas in compact mode.
        let top_bar = Region::new(
            RegionId::TopBar,
            Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(1000.0, 80.0)),
        );
        let pointer = Some(Pos2::new(200.0, 60.0));
        // The pointer is inside both the top bar and the canvas.
        assert!(canvas().contains(pointer.unwrap()));
        assert_eq!(
            arbitrate(pointer, &[top_bar], canvas()),
            Some(RegionId::TopBar)
        );
    }

    #[test]
    fn topmost_overlay_wins() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(400.0, 400.0));
        let overlays = [
            Region::new(RegionId::RotationBar, rect),
            Region::new(RegionId::LeftPanel, rect),
        ];
        assert_eq!(
            arbitrate(Some(Pos2::new(10.0, 10.0)), &overlays, canvas()),
            Some(RegionId::RotationBar)
        );
    }

    #[test]
    fn canvas_owns_when_no_overlay_contains() {
        let left_panel = Region::new(
            RegionId::LeftPanel,
            Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(90.0, 600.0)),
        );
        assert_eq!(
            arbitrate(Some(Pos2::new(400.0, 300.0)), &[left_panel], canvas()),
            Some(RegionId::Canvas)
        );
    }

    #[test]
    fn nobody_owns_outside_all_regions() {
        assert_eq!(arbitrate(Some(Pos2::new(5000.0, 5000.0)), &[], canvas()), None);
        assert_eq!(arbitrate(None, &[], canvas()), None);
    }
}
