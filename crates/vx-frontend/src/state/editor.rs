//! Editing session state: tools, painter, pathtracer

/// Sculpting tool selected in the Tools panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    #[default]
    Brush,
    Shape,
    Laser,
    Plane,
    Move,
    Selection,
    Extrude,
    Pick,
}

impl EditorTool {
    pub const ALL: [EditorTool; 8] = [
        EditorTool::Brush,
        EditorTool::Shape,
        EditorTool::Laser,
        EditorTool::Plane,
        EditorTool::Move,
        EditorTool::Selection,
        EditorTool::Extrude,
        EditorTool::Pick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EditorTool::Brush => "Brush",
            EditorTool::Shape => "Shape",
            EditorTool::Laser => "Laser",
            EditorTool::Plane => "Plane",
            EditorTool::Move => "Move",
            EditorTool::Selection => "Selection",
            EditorTool::Extrude => "Extrude",
            EditorTool::Pick => "Pick color",
        }
    }
}

/// How the active tool combines voxels with the layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Add,
    Sub,
    Paint,
}

/// Painting state shared by the Tools and Palette panels
#[derive(Debug, Clone)]
pub struct Painter {
    pub mode: PaintMode,
    /// Current color, straight sRGB
    pub color: [u8; 4],
    pub smoothness: f32,
}

impl Default for Painter {
    fn default() -> Self {
        Self {
            mode: PaintMode::Add,
            color: [255, 255, 255, 255],
            smoothness: 0.0,
        }
    }
}

/// Material settings edited in the Material panel
#[derive(Debug, Clone)]
pub struct Material {
    pub metallic: f32,
    pub roughness: f32,
    pub base_color: [u8; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            metallic: 0.0,
            roughness: 0.5,
            base_color: [204, 204, 204, 255],
        }
    }
}

/// Light settings edited in the Light panel
#[derive(Debug, Clone)]
pub struct Light {
    pub pitch: f32,
    pub yaw: f32,
    pub intensity: f32,
    /// Keep the light fixed relative to the camera
    pub fixed: bool,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            pitch: 20.0,
            yaw: 120.0,
            intensity: 1.0,
            fixed: false,
        }
    }
}

/// Path tracer control state (Render panel)
#[derive(Debug, Clone)]
pub struct Pathtracer {
    pub running: bool,
    pub num_samples: u32,
    pub progress: f32,
}

impl Default for Pathtracer {
    fn default() -> Self {
        Self {
            running: false,
            num_samples: 512,
            progress: 0.0,
        }
    }
}

/// Export settings (Export panel)
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub width: u32,
    pub height: u32,
    pub transparent_background: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            transparent_background: false,
        }
    }
}
