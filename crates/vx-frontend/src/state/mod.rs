//! Application state module

mod editor;

pub use editor::{EditorTool, ExportSettings, Light, Material, PaintMode, Painter, Pathtracer};

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use vx_core::{FormatOptions, FormatRegistry, Image, Layer, ScriptRegistry, ViewPreset};

/// Actions queued by the menu and panels, drained once per frame
#[derive(Debug, Clone)]
pub enum AppAction {
    // File actions
    /// Replace the document with a fresh one
    NewImage,
    /// Save to the given path, the document path, or ask for one
    Save { path: Option<PathBuf> },
    /// Always ask for a path, then save
    SaveAs,
    /// Open a native document
    Open { path: PathBuf },
    /// Import a 2D image as a new layer
    ImportImagePlane { path: PathBuf },
    /// Import through a registered format; `path: None` asks the user
    ImportFile {
        format: String,
        path: Option<PathBuf>,
        options: FormatOptions,
    },
    /// Export through a registered format
    ExportFile { format: String, path: PathBuf },

    // Edit actions
    Undo,
    Redo,
    /// Copy the active layer to the session clipboard
    Copy,
    /// Paste the clipboard as a new layer
    Paste,
    /// Reset the active layer
    ClearLayer,

    // View actions
    SetView(ViewPreset),
    ToggleOrtho,

    // Scripts
    RunScript(String),
}

/// Application state
pub struct AppState {
    /// Current document
    pub image: Image,
    /// Registered import/export formats
    pub formats: FormatRegistry,
    /// Registered scripts
    pub scripts: ScriptRegistry,
    /// Current sculpting tool
    pub current_tool: EditorTool,
    pub painter: Painter,
    pub material: Material,
    pub light: Light,
    pub pathtracer: Pathtracer,
    pub export: ExportSettings,
    /// Session clipboard for layer copy/paste
    pub clipboard: Option<Layer>,
    /// Status-bar hint for the hovered widget
    pub hint_text: Option<String>,
    /// Status-bar help for the active tool
    pub help_text: Option<String>,
    /// Canvas rectangle of the current frame, recomputed by the layout
    pub viewport: egui::Rect,
    /// Set by the Export panel while it is visible; reset every frame
    pub show_export_viewport: bool,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            image: Image::default(),
            formats: FormatRegistry::with_builtins(),
            scripts: ScriptRegistry::new(),
            current_tool: EditorTool::default(),
            painter: Painter::default(),
            material: Material::default(),
            light: Light::default(),
            pathtracer: Pathtracer::default(),
            export: ExportSettings::default(),
            clipboard: None,
            hint_text: None,
            help_text: None,
            viewport: egui::Rect::ZERO,
            show_export_viewport: false,
            pending_actions: Vec::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action for processing at the start of the next frame
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take all pending actions, leaving the queue empty
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Whether the document has edits the user has not saved
    pub fn is_dirty(&self) -> bool {
        self.image.key() != self.image.saved_key()
    }
}

/// Shared application state
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_actions_drain_in_order() {
        let mut state = AppState::new();
        state.queue_action(AppAction::Undo);
        state.queue_action(AppAction::Redo);
        let actions = state.take_pending_actions();
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], AppAction::Undo));
        assert!(matches!(actions[1], AppAction::Redo));
        assert!(state.take_pending_actions().is_empty());
    }

    #[test]
    fn fresh_state_is_clean() {
        let state = AppState::new();
        assert!(!state.is_dirty());
    }

    #[test]
    fn edit_then_save_round_trip() {
        let mut state = AppState::new();
        state.image.add_layer("edit");
        assert!(state.is_dirty());
        state.image.mark_saved();
        assert!(!state.is_dirty());
    }
}
