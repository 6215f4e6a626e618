//! Voxel Editor Frontend
//!
//! egui-based application shell: panel switcher, screen layout, menus and
//! popups around the 3D canvas.

pub mod actions;
pub mod app;
pub mod config;
pub mod panels;
pub mod state;
pub mod theme;
pub mod view;

// Re-exports for convenience
pub use app::VoxEditorApp;
pub use config::AppConfig;
pub use state::{AppAction, AppState, SharedAppState};
