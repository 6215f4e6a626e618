//! VX Editor core
//!
//! UI-free document model and registries: the voxel document with its
//! layers, cameras, content key and undo history, plus the file-format and
//! script registries the frontend menus iterate.

pub mod error;
pub mod format;
pub mod image;
pub mod script;

pub use error::CoreError;
pub use format::{FileFormat, FormatOptions, FormatRegistry, VxFormat};
pub use image::{Camera, Image, Layer, ViewPreset};
pub use script::ScriptRegistry;
