//! Voxel document model
//!
//! The image is the unit of editing: an ordered stack of layers plus a set
//! of cameras. The voxel volumes themselves live behind the engine seam;
//! the document tracks the metadata the UI shell edits, a content key used
//! for the dirty-state check, and a snapshot undo history.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use glam::{EulerRot, IVec3, Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single layer of the image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub id: Uuid,
    pub name: String,
    pub visible: bool,
    /// Offset of the layer volume in voxel space
    pub offset: IVec3,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            visible: true,
            offset: IVec3::ZERO,
        }
    }
}

/// Camera view presets reachable from the View menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    Left,
    Right,
    Front,
    Top,
    Default,
}

/// An editing camera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: Uuid,
    pub name: String,
    pub distance: f32,
    pub rotation: Quat,
    pub offset: Vec3,
    pub ortho: bool,
}

impl Camera {
    pub fn new(name: impl Into<String>) -> Self {
        let mut camera = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            distance: 128.0,
            rotation: Quat::IDENTITY,
            offset: Vec3::ZERO,
            ortho: false,
        };
        camera.apply_preset(ViewPreset::Default);
        camera
    }

    /// Snap the camera rotation to a view preset
    pub fn apply_preset(&mut self, preset: ViewPreset) {
        use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};
        self.rotation = match preset {
            ViewPreset::Left => Quat::from_rotation_y(FRAC_PI_2),
            ViewPreset::Right => Quat::from_rotation_y(-FRAC_PI_2),
            ViewPreset::Front => Quat::IDENTITY,
            ViewPreset::Top => Quat::from_rotation_x(-FRAC_PI_2),
            ViewPreset::Default => Quat::from_euler(EulerRot::YXZ, FRAC_PI_4, -FRAC_PI_6, 0.0),
        };
    }
}

/// Serialized document content (also the unit of undo snapshots)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ImageData {
    version: u32,
    name: String,
    layers: Vec<Layer>,
    active_layer: Option<Uuid>,
    cameras: Vec<Camera>,
    active_camera: Option<Uuid>,
}

/// The voxel document
#[derive(Debug, Clone)]
pub struct Image {
    pub version: u32,
    pub name: String,
    pub layers: Vec<Layer>,
    pub active_layer: Option<Uuid>,
    pub cameras: Vec<Camera>,
    pub active_camera: Option<Uuid>,
    /// Path the document was last opened from or saved to
    pub path: Option<PathBuf>,
    saved_key: u64,
    undo_stack: Vec<ImageData>,
    redo_stack: Vec<ImageData>,
}

impl Default for Image {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl Image {
    /// Create a new document with one layer and one camera
    pub fn new(name: impl Into<String>) -> Self {
        let layer = Layer::new("Layer 1");
        let camera = Camera::new("Default");
        let mut image = Self {
            version: 1,
            name: name.into(),
            active_layer: Some(layer.id),
            active_camera: Some(camera.id),
            layers: vec![layer],
            cameras: vec![camera],
            path: None,
            saved_key: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        };
        // A fresh document starts clean: Save stays disabled until an edit.
        image.saved_key = image.key();
        image
    }

    fn data(&self) -> ImageData {
        ImageData {
            version: self.version,
            name: self.name.clone(),
            layers: self.layers.clone(),
            active_layer: self.active_layer,
            cameras: self.cameras.clone(),
            active_camera: self.active_camera,
        }
    }

    fn restore(&mut self, data: ImageData) {
        self.version = data.version;
        self.name = data.name;
        self.layers = data.layers;
        self.active_layer = data.active_layer;
        self.cameras = data.cameras;
        self.active_camera = data.active_camera;
    }

    /// Content key of the current document state.
    ///
    /// Equal keys mean equal content; the Save menu item is enabled iff
    /// `key() != saved_key()`.
    pub fn key(&self) -> u64 {
        // Hash the canonical serialization rather than the structs so the
        // key survives field types that are not `Hash` (f32).
        let json = serde_json::to_string(&self.data()).unwrap_or_default();
        let mut hasher = DefaultHasher::new();
        json.hash(&mut hasher);
        hasher.finish()
    }

    pub fn saved_key(&self) -> u64 {
        self.saved_key
    }

    /// Record the current content as persisted
    pub fn mark_saved(&mut self) {
        self.saved_key = self.key();
    }

    /// Push an undo snapshot of the current state.
    ///
    /// Called by every mutating operation before it changes anything.
    pub fn checkpoint(&mut self) {
        self.undo_stack.push(self.data());
        self.redo_stack.clear();
    }

    /// Restore the previous snapshot; returns false when there is none
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(prev) => {
                self.redo_stack.push(self.data());
                self.restore(prev);
                true
            }
            None => false,
        }
    }

    /// Re-apply an undone snapshot; returns false when there is none
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                self.undo_stack.push(self.data());
                self.restore(next);
                true
            }
            None => false,
        }
    }

    // ---- Layer operations ------------------------------------------------

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active_layer
            .and_then(|id| self.layers.iter().find(|l| l.id == id))
    }

    pub fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        let id = self.active_layer?;
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Add a new empty layer and make it active
    pub fn add_layer(&mut self, name: impl Into<String>) -> Uuid {
        self.checkpoint();
        let layer = Layer::new(name);
        let id = layer.id;
        self.layers.push(layer);
        self.active_layer = Some(id);
        id
    }

    /// Add a layer named after an imported file (image plane import)
    pub fn add_image_plane(&mut self, path: &Path) -> Uuid {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image plane")
            .to_string();
        self.add_layer(name)
    }

    /// Insert a copy of a layer (paste); the copy gets a fresh id
    pub fn paste_layer(&mut self, layer: &Layer) -> Uuid {
        self.checkpoint();
        let mut copy = layer.clone();
        copy.id = Uuid::new_v4();
        let id = copy.id;
        self.layers.push(copy);
        self.active_layer = Some(id);
        id
    }

    pub fn delete_layer(&mut self, id: Uuid) {
        let Some(index) = self.layers.iter().position(|l| l.id == id) else {
            return;
        };
        self.checkpoint();
        self.layers.remove(index);
        if self.active_layer == Some(id) {
            self.active_layer = self
                .layers
                .get(index.saturating_sub(1))
                .or_else(|| self.layers.first())
                .map(|l| l.id);
        }
    }

    /// Move a layer one slot up (-1) or down (+1) in the stack
    pub fn move_layer(&mut self, id: Uuid, delta: i32) {
        let Some(index) = self.layers.iter().position(|l| l.id == id) else {
            return;
        };
        let target = index as i32 + delta;
        if target < 0 || target >= self.layers.len() as i32 {
            return;
        }
        self.checkpoint();
        self.layers.swap(index, target as usize);
    }

    pub fn set_layer_visible(&mut self, id: Uuid, visible: bool) {
        if let Some(index) = self.layers.iter().position(|l| l.id == id) {
            self.checkpoint();
            self.layers[index].visible = visible;
        }
    }

    /// Reset the active layer content (Edit > Clear)
    pub fn clear_active_layer(&mut self) {
        if self.active_layer().is_some() {
            self.checkpoint();
            if let Some(layer) = self.active_layer_mut() {
                layer.offset = IVec3::ZERO;
            }
        }
    }

    // ---- Camera operations -----------------------------------------------

    pub fn active_camera(&self) -> Option<&Camera> {
        self.active_camera
            .and_then(|id| self.cameras.iter().find(|c| c.id == id))
    }

    pub fn active_camera_mut(&mut self) -> Option<&mut Camera> {
        let id = self.active_camera?;
        self.cameras.iter_mut().find(|c| c.id == id)
    }

    pub fn add_camera(&mut self, name: impl Into<String>) -> Uuid {
        self.checkpoint();
        let camera = Camera::new(name);
        let id = camera.id;
        self.cameras.push(camera);
        self.active_camera = Some(id);
        id
    }

    pub fn delete_camera(&mut self, id: Uuid) {
        let Some(index) = self.cameras.iter().position(|c| c.id == id) else {
            return;
        };
        self.checkpoint();
        self.cameras.remove(index);
        if self.active_camera == Some(id) {
            self.active_camera = self.cameras.first().map(|c| c.id);
        }
    }

    /// Apply a view preset to the active camera
    pub fn set_view(&mut self, preset: ViewPreset) {
        if self.active_camera().is_some() {
            self.checkpoint();
            if let Some(camera) = self.active_camera_mut() {
                camera.apply_preset(preset);
            }
        }
    }

    pub fn toggle_ortho(&mut self) {
        if self.active_camera().is_some() {
            self.checkpoint();
            if let Some(camera) = self.active_camera_mut() {
                camera.ortho = !camera.ortho;
            }
        }
    }

    /// Rename the document (Image panel)
    pub fn rename(&mut self, name: impl Into<String>) {
        self.checkpoint();
        self.name = name.into();
    }
}

impl Serialize for Image {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Image {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = ImageData::deserialize(deserializer)?;
        let mut image = Image {
            version: data.version,
            name: data.name,
            layers: data.layers,
            active_layer: data.active_layer,
            cameras: data.cameras,
            active_camera: data.active_camera,
            path: None,
            saved_key: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        };
        // A freshly loaded document is clean.
        image.saved_key = image.key();
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_image_is_clean() {
        let image = Image::new("test");
        assert_eq!(image.key(), image.saved_key());
    }

    #[test]
    fn edit_dirties_and_save_cleans() {
        let mut image = Image::new("test");
        image.add_layer("extra");
        assert_ne!(image.key(), image.saved_key());
        image.mark_saved();
        assert_eq!(image.key(), image.saved_key());
    }

    #[test]
    fn undo_restores_saved_key_equality() {
        let mut image = Image::new("test");
        image.add_layer("extra");
        assert_ne!(image.key(), image.saved_key());
        assert!(image.undo());
        assert_eq!(image.key(), image.saved_key());
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut image = Image::new("test");
        let before = image.key();
        image.add_layer("extra");
        let after = image.key();
        assert!(image.undo());
        assert_eq!(image.key(), before);
        assert!(image.redo());
        assert_eq!(image.key(), after);
        assert!(!image.redo());
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut image = Image::new("test");
        let key = image.key();
        assert!(!image.undo());
        assert_eq!(image.key(), key);
    }

    #[test]
    fn delete_layer_reassigns_active() {
        let mut image = Image::new("test");
        let first = image.layers[0].id;
        let second = image.add_layer("second");
        assert_eq!(image.active_layer, Some(second));
        image.delete_layer(second);
        assert_eq!(image.active_layer, Some(first));
    }

    #[test]
    fn move_layer_clamps_at_edges() {
        let mut image = Image::new("test");
        let first = image.layers[0].id;
        let second = image.add_layer("second");
        image.move_layer(first, -1);
        assert_eq!(image.layers[0].id, first);
        image.move_layer(first, 1);
        assert_eq!(image.layers[0].id, second);
        assert_eq!(image.layers[1].id, first);
    }

    #[test]
    fn paste_layer_gets_fresh_id() {
        let mut image = Image::new("test");
        let original = image.layers[0].clone();
        let pasted = image.paste_layer(&original);
        assert_ne!(pasted, original.id);
        assert_eq!(image.layers.len(), 2);
        assert_eq!(image.layers[1].name, original.name);
    }

    #[test]
    fn view_preset_changes_rotation() {
        let mut image = Image::new("test");
        let before = image.active_camera().unwrap().rotation;
        image.set_view(ViewPreset::Top);
        let after = image.active_camera().unwrap().rotation;
        assert_ne!(before, after);
    }

    #[test]
    fn serde_round_trip_is_clean() {
        let mut image = Image::new("test");
        image.add_layer("extra");
        let json = serde_json::to_string(&image).unwrap();
        let loaded: Image = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.layers.len(), image.layers.len());
        assert_eq!(loaded.key(), loaded.saved_key());
    }
}
