//! File format registry
//!
//! Import/export codecs register themselves here and the menu iterates the
//! registry filtered by capability. The only built-in format is the native
//! JSON document; real voxel codecs plug in through the same trait.

use std::fs;
use std::path::Path;

use crate::error::CoreError;
use crate::image::Image;

/// Options payload collected by a format's import-options popup.
///
/// Opaque to the registry; each format interprets its own keys.
pub type FormatOptions = serde_json::Value;

/// An import/export codec
pub trait FileFormat: Send + Sync {
    /// Unique display name ("vx", "Magica voxel", ...)
    fn name(&self) -> &str;

    /// File extensions without the dot, first one is the default
    fn extensions(&self) -> &[&str];

    fn can_import(&self) -> bool;

    fn can_export(&self) -> bool;

    /// Whether import needs an options popup before dispatch
    fn has_options(&self) -> bool {
        false
    }

    /// Template for the options popup; keys are format specific
    fn default_options(&self) -> FormatOptions {
        FormatOptions::Null
    }

    fn import(
        &self,
        image: &mut Image,
        path: &Path,
        options: &FormatOptions,
    ) -> Result<(), CoreError> {
        let _ = (image, path, options);
        Err(CoreError::FormatCapability {
            format: self.name().to_string(),
            operation: "import",
        })
    }

    fn export(&self, image: &Image, path: &Path) -> Result<(), CoreError> {
        let _ = (image, path);
        Err(CoreError::FormatCapability {
            format: self.name().to_string(),
            operation: "export",
        })
    }
}

/// Registry of all known formats, iterated by the File menu
#[derive(Default)]
pub struct FormatRegistry {
    formats: Vec<Box<dyn FileFormat>>,
}

impl FormatRegistry {
    /// Registry pre-populated with the built-in formats
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        registry.register(Box::new(VxFormat));
        registry
    }

    pub fn register(&mut self, format: Box<dyn FileFormat>) {
        tracing::debug!(name = format.name(), "registered format");
        self.formats.push(format);
    }

    pub fn find(&self, name: &str) -> Option<&dyn FileFormat> {
        self.formats
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
    }

    /// Formats usable for "Import...", in registration order
    pub fn import_formats(&self) -> impl Iterator<Item = &dyn FileFormat> {
        self.formats
            .iter()
            .filter(|f| f.can_import())
            .map(|f| f.as_ref())
    }

    /// Formats usable for "Export As..", in registration order
    pub fn export_formats(&self) -> impl Iterator<Item = &dyn FileFormat> {
        self.formats
            .iter()
            .filter(|f| f.can_export())
            .map(|f| f.as_ref())
    }

    /// Import through a named format, checking capability first
    pub fn import(
        &self,
        name: &str,
        image: &mut Image,
        path: &Path,
        options: &FormatOptions,
    ) -> Result<(), CoreError> {
        let format = self
            .find(name)
            .ok_or_else(|| CoreError::UnknownFormat(name.to_string()))?;
        if !format.can_import() {
            return Err(CoreError::FormatCapability {
                format: name.to_string(),
                operation: "import",
            });
        }
        format.import(image, path, options)
    }

    /// Export through a named format, checking capability first
    pub fn export(&self, name: &str, image: &Image, path: &Path) -> Result<(), CoreError> {
        let format = self
            .find(name)
            .ok_or_else(|| CoreError::UnknownFormat(name.to_string()))?;
        if !format.can_export() {
            return Err(CoreError::FormatCapability {
                format: name.to_string(),
                operation: "export",
            });
        }
        format.export(image, path)
    }
}

/// Native JSON document format
pub struct VxFormat;

impl FileFormat for VxFormat {
    fn name(&self) -> &str {
        "vx"
    }

    fn extensions(&self) -> &[&str] {
        &["vx"]
    }

    fn can_import(&self) -> bool {
        true
    }

    fn can_export(&self) -> bool {
        true
    }

    fn import(
        &self,
        image: &mut Image,
        path: &Path,
        _options: &FormatOptions,
    ) -> Result<(), CoreError> {
        let json = fs::read_to_string(path)?;
        let mut loaded: Image = serde_json::from_str(&json)?;
        loaded.path = Some(path.to_path_buf());
        *image = loaded;
        Ok(())
    }

    fn export(&self, image: &Image, path: &Path) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(image)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnly;
    impl FileFormat for ReadOnly {
        fn name(&self) -> &str {
            "reader"
        }
        fn extensions(&self) -> &[&str] {
            &["rd"]
        }
        fn can_import(&self) -> bool {
            true
        }
        fn can_export(&self) -> bool {
            false
        }
        fn import(
            &self,
            image: &mut Image,
            _path: &Path,
            _options: &FormatOptions,
        ) -> Result<(), CoreError> {
            image.add_layer("imported");
            Ok(())
        }
    }

    struct WriteOnly;
    impl FileFormat for WriteOnly {
        fn name(&self) -> &str {
            "writer"
        }
        fn extensions(&self) -> &[&str] {
            &["wr"]
        }
        fn can_import(&self) -> bool {
            false
        }
        fn can_export(&self) -> bool {
            true
        }
        fn export(&self, _image: &Image, _path: &Path) -> Result<(), CoreError> {
            Ok(())
        }
    }

    fn registry() -> FormatRegistry {
        let mut registry = FormatRegistry::with_builtins();
        registry.register(Box::new(ReadOnly));
        registry.register(Box::new(WriteOnly));
        registry
    }

    #[test]
    fn capability_filters() {
        let registry = registry();
        let importers: Vec<_> = registry.import_formats().map(|f| f.name()).collect();
        let exporters: Vec<_> = registry.export_formats().map(|f| f.name()).collect();
        assert_eq!(importers, ["vx", "reader"]);
        assert_eq!(exporters, ["vx", "writer"]);
    }

    #[test]
    fn unknown_format_errors() {
        let registry = registry();
        let mut image = Image::new("test");
        let err = registry
            .import("nope", &mut image, Path::new("x"), &FormatOptions::Null)
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownFormat(_)));
    }

    #[test]
    fn capability_mismatch_errors() {
        let registry = registry();
        let image = Image::new("test");
        let err = registry
            .export("reader", &image, Path::new("x"))
            .unwrap_err();
        assert!(matches!(err, CoreError::FormatCapability { .. }));
    }

    #[test]
    fn native_format_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.vx");
        let registry = FormatRegistry::with_builtins();

        let mut image = Image::new("round trip");
        image.add_layer("extra");
        registry.export("vx", &image, &path).unwrap();

        let mut loaded = Image::new("empty");
        registry
            .import("vx", &mut loaded, &path, &FormatOptions::Null)
            .unwrap();
        assert_eq!(loaded.name, "round trip");
        assert_eq!(loaded.layers.len(), 2);
        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
    }
}
