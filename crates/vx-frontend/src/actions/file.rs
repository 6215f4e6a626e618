//! File action handlers: new, open, save, import, export
//!
//! Paths left unresolved by the menu (queued as `None`) are asked for
//! here; dialog cancellation drops the action without touching any state.

use std::path::PathBuf;

use vx_core::FormatOptions;

use crate::state::{AppAction, SharedAppState};

/// Native document format name in the registry
const NATIVE_FORMAT: &str = "vx";

pub fn handle_file_action(action: AppAction, app_state: &SharedAppState) {
    match action {
        AppAction::NewImage => {
            let mut state = app_state.lock();
            state.image = vx_core::Image::default();
            state.clipboard = None;
            tracing::info!("new document");
        }
        AppAction::Save { path } => save(app_state, path, false),
        AppAction::SaveAs => save(app_state, None, true),
        AppAction::Open { path } => open(app_state, &path),
        AppAction::ImportImagePlane { path } => {
            let mut state = app_state.lock();
            state.image.add_image_plane(&path);
            tracing::info!(path = %path.display(), "imported image plane");
        }
        AppAction::ImportFile {
            format,
            path,
            options,
        } => {
            let resolved = path.or_else(|| prompt_import_path(app_state, &format));
            import_file(app_state, &format, resolved, &options);
        }
        AppAction::ExportFile { format, path } => {
            let state = &*app_state.lock();
            match state.formats.export(&format, &state.image, &path) {
                Ok(()) => tracing::info!(%format, path = %path.display(), "exported"),
                Err(err) => tracing::error!("export failed: {err}"),
            }
        }
        other => {
            debug_assert!(false, "not a file action: {other:?}");
        }
    }
}

/// Ask the user for an import path using the format's extensions
fn prompt_import_path(app_state: &SharedAppState, format: &str) -> Option<PathBuf> {
    let extensions: Vec<String> = {
        let state = app_state.lock();
        state
            .formats
            .find(format)?
            .extensions()
            .iter()
            .map(|e| e.to_string())
            .collect()
    };
    let ext_refs: Vec<&str> = extensions.iter().map(|s| s.as_str()).collect();
    rfd::FileDialog::new()
        .add_filter(format, &ext_refs)
        .pick_file()
}

/// Run an import once the path is known; a missing path (cancelled
/// dialog) performs no import call and no mutation
pub(crate) fn import_file(
    app_state: &SharedAppState,
    format: &str,
    path: Option<PathBuf>,
    options: &FormatOptions,
) {
    let Some(path) = path else {
        tracing::debug!(%format, "import cancelled");
        return;
    };
    let state = &mut *app_state.lock();
    match state
        .formats
        .import(format, &mut state.image, &path, options)
    {
        Ok(()) => tracing::info!(%format, path = %path.display(), "imported"),
        Err(err) => tracing::error!("import failed: {err}"),
    }
}

fn save(app_state: &SharedAppState, path: Option<PathBuf>, force_dialog: bool) {
    let current = app_state.lock().image.path.clone();
    let path = match (path, current, force_dialog) {
        (Some(path), _, _) => Some(path),
        (None, Some(current), false) => Some(current),
        _ => rfd::FileDialog::new()
            .add_filter("VX document", &["vx"])
            .set_file_name(format!("{}.vx", app_state.lock().image.name))
            .save_file(),
    };
    let Some(path) = path else {
        tracing::debug!("save cancelled");
        return;
    };

    let state = &mut *app_state.lock();
    match state.formats.export(NATIVE_FORMAT, &state.image, &path) {
        Ok(()) => {
            state.image.path = Some(path.clone());
            state.image.mark_saved();
            tracing::info!(path = %path.display(), "saved");
        }
        Err(err) => tracing::error!("save failed: {err}"),
    }
}

fn open(app_state: &SharedAppState, path: &std::path::Path) {
    let state = &mut *app_state.lock();
    match state
        .formats
        .import(NATIVE_FORMAT, &mut state.image, path, &FormatOptions::Null)
    {
        Ok(()) => tracing::info!(path = %path.display(), "opened"),
        Err(err) => tracing::error!("open failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::dispatch_action;
    use crate::state::create_shared_state;

    #[test]
    fn cancelled_import_mutates_nothing() {
        let state = create_shared_state();
        let key = state.lock().image.key();
        let layers = state.lock().image.layers.len();

        // Path resolution returned nothing: the dialog was cancelled.
        import_file(&state, NATIVE_FORMAT, None, &FormatOptions::Null);

        assert_eq!(state.lock().image.key(), key);
        assert_eq!(state.lock().image.layers.len(), layers);
    }

    #[test]
    fn failed_import_mutates_nothing() {
        let state = create_shared_state();
        let key = state.lock().image.key();

        import_file(
            &state,
            NATIVE_FORMAT,
            Some(PathBuf::from("/nonexistent/doc.vx")),
            &FormatOptions::Null,
        );

        assert_eq!(state.lock().image.key(), key);
    }

    #[test]
    fn save_then_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.vx");

        let state = create_shared_state();
        state.lock().image.add_layer("edit");
        dispatch_action(
            AppAction::Save {
                path: Some(path.clone()),
            },
            &state,
        );
        {
            let state = state.lock();
            assert!(!state.is_dirty());
            assert_eq!(state.image.path.as_deref(), Some(path.as_path()));
        }

        let reopened = create_shared_state();
        dispatch_action(AppAction::Open { path: path.clone() }, &reopened);
        let reopened = reopened.lock();
        assert_eq!(reopened.image.layers.len(), 2);
        assert!(!reopened.is_dirty());
    }

    #[test]
    fn export_through_registered_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.vx");

        let state = create_shared_state();
        dispatch_action(
            AppAction::ExportFile {
                format: NATIVE_FORMAT.to_string(),
                path: path.clone(),
            },
            &state,
        );
        assert!(path.exists());
        // Export is not a save: the document path stays unset.
        assert!(state.lock().image.path.is_none());
    }

    #[test]
    fn image_plane_import_adds_named_layer() {
        let state = create_shared_state();
        dispatch_action(
            AppAction::ImportImagePlane {
                path: PathBuf::from("/tmp/reference.png"),
            },
            &state,
        );
        let state = state.lock();
        assert_eq!(state.image.layers.len(), 2);
        assert_eq!(state.image.layers[1].name, "reference");
    }

    #[test]
    fn new_image_resets_document_and_clipboard() {
        let state = create_shared_state();
        {
            let mut state = state.lock();
            state.image.add_layer("edit");
            state.clipboard = state.image.active_layer().cloned();
        }
        dispatch_action(AppAction::NewImage, &state);
        let state = state.lock();
        assert_eq!(state.image.layers.len(), 1);
        assert!(state.clipboard.is_none());
        assert!(!state.is_dirty());
    }
}
