//! Action dispatch
//!
//! Menu items and popups queue [`AppAction`]s on the session; the app
//! drains the queue at the start of each frame and dispatches here. All
//! failures are logged, never surfaced as UI errors (disabled menu items
//! are the only failure UI this layer has).

mod file;

pub use file::handle_file_action;

use crate::state::{AppAction, SharedAppState};

/// Dispatch one action to its handler
pub fn dispatch_action(action: AppAction, app_state: &SharedAppState) {
    match action {
        AppAction::NewImage
        | AppAction::Save { .. }
        | AppAction::SaveAs
        | AppAction::Open { .. }
        | AppAction::ImportImagePlane { .. }
        | AppAction::ImportFile { .. }
        | AppAction::ExportFile { .. } => handle_file_action(action, app_state),

        AppAction::Undo => {
            if !app_state.lock().image.undo() {
                tracing::debug!("nothing to undo");
            }
        }
        AppAction::Redo => {
            if !app_state.lock().image.redo() {
                tracing::debug!("nothing to redo");
            }
        }
        AppAction::Copy => {
            let mut state = app_state.lock();
            state.clipboard = state.image.active_layer().cloned();
        }
        AppAction::Paste => {
            let mut state = app_state.lock();
            if let Some(layer) = state.clipboard.clone() {
                state.image.paste_layer(&layer);
            }
        }
        AppAction::ClearLayer => {
            app_state.lock().image.clear_active_layer();
        }

        AppAction::SetView(preset) => {
            app_state.lock().image.set_view(preset);
        }
        AppAction::ToggleOrtho => {
            app_state.lock().image.toggle_ortho();
        }

        AppAction::RunScript(name) => {
            let state = &mut *app_state.lock();
            if let Err(err) = state.scripts.execute(&name, &mut state.image) {
                tracing::error!("script failed: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_shared_state;
    use vx_core::ViewPreset;

    #[test]
    fn copy_paste_duplicates_active_layer() {
        let state = create_shared_state();
        dispatch_action(AppAction::Copy, &state);
        dispatch_action(AppAction::Paste, &state);
        assert_eq!(state.lock().image.layers.len(), 2);
    }

    #[test]
    fn paste_with_empty_clipboard_is_noop() {
        let state = create_shared_state();
        let key = state.lock().image.key();
        dispatch_action(AppAction::Paste, &state);
        assert_eq!(state.lock().image.key(), key);
    }

    #[test]
    fn undo_reverts_view_change() {
        let state = create_shared_state();
        let key = state.lock().image.key();
        dispatch_action(AppAction::SetView(ViewPreset::Top), &state);
        assert_ne!(state.lock().image.key(), key);
        dispatch_action(AppAction::Undo, &state);
        assert_eq!(state.lock().image.key(), key);
    }

    #[test]
    fn failed_script_leaves_document_untouched() {
        let state = create_shared_state();
        state
            .lock()
            .scripts
            .register("boom", |_| Err("exploded".into()));
        let key = state.lock().image.key();
        dispatch_action(AppAction::RunScript("boom".into()), &state);
        assert_eq!(state.lock().image.key(), key);
    }

    #[test]
    fn script_mutates_document() {
        let state = create_shared_state();
        state.lock().scripts.register("grow", |image| {
            image.add_layer("scripted");
            Ok(())
        });
        dispatch_action(AppAction::RunScript("grow".into()), &state);
        assert_eq!(state.lock().image.layers.len(), 2);
    }
}
