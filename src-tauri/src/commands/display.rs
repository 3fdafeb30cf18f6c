use crate::services::controller::{DisplayLayer, FileFilter, Phase};
use serde::Serialize;
use std::path::PathBuf;
use tauri::{AppHandle, Emitter};
use tauri_plugin_dialog::DialogExt;

pub const STATUS_EVENT: &str = "status-changed";
pub const TEXT_EVENT: &str = "text-changed";
pub const PHASE_EVENT: &str = "phase-changed";

/// Display layer backed by the webview window and the native file dialog
pub struct WindowDisplay {
    app: AppHandle,
    start_dir: Option<PathBuf>,
}

impl WindowDisplay {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            start_dir: std::env::current_dir().ok(),
        }
    }

    fn emit<S: Serialize + Clone>(&self, event: &str, payload: S) {
        if let Err(e) = self.app.emit(event, payload) {
            tracing::error!("Failed to emit {}: {}", event, e);
        }
    }
}

impl DisplayLayer for WindowDisplay {
    fn show_status(&self, status: &str) {
        self.emit(STATUS_EVENT, status);
    }

    fn show_text(&self, text: &str) {
        self.emit(TEXT_EVENT, text);
    }

    fn show_phase(&self, phase: Phase) {
        self.emit(PHASE_EVENT, phase);
    }

    fn pick_file(&self, title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        let mut dialog = self.app.dialog().file().set_title(title);
        for filter in filters {
            dialog = dialog.add_filter(filter.name, filter.extensions);
        }
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        // Blocks until the user closes the dialog; never call from the main thread
        let picked = dialog.blocking_pick_file()?;
        match picked.into_path() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Dialog returned an unusable path: {}", e);
                None
            }
        }
    }
}
