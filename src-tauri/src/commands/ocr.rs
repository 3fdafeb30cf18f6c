use super::display::WindowDisplay;
use crate::models::view::ViewState;
use crate::services::controller::Controller;
use crate::services::ocr::TesseractCli;
use parking_lot::Mutex;
use std::path::PathBuf;
use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;

/// State wrapper for the session (one action at a time)
pub type ControllerState = Mutex<Controller<TesseractCli>>;

/// Load `lang.json` from the working directory and probe for tesseract
pub fn init_controller() -> ControllerState {
    let working_dir = std::env::current_dir().unwrap_or_else(|e| {
        tracing::warn!("Cannot determine working directory: {}", e);
        PathBuf::from(".")
    });

    Mutex::new(Controller::new(TesseractCli::new(), &working_dir))
}

/// Current session snapshot, used on page load
#[tauri::command(async)]
pub fn get_view_state(state: State<'_, ControllerState>) -> Result<ViewState, String> {
    Ok(state.lock().view())
}

/// Open the file-picker and record the selection
#[tauri::command(async)]
pub fn choose_file(app: AppHandle, state: State<'_, ControllerState>) -> Result<ViewState, String> {
    let display = WindowDisplay::new(app);
    let mut controller = state.lock();

    controller.choose_file(&display);
    Ok(controller.view())
}

/// Run tesseract on the selected file and read the result back
#[tauri::command(async)]
pub fn convert(app: AppHandle, state: State<'_, ControllerState>) -> Result<ViewState, String> {
    let display = WindowDisplay::new(app);
    let mut controller = state.lock();

    controller.convert(&display);
    Ok(controller.view())
}

/// Open the last produced text file in the system default editor
#[tauri::command(async)]
pub fn open_output_file(app: AppHandle, state: State<'_, ControllerState>) -> Result<(), String> {
    let path = state.lock().output_file_to_open()?;

    app.opener()
        .open_path(path.to_string_lossy(), None::<&str>)
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))
}
