use crate::error::ConvertError;
use crate::models::settings::Settings;
use crate::models::view::ViewState;
use crate::services::ocr::OcrEngine;
use crate::services::reader::read_text;
use crate::services::settings::{LoadedSettings, SettingsLoader};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const INSTRUCTIONS: &str = "Optical character recognition from image to text via 'Tesseract'\nOutput-File will be created as .txt in the same folder as origin";
pub const OUTPUT_PLACEHOLDER: &str = "Converted text will display here";

pub const WAITING_FOR_FILE: &str = "Waiting for file";
pub const TOOL_NOT_FOUND: &str = "Did not find a valid Tesseract Installation";
pub const FILE_SELECTED: &str = "File selected";
pub const SELECT_A_FILE: &str = "Please select a file";
pub const CANNOT_CONVERT_WITHOUT_TOOL: &str = "No Tesseract Installation found - can't convert image";
pub const CHOOSE_FILE_TO_CONVERT: &str = "Choose a File to convert";
pub const OCR_EXECUTING: &str = "OCR executing, please wait..";
pub const IMAGE_CONVERTED: &str = "Image converted succesfully";
pub const RECOGNITION_FAILED: &str = "Error with text recognition";

pub const PICKER_TITLE: &str = "Select file";
pub const NO_OUTPUT_FILE: &str = "No text file has been produced yet";

/// Named extension filter offered by the file-picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

pub const IMAGE_FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Image Files",
        extensions: &["png", "jpg", "jpeg", "tiff"],
    },
    FileFilter {
        name: "All Files",
        extensions: &["*"],
    },
];

/// The windowing side of the application, as seen by the controller
pub trait DisplayLayer {
    /// Replace the single-line status display
    fn show_status(&self, status: &str);

    /// Replace the contents of the multi-line text display
    fn show_text(&self, text: &str);

    /// Modal file-open dialog; None when the user cancels
    fn pick_file(&self, title: &str, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Session moved to another phase, e.g. into and out of `Converting`
    fn show_phase(&self, _phase: Phase) {}
}

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No tesseract found at startup; permanent
    ToolMissing,
    NoFile,
    FileSelected,
    Converting,
}

struct SessionState {
    selected_path: Option<PathBuf>,
    tool_available: bool,
    status_message: String,
    output_text: String,
    last_output_path: Option<PathBuf>,
    converting: bool,
    settings: Settings,
    settings_notice: Option<String>,
}

/// Owns the session and runs the "Choose File" and "OCR" actions
pub struct Controller<E: OcrEngine> {
    engine: E,
    state: SessionState,
}

impl<E: OcrEngine> Controller<E> {
    /// Load `lang.json` from `working_dir` and probe the engine
    pub fn new(engine: E, working_dir: &Path) -> Self {
        let loaded = SettingsLoader::new(working_dir).load();
        Self::with_settings(engine, loaded)
    }

    /// Start a session with already loaded settings. The engine is probed
    /// here and never again.
    pub fn with_settings(engine: E, loaded: LoadedSettings) -> Self {
        let tool_available = engine.is_available();

        let status_message = if tool_available {
            WAITING_FOR_FILE
        } else {
            tracing::warn!("OCR disabled: no usable tesseract installation");
            TOOL_NOT_FOUND
        };

        Self {
            engine,
            state: SessionState {
                selected_path: None,
                tool_available,
                status_message: status_message.to_string(),
                output_text: OUTPUT_PLACEHOLDER.to_string(),
                last_output_path: None,
                converting: false,
                settings: loaded.settings,
                settings_notice: loaded.notice,
            },
        }
    }

    /// "Choose File" button
    pub fn choose_file(&mut self, display: &dyn DisplayLayer) {
        match display.pick_file(PICKER_TITLE, IMAGE_FILE_FILTERS) {
            Some(path) if !path.as_os_str().is_empty() => {
                tracing::info!("Selected {}", path.display());
                self.state.selected_path = Some(path);
                self.set_status(display, FILE_SELECTED);
                display.show_phase(self.phase());
            }
            _ => self.set_status(display, SELECT_A_FILE),
        }
    }

    /// "OCR" button
    pub fn convert(&mut self, display: &dyn DisplayLayer) {
        if !self.state.tool_available {
            self.set_status(display, CANNOT_CONVERT_WITHOUT_TOOL);
            return;
        }

        let Some(input) = self.state.selected_path.clone() else {
            self.set_status(display, CHOOSE_FILE_TO_CONVERT);
            return;
        };

        self.set_status(display, OCR_EXECUTING);
        self.state.converting = true;
        display.show_phase(Phase::Converting);
        let outcome = self.recognize(&input);
        self.state.converting = false;
        display.show_phase(self.phase());

        match outcome {
            Ok((output_path, text)) => {
                tracing::info!(
                    "Converted {} into {}",
                    input.display(),
                    output_path.display()
                );
                display.show_text(&text);
                self.state.output_text = text;
                self.state.last_output_path = Some(output_path);
                self.set_status(display, IMAGE_CONVERTED);
            }
            Err(ConvertError::Read(e)) => {
                tracing::warn!("Reading OCR output for {} failed: {}", input.display(), e);
                self.set_status(display, format!("{}: {}", RECOGNITION_FAILED, e));
            }
            Err(e) => {
                tracing::warn!("OCR of {} failed: {}", input.display(), e);
                self.set_status(display, format!("Error: {}", e));
            }
        }
    }

    fn recognize(&self, input: &Path) -> Result<(PathBuf, String), ConvertError> {
        let output_path = self.engine.run(input, &self.state.settings.language)?;
        let text = read_text(&output_path, &self.state.settings.encoding)?;
        Ok((output_path, text))
    }

    fn set_status(&mut self, display: &dyn DisplayLayer, status: impl Into<String>) {
        self.state.status_message = status.into();
        display.show_status(&self.state.status_message);
    }

    pub fn status(&self) -> &str {
        &self.state.status_message
    }

    pub fn output_text(&self) -> &str {
        &self.state.output_text
    }

    pub fn selected_path(&self) -> Option<&Path> {
        self.state.selected_path.as_deref()
    }

    /// Final component of the selected path, for the read-only entry
    pub fn selected_file_name(&self) -> Option<String> {
        self.selected_path()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn tool_available(&self) -> bool {
        self.state.tool_available
    }

    pub fn language(&self) -> &str {
        &self.state.settings.language
    }

    pub fn encoding(&self) -> &str {
        &self.state.settings.encoding
    }

    pub fn settings_notice(&self) -> Option<&str> {
        self.state.settings_notice.as_deref()
    }

    /// Text file produced by the last successful conversion
    pub fn last_output_path(&self) -> Option<&Path> {
        self.state.last_output_path.as_deref()
    }

    /// Text file for the "Open text file" button
    pub fn output_file_to_open(&self) -> Result<PathBuf, String> {
        self.last_output_path()
            .map(Path::to_path_buf)
            .ok_or_else(|| NO_OUTPUT_FILE.to_string())
    }

    pub fn phase(&self) -> Phase {
        if !self.state.tool_available {
            Phase::ToolMissing
        } else if self.state.converting {
            Phase::Converting
        } else if self.state.selected_path.is_some() {
            Phase::FileSelected
        } else {
            Phase::NoFile
        }
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            status: self.state.status_message.clone(),
            output_text: self.state.output_text.clone(),
            selected_file: self.selected_file_name(),
            tool_available: self.state.tool_available,
            language: self.state.settings.language.clone(),
            encoding: self.state.settings.encoding.clone(),
            notice: self.state.settings_notice.clone(),
            has_output_file: self.state.last_output_path.is_some(),
        }
    }
}
