use serde::Serialize;

/// Snapshot of the session sent to the webview after every action
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub status: String,
    pub output_text: String,
    /// File name only, shown in the read-only entry next to the buttons
    pub selected_file: Option<String>,
    pub tool_available: bool,
    pub language: String,
    pub encoding: String,
    /// Informational message from loading `lang.json`
    pub notice: Option<String>,
    pub has_output_file: bool,
}
