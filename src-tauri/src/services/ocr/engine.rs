use crate::error::OcrError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Appended to the input's file stem to name the OCR output
pub const OUTPUT_SUFFIX: &str = "_ocr";

/// OCR Engine trait - abstraction over the external recognizer
pub trait OcrEngine {
    /// Check if the OCR engine is available. Called once at startup.
    fn is_available(&self) -> bool;

    /// Recognize the image at `input` and return the path of the text file
    /// holding the result
    fn run(&self, input: &Path, language: &str) -> Result<PathBuf, OcrError>;
}

/// Output base handed to tesseract: `<dir>/<stem>_ocr`, next to the input
pub fn output_base(input: &Path) -> Result<PathBuf, OcrError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| OcrError::InvalidInput(input.to_path_buf()))?;

    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);

    Ok(input.with_file_name(name))
}

/// Text file tesseract writes for a given output base
///
/// The extension is appended, not substituted: a base like `scan.v2_ocr`
/// must become `scan.v2_ocr.txt`.
pub fn output_text_path(base: &Path) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".txt");
    PathBuf::from(path)
}
