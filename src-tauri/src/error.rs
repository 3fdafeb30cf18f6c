use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures of the external OCR invocation
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed ({status}): {stderr}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Cannot derive an output file name from {}", .0.display())]
    InvalidInput(PathBuf),
}

/// Failures while reading back the text file written by the OCR tool
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Text-File Importing-Error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Text-File Importing-Error: unknown encoding '{0}'")]
    UnknownEncoding(String),

    #[error("Text-File Importing-Error: {} is not valid {encoding}", .path.display())]
    Decode { path: PathBuf, encoding: String },
}

/// Everything that can go wrong between "OCR" click and displayed text
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error(transparent)]
    Read(#[from] ReadError),
}
