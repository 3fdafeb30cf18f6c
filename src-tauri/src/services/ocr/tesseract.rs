use super::engine::{output_base, output_text_path, OcrEngine};
use crate::error::OcrError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Executable looked up on the search path
pub const TESSERACT_PROGRAM: &str = "tesseract";

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)tesseract\s+v?(\d+(?:\.\d+)*(?:[-.][0-9A-Za-z]+)?)")
        .expect("Tesseract version regex pattern is valid and should compile")
});

/// Tesseract OCR engine driving the command-line tool
pub struct TesseractCli {
    program: PathBuf,
}

impl TesseractCli {
    /// Use `tesseract` from the search path
    pub fn new() -> Self {
        Self::with_program(TESSERACT_PROGRAM)
    }

    /// Use a specific executable instead of `tesseract`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run `<program> --version` and return the reported version
    ///
    /// Returns None when the program cannot be spawned or exits unsuccessfully.
    /// Older releases print the banner on stderr, so both streams are searched.
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let banner = format!(
            "{}\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );

        Some(parse_version(&banner).unwrap_or_else(|| "unknown".to_string()))
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractCli {
    fn is_available(&self) -> bool {
        match self.version() {
            Some(version) => {
                tracing::info!("Found {} version {}", self.program_name(), version);
                true
            }
            None => {
                tracing::warn!("{} is not installed or not runnable", self.program_name());
                false
            }
        }
    }

    fn run(&self, input: &Path, language: &str) -> Result<PathBuf, OcrError> {
        // $ tesseract <input> <output base> -l <language>
        let base = output_base(input)?;

        tracing::debug!(
            "Running {} {} {} -l {}",
            self.program_name(),
            input.display(),
            base.display(),
            language
        );

        let output = Command::new(&self.program)
            .arg(input)
            .arg(&base)
            .arg("-l")
            .arg(language)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| OcrError::Spawn {
                program: self.program_name(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!("{} failed with {}: {}", self.program_name(), output.status, stderr);
            return Err(OcrError::ToolFailed {
                program: self.program_name(),
                status: output.status,
                stderr,
            });
        }

        Ok(output_text_path(&base))
    }
}

/// Extract `5.3.0` from a banner like `tesseract 5.3.0\n leptonica-1.82.0`
fn parse_version(banner: &str) -> Option<String> {
    if let Some(caps) = VERSION_PATTERN.captures(banner) {
        return caps.get(1).map(|m| m.as_str().to_string());
    }

    banner
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
