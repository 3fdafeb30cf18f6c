pub mod engine;
pub mod tesseract;

// Re-export main types
pub use engine::{output_base, output_text_path, OcrEngine, OUTPUT_SUFFIX};
pub use tesseract::{TesseractCli, TESSERACT_PROGRAM};
