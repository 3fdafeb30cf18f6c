pub mod display;
pub mod ocr;
