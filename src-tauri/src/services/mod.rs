pub mod controller;
pub mod ocr;
pub mod reader;
pub mod settings;
