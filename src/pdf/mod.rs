// src/pdf/mod.rs
pub mod reader;

pub use reader::{PageSource, PdfDocument};
