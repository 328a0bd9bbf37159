pub mod document;
pub mod rotation;

pub use document::PdfDocument;
