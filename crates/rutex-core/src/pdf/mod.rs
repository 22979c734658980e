//! PDF page content access.

mod provider;

pub use provider::ContentStreamProvider;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for page-text providers.
///
/// Implementations return the decoded text of the requested pages,
/// concatenated in the order given. The distiller runs on this text.
pub trait PageTextProvider {
    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Decoded text of the given pages (1-indexed), concatenated in order.
    fn page_text(&self, pages: &[u32]) -> Result<String>;
}
