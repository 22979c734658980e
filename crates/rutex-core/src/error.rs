//! Error types for the rutex-core library.

use thiserror::Error;

/// Main error type for the rutex library.
#[derive(Error, Debug)]
pub enum RutexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// Failed to read a page's content streams.
    #[error("failed to read page content: {0}")]
    ContentStream(String),
}

/// Errors related to token-based field extraction.
///
/// Only the identification block and the resolution forward scan are fatal
/// paths; optional field misses degrade to `None` values instead.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The distiller produced no tokens at all.
    #[error("document produced no tokens")]
    EmptyDocument,

    /// No digit run of 10 or more characters was found.
    #[error("no identification anchor: no token with 10 or more consecutive digits")]
    NoIdentificationAnchor,

    /// The identification run is too short to split into number and check digit.
    #[error("malformed identification block: found {found} token(s), need at least 2")]
    MalformedIdentificationBlock { found: usize },

    /// A fixed-offset or counted-scan step ran past the end of the tokens.
    #[error("structural mismatch at {stage}: needed {needed} token(s), {available} available")]
    StructuralMismatch {
        stage: &'static str,
        needed: usize,
        available: usize,
    },

    /// A value at an expected position is not a parseable date.
    #[error("failed to parse date: {value:?}")]
    DateParse { value: String },

    /// A value at an expected position is not a parseable number.
    #[error("failed to parse {field} as a number: {value:?}")]
    NumberParse { field: &'static str, value: String },
}

/// Result type for the rutex library.
pub type Result<T> = std::result::Result<T, RutexError>;
