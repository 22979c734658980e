//! Raw page content-stream extraction using lopdf.
//!
//! The source documents carry their text as literal strings inside page
//! content streams, so the provider returns the raw (decompressed) stream
//! text rather than laid-out text. Streams are decoded as Windows-1252,
//! which is what these generators emit.

use encoding_rs::WINDOWS_1252;
use lopdf::{Document, Object};
use tracing::debug;

use super::{PageTextProvider, Result};
use crate::error::PdfError;

/// Page content-stream provider backed by lopdf.
pub struct ContentStreamProvider {
    document: Document,
}

impl ContentStreamProvider {
    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self { document: doc })
    }

    /// Collect the decompressed bytes of every content stream on a page.
    fn page_content_bytes(&self, page: u32) -> Result<Vec<u8>> {
        let pages = self.document.get_pages();
        let page_id = *pages.get(&page).ok_or(PdfError::InvalidPage(page))?;

        let page_dict = self
            .document
            .get_object(page_id)
            .and_then(Object::as_dict)
            .map_err(|e| PdfError::ContentStream(e.to_string()))?;

        let contents = match page_dict.get(b"Contents") {
            Ok(obj) => obj,
            Err(_) => return Ok(Vec::new()), // blank page
        };

        // Contents may be a stream, an array of streams, or a reference to either
        let (_, contents) = self
            .document
            .dereference(contents)
            .map_err(|e| PdfError::ContentStream(e.to_string()))?;

        let mut stream_refs = Vec::new();
        match contents {
            Object::Array(items) => stream_refs.extend(items.iter()),
            other => stream_refs.push(other),
        }

        let mut bytes = Vec::new();
        for obj_ref in stream_refs {
            let (_, obj) = self
                .document
                .dereference(obj_ref)
                .map_err(|e| PdfError::ContentStream(e.to_string()))?;

            if let Object::Stream(stream) = obj {
                let data = match stream.decompressed_content() {
                    Ok(d) => d,
                    Err(_) => stream.content.clone(),
                };
                bytes.extend_from_slice(&data);
                bytes.push(b'\n');
            }
        }

        Ok(bytes)
    }
}

impl PageTextProvider for ContentStreamProvider {
    fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    fn page_text(&self, pages: &[u32]) -> Result<String> {
        let mut text = String::new();

        for &page in pages {
            let bytes = self.page_content_bytes(page)?;
            let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
            text.push_str(&decoded);
        }

        debug!(
            "Extracted {} chars of content-stream text from {} page(s)",
            text.len(),
            pages.len()
        );
        Ok(text)
    }
}
