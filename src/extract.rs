//! Document text extraction.
//!
//! PDFs yield a page count and the text of every page; anything else is
//! decoded as UTF-8 text with no page count.

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::{info, warn};

use crate::errors::SummarizerError;
use crate::utils::mime::is_pdf_upload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub page_count: Option<u32>,
    pub text: String,
}

impl ExtractedDocument {
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.page_count.is_some()
    }
}

/// Extracts the text of an uploaded file.
///
/// # Errors
///
/// Returns [`SummarizerError::Extraction`] if the file looks like a PDF but
/// cannot be parsed.
pub async fn extract_document(
    filename: Option<&str>,
    bytes: Vec<u8>,
) -> Result<ExtractedDocument, SummarizerError> {
    if !is_pdf_upload(filename, &bytes) {
        info!(bytes = bytes.len(), "Decoding upload as plain text");
        return Ok(ExtractedDocument {
            page_count: None,
            text: decode_text(&bytes),
        });
    }

    info!(bytes = bytes.len(), "Extracting text from PDF upload");
    let extracted = tokio::task::spawn_blocking(move || extract_pdf(&bytes))
        .await
        .map_err(|e| SummarizerError::Extraction(format!("PDF extraction task failed: {e}")))??;
    Ok(extracted)
}

/// Parses a PDF and concatenates its pages, each preceded by a
/// `--- Page n ---` marker.
///
/// # Errors
///
/// Returns an error if the bytes are not a readable PDF.
pub fn extract_pdf(bytes: &[u8]) -> Result<ExtractedDocument> {
    let doc = Document::load_mem(bytes).context("Failed to load PDF document")?;
    let pages = doc.get_pages();
    let page_count = u32::try_from(pages.len()).context("PDF has too many pages")?;

    let mut text = String::new();
    for (index, page_number) in pages.keys().enumerate() {
        text.push_str(&format!("\n--- Page {} ---\n\n", index + 1));
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!("Failed to extract text from page {}: {}", page_number, e),
        }
    }

    Ok(ExtractedDocument {
        page_count: Some(page_count),
        text,
    })
}

#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = i64::try_from(kids.len()).unwrap();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_extract_pdf_counts_pages_and_marks_them() {
        let bytes = build_pdf(&["First page", "Second page", "Third page"]);
        let extracted = extract_pdf(&bytes).unwrap();

        assert_eq!(extracted.page_count, Some(3));
        assert!(extracted.text.starts_with("\n--- Page 1 ---\n\n"));
        assert!(extracted.text.contains("\n--- Page 2 ---\n\n"));
        assert!(extracted.text.contains("\n--- Page 3 ---\n\n"));
        assert!(!extracted.text.contains("--- Page 4 ---"));
    }

    #[tokio::test]
    async fn test_extract_document_routes_pdf() {
        let bytes = build_pdf(&["Only page"]);
        let extracted = extract_document(Some("order.pdf"), bytes).await.unwrap();
        assert!(extracted.is_pdf());
        assert_eq!(extracted.page_count, Some(1));
    }

    #[tokio::test]
    async fn test_extract_document_plain_text() {
        let extracted = extract_document(Some("brief.txt"), b"The appellant argues".to_vec())
            .await
            .unwrap();
        assert_eq!(extracted.page_count, None);
        assert_eq!(extracted.text, "The appellant argues");
    }

    #[tokio::test]
    async fn test_extract_document_rejects_broken_pdf() {
        let err = extract_document(Some("broken.pdf"), b"%PDF-1.4 garbage".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizerError::Extraction(_)));
    }

    #[test]
    fn test_decode_text_is_lossy() {
        assert_eq!(decode_text(b"caf\xff"), "caf\u{fffd}");
    }
}
