//! MIME utilities shared across modules

const PDF_MIME: &str = "application/pdf";
const PDF_MAGIC: &[u8] = b"%PDF";

/// Returns whether an upload should be treated as a PDF, judging by its file
/// name first and by its leading bytes otherwise.
pub fn is_pdf_upload(filename: Option<&str>, bytes: &[u8]) -> bool {
    let by_name = filename.is_some_and(|name| {
        mime_guess::from_path(name.to_ascii_lowercase())
            .iter_raw()
            .any(|m| m == PDF_MIME)
    });
    by_name || bytes.starts_with(PDF_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_detected_by_extension() {
        assert!(is_pdf_upload(Some("judgment.PDF"), b"not really"));
        assert!(is_pdf_upload(Some("a.pdf"), b""));
    }

    #[test]
    fn test_pdf_detected_by_magic_bytes() {
        assert!(is_pdf_upload(Some("upload.bin"), b"%PDF-1.7\n"));
        assert!(is_pdf_upload(None, b"%PDF-1.4"));
    }

    #[test]
    fn test_text_is_not_pdf() {
        assert!(!is_pdf_upload(Some("notes.txt"), b"IN THE HIGH COURT"));
        assert!(!is_pdf_upload(None, b"%PD"));
    }
}
