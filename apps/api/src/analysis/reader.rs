//! Document Reader — turns an uploaded resume file into raw text.
//!
//! Dispatches on file extension. Each supported format has exactly one
//! failure mode: a corrupt or unreadable file of a known extension surfaces
//! as `ReadError::Unreadable` and is NOT retried — this is the only stage of
//! the pipeline whose errors propagate to the caller.

use std::path::Path;

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unsupported file type: .{extension} (allowed: .txt, .pdf, .docx)")]
    UnsupportedFormat { extension: String },

    #[error("failed to read {format} document: {message}")]
    Unreadable { format: String, message: String },
}

/// Declared format of an uploaded resume, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "txt" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

/// Raw extracted resume content. Discarded after normalization, never stored.
#[derive(Debug)]
pub struct RawDocument {
    pub text: String,
    pub format: DocumentFormat,
}

/// Reads a resume file and extracts its text, dispatching on extension.
pub fn read(path: &Path) -> Result<RawDocument, ReadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    let format = DocumentFormat::from_extension(extension).ok_or_else(|| {
        ReadError::UnsupportedFormat {
            extension: extension.to_lowercase(),
        }
    })?;

    let text = match format {
        DocumentFormat::PlainText => read_txt(path)?,
        DocumentFormat::Pdf => read_pdf(path)?,
        DocumentFormat::Docx => read_docx_file(path)?,
    };

    Ok(RawDocument { text, format })
}

fn read_txt(path: &Path) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|e| unreadable(DocumentFormat::PlainText, e))
}

/// Extracts PDF text. `pdf-extract` walks the document page by page and joins
/// page text with newlines; pages without extractable text contribute
/// nothing, which is not an error.
fn read_pdf(path: &Path) -> Result<String, ReadError> {
    pdf_extract::extract_text(path).map_err(|e| unreadable(DocumentFormat::Pdf, e))
}

/// Extracts DOCX text as a single blob by walking every run of every
/// paragraph, one paragraph per line.
fn read_docx_file(path: &Path) -> Result<String, ReadError> {
    let data = std::fs::read(path).map_err(|e| unreadable(DocumentFormat::Docx, e))?;
    let docx = read_docx(&data).map_err(|e| unreadable(DocumentFormat::Docx, e))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let para_text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                RunChild::Text(t) => Some(t.text.as_str()),
                                _ => None,
                            })
                            .collect::<String>(),
                    ),
                    _ => None,
                })
                .collect();

            if !para_text.is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

fn unreadable(format: DocumentFormat, cause: impl std::fmt::Display) -> ReadError {
    ReadError::Unreadable {
        format: format.as_str().to_string(),
        message: cause.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file_with(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_unknown_extension_is_unsupported_and_names_allowed_set() {
        let err = read(Path::new("resume.xyz")).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ReadError::UnsupportedFormat { ref extension } if extension == "xyz"));
        assert!(message.contains(".txt"));
        assert!(message.contains(".pdf"));
        assert!(message.contains(".docx"));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = read(Path::new("resume")).unwrap_err();
        assert!(matches!(err, ReadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_txt_reads_content_verbatim() {
        let file = temp_file_with(".txt", b"Senior Rust Engineer\n5 years experience");
        let doc = read(file.path()).unwrap();
        assert_eq!(doc.format, DocumentFormat::PlainText);
        assert_eq!(doc.text, "Senior Rust Engineer\n5 years experience");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let file = temp_file_with(".TXT", b"hello");
        let doc = read(file.path()).unwrap();
        assert_eq!(doc.format, DocumentFormat::PlainText);
    }

    #[test]
    fn test_missing_txt_file_is_unreadable() {
        let err = read(Path::new("/nonexistent/resume.txt")).unwrap_err();
        assert!(matches!(err, ReadError::Unreadable { ref format, .. } if format == "txt"));
    }

    #[test]
    fn test_corrupt_pdf_is_unreadable_not_unsupported() {
        let file = temp_file_with(".pdf", b"not a real pdf");
        let err = read(file.path()).unwrap_err();
        assert!(matches!(err, ReadError::Unreadable { ref format, .. } if format == "pdf"));
    }

    #[test]
    fn test_corrupt_docx_is_unreadable_not_unsupported() {
        let file = temp_file_with(".docx", b"not a zip archive");
        let err = read(file.path()).unwrap_err();
        assert!(matches!(err, ReadError::Unreadable { ref format, .. } if format == "docx"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("DOCX"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("doc"), None);
    }
}
