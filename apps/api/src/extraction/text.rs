//! Text Extractor — turns an uploaded document buffer into plain text.
//!
//! Each supported media type routes to its own decoder. Decoder errors (and
//! decoder panics on malformed input) surface as `ExtractError::DecodeFailure`;
//! the raw decoder error types never leave this module.

use std::fmt;
use std::panic;

use thiserror::Error;
use tracing::{debug, warn};

pub const PDF_MIME: &str = "application/pdf";
pub const LEGACY_WORD_MIME: &str = "application/msword";
pub const OPEN_XML_WORD_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// First bytes of an OLE2 compound file (binary Word 97-2003 and friends).
const OLE2_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to decode document: {0}")]
    DecodeFailure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    LegacyWord,
    OpenXmlWord,
}

impl MediaType {
    /// Resolves a declared MIME type. Parameters such as `; charset=...` are ignored.
    pub fn from_mime(mime: &str) -> Result<Self, ExtractError> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Ok(MediaType::Pdf),
            LEGACY_WORD_MIME => Ok(MediaType::LegacyWord),
            OPEN_XML_WORD_MIME => Ok(MediaType::OpenXmlWord),
            _ => Err(ExtractError::UnsupportedFormat(mime.to_string())),
        }
    }

    /// Resolves a file name by its extension (`.pdf`, `.doc`, `.docx`).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(MediaType::Pdf),
            "doc" => Some(MediaType::LegacyWord),
            "docx" => Some(MediaType::OpenXmlWord),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => PDF_MIME,
            MediaType::LegacyWord => LEGACY_WORD_MIME,
            MediaType::OpenXmlWord => OPEN_XML_WORD_MIME,
        }
    }

    fn decoder(&self) -> &'static dyn DocumentDecoder {
        match self {
            MediaType::Pdf => &PdfDecoder,
            MediaType::LegacyWord => &LegacyWordDecoder,
            MediaType::OpenXmlWord => &OpenXmlWordDecoder,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// A decoder for one document format.
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

pub struct PdfDecoder;

impl DocumentDecoder for PdfDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        // pdf-extract panics on some malformed inputs instead of returning Err.
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractError::DecodeFailure(format!("invalid PDF: {e}"))),
            Err(_) => Err(ExtractError::DecodeFailure(
                "PDF decoder aborted on malformed input".to_string(),
            )),
        }
    }
}

pub struct OpenXmlWordDecoder;

impl DocumentDecoder for OpenXmlWordDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = docx_rs::read_docx(bytes)
            .map_err(|e| ExtractError::DecodeFailure(format!("invalid DOCX: {e}")))?;

        let mut text = String::new();
        for child in &doc.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => push_paragraph(&mut text, paragraph),
                docx_rs::DocumentChild::Table(table) => push_table(&mut text, table),
                _ => {}
            }
        }
        Ok(text)
    }
}

/// One line per paragraph, hyperlink text included.
fn push_paragraph(out: &mut String, paragraph: &docx_rs::Paragraph) {
    push_paragraph_children(out, &paragraph.children);
    out.push('\n');
}

fn push_paragraph_children(out: &mut String, children: &[docx_rs::ParagraphChild]) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run(out, run),
            docx_rs::ParagraphChild::Hyperlink(link) => push_paragraph_children(out, &link.children),
            _ => {}
        }
    }
}

fn push_run(out: &mut String, run: &docx_rs::Run) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => out.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => out.push('\t'),
            docx_rs::RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

// Rows -> cells -> paragraphs, in document order. Nested tables recurse.
fn push_table(out: &mut String, table: &docx_rs::Table) {
    for row in &table.rows {
        let docx_rs::TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(paragraph) => push_paragraph(out, paragraph),
                    docx_rs::TableCellContent::Table(nested) => push_table(out, nested),
                    _ => {}
                }
            }
        }
    }
}

/// `.doc` uploads go through the OOXML decoder: most of them are renamed
/// `.docx` files. Genuine binary Word documents are rejected outright.
pub struct LegacyWordDecoder;

impl DocumentDecoder for LegacyWordDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        if bytes.starts_with(&OLE2_SIGNATURE) {
            return Err(ExtractError::DecodeFailure(
                "binary Word 97-2003 documents are not supported; save the file as .docx or PDF"
                    .to_string(),
            ));
        }
        OpenXmlWordDecoder.decode(bytes)
    }
}

/// Decodes `buffer` according to the declared `media_type`.
pub fn extract_text(buffer: &[u8], media_type: &str) -> Result<String, ExtractError> {
    let media_type = MediaType::from_mime(media_type)?;
    let raw = media_type.decoder().decode(buffer).map_err(|e| {
        warn!("Decoding {} buffer ({} bytes) failed: {e}", media_type, buffer.len());
        e
    })?;
    let text = normalize(&raw);
    debug!("Decoded {} buffer into {} chars", media_type, text.len());
    Ok(text)
}

fn normalize(raw: &str) -> String {
    raw.replace('\0', "").replace("\r\n", "\n").replace('\r', "\n")
}
