//! Plain-text extraction from uploaded CV files.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvFormat {
    Pdf,
    Docx,
    Txt,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Cannot extract text from PDF.")]
    Pdf,
    #[error("Cannot extract text from DOCX.")]
    Docx,
}

impl CvFormat {
    /// Format from the file name's extension, case-insensitive.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }
}

pub fn extract_text(format: CvFormat, data: &[u8]) -> Result<String, ExtractError> {
    match format {
        CvFormat::Txt => Ok(String::from_utf8_lossy(data).into_owned()),
        CvFormat::Pdf => {
            // The PDF parser panics on some malformed inputs.
            let parsed = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data));
            match parsed {
                Ok(Ok(text)) => non_blank(text).ok_or(ExtractError::Pdf),
                Ok(Err(e)) => {
                    tracing::debug!("cv_text: pdf extraction failed: {e}");
                    Err(ExtractError::Pdf)
                }
                Err(_) => {
                    tracing::warn!("cv_text: pdf parser panicked");
                    Err(ExtractError::Pdf)
                }
            }
        }
        CvFormat::Docx => {
            let xml = docx_document_xml(data).ok_or(ExtractError::Docx)?;
            let text = docx_paragraphs(&xml).ok_or(ExtractError::Docx)?;
            non_blank(text).ok_or(ExtractError::Docx)
        }
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn docx_document_xml(data: &[u8]) -> Option<String> {
    let mut archive = match zip::ZipArchive::new(Cursor::new(data)) {
        Ok(archive) => archive,
        Err(e) => {
            tracing::debug!("cv_text: not a docx archive: {e}");
            return None;
        }
    };
    let mut entry = archive.by_name("word/document.xml").ok()?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml).ok()?;
    Some(xml)
}

/// Text runs (`w:t`) of a WordprocessingML body, one line per paragraph.
fn docx_paragraphs(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => out.push('\t'),
            Ok(Event::Text(t)) if in_text => out.push_str(&t.unescape().ok()?),
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::debug!("cv_text: malformed document.xml: {e}");
                return None;
            }
            _ => {}
        }
    }

    Some(out)
}
