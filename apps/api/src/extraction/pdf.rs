use lopdf::{Dictionary, Document, Object};

use super::{DocumentMetadata, ExtractError, ParsedDocument};

/// Page count and info-dictionary fields, verbatim from the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfInfo {
    pub page_count: u32,
    pub author: Option<String>,
    pub creation_date: Option<String>,
}

pub fn parse_pdf(bytes: &[u8]) -> Result<ParsedDocument, ExtractError> {
    let info = read_pdf_info(bytes)?;
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    Ok(ParsedDocument {
        text,
        metadata: DocumentMetadata {
            file_type: "pdf".to_string(),
            page_count: Some(info.page_count),
            author: info.author,
            creation_date: info.creation_date,
        },
    })
}

pub fn read_pdf_info(bytes: &[u8]) -> Result<PdfInfo, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let info_dict = doc.trailer.get(b"Info").ok().and_then(|obj| match obj {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    });

    Ok(PdfInfo {
        page_count: doc.get_pages().len() as u32,
        author: info_dict.and_then(|d| info_string(d, b"Author")),
        creation_date: info_dict.and_then(|d| info_string(d, b"CreationDate")),
    })
}

fn info_string(dict: &Dictionary, key: &[u8]) -> Option<String> {
    let raw = dict.get(key).ok()?.as_str().ok()?;
    let decoded = decode_pdf_text(raw);
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// PDF text strings are either UTF-16BE with a BOM or PDFDocEncoding
/// (treated here as Latin-1).
fn decode_pdf_text(raw: &[u8]) -> String {
    if let Some(utf16) = raw.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        raw.iter().map(|&b| b as char).collect()
    }
}
