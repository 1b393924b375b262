use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{DocumentMetadata, ExtractError, ParsedDocument};

const DOCUMENT_PART: &str = "word/document.xml";
/// Maximum decompressed bytes read from the document part (zip-bomb protection).
const MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;

pub fn parse_docx(bytes: &[u8]) -> Result<ParsedDocument, ExtractError> {
    let xml = read_document_part(bytes)?;
    let text = extract_paragraph_text(&xml)?;

    Ok(ParsedDocument {
        text,
        metadata: DocumentMetadata {
            file_type: "docx".to_string(),
            ..Default::default()
        },
    })
}

fn read_document_part(bytes: &[u8]) -> Result<Vec<u8>, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let entry = archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| ExtractError::Docx(format!("{DOCUMENT_PART} not found")))?;

    let mut out = Vec::new();
    entry
        .take(MAX_DOCUMENT_BYTES)
        .read_to_end(&mut out)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    if out.len() as u64 >= MAX_DOCUMENT_BYTES {
        return Err(ExtractError::Docx(format!(
            "{DOCUMENT_PART} exceeds size limit ({MAX_DOCUMENT_BYTES} bytes)"
        )));
    }
    Ok(out)
}

/// Collects `w:t` runs; one line per `w:p` paragraph.
fn extract_paragraph_text(xml: &[u8]) -> Result<String, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text = true,
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().map_err(|e| ExtractError::Docx(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => out.push('\t'),
                b"br" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}
