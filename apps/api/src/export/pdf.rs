//! Two-column `Metric | Value` PDF report on A4 pages, drawn with lopdf.
//!
//! Table text is set in Courier so wrapping can be computed from character counts.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use serde_json::Value;

use super::{value_to_cell, ExportError};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;

const TITLE_SIZE: f32 = 16.0;
const TITLE_LINE_HEIGHT: f32 = 20.0;
const BODY_SIZE: f32 = 10.0;
const LINE_HEIGHT: f32 = 12.0;
const CELL_PADDING: f32 = 5.0;
const KEY_COL_WIDTH: f32 = 150.0;
const VALUE_COL_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN - KEY_COL_WIDTH;

/// Courier advance width as a fraction of the font size.
const COURIER_ADVANCE: f32 = 0.6;
/// Rough Helvetica-Bold average advance, only used to wrap the title.
const TITLE_ADVANCE: f32 = 0.58;

const FONT_TITLE: &str = "F1";
const FONT_BODY: &str = "F2";
const FONT_HEADER: &str = "F3";

/// Renders `data` as a titled table. Objects produce one row per top-level key,
/// arrays one row per element (keyed by index), scalars a single `value` row.
pub fn render_pdf(title: &str, data: &Value) -> Result<Vec<u8>, ExportError> {
    let mut composer = PageComposer::new();
    composer.draw_title(title);
    composer.draw_header();
    for (key, value) in table_rows(data) {
        composer.draw_row(&key, &value_to_cell(value));
    }
    assemble(composer.finish())
}

fn table_rows(data: &Value) -> Vec<(String, &Value)> {
    match data {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        scalar => vec![("value".to_string(), scalar)],
    }
}

fn chars_per_line(column_width: f32) -> usize {
    ((column_width - 2.0 * CELL_PADDING) / (BODY_SIZE * COURIER_ADVANCE)).floor() as usize
}

/// Greedy word wrap. Words longer than a line are hard-split. Always returns at
/// least one (possibly empty) line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let line_len = line.chars().count();
            let needed = if line.is_empty() { word.len() } else { line_len + 1 + word.len() };
            if needed > max_chars {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Standard Type1 fonts use single-byte WinAnsi; anything outside Latin-1 becomes `?`.
fn pdf_string(text: &str) -> Object {
    let bytes = text
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect();
    Object::String(bytes, StringFormat::Literal)
}

struct PageComposer {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: f32,
}

impl PageComposer {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.ops));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn text(&mut self, font: &str, size: f32, x: f32, y: f32, text: &str) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![font.into(), size.into()]));
        self.ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.ops.push(Operation::new("Tj", vec![pdf_string(text)]));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn draw_title(&mut self, title: &str) {
        let max_chars =
            ((PAGE_WIDTH - 2.0 * MARGIN) / (TITLE_SIZE * TITLE_ADVANCE)).floor() as usize;
        for line in wrap_text(title, max_chars) {
            self.y -= TITLE_LINE_HEIGHT;
            self.text(FONT_TITLE, TITLE_SIZE, MARGIN, self.y, &line);
        }
        self.y -= CELL_PADDING * 2.0;
    }

    fn draw_header(&mut self) {
        self.draw_cells(&["Metric".to_string()], &["Value".to_string()], FONT_HEADER);
    }

    /// Draws one row, continuing it on new pages when it does not fit.
    fn draw_row(&mut self, key: &str, value: &str) {
        let key_lines = wrap_text(key, chars_per_line(KEY_COL_WIDTH));
        let value_lines = wrap_text(value, chars_per_line(VALUE_COL_WIDTH));
        let total = key_lines.len().max(value_lines.len());

        let mut start = 0;
        while start < total {
            let available = self.y - MARGIN - 2.0 * CELL_PADDING;
            let fit = if available > 0.0 {
                (available / LINE_HEIGHT).floor() as usize
            } else {
                0
            };
            if fit == 0 {
                self.new_page();
                self.draw_header();
                continue;
            }

            let end = (start + fit).min(total);
            self.draw_cells(
                slice_or_empty(&key_lines, start, end),
                slice_or_empty(&value_lines, start, end),
                FONT_BODY,
            );
            start = end;
        }
    }

    fn draw_cells(&mut self, key_lines: &[String], value_lines: &[String], font: &str) {
        let lines = key_lines.len().max(value_lines.len()).max(1);
        let height = lines as f32 * LINE_HEIGHT + 2.0 * CELL_PADDING;
        let bottom = self.y - height;

        self.rect(MARGIN, bottom, KEY_COL_WIDTH, height);
        self.rect(MARGIN + KEY_COL_WIDTH, bottom, VALUE_COL_WIDTH, height);

        let first_baseline = self.y - CELL_PADDING - BODY_SIZE;
        for (i, line) in key_lines.iter().enumerate() {
            let y = first_baseline - i as f32 * LINE_HEIGHT;
            self.text(font, BODY_SIZE, MARGIN + CELL_PADDING, y, line);
        }
        for (i, line) in value_lines.iter().enumerate() {
            let y = first_baseline - i as f32 * LINE_HEIGHT;
            self.text(font, BODY_SIZE, MARGIN + KEY_COL_WIDTH + CELL_PADDING, y, line);
        }

        self.y = bottom;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        self.pages.push(self.ops);
        self.pages
    }
}

fn slice_or_empty(lines: &[String], start: usize, end: usize) -> &[String] {
    let end = end.min(lines.len());
    if start >= end {
        &[]
    } else {
        &lines[start..end]
    }
}

fn assemble(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font = |doc: &mut Document, base: &str| {
        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base,
            "Encoding" => "WinAnsiEncoding",
        })
    };
    let title_font = font(&mut doc, "Helvetica-Bold");
    let body_font = font(&mut doc, "Courier");
    let header_font = font(&mut doc, "Courier-Bold");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_TITLE => title_font,
            FONT_BODY => body_font,
            FONT_HEADER => header_font,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Pdf(format!("content encoding failed: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("write failed: {e}")))?;
    Ok(buf)
}
