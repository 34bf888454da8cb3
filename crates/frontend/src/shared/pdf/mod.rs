//! Minimal PDF 1.4 writer for generated reports.
//!
//! Coordinates are millimetres from the top-left corner of the page, text `y`
//! is the baseline. Only the two standard Helvetica faces are used, so no font
//! program is embedded; text is written in WinAnsi (Latin-1 plus typographic
//! punctuation and the euro sign), anything outside it is replaced with `?`.

pub mod fonts;
pub mod layout;
pub mod table;

use std::fmt::Write as _;

pub const MM_TO_PT: f64 = 72.0 / 25.4;
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    fn components(&self) -> String {
        format!(
            "{:.3} {:.3} {:.3}",
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Text {
        x: f64,
        y: f64,
        size: f64,
        font: Font,
        color: Rgb,
        text: String,
    },
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgb,
    },
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgb,
        line_width: f64,
    },
}

#[derive(Debug, Clone, Default)]
struct Page {
    ops: Vec<Op>,
}

/// In-memory document; pages are appended, drawing targets the last page
#[derive(Debug, Clone)]
pub struct PdfDocument {
    width: f64,
    height: f64,
    pages: Vec<Page>,
    font: Font,
    font_size: f64,
    text_color: Rgb,
}

impl PdfDocument {
    /// Portrait A4 with one empty page
    pub fn a4() -> Self {
        Self::new(A4_WIDTH_MM, A4_HEIGHT_MM)
    }

    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width: width_mm,
            height: height_mm,
            pages: vec![Page::default()],
            font: Font::Helvetica,
            font_size: 12.0,
            text_color: Rgb::BLACK,
        }
    }

    pub fn page_width(&self) -> f64 {
        self.width
    }

    pub fn page_height(&self) -> f64 {
        self.height
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    /// Width of `text` in mm with the current font settings
    pub fn text_width(&self, text: &str) -> f64 {
        fonts::text_units(self.font, text) as f64 / 1000.0 * self.font_size / MM_TO_PT
    }

    /// Height of one line of the current font in mm
    pub fn line_height(&self) -> f64 {
        self.font_size * 1.15 / MM_TO_PT
    }

    pub fn text(&mut self, text: &str, x: f64, y: f64, align: Align) {
        let x = match align {
            Align::Left => x,
            Align::Center => x - self.text_width(text) / 2.0,
            Align::Right => x - self.text_width(text),
        };
        let op = Op::Text {
            x,
            y,
            size: self.font_size,
            font: self.font,
            color: self.text_color,
            text: text.to_string(),
        };
        self.push(op);
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        self.push(Op::FillRect { x, y, w, h, color });
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb, line_width: f64) {
        self.push(Op::StrokeRect {
            x,
            y,
            w,
            h,
            color,
            line_width,
        });
    }

    fn push(&mut self, op: Op) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    /// Texts drawn on page `index`, in drawing order
    pub fn page_texts(&self, index: usize) -> Vec<&str> {
        self.pages
            .get(index)
            .map(|p| {
                p.ops
                    .iter()
                    .filter_map(|op| match op {
                        Op::Text { text, .. } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Serialises the document
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ObjectWriter::new();

        // 1: catalog, 2: page tree, 3/4: fonts, then (page, content) pairs
        let page_ids: Vec<usize> = (0..self.pages.len()).map(|i| 5 + i * 2).collect();
        let kids = page_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");

        writer.object(1, b"<< /Type /Catalog /Pages 2 0 R >>");
        writer.object(
            2,
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids,
                self.pages.len()
            )
            .as_bytes(),
        );
        writer.object(
            3,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );
        writer.object(
            4,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
        );

        for (page, page_id) in self.pages.iter().zip(page_ids) {
            let content_id = page_id + 1;
            writer.object(
                page_id,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                    self.width * MM_TO_PT,
                    self.height * MM_TO_PT,
                    content_id
                )
                .as_bytes(),
            );
            let stream = self.content_stream(page);
            writer.stream(content_id, &stream);
        }

        writer.finish(1)
    }

    fn content_stream(&self, page: &Page) -> Vec<u8> {
        let mut out = Vec::new();
        for op in &page.ops {
            match op {
                Op::Text {
                    x,
                    y,
                    size,
                    font,
                    color,
                    text,
                } => {
                    let head = format!(
                        "BT /{} {:.2} Tf {} rg {:.2} {:.2} Td (",
                        font.resource_name(),
                        size,
                        color.components(),
                        x * MM_TO_PT,
                        (self.height - y) * MM_TO_PT
                    );
                    out.extend_from_slice(head.as_bytes());
                    out.extend_from_slice(&encode_text(text));
                    out.extend_from_slice(b") Tj ET\n");
                }
                Op::FillRect { x, y, w, h, color } => {
                    let s = format!(
                        "q {} rg {:.2} {:.2} {:.2} {:.2} re f Q\n",
                        color.components(),
                        x * MM_TO_PT,
                        (self.height - y - h) * MM_TO_PT,
                        w * MM_TO_PT,
                        h * MM_TO_PT
                    );
                    out.extend_from_slice(s.as_bytes());
                }
                Op::StrokeRect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    line_width,
                } => {
                    let s = format!(
                        "q {} RG {:.2} w {:.2} {:.2} {:.2} {:.2} re S Q\n",
                        color.components(),
                        line_width * MM_TO_PT,
                        x * MM_TO_PT,
                        (self.height - y - h) * MM_TO_PT,
                        w * MM_TO_PT,
                        h * MM_TO_PT
                    );
                    out.extend_from_slice(s.as_bytes());
                }
            }
        }
        out
    }
}

/// WinAnsi bytes of a literal string body, with `\`, `(` and `)` escaped
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let byte = fonts::win_ansi_byte(c).unwrap_or(b'?');
        if matches!(byte, b'\\' | b'(' | b')') {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out
}

/// Tracks byte offsets of numbered objects for the cross-reference table
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.offsets.push((id, self.buf.len()));
        self.buf
            .extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, data: &[u8]) {
        self.offsets.push((id, self.buf.len()));
        self.buf.extend_from_slice(
            format!("{} 0 obj\n<< /Length {} >>\nstream\n", id, data.len()).as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        self.offsets.sort_by_key(|(id, _)| *id);
        let size = self.offsets.len() + 1;
        let xref_at = self.buf.len();

        let mut xref = String::new();
        let _ = write!(xref, "xref\n0 {}\n0000000000 65535 f \n", size);
        for (_, offset) in &self.offsets {
            let _ = write!(xref, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, root, xref_at
        );
        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }
}

#[cfg(test)]
pub(crate) fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
