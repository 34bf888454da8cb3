use super::PdfDocument;

/// Page margins in mm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 14.0,
            right: 14.0,
            bottom: 20.0,
            left: 14.0,
        }
    }
}

/// Vertical position of the next block in a flowing document.
///
/// Blocks ask for the space they need; when the current page cannot hold it a
/// new page is started and the cursor jumps to the top margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCursor {
    y: f64,
    margins: Margins,
}

impl FlowCursor {
    pub fn new(y: f64, margins: Margins) -> Self {
        Self { y, margins }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn content_width(&self, doc: &PdfDocument) -> f64 {
        doc.page_width() - self.margins.left - self.margins.right
    }

    /// Lowest usable y on a page
    pub fn limit(&self, doc: &PdfDocument) -> f64 {
        doc.page_height() - self.margins.bottom
    }

    pub fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    pub fn move_to(&mut self, y: f64) {
        self.y = y;
    }

    /// Starts a new page when fewer than `needed` mm remain.
    /// Returns true if a page break happened.
    pub fn ensure_space(&mut self, doc: &mut PdfDocument, needed: f64) -> bool {
        if self.y + needed <= self.limit(doc) {
            return false;
        }
        doc.add_page();
        self.y = self.margins.top;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_space_breaks_page() {
        let mut doc = PdfDocument::a4();
        let mut cursor = FlowCursor::new(270.0, Margins::default());

        assert!(!cursor.ensure_space(&mut doc, 5.0));
        assert_eq!(doc.page_count(), 1);

        assert!(cursor.ensure_space(&mut doc, 10.0));
        assert_eq!(doc.page_count(), 2);
        assert_eq!(cursor.y(), 14.0);
    }

    #[test]
    fn test_content_width() {
        let doc = PdfDocument::a4();
        let cursor = FlowCursor::new(0.0, Margins::default());
        assert_eq!(cursor.content_width(&doc), 182.0);
        assert_eq!(cursor.limit(&doc), 277.0);
    }
}
