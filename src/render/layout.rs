//! Page layout engine.
//!
//! Pages accumulate as lists of content-stream operations while an explicit
//! top-down cursor threads through every drawing call. Any block whose
//! height would cross the reserved bottom margin forces a page break that
//! re-emits the header. Footers are stamped during finalization, once the
//! total page count is known, and the document bytes are emitted exactly
//! once.

use lopdf::Object;
use lopdf::content::Operation;

use crate::config::LetterheadConfig;
use crate::error::EngineResult;

use super::metrics::{self, FontFace};
use super::pdf::{self, LogoImage};

/// A4 page width in points.
pub const PAGE_WIDTH: f64 = 595.28;
/// A4 page height in points.
pub const PAGE_HEIGHT: f64 = 841.89;
/// Page margin on all sides, in points.
pub const MARGIN: f64 = 40.0;

/// Vertical space above the bottom margin reserved for the footer.
const FOOTER_RESERVE: f64 = 60.0;
/// Distance from the top margin to the header rule.
const HEADER_RULE_OFFSET: f64 = 54.0;
/// Cursor position after the header block.
const CONTENT_START: f64 = MARGIN + HEADER_RULE_OFFSET + 16.0;

/// Lowest cursor position a block may reach before breaking the page.
pub(crate) const BREAK_LIMIT: f64 = PAGE_HEIGHT - MARGIN - FOOTER_RESERVE;

/// RGB color in the 0–1 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Builds a color from 8-bit components.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

/// The document color palette.
pub mod color {
    use super::Color;

    /// Header, rule, and table-header accent.
    pub const PRIMARY: Color = Color::rgb8(0x1a, 0x23, 0x7e);
    /// Compliant outcome text.
    pub const POSITIVE: Color = Color::rgb8(0x2e, 0x7d, 0x32);
    /// Below-threshold outcome text.
    pub const NEGATIVE: Color = Color::rgb8(0xc6, 0x28, 0x28);
    /// Shaded box and alternate row background.
    pub const SHADE: Color = Color::rgb8(0xf5, 0xf5, 0xf5);
    /// Box border.
    pub const BORDER: Color = Color::rgb8(0xe0, 0xe0, 0xe0);
    /// Body text.
    pub const INK: Color = Color::rgb8(0x11, 0x11, 0x11);
    /// Footer text.
    pub const FOOTER_INK: Color = Color::rgb8(0x33, 0x33, 0x33);
    /// White fill and reversed header text.
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);
    /// Highlight for fixed-base rows.
    pub const FIXED_BASE_FILL: Color = Color::rgb8(0xe8, 0xea, 0xf6);
    /// Highlight for total rows.
    pub const TOTAL_FILL: Color = Color::rgb8(0xed, 0xe7, 0xf6);
    /// Status row fill when below threshold.
    pub const STATUS_NEGATIVE_FILL: Color = Color::rgb8(0xff, 0xeb, 0xee);
    /// Status row fill when compliant.
    pub const STATUS_POSITIVE_FILL: Color = Color::rgb8(0xe8, 0xf5, 0xe9);
}

/// Horizontal alignment for a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush left.
    Left,
    /// Centered within the box.
    Center,
    /// Flush right.
    Right,
}

/// Accumulated operations for one page.
#[derive(Debug, Default)]
pub(crate) struct PageContent {
    pub(crate) operations: Vec<Operation>,
}

fn real(v: f64) -> Object {
    Object::Real(v as f32)
}

/// Layout state for one document render.
///
/// All state - current page, cursor, buffered pages - is local to the
/// engine, so concurrent renders never share anything.
pub struct LayoutEngine {
    letterhead: LetterheadConfig,
    logo: Option<LogoImage>,
    pages: Vec<PageContent>,
    cursor: f64,
}

impl LayoutEngine {
    /// Starts a layout with the first page and its header in place.
    ///
    /// A configured logo that is missing or unreadable is silently
    /// tolerated; the header renders without it.
    pub fn new(letterhead: &LetterheadConfig) -> Self {
        let logo = letterhead
            .logo_path
            .as_deref()
            .and_then(pdf::try_load_logo);
        let mut engine = Self {
            letterhead: letterhead.clone(),
            logo,
            pages: Vec::new(),
            cursor: CONTENT_START,
        };
        engine.start_page();
        engine
    }

    /// The width available between the margins.
    pub fn content_width(&self) -> f64 {
        PAGE_WIDTH - MARGIN * 2.0
    }

    /// Current top-down cursor position.
    pub(crate) fn cursor(&self) -> f64 {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, y: f64) {
        self.cursor = y;
    }

    /// Advances the cursor by a vertical gap.
    pub(crate) fn advance(&mut self, dy: f64) {
        self.cursor += dy;
    }

    /// Breaks the page unless `height` more points fit above the footer.
    pub(crate) fn ensure_room(&mut self, height: f64) {
        if self.cursor + height > BREAK_LIMIT {
            self.new_page();
        }
    }

    /// Starts a fresh page, re-emitting the header block.
    pub(crate) fn new_page(&mut self) {
        self.start_page();
    }

    fn start_page(&mut self) {
        self.pages.push(PageContent::default());
        self.cursor = CONTENT_START;
        self.draw_header();
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.pages
            .last_mut()
            .expect("layout always has a current page")
            .operations
            .push(Operation::new(operator, operands));
    }

    /// Fills a rectangle whose top edge sits at `y_top`.
    pub(crate) fn fill_rect(&mut self, x: f64, y_top: f64, w: f64, h: f64, fill: Color) {
        self.op("q", vec![]);
        self.op(
            "rg",
            vec![real(fill.r as f64), real(fill.g as f64), real(fill.b as f64)],
        );
        self.op(
            "re",
            vec![real(x), real(PAGE_HEIGHT - y_top - h), real(w), real(h)],
        );
        self.op("f", vec![]);
        self.op("Q", vec![]);
    }

    /// Strokes a rectangle border.
    pub(crate) fn stroke_rect(
        &mut self,
        x: f64,
        y_top: f64,
        w: f64,
        h: f64,
        line_width: f64,
        stroke: Color,
    ) {
        self.op("q", vec![]);
        self.op(
            "RG",
            vec![
                real(stroke.r as f64),
                real(stroke.g as f64),
                real(stroke.b as f64),
            ],
        );
        self.op("w", vec![real(line_width)]);
        self.op(
            "re",
            vec![real(x), real(PAGE_HEIGHT - y_top - h), real(w), real(h)],
        );
        self.op("S", vec![]);
        self.op("Q", vec![]);
    }

    /// Draws a horizontal rule at `y_top`.
    pub(crate) fn hline(&mut self, x1: f64, x2: f64, y_top: f64, line_width: f64, stroke: Color) {
        self.op("q", vec![]);
        self.op(
            "RG",
            vec![
                real(stroke.r as f64),
                real(stroke.g as f64),
                real(stroke.b as f64),
            ],
        );
        self.op("w", vec![real(line_width)]);
        self.op("m", vec![real(x1), real(PAGE_HEIGHT - y_top)]);
        self.op("l", vec![real(x2), real(PAGE_HEIGHT - y_top)]);
        self.op("S", vec![]);
        self.op("Q", vec![]);
    }

    fn text_op(&mut self, face: FontFace, size: f64, ink: Color, x: f64, y_top: f64, line: &str) {
        let baseline = PAGE_HEIGHT - y_top - size * 0.8;
        self.op("BT", vec![]);
        self.op(
            "Tf",
            vec![Object::Name(face.resource().to_vec()), real(size)],
        );
        self.op(
            "rg",
            vec![real(ink.r as f64), real(ink.g as f64), real(ink.b as f64)],
        );
        self.op("Td", vec![real(x), real(baseline)]);
        self.op(
            "Tj",
            vec![Object::String(
                metrics::encode_win_ansi(line),
                lopdf::StringFormat::Literal,
            )],
        );
        self.op("ET", vec![]);
    }

    /// Draws one unwrapped line at an absolute position.
    pub(crate) fn text_line(
        &mut self,
        face: FontFace,
        size: f64,
        ink: Color,
        x: f64,
        y_top: f64,
        align: Align,
        box_width: f64,
        line: &str,
    ) {
        let x = match align {
            Align::Left => x,
            Align::Center => x + (box_width - metrics::text_width(face, line, size)) / 2.0,
            Align::Right => x + box_width - metrics::text_width(face, line, size),
        };
        self.text_op(face, size, ink, x, y_top, line);
    }

    /// Draws wrapped text at an absolute position; returns the height used.
    pub(crate) fn text_block(
        &mut self,
        face: FontFace,
        size: f64,
        ink: Color,
        x: f64,
        y_top: f64,
        box_width: f64,
        align: Align,
        text: &str,
    ) -> f64 {
        let lines = metrics::wrap_text(face, text, size, box_width);
        let mut y = y_top;
        for line in &lines {
            self.text_line(face, size, ink, x, y, align, box_width, line);
            y += metrics::line_height(size);
        }
        y - y_top
    }

    /// Draws a section title at the cursor and advances past it.
    pub fn section_title(&mut self, title: &str) {
        let height = metrics::text_height(FontFace::Bold, title, 12.0, self.content_width());
        self.ensure_room(height + 30.0);
        let y = self.cursor;
        self.text_block(
            FontFace::Bold,
            12.0,
            color::PRIMARY,
            MARGIN,
            y,
            self.content_width(),
            Align::Left,
            title,
        );
        self.cursor = y + height + 7.0;
    }

    /// Draws a body paragraph at the cursor and advances past it.
    pub fn paragraph(&mut self, face: FontFace, size: f64, ink: Color, text: &str) {
        let height = metrics::text_height(face, text, size, self.content_width());
        self.ensure_room(height);
        let y = self.cursor;
        self.text_block(
            face,
            size,
            ink,
            MARGIN,
            y,
            self.content_width(),
            Align::Left,
            text,
        );
        self.cursor = y + height;
    }

    fn draw_header(&mut self) {
        let y = MARGIN;
        let width = self.content_width();

        if let Some(logo) = self.logo.clone() {
            let scale = (120.0 / logo.width as f64).min(36.0 / logo.height as f64);
            let draw_w = logo.width as f64 * scale;
            let draw_h = logo.height as f64 * scale;
            self.op("q", vec![]);
            self.op(
                "cm",
                vec![
                    real(draw_w),
                    real(0.0),
                    real(0.0),
                    real(draw_h),
                    real(MARGIN),
                    real(PAGE_HEIGHT - y - draw_h),
                ],
            );
            self.op("Do", vec![Object::Name(b"Im1".to_vec())]);
            self.op("Q", vec![]);
        }

        let brand = self.letterhead.brand_name.to_uppercase();
        let phone = self.letterhead.phone.clone();
        let email = self.letterhead.email.clone();

        self.text_line(
            FontFace::Bold,
            12.0,
            color::PRIMARY,
            MARGIN,
            y + 6.0,
            Align::Right,
            width,
            &brand,
        );
        self.text_line(
            FontFace::Regular,
            9.0,
            color::PRIMARY,
            MARGIN,
            y + 22.0,
            Align::Right,
            width,
            &phone,
        );
        self.text_line(
            FontFace::Regular,
            9.0,
            color::PRIMARY,
            MARGIN,
            y + 34.0,
            Align::Right,
            width,
            &email,
        );

        self.hline(
            MARGIN,
            PAGE_WIDTH - MARGIN,
            y + HEADER_RULE_OFFSET,
            2.0,
            color::PRIMARY,
        );
    }

    fn stamp_footers(&mut self) {
        let page_count = self.pages.len();
        let disclaimer = self.letterhead.disclaimer.clone();
        let width = self.content_width();
        let footer_y = PAGE_HEIGHT - MARGIN + 8.0;

        let last = page_count - 1;
        for index in 0..page_count {
            let label = format!("Pagina {} di {}", index + 1, page_count);
            // Low-level ops always target the last page; rotate the target
            // into that slot while stamping it.
            self.pages.swap(index, last);

            self.text_line(
                FontFace::Regular,
                8.0,
                color::FOOTER_INK,
                MARGIN,
                footer_y - 30.0,
                Align::Left,
                width,
                &disclaimer,
            );
            self.text_line(
                FontFace::Regular,
                8.0,
                color::FOOTER_INK,
                MARGIN,
                footer_y - 8.0,
                Align::Center,
                width,
                &label,
            );

            self.pages.swap(index, last);
        }
    }

    /// Stamps every footer and emits the finished document bytes.
    ///
    /// Returns the bytes and the final page count. Nothing observable is
    /// produced before this point, so a failed render never leaves a
    /// partial document behind.
    pub fn finalize(mut self) -> EngineResult<(Vec<u8>, usize)> {
        self.stamp_footers();
        let page_count = self.pages.len();
        let bytes = pdf::emit_document(self.pages, self.logo.as_ref())?;
        Ok((bytes, page_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        let needle = needle.as_bytes();
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    /// LAY-001: a fresh engine has one page with the header drawn
    #[test]
    fn test_new_engine_has_header_page() {
        let engine = LayoutEngine::new(&LetterheadConfig::default());
        assert_eq!(engine.pages.len(), 1);
        assert!(!engine.pages[0].operations.is_empty());
    }

    /// LAY-002: ensure_room breaks the page near the bottom
    #[test]
    fn test_ensure_room_breaks_page() {
        let mut engine = LayoutEngine::new(&LetterheadConfig::default());
        engine.set_cursor(BREAK_LIMIT - 10.0);
        engine.ensure_room(50.0);
        assert_eq!(engine.pages.len(), 2);
        assert_eq!(engine.cursor(), CONTENT_START);
    }

    /// LAY-003: footers carry "Pagina X di Y" only after finalize
    #[test]
    fn test_finalize_stamps_footers() {
        let mut engine = LayoutEngine::new(&LetterheadConfig::default());
        engine.new_page();
        engine.new_page();
        let (bytes, page_count) = engine.finalize().unwrap();
        assert_eq!(page_count, 3);
        assert!(contains(&bytes, "Pagina 1 di 3"));
        assert!(contains(&bytes, "Pagina 2 di 3"));
        assert!(contains(&bytes, "Pagina 3 di 3"));
    }

    /// LAY-004: every page repeats the brand header
    #[test]
    fn test_header_on_every_page() {
        let mut engine = LayoutEngine::new(&LetterheadConfig::default());
        engine.new_page();
        let (bytes, page_count) = engine.finalize().unwrap();
        assert_eq!(page_count, 2);
        let needle = b"EQUO COMPENSO";
        let hits = bytes
            .windows(needle.len())
            .filter(|w| *w == needle.as_slice())
            .count();
        assert_eq!(hits, 2);
    }

    /// LAY-005: a missing logo file is tolerated
    #[test]
    fn test_missing_logo_tolerated() {
        let letterhead = LetterheadConfig {
            logo_path: Some("/nonexistent/logo.jpg".into()),
            ..LetterheadConfig::default()
        };
        let engine = LayoutEngine::new(&letterhead);
        let (bytes, page_count) = engine.finalize().unwrap();
        assert_eq!(page_count, 1);
        assert!(bytes.starts_with(b"%PDF"));
    }
}
