//! Text measurement for the base-14 Helvetica faces.
//!
//! Layout needs exact wrapped-text heights before anything is drawn, so the
//! AFM advance widths of Helvetica and Helvetica-Bold are embedded here
//! (thousandths of an em, WinAnsi encoding). Accented characters fold to
//! their base letter for width purposes, which matches the AFM within a
//! thousandth of an em for the Latin repertoire the documents use.

/// Font face selector mapped to the page font resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    /// Helvetica, resource `F1`.
    Regular,
    /// Helvetica-Bold, resource `F2`.
    Bold,
}

impl FontFace {
    /// The content-stream resource name for this face.
    pub fn resource(self) -> &'static [u8] {
        match self {
            FontFace::Regular => b"F1",
            FontFace::Bold => b"F2",
        }
    }

    /// The PostScript base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }
}

/// Helvetica advance widths for characters 0x20–0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for characters 0x20–0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Folds accented characters to a base character with the same advance
/// width. The euro sign shares the tabular digit width.
fn fold_for_width(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'À' | 'Á' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ò' | 'Ó' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        '€' => '0',
        other => other,
    }
}

/// The advance width of a single character, in thousandths of an em.
fn char_width(face: FontFace, c: char) -> u16 {
    let folded = fold_for_width(c);
    let table = match face {
        FontFace::Regular => &HELVETICA,
        FontFace::Bold => &HELVETICA_BOLD,
    };
    let code = folded as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        556
    }
}

/// The rendered width of a string at the given font size, in points.
pub fn text_width(face: FontFace, text: &str, size: f64) -> f64 {
    let units: u64 = text.chars().map(|c| char_width(face, c) as u64).sum();
    units as f64 / 1000.0 * size
}

/// The line advance for a font size, in points.
pub fn line_height(size: f64) -> f64 {
    size * 1.15
}

/// Greedily wraps text to the given width.
///
/// Words longer than the full width are hard-broken by character so no line
/// ever exceeds the box. Empty input yields no lines.
pub fn wrap_text(face: FontFace, text: &str, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    let push_word = |lines: &mut Vec<String>, current: &mut String, word: &str| {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(face, &candidate, size) <= max_width || current.is_empty() {
            *current = candidate;
        } else {
            lines.push(std::mem::take(current));
            *current = word.to_string();
        }
    };

    for word in text.split_whitespace() {
        if text_width(face, word, size) > max_width && max_width > 0.0 {
            // Hard-break an oversize word character by character.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut chunk = String::new();
            for c in word.chars() {
                chunk.push(c);
                if text_width(face, &chunk, size) > max_width && chunk.chars().count() > 1 {
                    let last = chunk.pop();
                    lines.push(std::mem::take(&mut chunk));
                    if let Some(last) = last {
                        chunk.push(last);
                    }
                }
            }
            if !chunk.is_empty() {
                current = chunk;
            }
        } else {
            push_word(&mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// The height of wrapped text at the given width, in points.
pub fn text_height(face: FontFace, text: &str, size: f64, max_width: f64) -> f64 {
    wrap_text(face, text, size, max_width).len() as f64 * line_height(size)
}

/// Encodes text as WinAnsi bytes for a content-stream string.
///
/// ASCII passes through; the euro sign and typographic punctuation map to
/// their 0x80–0x9F slots; Latin-1 accents keep their byte; anything else
/// becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '…' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (' '..='~').contains(&c) => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
