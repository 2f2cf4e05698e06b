//! PDF document assembly.
//!
//! Turns the laid-out page list into a finished document: base-14 font
//! resources, an optional JPEG logo XObject, one content stream per page,
//! and a single byte emission at the end.

use std::fs;
use std::path::Path;

use lopdf::content::Content;
use lopdf::{Document, Object, Stream, dictionary};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::layout::{PAGE_HEIGHT, PAGE_WIDTH, PageContent};
use super::metrics::FontFace;

/// A decorative logo image embedded as a DCT-encoded XObject.
#[derive(Debug, Clone)]
pub(crate) struct LogoImage {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) grayscale: bool,
    pub(crate) data: Vec<u8>,
}

/// Attempts to load a JPEG logo; any failure is tolerated silently.
pub(crate) fn try_load_logo(path: &Path) -> Option<LogoImage> {
    let data = fs::read(path).ok()?;
    match parse_jpeg_dimensions(&data) {
        Some((width, height, components)) => Some(LogoImage {
            width,
            height,
            grayscale: components == 1,
            data,
        }),
        None => {
            debug!(path = %path.display(), "skipping unusable logo image");
            None
        }
    }
}

/// Extracts (width, height, components) from a baseline or progressive
/// JPEG stream.
fn parse_jpeg_dimensions(data: &[u8]) -> Option<(u32, u32, u8)> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != 0xD8 {
        return None;
    }
    let mut i = 2;
    while i + 3 < data.len() {
        if data[i] != 0xFF {
            return None;
        }
        let marker = data[i + 1];
        // Standalone markers carry no length field.
        if (0xD0..=0xD9).contains(&marker) || marker == 0x01 {
            i += 2;
            continue;
        }
        let len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        if len < 2 {
            return None;
        }
        if matches!(marker, 0xC0 | 0xC1 | 0xC2) {
            if i + 9 >= data.len() {
                return None;
            }
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            let components = data[i + 9];
            if width == 0 || height == 0 {
                return None;
            }
            return Some((width, height, components));
        }
        i += 2 + len;
    }
    None
}

/// Assembles the final document and emits its bytes.
pub(crate) fn emit_document(
    pages: Vec<PageContent>,
    logo: Option<&LogoImage>,
) -> EngineResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FontFace::Regular.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FontFace::Bold.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });

    let mut resources = dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular_id,
            "F2" => font_bold_id,
        },
    };

    if let Some(logo) = logo {
        let color_space = if logo.grayscale {
            "DeviceGray"
        } else {
            "DeviceRGB"
        };
        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => logo.width as i64,
                "Height" => logo.height as i64,
                "ColorSpace" => color_space,
                "BitsPerComponent" => 8i64,
                "Filter" => "DCTDecode",
            },
            logo.data.clone(),
        ));
        resources.set("XObject", dictionary! { "Im1" => image_id });
    }

    let resources_id = doc.add_object(resources);

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page.operations,
        };
        let data = content.encode().map_err(|err| EngineError::Render {
            message: err.to_string(),
        })?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, data));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(PAGE_WIDTH as f32),
                Object::Real(PAGE_HEIGHT as f32),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|err| EngineError::DocumentWrite {
            message: err.to_string(),
        })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::Operation;

    fn page_with_text(text: &str) -> PageContent {
        PageContent {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![Object::Name(b"F1".to_vec()), Object::Real(10.0)],
                ),
                Operation::new("Td", vec![Object::Real(40.0), Object::Real(800.0)]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        text.as_bytes().to_vec(),
                        lopdf::StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ],
        }
    }

    /// PDF-001: emitted bytes parse back with the right page count
    #[test]
    fn test_emit_round_trips_through_lopdf() {
        let pages = vec![page_with_text("prima"), page_with_text("seconda")];
        let bytes = emit_document(pages, None).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let parsed = Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 2);
    }

    /// PDF-002: SOF dimensions parse from a JPEG header
    #[test]
    fn test_parse_jpeg_dimensions() {
        // SOI, APP0 (16 bytes), SOF0 with height 36, width 120, 3 components
        let mut data = vec![0xFF, 0xD8];
        data.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
        data.extend_from_slice(&[0u8; 14]);
        data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x24, 0x00, 0x78, 0x03]);
        data.extend_from_slice(&[0u8; 20]);

        let (width, height, components) = parse_jpeg_dimensions(&data).unwrap();
        assert_eq!((width, height, components), (120, 36, 3));
    }

    /// PDF-003: non-JPEG data is rejected, not panicked on
    #[test]
    fn test_parse_rejects_non_jpeg() {
        assert_eq!(parse_jpeg_dimensions(b"\x89PNG\r\n"), None);
        assert_eq!(parse_jpeg_dimensions(&[]), None);
        assert_eq!(parse_jpeg_dimensions(&[0xFF, 0xD8, 0x00, 0x00]), None);
    }

    #[test]
    fn test_try_load_logo_missing_file() {
        assert!(try_load_logo(Path::new("/nonexistent/logo.jpg")).is_none());
    }
}
