//! Configuration types for document letterhead and branding.

use serde::Deserialize;
use std::path::PathBuf;

/// Letterhead configuration deserialized from `letterhead.yaml`.
///
/// Drives the header block repeated on every page and the legal disclaimer
/// in the footer. The logo is optional: a missing or unreadable file is
/// silently tolerated and the header renders without it.
#[derive(Debug, Clone, Deserialize)]
pub struct LetterheadConfig {
    /// Brand name, rendered uppercase in the header.
    pub brand_name: String,
    /// Contact phone line.
    pub phone: String,
    /// Contact email line.
    pub email: String,
    /// Optional path to a logo image (JPEG).
    #[serde(default)]
    pub logo_path: Option<PathBuf>,
    /// Legal disclaimer line rendered in every footer.
    pub disclaimer: String,
}

impl Default for LetterheadConfig {
    fn default() -> Self {
        Self {
            brand_name: "equo compenso".to_string(),
            phone: "+39 0942 550660".to_string(),
            email: "info@equocompenso.eu".to_string(),
            logo_path: None,
            disclaimer:
                "Il presente documento attesta la conformità ai sensi della Legge 49/2023."
                    .to_string(),
        }
    }
}
