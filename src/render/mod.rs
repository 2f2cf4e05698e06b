//! Document rendering: layout, measurement, components, and PDF assembly.
//!
//! Layout accumulates into an intermediate page list of content-stream
//! operations; once every block is placed and the page count is known, a
//! finalization pass stamps the footers and emits the document bytes in a
//! single write. Nothing is observable before finalization completes.

mod components;
mod filename;
mod layout;
mod metrics;
mod pdf;

pub use components::InfoCell;
pub use filename::suggested_filename;
pub use layout::{Align, Color, LayoutEngine};
pub use metrics::FontFace;

pub(crate) use components::{highlight_box, two_column_info, zebra_table};
pub(crate) use layout::color;
