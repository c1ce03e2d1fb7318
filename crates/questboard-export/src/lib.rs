//! questboard-export: Pure format serializers (sans-IO).
//!
//! Converts challenge surfaces and reference outlines into files the
//! caller can write or display: PNG snapshots of a drawn surface and
//! SVG documents of the ideal outline.

pub mod png;
pub mod svg;

pub use png::snapshot_png;
pub use svg::outline_svg;

/// Errors that can occur while serializing.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),
}
