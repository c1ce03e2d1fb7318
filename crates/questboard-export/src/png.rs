//! PNG snapshot serializer.

use image::ImageEncoder;

use questboard_challenge::Surface;

use crate::ExportError;

/// Encode a surface as PNG bytes (straight RGBA).
///
/// Used to persist the post-scoring snapshot of a challenge attempt.
///
/// # Errors
///
/// Returns [`ExportError::PngEncode`] if PNG encoding fails.
pub fn snapshot_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
    let dims = surface.dimensions();
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        &surface.to_rgba_bytes(),
        dims.width,
        dims.height,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png_bytes)
}
