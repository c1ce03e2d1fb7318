//! Reference outline rendering.

use crate::shape::{self, ShapeKind};
use crate::surface::Surface;
use crate::types::ChallengeConfig;

/// Reference outline stroke color.
pub const REFERENCE_STROKE: [u8; 3] = [0, 0, 0];

/// Render the reference outline for `kind` onto `surface`.
///
/// Always begins by filling the surface with the shape's background
/// color, fully overwriting prior contents, then strokes the closed
/// ideal outline in black at the configured reference width. Output is
/// bit-identical across repeated invocations for the same inputs.
pub fn render_reference(surface: &mut Surface, kind: ShapeKind, config: &ChallengeConfig) {
    surface.fill(kind.background());
    let outline = shape::render_outline(kind, surface.dimensions());
    surface.stroke_polyline(&outline, REFERENCE_STROKE, config.reference_stroke_width);
}
