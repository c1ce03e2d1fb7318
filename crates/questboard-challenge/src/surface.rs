//! The raster surface a challenge attempt draws into.
//!
//! Wraps a [`tiny_skia::Pixmap`] with the small set of operations the
//! challenge needs: background fill, outline and segment strokes, and
//! straight-RGBA pixel readback for the scorer. Strokes that extend
//! past the surface bounds clip naturally.

use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::types::{ChallengeError, Dimensions, Point, Polyline};

/// A fixed-size RGBA drawing surface, origin top-left.
///
/// Owned exclusively by one challenge session for the duration of one
/// attempt; never shared across attempts.
#[derive(Debug, Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Create a surface of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::SurfaceUnavailable`] if either
    /// dimension is zero.
    pub fn new(dims: Dimensions) -> Result<Self, ChallengeError> {
        Pixmap::new(dims.width, dims.height)
            .map(|pixmap| Self { pixmap })
            .ok_or(ChallengeError::SurfaceUnavailable)
    }

    /// Surface dimensions in pixels.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    /// Fill the entire surface with an opaque color, erasing all prior
    /// contents.
    pub fn fill(&mut self, rgb: [u8; 3]) {
        self.pixmap
            .fill(Color::from_rgba8(rgb[0], rgb[1], rgb[2], 255));
    }

    /// Stroke a polyline with butt caps and miter joins (the reference
    /// outline style).
    pub fn stroke_polyline(&mut self, polyline: &Polyline, rgb: [u8; 3], width: f64) {
        let points = polyline.points();
        let mut pb = PathBuilder::new();
        if let Some(first) = points.first() {
            #[allow(clippy::cast_possible_truncation)]
            pb.move_to(first.x as f32, first.y as f32);
            for p in &points[1..] {
                #[allow(clippy::cast_possible_truncation)]
                pb.line_to(p.x as f32, p.y as f32);
            }
        }
        self.stroke(pb, rgb, width, LineCap::Butt, LineJoin::Miter);
    }

    /// Stroke a single line segment with round caps (the ink style).
    pub fn stroke_segment(&mut self, a: Point, b: Point, rgb: [u8; 3], width: f64) {
        let mut pb = PathBuilder::new();
        #[allow(clippy::cast_possible_truncation)]
        {
            pb.move_to(a.x as f32, a.y as f32);
            pb.line_to(b.x as f32, b.y as f32);
        }
        self.stroke(pb, rgb, width, LineCap::Round, LineJoin::Round);
    }

    fn stroke(
        &mut self,
        pb: PathBuilder,
        rgb: [u8; 3],
        width: f64,
        cap: LineCap,
        join: LineJoin,
    ) {
        // Degenerate paths (no points, all points coincident) draw nothing.
        let Some(path) = pb.finish() else {
            return;
        };

        #[allow(clippy::cast_possible_truncation)]
        let stroke = Stroke {
            width: width as f32,
            line_cap: cap,
            line_join: join,
            ..Stroke::default()
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(rgb[0], rgb[1], rgb[2], 255);
        paint.anti_alias = true;

        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Read back one pixel as straight (un-premultiplied) RGBA.
    ///
    /// Returns `None` for out-of-bounds coordinates.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Copy out the full pixel buffer as straight RGBA bytes, row-major.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }
}
