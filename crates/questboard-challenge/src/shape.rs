//! Reference shape geometry: the single source of truth shared by the
//! renderer and the scorer.
//!
//! Both [`render_outline`] and [`score_samples`] derive their points
//! from the same parametric formulas, so the outline the player sees
//! and the outline the scorer grades against cannot drift apart.
//! Sampling density differs (the renderer wants a smooth polyline, the
//! scorer wants deterministic integer pixel samples) but the underlying
//! curve is identical.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::types::{Dimensions, GridPoint, Point, Polyline};

/// Heart curve scale factor.
pub const HEART_SCALE: f64 = 8.0;
/// Circle radius in pixels.
pub const CIRCLE_RADIUS: f64 = 70.0;
/// Star outer vertex radius in pixels.
pub const STAR_OUTER_RADIUS: f64 = 70.0;
/// Star inner vertex radius in pixels.
pub const STAR_INNER_RADIUS: f64 = 30.0;
/// Number of star points.
pub const STAR_POINTS: usize = 5;

/// Parametric step for the rendered outline polyline.
pub const RENDER_STEP: f64 = 0.01;
/// Parametric step for scorer samples (heart and circle).
pub const SCORE_STEP: f64 = 0.005;
/// Scorer samples per star edge, endpoints included.
pub const STAR_EDGE_SAMPLES: usize = 101;

/// The three reference shapes a tracing challenge can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Parametric heart curve.
    Heart,
    /// Circle of fixed radius.
    Circle,
    /// Five-pointed star polygon.
    Star,
}

impl ShapeKind {
    /// Background fill color for this shape's surface.
    ///
    /// The star uses a red background so its yellow ink signature can
    /// never be satisfied by unpainted pixels; heart and circle use
    /// white for the same reason against red ink.
    #[must_use]
    pub const fn background(self) -> [u8; 3] {
        match self {
            Self::Heart | Self::Circle => [255, 255, 255],
            Self::Star => [255, 0, 0],
        }
    }

    /// Ink color for player strokes on this shape's surface.
    #[must_use]
    pub const fn ink(self) -> [u8; 3] {
        match self {
            Self::Heart | Self::Circle => [255, 0, 0],
            Self::Star => [255, 255, 0],
        }
    }

    /// Whether an RGB pixel value matches this shape's ink signature.
    ///
    /// Thresholded rather than exact so anti-aliased stroke interiors
    /// still classify as ink.
    #[must_use]
    pub const fn matches_ink(self, r: u8, g: u8, b: u8) -> bool {
        match self {
            Self::Heart | Self::Circle => r > 200 && g < 50 && b < 50,
            Self::Star => r > 200 && g > 200 && b < 50,
        }
    }
}

/// Point on the heart curve at parameter `t`.
fn heart_point(center: Point, t: f64) -> Point {
    let x = center.x + HEART_SCALE * 16.0 * t.sin().powi(3);
    let y = center.y
        - HEART_SCALE
            * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Point::new(x, y)
}

/// Point on the circle at parameter `t`.
fn circle_point(center: Point, t: f64) -> Point {
    Point::new(
        CIRCLE_RADIUS.mul_add(t.cos(), center.x),
        CIRCLE_RADIUS.mul_add(t.sin(), center.y),
    )
}

/// The ten star vertices, alternating outer and inner radius, starting
/// at the top point. The polygon closes back to the first vertex.
fn star_vertices(center: Point) -> Vec<Point> {
    #[allow(clippy::cast_precision_loss)]
    let angle_step = PI / STAR_POINTS as f64;
    (0..2 * STAR_POINTS)
        .map(|i| {
            let radius = if i % 2 == 0 {
                STAR_OUTER_RADIUS
            } else {
                STAR_INNER_RADIUS
            };
            #[allow(clippy::cast_precision_loss)]
            let angle = (i as f64).mul_add(angle_step, -PI / 2.0);
            Point::new(
                radius.mul_add(angle.cos(), center.x),
                radius.mul_add(angle.sin(), center.y),
            )
        })
        .collect()
}

/// Number of parametric steps covering `[0, 2*pi)` at the given step.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parametric_steps(step: f64) -> usize {
    (TAU / step).ceil() as usize
}

/// Sample the ideal outline as a closed polyline for rendering.
///
/// Heart and circle are stepped finely over `[0, 2*pi]` with the `t=0`
/// sample appended to close the loop; the star is its ten vertices
/// closed back to the first.
#[must_use]
pub fn render_outline(kind: ShapeKind, dims: Dimensions) -> Polyline {
    let center = dims.center();
    let points = match kind {
        ShapeKind::Heart | ShapeKind::Circle => {
            let sample = |t: f64| match kind {
                ShapeKind::Heart => heart_point(center, t),
                _ => circle_point(center, t),
            };
            let steps = parametric_steps(RENDER_STEP);
            let mut points: Vec<Point> = (0..steps)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    sample(i as f64 * RENDER_STEP)
                })
                .collect();
            points.push(sample(0.0));
            points
        }
        ShapeKind::Star => {
            let mut vertices = star_vertices(center);
            if let Some(&first) = vertices.first() {
                vertices.push(first);
            }
            vertices
        }
    };
    Polyline::new(points)
}

/// Sample the ideal outline as integer pixel points for scoring.
///
/// Deterministic: parameters are integer-indexed (`t = i * step`)
/// rather than float-accumulated, and every sample is rounded to the
/// pixel grid before tolerance-disc expansion. Adjacent samples overlap
/// heavily at this density; the scorer deliberately counts overlapping
/// disc pixels once per sample.
#[must_use]
pub fn score_samples(kind: ShapeKind, dims: Dimensions) -> Vec<GridPoint> {
    let center = dims.center();
    match kind {
        ShapeKind::Heart | ShapeKind::Circle => {
            let sample = |t: f64| match kind {
                ShapeKind::Heart => heart_point(center, t),
                _ => circle_point(center, t),
            };
            (0..parametric_steps(SCORE_STEP))
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    sample(i as f64 * SCORE_STEP).round_to_grid()
                })
                .collect()
        }
        ShapeKind::Star => {
            let vertices = star_vertices(center);
            let mut samples = Vec::with_capacity(vertices.len() * STAR_EDGE_SAMPLES);
            for (i, &start) in vertices.iter().enumerate() {
                let end = vertices[(i + 1) % vertices.len()];
                for j in 0..STAR_EDGE_SAMPLES {
                    #[allow(clippy::cast_precision_loss)]
                    let t = j as f64 / (STAR_EDGE_SAMPLES - 1) as f64;
                    let p = Point::new(
                        t.mul_add(end.x - start.x, start.x),
                        t.mul_add(end.y - start.y, start.y),
                    );
                    samples.push(p.round_to_grid());
                }
            }
            samples
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const DIMS: Dimensions = Dimensions {
        width: 300,
        height: 300,
    };

    #[test]
    fn shape_kind_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ShapeKind::Heart).unwrap(),
            "\"heart\""
        );
        let kind: ShapeKind = serde_json::from_str("\"star\"").unwrap();
        assert_eq!(kind, ShapeKind::Star);
    }

    #[test]
    fn ink_colors_match_their_own_signature() {
        for kind in [ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star] {
            let [r, g, b] = kind.ink();
            assert!(
                kind.matches_ink(r, g, b),
                "{kind:?} ink should match its own signature"
            );
        }
    }

    #[test]
    fn background_never_matches_ink_signature() {
        for kind in [ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star] {
            let [r, g, b] = kind.background();
            assert!(
                !kind.matches_ink(r, g, b),
                "{kind:?} background must not classify as ink"
            );
        }
    }

    #[test]
    fn black_reference_stroke_never_matches_ink() {
        for kind in [ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star] {
            assert!(!kind.matches_ink(0, 0, 0));
        }
    }

    #[test]
    fn gray_antialiasing_fringe_never_matches_ink() {
        // Black-on-white AA produces grays: r == g == b.
        for v in 0..=255_u8 {
            for kind in [ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star] {
                assert!(!kind.matches_ink(v, v, v), "gray {v} matched {kind:?} ink");
            }
        }
    }

    #[test]
    fn circle_outline_points_lie_on_radius() {
        let outline = render_outline(ShapeKind::Circle, DIMS);
        let center = DIMS.center();
        for p in outline.points() {
            let r = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!(
                (r - CIRCLE_RADIUS).abs() < 1e-9,
                "point ({}, {}) at radius {r}",
                p.x,
                p.y
            );
        }
    }

    #[test]
    fn render_outline_is_closed() {
        for kind in [ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star] {
            let outline = render_outline(kind, DIMS);
            let points = outline.points();
            assert_eq!(
                points.first().unwrap(),
                points.last().unwrap(),
                "{kind:?} outline should close on its first point"
            );
        }
    }

    #[test]
    fn render_outline_is_deterministic() {
        for kind in [ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star] {
            assert_eq!(render_outline(kind, DIMS), render_outline(kind, DIMS));
        }
    }

    #[test]
    fn score_samples_are_deterministic() {
        for kind in [ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star] {
            assert_eq!(score_samples(kind, DIMS), score_samples(kind, DIMS));
        }
    }

    #[test]
    fn score_sample_counts() {
        // 2*pi / 0.005 rounds up to 1257 parametric samples.
        assert_eq!(score_samples(ShapeKind::Heart, DIMS).len(), 1257);
        assert_eq!(score_samples(ShapeKind::Circle, DIMS).len(), 1257);
        // 10 edges, 101 samples each.
        assert_eq!(score_samples(ShapeKind::Star, DIMS).len(), 1010);
    }

    #[test]
    fn score_samples_stay_in_surface_bounds() {
        for kind in [ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star] {
            for s in score_samples(kind, DIMS) {
                assert!(s.x >= 0 && s.x < 300, "{kind:?} sample x {} out of range", s.x);
                assert!(s.y >= 0 && s.y < 300, "{kind:?} sample y {} out of range", s.y);
            }
        }
    }

    #[test]
    fn star_has_ten_distinct_vertices() {
        let vertices = star_vertices(DIMS.center());
        assert_eq!(vertices.len(), 10);
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                assert!((a.x - b.x).abs() > 1e-9 || (a.y - b.y).abs() > 1e-9);
            }
        }
    }

    #[test]
    fn star_top_vertex_is_centered_above() {
        let vertices = star_vertices(DIMS.center());
        let top = vertices[0];
        assert!((top.x - 150.0).abs() < 1e-9);
        assert!((top.y - (150.0 - STAR_OUTER_RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn heart_curve_fits_surface() {
        let outline = render_outline(ShapeKind::Heart, DIMS);
        for p in outline.points() {
            assert!(p.x >= 0.0 && p.x < 300.0);
            assert!(p.y >= 0.0 && p.y < 300.0);
        }
    }
}
