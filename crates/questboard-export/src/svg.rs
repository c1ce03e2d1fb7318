//! SVG outline serializer.
//!
//! Renders the ideal reference outline as an SVG document using the
//! [`svg`] crate for document construction and path data formatting:
//! a background rect in the shape's surface color plus one black
//! `<path>` of the closed outline. The `viewBox` matches the surface
//! pixel grid, so the document overlays the raster rendering exactly.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};

use questboard_challenge::{ChallengeConfig, Dimensions, Polyline, ShapeKind, shape};

/// Build an SVG path `d` attribute string from a polyline.
///
/// Uses `M` for the first point and `L` for subsequent points.
/// Returns an empty string for polylines with fewer than 2 points.
fn build_path_data(polyline: &Polyline) -> String {
    let points = polyline.points();
    if points.len() < 2 {
        return String::new();
    }

    let first = &points[0];
    let mut data = Data::new().move_to((first.x, first.y));
    for p in &points[1..] {
        data = data.line_to((p.x, p.y));
    }
    String::from(svg::node::Value::from(data))
}

/// Serialize the ideal outline for `kind` into an SVG document string.
///
/// The geometry comes from the same shared shape module the renderer
/// and scorer consume, so the SVG matches what a challenge attempt
/// displays.
#[must_use]
pub fn outline_svg(kind: ShapeKind, dims: Dimensions, config: &ChallengeConfig) -> String {
    let [br, bg, bb] = kind.background();
    let background = Rectangle::new()
        .set("width", dims.width)
        .set("height", dims.height)
        .set("fill", format!("rgb({br},{bg},{bb})"));

    let mut doc = Document::new()
        .set("width", dims.width)
        .set("height", dims.height)
        .set("viewBox", (0, 0, dims.width, dims.height))
        .add(background);

    let d = build_path_data(&shape::render_outline(kind, dims));
    if !d.is_empty() {
        let path = Path::new()
            .set("d", d)
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", config.reference_stroke_width);
        doc = doc.add(path);
    }

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}
