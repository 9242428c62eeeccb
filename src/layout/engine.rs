//! Diagram layout computation
//!
//! Places a right triangle with its right angle at the origin, leg `a` along
//! the x axis and leg `b` along the y axis, then positions the right-angle
//! marker and the three side labels around it.

use tracing::debug;

use crate::numfmt::{fixed2, raw};
use crate::solver::{Side, SolveMode, TriangleSpec};

use super::config::DiagramConfig;
use super::types::{
    Baseline, BoundingBox, DiagramSpec, LabelLayout, Point, Segment, TextAnchor,
};

/// Compute the diagram for a solved triangle
///
/// `mode` decides which label reads `?` and is highlighted.
pub fn compute(triangle: &TriangleSpec, mode: SolveMode, config: &DiagramConfig) -> DiagramSpec {
    let TriangleSpec { a, b, .. } = *triangle;

    let vertices = [Point::new(0.0, 0.0), Point::new(a, 0.0), Point::new(0.0, b)];

    let marker = a.min(b) * config.marker_ratio;
    let corner = Point::new(marker, marker);
    let right_angle = [
        Segment::new(Point::new(marker, 0.0), corner),
        Segment::new(Point::new(0.0, marker), corner),
    ];

    let margin = a.max(b) * config.margin_ratio;
    let bounds = BoundingBox::new(-margin, -margin, a + 2.0 * margin, b + 2.0 * margin);

    let labels = [
        side_label(
            triangle,
            mode,
            Side::A,
            Point::new(a / 2.0, -margin),
            TextAnchor::Middle,
            Baseline::Alphabetic,
            0.0,
        ),
        side_label(
            triangle,
            mode,
            Side::B,
            Point::new(-margin, b / 2.0),
            TextAnchor::Middle,
            Baseline::Middle,
            90.0,
        ),
        side_label(
            triangle,
            mode,
            Side::C,
            Point::new(
                a * config.hypotenuse_label_ratio - margin * config.hypotenuse_label_offset,
                b * config.hypotenuse_label_ratio + margin * config.hypotenuse_label_offset,
            ),
            TextAnchor::Start,
            Baseline::Alphabetic,
            hypotenuse_label_rotation(a, b),
        ),
    ];

    debug!(%mode, margin, marker, "computed diagram layout");

    DiagramSpec {
        triangle: *triangle,
        mode,
        vertices,
        right_angle,
        margin,
        bounds,
        labels,
    }
}

/// Half the hypotenuse's slope angle, clockwise, in degrees
fn hypotenuse_label_rotation(a: f64, b: f64) -> f64 {
    -b.atan2(a).to_degrees() / 2.0
}

/// Text for a side label: `?` for the unknown side, otherwise its value
///
/// Legs show the value unrounded; the hypotenuse always shows two decimals.
pub fn label_text(triangle: &TriangleSpec, mode: SolveMode, side: Side) -> String {
    if mode.unknown() == side {
        return format!("{} = ?", side);
    }
    let value = triangle.side(side);
    if side.is_hypotenuse() {
        format!("{} = {}", side, fixed2(value))
    } else {
        format!("{} = {}", side, raw(value))
    }
}

fn side_label(
    triangle: &TriangleSpec,
    mode: SolveMode,
    side: Side,
    position: Point,
    anchor: TextAnchor,
    baseline: Baseline,
    rotation: f64,
) -> LabelLayout {
    LabelLayout {
        side,
        text: label_text(triangle, mode, side),
        position,
        anchor,
        baseline,
        rotation,
        highlighted: mode.unknown() == side,
    }
}
