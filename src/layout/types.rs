//! Core types for the diagram layout
//!
//! Coordinates are in triangle units with the y axis pointing up; the
//! renderer is responsible for flipping and scaling.

use serde::Serialize;

use crate::solver::{Side, SolveMode, TriangleSpec};

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// A bounding box representing the visible extent of the diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y-coordinate (y grows upwards)
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.top()
    }
}

/// Horizontal alignment of a label around its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment of a label around its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    Alphabetic,
    Middle,
}

/// Layout information for one side label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelLayout {
    pub side: Side,
    pub text: String,
    pub position: Point,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    /// Counter-clockwise rotation in degrees
    pub rotation: f64,
    /// Set on the label of the side being solved for
    pub highlighted: bool,
}

/// Everything a renderer needs to draw a labelled right triangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramSpec {
    pub triangle: TriangleSpec,
    pub mode: SolveMode,
    /// Right-angle corner, end of side `a`, end of side `b`
    pub vertices: [Point; 3],
    /// Square-corner marker at the right angle
    pub right_angle: [Segment; 2],
    pub margin: f64,
    pub bounds: BoundingBox,
    /// Labels for sides `a`, `b`, `c`, in that order
    pub labels: [LabelLayout; 3],
}

impl DiagramSpec {
    pub fn label(&self, side: Side) -> &LabelLayout {
        match side {
            Side::A => &self.labels[0],
            Side::B => &self.labels[1],
            Side::C => &self.labels[2],
        }
    }

    /// The label of the unknown side
    pub fn highlighted(&self) -> &LabelLayout {
        self.label(self.mode.unknown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_segment_length() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_bounding_box_edges() {
        let bb = BoundingBox::new(-1.0, -2.0, 10.0, 5.0);
        assert_eq!(bb.right(), 9.0);
        assert_eq!(bb.top(), 3.0);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bb = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(bb.contains(Point::new(50.0, 50.0)));
        assert!(bb.contains(Point::new(0.0, 0.0)));
        assert!(bb.contains(Point::new(100.0, 100.0)));
        assert!(!bb.contains(Point::new(-1.0, 50.0)));
        assert!(!bb.contains(Point::new(101.0, 50.0)));
    }
}
