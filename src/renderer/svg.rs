//! SVG generation from diagram layouts

use tracing::debug;

use crate::layout::{Baseline, BoundingBox, DiagramSpec, LabelLayout, Point, TextAnchor};
use crate::numfmt::coord;
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    labels: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            labels: vec![],
        }
    }

    /// Add CSS custom properties from a stylesheet
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let nl = self.newline();
        let indent = self.indent_str();
        let mut css = format!(":root {{{nl}");
        for (token, value) in &stylesheet.colors {
            css.push_str(&format!("{indent}{indent}--{}: {};{nl}", token, value));
        }
        css.push_str(&format!("{indent}}}{nl}"));
        if stylesheet.colors.contains_key("font-family") {
            let prefix = self.prefix();
            css.push_str(&format!(
                "{indent}.{}label {{ font-family: var(--font-family); }}",
                prefix
            ));
        }
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Map a diagram point (y up, triangle units) to SVG pixels (y down)
    fn to_px(&self, point: Point) -> Point {
        Point::new(point.x * self.config.scale, -point.y * self.config.scale)
    }

    /// Add a closed, unfilled polygon
    pub fn add_polygon(&mut self, id: Option<&str>, points: &[Point], class: &str, stroke: &str) {
        let prefix = self.prefix();
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        let points_str = points
            .iter()
            .map(|p| {
                let px = self.to_px(*p);
                format!("{},{}", coord(px.x), coord(px.y))
            })
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<polygon{} class="{}{}" points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            id_attr,
            prefix,
            class,
            points_str,
            stroke,
            self.config.stroke_width
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, start: Point, end: Point, class: &str, stroke: &str) {
        let prefix = self.prefix();
        let start = self.to_px(start);
        let end = self.to_px(end);

        self.elements.push(format!(
            r#"{}<line class="{}{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            prefix,
            class,
            coord(start.x),
            coord(start.y),
            coord(end.x),
            coord(end.y),
            stroke,
            self.config.marker_stroke_width
        ));
    }

    /// Add a side label, rotated around its own position
    pub fn add_label(&mut self, label: &LabelLayout, fill: &str) {
        let prefix = self.prefix();
        let pos = self.to_px(label.position);
        let anchor_str = match label.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let baseline = match label.baseline {
            Baseline::Alphabetic => String::new(),
            Baseline::Middle => r#" dominant-baseline="middle""#.to_string(),
        };
        let mut classes = format!("{prefix}label {prefix}label-{}", label.side);
        if label.highlighted {
            classes.push_str(&format!(" {prefix}unknown"));
        }
        // SVG rotates clockwise with y pointing down
        let transform = if label.rotation == 0.0 {
            String::new()
        } else {
            format!(
                r#" transform="rotate({} {} {})""#,
                coord(-label.rotation),
                coord(pos.x),
                coord(pos.y)
            )
        };

        self.labels.push(format!(
            r#"{}<text id="label-{}" class="{}" x="{}" y="{}" text-anchor="{}"{} font-size="{}" fill="{}"{}>{}</text>"#,
            self.indent_str(),
            label.side,
            classes,
            coord(pos.x),
            coord(pos.y),
            anchor_str,
            baseline,
            self.config.font_size,
            fill,
            transform,
            escape_xml(&label.text)
        ));
    }

    /// Build the final SVG string; `bounds` is in diagram coordinates
    pub fn build(self, bounds: BoundingBox) -> String {
        let scale = self.config.scale;
        let padding = self.config.viewbox_padding;
        let vb_x = bounds.x * scale - padding;
        let vb_y = -bounds.top() * scale - padding;
        let vb_w = bounds.width * scale + 2.0 * padding;
        let vb_h = bounds.height * scale + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            coord(vb_x),
            coord(vb_y),
            coord(vb_w),
            coord(vb_h)
        ));
        svg.push_str(nl);

        let indent = self.indent_str();
        if !self.styles.is_empty() {
            svg.push_str(indent);
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(indent);
                svg.push_str(indent);
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(indent);
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Labels (rendered on top)
        for label in &self.labels {
            svg.push_str(label);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a DiagramSpec to an SVG string (with default stylesheet)
pub fn render_svg(diagram: &DiagramSpec, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(diagram, config, &Stylesheet::default())
}

/// Render a DiagramSpec to an SVG string with a custom stylesheet
pub fn render_svg_with_stylesheet(
    diagram: &DiagramSpec,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    builder.add_stylesheet(stylesheet);

    builder.add_polygon(
        Some("triangle"),
        &diagram.vertices,
        "triangle",
        "var(--triangle)",
    );
    for segment in &diagram.right_angle {
        builder.add_line(segment.start, segment.end, "right-angle", "var(--right-angle)");
    }
    for label in &diagram.labels {
        let fill = if label.highlighted {
            "var(--label-unknown)"
        } else {
            "var(--label)"
        };
        builder.add_label(label, fill);
    }

    debug!(mode = %diagram.mode, "rendered svg");
    builder.build(diagram.bounds)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute, DiagramConfig};
    use crate::solver::{SolveMode, TriangleSpec};

    fn diagram(mode: SolveMode) -> DiagramSpec {
        compute(&TriangleSpec::FALLBACK, mode, &DiagramConfig::default())
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_triangle() {
        let svg = render_svg(&diagram(SolveMode::SolveC), &SvgConfig::default());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"id="triangle""#));
        assert!(svg.contains(r#"points="0,0 180,0 0,-240""#));
        assert_eq!(svg.matches("pt-right-angle").count(), 2);
    }

    #[test]
    fn test_viewbox_covers_margin() {
        let svg = render_svg(
            &diagram(SolveMode::SolveC),
            &SvgConfig::default().with_viewbox_padding(0.0),
        );
        // margin 0.6 units = 36px on each side
        assert!(svg.contains(r#"viewBox="-36 -276 252 312""#));
    }

    #[test]
    fn test_unknown_label_is_highlighted() {
        let svg = render_svg(&diagram(SolveMode::SolveB), &SvgConfig::default());
        assert_eq!(svg.matches("var(--label-unknown)").count(), 1);
        assert!(svg.contains("pt-label-b pt-unknown"));
        assert!(svg.contains(">b = ?</text>"));
        assert!(svg.contains(">a = 3.0</text>"));
        assert!(svg.contains(">c = 5.00</text>"));
    }

    #[test]
    fn test_label_rotation_is_flipped_for_svg() {
        let svg = render_svg(&diagram(SolveMode::SolveC), &SvgConfig::default());
        // b label: 90° counter-clockwise becomes -90 in SVG
        assert!(svg.contains(r#"transform="rotate(-90 -36 -120)""#));
        assert!(svg.contains(r#"transform="rotate(26.57"#));
    }

    #[test]
    fn test_compact_output() {
        let config = SvgConfig::default()
            .with_pretty_print(false)
            .with_standalone(false)
            .without_class_prefix();
        let svg = render_svg(&diagram(SolveMode::SolveC), &config);
        assert!(!svg.contains('\n'));
        assert!(!svg.contains("<?xml"));
        assert!(svg.contains(r#"class="label label-c unknown""#));
    }
}
