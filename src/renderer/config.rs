//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Pixels per triangle unit
    pub scale: f64,

    /// Padding around the viewBox, in pixels
    pub viewbox_padding: f64,

    /// Label font size, in pixels
    pub font_size: f64,

    /// Stroke width of the triangle outline
    pub stroke_width: f64,

    /// Stroke width of the right-angle marker
    pub marker_stroke_width: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "pt-" for "pt-label")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 60.0,
            viewbox_padding: 10.0,
            font_size: 14.0,
            stroke_width: 2.0,
            marker_stroke_width: 1.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("pt-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixels-per-unit scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set the label font size
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
