//! Configuration for the diagram layout

/// Proportions used to place the marker and labels, relative to the legs
#[derive(Debug, Clone)]
pub struct DiagramConfig {
    /// Right-angle marker size as a fraction of the shorter leg
    pub marker_ratio: f64,

    /// Label margin as a fraction of the longer leg
    pub margin_ratio: f64,

    /// Hypotenuse label position along each leg
    pub hypotenuse_label_ratio: f64,

    /// Hypotenuse label offset away from the triangle, as a fraction of the margin
    pub hypotenuse_label_offset: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            marker_ratio: 0.12,
            margin_ratio: 0.15,
            hypotenuse_label_ratio: 0.45,
            hypotenuse_label_offset: 0.2,
        }
    }
}

impl DiagramConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the right-angle marker ratio
    pub fn with_marker_ratio(mut self, ratio: f64) -> Self {
        self.marker_ratio = ratio;
        self
    }

    /// Set the label margin ratio
    pub fn with_margin_ratio(mut self, ratio: f64) -> Self {
        self.margin_ratio = ratio;
        self
    }
}
