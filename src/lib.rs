//! Pythagoras Tutor - step-by-step right triangle solver
//!
//! This library resolves which side of a right triangle is unknown, solves
//! for it with a worked derivation, and lays out a labelled diagram that can
//! be rendered to SVG.
//!
//! # Example
//!
//! ```rust
//! use pythagoras_tutor::solve_problem;
//!
//! let report = solve_problem("a = 3, b = 4, c = ?").unwrap();
//! assert_eq!(report.triangle.c, 5.0);
//! assert!(report.to_markdown().contains("Result: $c = 5.00$"));
//! ```

pub mod derivation;
pub mod error;
pub mod layout;
pub mod numfmt;
pub mod parser;
pub mod renderer;
pub mod solver;
pub mod stylesheet;

pub use error::ParseError;
pub use layout::{DiagramConfig, DiagramSpec};
pub use parser::{parse, parse_request, Problem};
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};
pub use solver::{
    Derivation, Length, LengthError, Side, SolveError, SolveMode, SolveRequest, TriangleSpec,
};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that stop the pipeline before anything is solved
///
/// An impossible triangle is not one of them: it is reported in the
/// [`Report`] and the diagram falls back to the 3-4-5 triangle.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Error in the problem statement
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// A side length outside the accepted range
    #[error("invalid input: {0}")]
    Length(#[from] LengthError),
}

impl From<Vec<ParseError>> for TutorError {
    fn from(errors: Vec<ParseError>) -> Self {
        TutorError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete pipeline
#[derive(Debug, Clone, Default)]
pub struct TutorConfig {
    /// Diagram layout configuration
    pub diagram: DiagramConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for colour resolution
    pub stylesheet: Stylesheet,
}

impl TutorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagram configuration
    pub fn with_diagram(mut self, config: DiagramConfig) -> Self {
        self.diagram = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for colour resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Line shown instead of a derivation when the request cannot be solved
pub const CANNOT_SOLVE: &str =
    "⚠️ **Cannot solve**: the hypotenuse must be greater than the leg.";

/// Everything produced for one solve request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub mode: SolveMode,
    /// The solved triangle, or the 3-4-5 fallback
    pub triangle: TriangleSpec,
    pub derivation: Option<Derivation>,
    pub warning: Option<String>,
    pub diagram: DiagramSpec,
}

impl Report {
    /// Whether the request was solved rather than replaced by the fallback
    pub fn is_solved(&self) -> bool {
        self.derivation.is_some()
    }

    /// The derivation as Markdown, or the warning when nothing was solved
    pub fn to_markdown(&self) -> String {
        match (&self.derivation, &self.warning) {
            (Some(steps), _) => derivation::to_markdown(steps),
            (None, Some(warning)) => format!("Error: {}\n\n{}\n", warning, CANNOT_SOLVE),
            (None, None) => format!("{}\n", CANNOT_SOLVE),
        }
    }

    /// Render the diagram to SVG
    pub fn to_svg(&self, config: &SvgConfig, stylesheet: &Stylesheet) -> String {
        render_svg_with_stylesheet(&self.diagram, config, stylesheet)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Solve a request with the default configuration
///
/// # Example
///
/// ```rust
/// use pythagoras_tutor::{solve_request, SolveMode, SolveRequest};
///
/// let request = SolveRequest::from_values(SolveMode::SolveA, 5.0, 3.0).unwrap();
/// let report = solve_request(&request);
/// assert!(!report.is_solved());
/// assert_eq!(report.triangle.c, 5.0);
/// ```
pub fn solve_request(request: &SolveRequest) -> Report {
    solve_request_with_config(request, &TutorConfig::default())
}

/// Resolve, solve and lay out a request
pub fn solve_request_with_config(request: &SolveRequest, config: &TutorConfig) -> Report {
    let mode = request.mode;

    let (triangle, derivation, warning) = match solver::resolve(request) {
        Ok(known) => {
            let solution = solver::solve(&known);
            debug!(%mode, value = solution.value(), "solved");
            (solution.triangle, Some(solution.derivation), None)
        }
        Err(e) => {
            warn!(%mode, "{}; showing the fallback triangle", e);
            (TriangleSpec::FALLBACK, None, Some(e.to_string()))
        }
    };

    let diagram = layout::compute(&triangle, mode, &config.diagram);

    Report {
        mode,
        triangle,
        derivation,
        warning,
        diagram,
    }
}

/// Parse a problem statement and solve it with the default configuration
pub fn solve_problem(source: &str) -> Result<Report, TutorError> {
    solve_problem_with_config(source, &TutorConfig::default())
}

/// Parse a problem statement and solve it
pub fn solve_problem_with_config(
    source: &str,
    config: &TutorConfig,
) -> Result<Report, TutorError> {
    let request = parse_request(source)?;
    Ok(solve_request_with_config(&request, config))
}

/// Solve from a mode and two raw input values, in [`SolveMode::inputs`] order
pub fn solve_values(
    mode: SolveMode,
    first: f64,
    second: f64,
    config: &TutorConfig,
) -> Result<Report, TutorError> {
    let request = SolveRequest::from_values(mode, first, second)?;
    Ok(solve_request_with_config(&request, config))
}
