//! Layout engine for the triangle diagram
//!
//! This module takes a solved triangle and computes where the polygon,
//! right-angle marker and side labels go, producing a [`DiagramSpec`].

pub mod config;
pub mod engine;
pub mod types;

pub use config::DiagramConfig;
pub use engine::{compute, label_text};
pub use types::*;
