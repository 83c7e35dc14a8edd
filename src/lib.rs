//! # lsystem-raster
//!
//! Deterministic Lindenmayer-system rendering.
//!
//! An axiom and a set of per-symbol rules are rewritten generation by generation
//! ([`RewriteEngine`]), the resulting symbol string is walked by a 2D turtle
//! ([`TurtleInterpreter`]) that records line segments in draw order
//! ([`GeometryBuffer`]), and the segments are fitted onto a raster image with a
//! hue ramp following that order ([`Rasterizer`]).
//!
//! [`LSystem`] ties the stages together. Encoding the resulting [`Canvas`] to a
//! file is left to the caller (see [`Canvas::into_image`]).

pub mod config;
pub mod error;
pub mod geometry;
pub mod interpreter;
pub mod raster;
pub mod rewrite;
pub mod rules;
pub mod system;
pub mod turtle;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use interpreter::*;
pub use raster::*;
pub use rewrite::*;
pub use rules::*;
pub use system::*;
pub use turtle::*;
