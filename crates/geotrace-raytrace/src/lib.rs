#![warn(missing_docs)]

//! Ray-geometry intersection core for the geotrace toolkit.
//!
//! Four routines built on a shared parametric-ray foundation:
//!
//! - [`intersect_triangle`] - single ray vs. single triangle
//!   (Moller-Trumbore), with exact edge-touch classification
//! - [`is_inside_mesh`] - point-in-closed-mesh by ray-parity voting
//!   along the three coordinate axes
//! - [`PrismTracer`] - penetration depth of a ray through a polygon
//!   extruded into a thin slab (Siddon-style boundary crossing walk)
//! - [`trace_grid`] - per-pixel entry/exit/prior-length records for a
//!   ray fired through a uniform 2D pixel grid
//!
//! Numeric degeneracies (ray parallel to a triangle plane, parallel line
//! pairs in the grid tracer) are never raised as errors: they propagate
//! as non-finite values that downstream bounds checks filter out. The
//! single fail-fast error is a polygon that encloses no area relative to
//! the traced ray ([`RaytraceError::NoEnclosedArea`]).
//!
//! All routines are pure and deterministic; none mutate their inputs
//! beyond the explicit visited-pixel marking of [`trace_grid`].

pub mod containment;
pub mod error;
pub mod grid;
pub mod prism;
pub mod ray;
pub mod triangle;

pub use containment::is_inside_mesh;
pub use error::{RaytraceError, Result};
pub use grid::{trace_grid, CellCrossing, PixelGrid, TraceMap};
pub use prism::{PrismCrossing, PrismTracer};
pub use ray::{Ray2, Ray3};
pub use triangle::{intersect_triangle, TriangleHit};
