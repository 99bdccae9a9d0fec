#![warn(missing_docs)]

//! Shape primitives for the geotrace toolkit.
//!
//! - [`Triangle3`] - indexed 3D triangle, the mesh building block
//! - [`Shape2`] - containment-testable 2D shapes ([`Circle2`], [`Square2`])
//! - [`Aabb3`] - axis-aligned bounding box with a closed-box tessellation

mod bbox;
mod shape2;
mod triangle;

pub use bbox::Aabb3;
pub use shape2::{Circle2, Shape2, Square2};
pub use triangle::Triangle3;
