#![warn(missing_docs)]

//! Wavefront OBJ import/export for geotrace meshes.
//!
//! Reads and writes the subset of OBJ used for plain triangle meshes:
//! vertices, vertex normals, and triangular faces. Larger faces are
//! triangulated on read. The in-memory [`ObjModel`] converts to the
//! standalone triangles the ray tracing routines consume and supports
//! clipping to an axis-aligned box.
//!
//! # Example
//!
//! ```no_run
//! use geotrace_obj::{read_obj, write_obj};
//!
//! let model = read_obj("part.obj").unwrap();
//! let triangles = model.triangles();
//! write_obj(&model, "copy.obj").unwrap();
//! ```

mod error;
mod model;
mod reader;
mod writer;

pub use error::{ObjError, Result};
pub use model::{Face, ObjModel};
pub use reader::{parse_obj, read_obj};
pub use writer::{write_obj, write_obj_to};
