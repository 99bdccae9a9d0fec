#![warn(missing_docs)]

//! geotrace — ray-geometry toolkit
//!
//! Triangle intersection, mesh containment, prism depth tracing, and
//! pixel-grid ray tracing, with OBJ mesh I/O and Monte Carlo shape
//! overlap estimation. This crate re-exports the workspace members
//! under one roof.
//!
//! # Example
//!
//! ```rust
//! use geotrace::{is_inside_mesh, Aabb3, Point3};
//!
//! let bounds = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
//! let mesh = bounds.to_triangles();
//! assert!(is_inside_mesh(&Point3::new(1.0, 1.0, 1.0), &mesh));
//! assert!(!is_inside_mesh(&Point3::new(3.0, 1.0, 1.0), &mesh));
//! ```

pub use geotrace_math::{
    angle, lattice, rigid_transform_between, rotation_from_euler, FitError, Mat3, Mat4, Point2,
    Point3, Transform, Vec2, Vec3,
};

pub use geotrace_geom::{Aabb3, Circle2, Shape2, Square2, Triangle3};

pub use geotrace_raytrace::{
    intersect_triangle, is_inside_mesh, trace_grid, CellCrossing, PixelGrid, PrismCrossing,
    PrismTracer, Ray2, Ray3, RaytraceError, TraceMap, TriangleHit,
};

pub use geotrace_obj::{parse_obj, read_obj, write_obj, write_obj_to, Face, ObjError, ObjModel};

pub use geotrace_montecarlo::{overlap_area, MonteCarloError, OverlapSettings};
