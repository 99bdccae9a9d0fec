//! Ray penetration depth through an extruded polygon (Siddon prism).
//!
//! The polygon is a closed planar boundary whose points all share one Y
//! coordinate; it is implicitly extruded along +Y by a configured slice
//! thickness. The tracer walks the boundary classifying each vertex by
//! which side of the ray's XZ-projected line it falls on, collects the
//! ray parameters of the sign-change crossings, clamps them to the
//! parameter window where the ray is inside the Y slab, and alternates
//! adding and subtracting them to accumulate the total in-prism span.

use geotrace_math::Point3;

use crate::error::{RaytraceError, Result};
use crate::ray::Ray3;

/// One traced ray / prism interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismCrossing {
    /// Smallest clamped crossing parameter (0 when the ray misses).
    pub entry: f64,
    /// Total penetration depth in physical units (ray parameter span
    /// scaled by the ray length).
    pub depth: f64,
}

/// Ray tracer for polygons extruded into a thin Y slab.
#[derive(Debug, Clone, Copy)]
pub struct PrismTracer {
    /// Extrusion thickness along +Y. Needs to be at least as high as the
    /// Y distance to the next polygon slice.
    pub slice_thickness: f64,
}

/// Vertex classification walk state for runs of on-line vertices.
///
/// When the boundary walk reaches a vertex exactly on the ray's line
/// (Ck = 0), the crossing decision is deferred until the run of zeros
/// ends: if the signs on both sides differ, the whole run collapses to
/// the midpoint of its first and last vertex and counts as one crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    /// Not inside a zero run.
    None,
    /// Entered a zero run from a positive vertex; the point is the first
    /// on-line vertex of the run.
    PlusZero(Point3),
    /// Entered a zero run from a negative vertex.
    MinusZero(Point3),
}

impl PrismTracer {
    /// Create a tracer for a given slice thickness.
    pub fn new(slice_thickness: f64) -> Self {
        Self { slice_thickness }
    }

    /// Total penetration depth of `ray` through the extruded polygon.
    ///
    /// `ray` uses [`Ray3::between`] semantics: `t` in `[0, 1]` spans
    /// source to destination, and the returned depth is scaled by the
    /// source-to-destination distance. `poly` is the boundary as an open
    /// ring (no repeated closing point), every point at the slab's base
    /// Y coordinate. The slice never mutates; the tracer works on an
    /// internally rotated copy.
    ///
    /// Fails with [`RaytraceError::NoEnclosedArea`] when every vertex is
    /// collinear with the ray's projected line (degenerate polygon),
    /// before any crossing arithmetic runs. A ray whose projection
    /// misses the polygon, or whose Y span misses the slab entirely,
    /// yields a zero-depth crossing, not an error.
    pub fn trace(&self, ray: &Ray3, poly: &[Point3]) -> Result<PrismCrossing> {
        let (ring, cks) = classify_ring(ray, poly)?;
        let (a_min, a_max) = self.parameter_window(ray, ring[0].y);

        let crossings = find_crossings(ray, &ring, &cks);

        // The window is inverted (a_min > a_max) when the segment's Y
        // span lies entirely outside the slab; max-then-min then
        // collapses every crossing to a_max and the sum below is zero.
        let clamped: Vec<f64> = crossings
            .iter()
            .map(|a| a.max(a_min).min(a_max))
            .collect();

        // Pair up crossings from the far end: with the parameters in
        // descending order the alternating sum telescopes into
        // sum(exit - entry) over each in-prism span.
        let mut ordered = clamped.clone();
        ordered.sort_by(|a, b| b.total_cmp(a));
        let span: f64 = ordered
            .iter()
            .enumerate()
            .map(|(i, a)| if i % 2 == 0 { *a } else { -*a })
            .sum();

        // A zero span means the ray never runs inside the prism, so
        // there is no entry parameter to report.
        let entry = if span > 0.0 {
            clamped.iter().copied().fold(f64::INFINITY, f64::min)
        } else {
            0.0
        };
        Ok(PrismCrossing {
            entry,
            depth: span * ray.length(),
        })
    }

    /// Clamp window `[a_min, a_max]` for the ray parameter, from the
    /// slab's near and far Y bounds and the ray's Y motion. The window
    /// comes back inverted when the segment never enters the slab.
    fn parameter_window(&self, ray: &Ray3, base_y: f64) -> (f64, f64) {
        let ya = ray.origin.y;
        let yb = ray.origin.y + ray.dir.y;
        let y1 = base_y;
        let y2 = base_y + self.slice_thickness;

        if ya < yb {
            // Ray increasing in Y: enters at the base plane, leaves at the top.
            (
                0.0_f64.max((y1 - ya) / (yb - ya)),
                1.0_f64.min((y2 - ya) / (yb - ya)),
            )
        } else if ya > yb {
            (
                0.0_f64.max((y2 - ya) / (yb - ya)),
                1.0_f64.min((y1 - ya) / (yb - ya)),
            )
        } else {
            // Constant Y: the whole segment stays in one plane.
            (0.0, 1.0)
        }
    }
}

/// Signed side classification of a vertex against the ray's XZ line.
///
/// Cross product of (vertex - source) with (destination - source) in the
/// XZ projection; positive and negative mean opposite sides, zero means
/// exactly on the line.
fn ck(ray: &Ray3, p: &Point3) -> f64 {
    let xa = ray.origin.x;
    let za = ray.origin.z;
    (p.x - xa) * ray.dir.z - (p.z - za) * ray.dir.x
}

/// Rotate the boundary so the walk starts at a vertex with nonzero Ck,
/// then close the ring and classify every vertex.
///
/// The rotation is cyclic (a logical shift of an owned copy, never a
/// sort, and never a mutation of the caller's slice); it exists so the
/// crossing walk below never starts inside a zero run. The first vertex
/// of the returned ring always has a nonzero Ck.
fn classify_ring(ray: &Ray3, poly: &[Point3]) -> Result<(Vec<Point3>, Vec<f64>)> {
    let start = poly
        .iter()
        .position(|p| ck(ray, p) != 0.0)
        .ok_or(RaytraceError::NoEnclosedArea)?;

    let mut ring = Vec::with_capacity(poly.len() + 1);
    ring.extend_from_slice(&poly[start..]);
    ring.extend_from_slice(&poly[..start]);
    // Close the ring so the edge back to the starting vertex is walked too.
    ring.push(poly[start]);

    let cks = ring.iter().map(|p| ck(ray, p)).collect();
    Ok((ring, cks))
}

/// Ray parameter of the crossing on the boundary edge `k -> k+1`.
///
/// Linear interpolation of the Ck values: the edge crosses the ray's
/// line where the signed side value passes through zero.
fn crossing_parameter(ray: &Ray3, k: &Point3, k_next: &Point3, ck_k: f64, ck_next: f64) -> f64 {
    let xa = ray.origin.x;
    let za = ray.origin.z;
    ((k.x - xa) * (k_next.z - k.z) - (k.z - za) * (k_next.x - k.x)) / (ck_k - ck_next)
}

/// Midpoint of two boundary points.
fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    Point3::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

/// Walk consecutive vertex pairs and collect crossing parameters.
///
/// Plain sign changes (`+ -> -`, `- -> +`) are immediate crossings. A
/// transition into zero arms a pending state remembering the first
/// on-line vertex; when the run of zeros ends on the opposite sign, the
/// run collapses to the midpoint of its first and last vertex and is
/// interpolated as a single crossing. Runs that return to the same sign
/// produce no crossing, so a ray grazing a vertex or sliding along an
/// edge is not double-counted.
fn find_crossings(ray: &Ray3, ring: &[Point3], cks: &[f64]) -> Vec<f64> {
    let mut pending = Pending::None;
    let mut crossings = Vec::new();

    for i in 0..cks.len() - 1 {
        if cks[i] > 0.0 {
            if cks[i + 1] == 0.0 {
                pending = Pending::PlusZero(ring[i + 1]);
            } else if cks[i + 1] < 0.0 {
                crossings.push(crossing_parameter(
                    ray,
                    &ring[i],
                    &ring[i + 1],
                    cks[i],
                    cks[i + 1],
                ));
            }
        } else if cks[i] == 0.0 {
            if cks[i + 1] > 0.0 {
                if let Pending::MinusZero(first_zero) = pending {
                    let mid = midpoint(&ring[i], &first_zero);
                    crossings.push(crossing_parameter(ray, &mid, &ring[i + 1], cks[i], cks[i + 1]));
                    pending = Pending::None;
                }
            } else if cks[i + 1] < 0.0 {
                if let Pending::PlusZero(first_zero) = pending {
                    let mid = midpoint(&ring[i], &first_zero);
                    crossings.push(crossing_parameter(ray, &mid, &ring[i + 1], cks[i], cks[i + 1]));
                    pending = Pending::None;
                }
            }
        } else {
            if cks[i + 1] > 0.0 {
                crossings.push(crossing_parameter(
                    ray,
                    &ring[i],
                    &ring[i + 1],
                    cks[i],
                    cks[i + 1],
                ));
            } else if cks[i + 1] == 0.0 {
                pending = Pending::MinusZero(ring[i + 1]);
            }
        }
    }

    crossings
}
