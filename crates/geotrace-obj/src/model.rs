//! In-memory triangle mesh backed by OBJ-style vertex and face lists.

use geotrace_geom::{Aabb3, Triangle3};
use geotrace_math::{Point3, Vec3};

/// One triangular face, holding 0-based indices into the vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// First vertex index.
    pub a: usize,
    /// Second vertex index.
    pub b: usize,
    /// Third vertex index.
    pub c: usize,
    /// Normal index shared by all three corners, when present.
    pub normal: Option<usize>,
}

impl Face {
    /// Face without a normal reference.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            a,
            b,
            c,
            normal: None,
        }
    }

    /// The three vertex indices in order.
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Triangle mesh with indexed vertices, as stored in an OBJ file.
#[derive(Debug, Clone, Default)]
pub struct ObjModel {
    /// Model name, from the `o` line when present.
    pub name: String,
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vec3>,
    /// Triangular faces indexing into `vertices`.
    pub faces: Vec<Face>,
}

impl ObjModel {
    /// Empty model with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Resolve the faces into standalone triangles; the triangle id is
    /// the face's position in the face list.
    pub fn triangles(&self) -> Vec<Triangle3> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, f)| {
                Triangle3::with_id(
                    self.vertices[f.a],
                    self.vertices[f.b],
                    self.vertices[f.c],
                    i as u32,
                )
            })
            .collect()
    }

    /// Axis-aligned bounds of all vertices.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.vertices)
    }

    /// Keep only geometry strictly inside `bounds`.
    ///
    /// Vertices on or outside the boundary are removed, surviving
    /// vertices are reindexed, and every face that referenced a removed
    /// vertex is dropped with it. Normals are kept as-is; faces keep
    /// their normal reference.
    pub fn clip_to_bounds(&mut self, bounds: &Aabb3) {
        let mut remap = vec![usize::MAX; self.vertices.len()];
        let mut kept = Vec::with_capacity(self.vertices.len());
        for (i, v) in self.vertices.iter().enumerate() {
            if strictly_inside(v, bounds) {
                remap[i] = kept.len();
                kept.push(*v);
            }
        }
        self.vertices = kept;
        self.faces.retain_mut(|f| {
            let (a, b, c) = (remap[f.a], remap[f.b], remap[f.c]);
            if a == usize::MAX || b == usize::MAX || c == usize::MAX {
                return false;
            }
            f.a = a;
            f.b = b;
            f.c = c;
            true
        });
    }
}

fn strictly_inside(p: &Point3, bounds: &Aabb3) -> bool {
    p.x > bounds.min.x
        && p.x < bounds.max.x
        && p.y > bounds.min.y
        && p.y < bounds.max.y
        && p.z > bounds.min.z
        && p.z < bounds.max.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad_model() -> ObjModel {
        let mut m = ObjModel::new("quad");
        m.vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        m.faces = vec![Face::new(0, 1, 2), Face::new(0, 2, 3)];
        m
    }

    #[test]
    fn triangles_carry_face_order_ids() {
        let m = quad_model();
        let tris = m.triangles();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0].id, 0);
        assert_eq!(tris[1].id, 1);
        assert_relative_eq!(tris[0].area() + tris[1].area(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn clip_drops_faces_touching_removed_vertices() {
        let mut m = quad_model();
        // Bounds exclude vertex 3 at (0, 1, 0).
        let bounds = Aabb3::new(
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(2.0, 1.0, 1.0),
        );
        m.clip_to_bounds(&bounds);
        // Vertex 2 at (1, 1, 0) also sits on the boundary and goes too.
        assert_eq!(m.vertices.len(), 2);
        assert!(m.faces.is_empty());
    }

    #[test]
    fn clip_reindexes_surviving_faces() {
        let mut m = quad_model();
        m.vertices.insert(0, Point3::new(50.0, 0.0, 0.0));
        for f in &mut m.faces {
            f.a += 1;
            f.b += 1;
            f.c += 1;
        }
        let bounds = Aabb3::new(
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(2.0, 2.0, 1.0),
        );
        m.clip_to_bounds(&bounds);
        assert_eq!(m.vertices.len(), 4);
        assert_eq!(m.faces.len(), 2);
        assert_eq!(m.faces[0].indices(), [0, 1, 2]);
    }

    #[test]
    fn bounding_box_spans_all_vertices() {
        let m = quad_model();
        let bb = m.bounding_box();
        assert_eq!(bb.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.max, Point3::new(1.0, 1.0, 0.0));
    }
}
