//! OBJ file reader.

use std::path::Path;

use geotrace_math::{Point3, Vec3};

use crate::error::{ObjError, Result};
use crate::model::{Face, ObjModel};

/// Read an OBJ model from a path.
pub fn read_obj(path: impl AsRef<Path>) -> Result<ObjModel> {
    let text = std::fs::read_to_string(&path)?;
    let name = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut model = parse_obj(&text)?;
    if model.name.is_empty() {
        model.name = name;
    }
    Ok(model)
}

/// Parse OBJ text into a model.
///
/// Handles `o`, `v`, `vn`, and `f` lines; anything else (comments,
/// texture coordinates, groups, materials) is ignored. Face corners may
/// use any of the index forms `v`, `v/vt`, `v//vn`, and `v/vt/vn`;
/// indices are 1-based in the file and negative indices count back from
/// the current end of the vertex list. Faces with more than three
/// corners are fanned into triangles.
pub fn parse_obj(text: &str) -> Result<ObjModel> {
    let mut model = ObjModel::default();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("o") => {
                model.name = parts.collect::<Vec<_>>().join(" ");
            }
            Some("v") => {
                let [x, y, z] = parse_floats(parts, line_no, "vertex")?;
                model.vertices.push(Point3::new(x, y, z));
            }
            Some("vn") => {
                let [x, y, z] = parse_floats(parts, line_no, "normal")?;
                model.normals.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                let corners: Vec<(usize, Option<usize>)> = parts
                    .map(|c| parse_corner(c, line_no, &model))
                    .collect::<Result<_>>()?;
                if corners.len() < 3 {
                    return Err(ObjError::invalid_face(
                        line_no,
                        format!("face needs at least 3 corners, got {}", corners.len()),
                    ));
                }
                for k in 1..corners.len() - 1 {
                    model.faces.push(Face {
                        a: corners[0].0,
                        b: corners[k].0,
                        c: corners[k + 1].0,
                        normal: corners[0].1,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(model)
}

fn parse_floats<'a>(
    parts: impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> Result<[f64; 3]> {
    let values: Vec<f64> = parts
        .map(|p| {
            p.parse::<f64>()
                .map_err(|e| ObjError::parse(line, format!("bad {what} component {p:?}: {e}")))
        })
        .collect::<Result<_>>()?;
    if values.len() != 3 {
        return Err(ObjError::parse(
            line,
            format!("{what} needs 3 components, got {}", values.len()),
        ));
    }
    Ok([values[0], values[1], values[2]])
}

/// One face corner: vertex index plus optional normal index, 0-based.
fn parse_corner(corner: &str, line: usize, model: &ObjModel) -> Result<(usize, Option<usize>)> {
    let mut fields = corner.split('/');
    let v = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| ObjError::invalid_face(line, format!("empty corner {corner:?}")))?;
    let _vt = fields.next();
    let vn = fields.next().filter(|f| !f.is_empty());

    let v = resolve_index(v, model.vertices.len(), line, "vertex")?;
    let vn = match vn {
        Some(n) => Some(resolve_index(n, model.normals.len(), line, "normal")?),
        None => None,
    };
    Ok((v, vn))
}

fn resolve_index(field: &str, len: usize, line: usize, what: &str) -> Result<usize> {
    let idx: i64 = field
        .parse()
        .map_err(|e| ObjError::invalid_face(line, format!("bad {what} index {field:?}: {e}")))?;
    let resolved = if idx < 0 {
        len as i64 + idx
    } else {
        idx - 1
    };
    if resolved < 0 || resolved >= len as i64 {
        return Err(ObjError::invalid_face(
            line,
            format!("{what} index {idx} out of range (have {len})"),
        ));
    }
    Ok(resolved as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vertices_normals_and_faces() {
        let text = "\
# comment
o box
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1
";
        let m = parse_obj(text).unwrap();
        assert_eq!(m.name, "box");
        assert_eq!(m.vertices.len(), 3);
        assert_eq!(m.normals.len(), 1);
        assert_eq!(m.faces.len(), 1);
        assert_eq!(m.faces[0].indices(), [0, 1, 2]);
        assert_eq!(m.faces[0].normal, Some(0));
    }

    #[test]
    fn accepts_all_corner_index_forms() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1 2/5 3//1
";
        let m = parse_obj(text).unwrap();
        assert_eq!(m.faces[0].indices(), [0, 1, 2]);
    }

    #[test]
    fn fans_quads_into_triangles() {
        let text = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";
        let m = parse_obj(text).unwrap();
        assert_eq!(m.faces.len(), 2);
        assert_eq!(m.faces[0].indices(), [0, 1, 2]);
        assert_eq!(m.faces[1].indices(), [0, 2, 3]);
    }

    #[test]
    fn negative_indices_count_from_the_end() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
f -3 -2 -1
";
        let m = parse_obj(text).unwrap();
        assert_eq!(m.faces[0].indices(), [0, 1, 2]);
    }

    #[test]
    fn out_of_range_face_index_is_an_error() {
        let text = "v 0 0 0\nf 1 2 3\n";
        assert!(matches!(
            parse_obj(text),
            Err(ObjError::InvalidFace { line: 2, .. })
        ));
    }

    #[test]
    fn malformed_vertex_is_an_error() {
        let text = "v 0 zero 0\n";
        assert!(matches!(parse_obj(text), Err(ObjError::Parse { line: 1, .. })));
    }
}
