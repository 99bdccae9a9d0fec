//! OBJ file writer.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::model::ObjModel;

/// Write a model to an OBJ file at `path`.
pub fn write_obj(model: &ObjModel, path: impl AsRef<Path>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_obj_to(model, &mut writer)
}

/// Write a model as OBJ text to any writer.
///
/// Faces come out as `f a//n b//n c//n` when they carry a normal and as
/// plain `f a b c` otherwise, with 1-based indices.
pub fn write_obj_to(model: &ObjModel, writer: &mut impl Write) -> Result<()> {
    writeln!(writer, "#")?;
    writeln!(writer, "# OBJ file created by geotrace")?;
    writeln!(writer, "#")?;
    if !model.name.is_empty() {
        writeln!(writer, "o {}", model.name)?;
    }
    for v in &model.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for n in &model.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for f in &model.faces {
        match f.normal {
            Some(n) => writeln!(
                writer,
                "f {}//{} {}//{} {}//{}",
                f.a + 1,
                n + 1,
                f.b + 1,
                n + 1,
                f.c + 1,
                n + 1
            )?,
            None => writeln!(writer, "f {} {} {}", f.a + 1, f.b + 1, f.c + 1)?,
        }
    }
    writer.flush()?;
    Ok(())
}
