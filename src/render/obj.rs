use std::io::Write;

use crate::{foundation::error::ArticulateResult, render::mesh::Mesh};

/// Write `mesh` as Wavefront OBJ.
///
/// Each group becomes a `g <part>` block with its own vertices and 1-based
/// faces. The part color is carried in a comment since plain OBJ has no
/// per-group color without a material library.
#[tracing::instrument(
    skip(mesh, writer),
    fields(vertices = mesh.vertex_count(), triangles = mesh.triangle_count())
)]
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> ArticulateResult<()> {
    writeln!(writer, "# articulate pose export")?;
    writeln!(
        writer,
        "# groups {} vertices {} triangles {}",
        mesh.groups.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    if mesh.groups.is_empty() {
        write_vertices(&mut writer, mesh, 0..mesh.vertex_count())?;
        write_faces(&mut writer, mesh, 0..mesh.triangle_count())?;
    }
    for group in &mesh.groups {
        writeln!(writer)?;
        writeln!(writer, "g {}", group.part)?;
        let [r, g, b] = group.color.to_array();
        writeln!(writer, "# color {r} {g} {b}")?;
        write_vertices(&mut writer, mesh, group.vertices.clone())?;
        write_faces(&mut writer, mesh, group.triangles.clone())?;
    }

    writer.flush()?;
    tracing::debug!("obj written");
    Ok(())
}

fn write_vertices<W: Write>(
    writer: &mut W,
    mesh: &Mesh,
    range: std::ops::Range<usize>,
) -> std::io::Result<()> {
    for p in &mesh.positions[range] {
        writeln!(writer, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    Ok(())
}

fn write_faces<W: Write>(
    writer: &mut W,
    mesh: &Mesh,
    range: std::ops::Range<usize>,
) -> std::io::Result<()> {
    for [a, b, c] in &mesh.triangles[range] {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

/// Render `mesh` to an OBJ string.
pub fn obj_string(mesh: &Mesh) -> ArticulateResult<String> {
    let mut buf = Vec::new();
    write_obj(mesh, &mut buf)?;
    String::from_utf8(buf).map_err(|e| anyhow::Error::new(e).into())
}

#[cfg(test)]
#[path = "../../tests/unit/render/obj.rs"]
mod tests;
