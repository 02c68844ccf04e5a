use std::ops::Range;

use crate::{
    foundation::core::{DVec3, Rgb},
    foundation::error::{ArticulateError, ArticulateResult},
    render::sink::{DrawItem, RenderSink},
    rig::model::Primitive,
    transform::Transform,
};

/// Smallest ring resolution accepted by the tessellator.
pub const MIN_SEGMENTS: u32 = 3;
/// Largest ring resolution accepted by the tessellator.
///
/// Keeps a single sphere near a million vertices so indices stay within `u32`.
pub const MAX_SEGMENTS: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Resolution used when turning primitives into triangles.
pub struct TessellationSettings {
    /// Longitude and latitude steps of a UV sphere.
    pub sphere_segments: u32,
    /// Ring steps of cylinders and cones.
    pub round_segments: u32,
}

impl Default for TessellationSettings {
    fn default() -> Self {
        Self {
            sphere_segments: 20,
            round_segments: 100,
        }
    }
}

impl TessellationSettings {
    /// Use `segments` for both spheres and round primitives.
    ///
    /// Values outside `MIN_SEGMENTS..=MAX_SEGMENTS` are clamped at tessellation.
    pub fn uniform(segments: u32) -> Self {
        Self {
            sphere_segments: segments,
            round_segments: segments,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Named slice of a [`Mesh`], one per drawn part.
pub struct MeshGroup {
    /// Id of the part the group was drawn for.
    pub part: String,
    /// Part color.
    pub color: Rgb,
    /// Slice of [`Mesh::positions`].
    pub vertices: Range<usize>,
    /// Slice of [`Mesh::triangles`].
    pub triangles: Range<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Indexed triangle mesh. Indices are 0-based into `positions`.
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<DVec3>,
    /// Vertex index triples.
    pub triangles: Vec<[u32; 3]>,
    /// Per-part groups; empty for a bare primitive.
    pub groups: Vec<MeshGroup>,
}

impl Mesh {
    /// Empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    // Only used by the tessellator, whose segment clamp bounds the count.
    fn push_vertex(&mut self, p: DVec3) -> u32 {
        self.positions.push(p);
        (self.positions.len() - 1) as u32
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Append `other` mapped through `transform` as a new group.
    ///
    /// Fails without touching `self` when the combined vertex count would not
    /// fit `u32` indices.
    pub fn append_group(
        &mut self,
        other: &Mesh,
        transform: Transform,
        part: &str,
        color: Rgb,
    ) -> ArticulateResult<()> {
        let base = self.positions.len();
        let offset = index_offset(base, other.positions.len()).ok_or_else(|| {
            ArticulateError::evaluation(format!(
                "mesh for '{part}' would exceed {} vertices",
                u32::MAX
            ))
        })?;
        let first_tri = self.triangles.len();
        self.positions
            .extend(other.positions.iter().map(|&p| transform.transform_point(p)));
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|t| [t[0] + offset, t[1] + offset, t[2] + offset]),
        );
        self.groups.push(MeshGroup {
            part: part.to_string(),
            color,
            vertices: base..self.positions.len(),
            triangles: first_tri..self.triangles.len(),
        });
        Ok(())
    }
}

/// `base` as a `u32` index offset, if `base + added` vertices stay addressable.
fn index_offset(base: usize, added: usize) -> Option<u32> {
    u32::try_from(base.checked_add(added)?).ok()?;
    u32::try_from(base).ok()
}

impl Primitive {
    /// Local-space triangles for this primitive, centered on the part origin.
    pub fn tessellate(&self, settings: &TessellationSettings) -> Mesh {
        let round = settings.round_segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
        match *self {
            Self::Sphere { radius } => sphere(
                radius,
                settings.sphere_segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS),
            ),
            Self::Cylinder { height, radius } => cylinder(height, radius, round),
            Self::Cone { height, radius } => cone(height, radius, round),
            Self::Cube { size } => cuboid(DVec3::from_array(size) * 0.5),
            Self::Pyramid {
                height,
                width,
                breadth,
            } => pyramid(height, width, breadth),
        }
    }
}

fn ring_point(i: u32, n: u32, radius: f64, y: f64) -> DVec3 {
    let u = std::f64::consts::TAU * f64::from(i) / f64::from(n);
    DVec3::new(u.cos() * radius, y, u.sin() * radius)
}

fn sphere(radius: f64, n: u32) -> Mesh {
    let mut mesh = Mesh::new();
    for j in 0..=n {
        let v = std::f64::consts::PI * f64::from(j) / f64::from(n);
        for i in 0..n {
            let u = std::f64::consts::TAU * f64::from(i) / f64::from(n);
            mesh.push_vertex(DVec3::new(
                u.cos() * v.sin() * radius,
                v.cos() * radius,
                u.sin() * v.sin() * radius,
            ));
        }
    }
    let at = |j: u32, i: u32| j * n + i % n;
    for j in 0..n {
        for i in 0..n {
            let (a, b) = (at(j, i), at(j, i + 1));
            let (c, d) = (at(j + 1, i + 1), at(j + 1, i));
            mesh.push_triangle(a, b, c);
            mesh.push_triangle(a, c, d);
        }
    }
    mesh
}

fn cylinder(height: f64, radius: f64, n: u32) -> Mesh {
    let mut mesh = Mesh::new();
    let half = height * 0.5;
    for i in 0..n {
        mesh.push_vertex(ring_point(i, n, radius, -half));
    }
    for i in 0..n {
        mesh.push_vertex(ring_point(i, n, radius, half));
    }
    let bottom = mesh.push_vertex(DVec3::new(0.0, -half, 0.0));
    let top = mesh.push_vertex(DVec3::new(0.0, half, 0.0));
    for i in 0..n {
        let next = (i + 1) % n;
        let (b0, b1) = (i, next);
        let (t0, t1) = (n + i, n + next);
        mesh.push_triangle(b0, t1, b1);
        mesh.push_triangle(b0, t0, t1);
        mesh.push_triangle(bottom, b0, b1);
        mesh.push_triangle(top, t1, t0);
    }
    mesh
}

fn cone(height: f64, radius: f64, n: u32) -> Mesh {
    let mut mesh = Mesh::new();
    let half = height * 0.5;
    for i in 0..n {
        mesh.push_vertex(ring_point(i, n, radius, -half));
    }
    let base = mesh.push_vertex(DVec3::new(0.0, -half, 0.0));
    let apex = mesh.push_vertex(DVec3::new(0.0, half, 0.0));
    for i in 0..n {
        let next = (i + 1) % n;
        mesh.push_triangle(apex, next, i);
        mesh.push_triangle(base, i, next);
    }
    mesh
}

fn pyramid(height: f64, width: f64, breadth: f64) -> Mesh {
    let mut mesh = Mesh::new();
    let a = mesh.push_vertex(DVec3::new(-width, 0.0, 0.0));
    let b = mesh.push_vertex(DVec3::new(width, 0.0, 0.0));
    let c = mesh.push_vertex(DVec3::new(0.0, 0.0, breadth));
    let apex = mesh.push_vertex(DVec3::new(0.0, height, 0.0));
    mesh.push_triangle(a, b, c);
    mesh.push_triangle(a, apex, b);
    mesh.push_triangle(b, apex, c);
    mesh.push_triangle(c, apex, a);
    mesh
}

fn cuboid(half: DVec3) -> Mesh {
    let mut mesh = Mesh::new();
    for corner in 0..8u32 {
        let pick = |bit: u32, h: f64| if corner & bit == 0 { -h } else { h };
        mesh.push_vertex(DVec3::new(pick(1, half.x), pick(2, half.y), pick(4, half.z)));
    }
    // Two triangles per face, corners indexed by their x/y/z bits.
    const FACES: [[u32; 4]; 6] = [
        [0, 2, 6, 4],
        [1, 5, 7, 3],
        [0, 4, 5, 1],
        [2, 3, 7, 6],
        [0, 1, 3, 2],
        [4, 6, 7, 5],
    ];
    for [a, b, c, d] in FACES {
        mesh.push_triangle(a, b, c);
        mesh.push_triangle(a, c, d);
    }
    mesh
}

#[derive(Clone, Debug, Default)]
/// Sink that tessellates every item into one world-space mesh.
pub struct MeshSink {
    settings: TessellationSettings,
    mesh: Mesh,
}

impl MeshSink {
    /// Empty sink tessellating at `settings`.
    pub fn new(settings: TessellationSettings) -> Self {
        Self {
            settings,
            mesh: Mesh::new(),
        }
    }

    /// Mesh of the last frame.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Take the mesh of the last frame.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

impl RenderSink for MeshSink {
    fn begin_frame(&mut self, _phase: f64) -> ArticulateResult<()> {
        self.mesh = Mesh::new();
        Ok(())
    }

    fn draw(&mut self, item: &DrawItem) -> ArticulateResult<()> {
        let local = item.primitive.tessellate(&self.settings);
        self.mesh
            .append_group(&local, item.transform, &item.part, item.color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mesh.rs"]
mod tests;
