//! Midpoint subdivision of non-indexed triangle streams.

use mesh_types::{TriangleStream, Vertex, as_triangles};
use tracing::debug;

/// Run one midpoint subdivision pass from `source` into `out`.
///
/// Every triangle `(v0, v1, v2)` is split into four using the edge midpoints
/// `m01`, `m12`, `m20`. The output keeps the source layout with each
/// triangle's slot replaced by its corner triangle `(v0, m01, m20)`, then
/// appends `(v1, m12, m01)`, `(v2, m20, m12)` and the center
/// `(m01, m12, m20)` for each source triangle in order. All four children
/// share the parent's winding.
///
/// `out` is cleared first. `source` must hold whole triangles.
///
/// # Example
///
/// ```
/// use mesh_corner_color::subdivide_into;
/// use mesh_types::Vertex;
///
/// let tri = [
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(2.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 2.0, 0.0),
/// ];
/// let mut out = Vec::new();
/// subdivide_into(&tri, &mut out);
///
/// assert_eq!(out.len(), 12);
/// assert_eq!(out[0].position, tri[0].position);
/// assert_eq!(out[1].position.x, 1.0);
/// ```
pub fn subdivide_into(source: &[Vertex], out: &mut Vec<Vertex>) {
    debug_assert!(source.len() % 3 == 0, "partial triangle in stream");

    out.clear();
    out.reserve(source.len() * 4);
    out.extend_from_slice(source);

    for (t, [v0, v1, v2]) in as_triangles(source).enumerate() {
        let m01 = Vertex::midpoint(v0, v1);
        let m12 = Vertex::midpoint(v1, v2);
        let m20 = Vertex::midpoint(v2, v0);

        // Corner triangle stays in the parent's slot
        let i = t * 3;
        out[i + 1] = m01;
        out[i + 2] = m20;

        out.extend([*v1, m12, m01]);
        out.extend([*v2, m20, m12]);
        // Center triangle
        out.extend([m01, m12, m20]);
    }
}

/// Subdivide `vertices` in place `passes` times.
///
/// `scratch` is used as the second buffer of a ping-pong pair; its contents
/// on return are unspecified. Passes are not clamped here: each one
/// quadruples the triangle count.
pub fn subdivide_passes(vertices: &mut Vec<Vertex>, passes: u32, scratch: &mut Vec<Vertex>) {
    for pass in 0..passes {
        subdivide_into(vertices, scratch);
        std::mem::swap(vertices, scratch);
        debug!(
            "Subdivision pass {}: {} triangles, {} vertices",
            pass + 1,
            vertices.len() / 3,
            vertices.len()
        );
    }
}

/// Subdivide a stream `passes` times, returning a new stream.
///
/// # Example
///
/// ```
/// use mesh_corner_color::subdivide_stream;
/// use mesh_types::{TriangleStream, Vertex};
///
/// let mut stream = TriangleStream::new();
/// stream.push_triangle(
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// );
///
/// let dense = subdivide_stream(&stream, 2);
/// assert_eq!(dense.triangle_count(), 16); // 1 * 4^2
/// ```
#[must_use]
pub fn subdivide_stream(stream: &TriangleStream, passes: u32) -> TriangleStream {
    let mut result = stream.clone();
    let mut scratch = Vec::new();
    subdivide_passes(result.buffer_mut(), passes, &mut scratch);
    result
}
