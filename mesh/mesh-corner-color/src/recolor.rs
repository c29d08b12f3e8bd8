//! Recoloring pipeline: validate, subdivide, blend.

use mesh_types::{Rect, TriangleStream, Vertex, check_length};
use tracing::debug;

use crate::error::CornerColorResult;
use crate::gradient::corner_gradient;
use crate::params::{CornerColorParams, CornerColors};
use crate::result::RecolorReport;
use crate::subdivide::subdivide_passes;

/// Reusable recoloring pipeline.
///
/// Owns the scratch buffer used by subdivision so repeated calls avoid
/// reallocating. The scratch buffer is emptied after every call; nothing
/// carries over between invocations.
///
/// # Example
///
/// ```
/// use mesh_corner_color::{CornerColorParams, CornerColors, Recolorer};
/// use mesh_types::{Rect, Vertex, VertexColor};
///
/// let mut vertices = vec![
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// ];
/// let params = CornerColorParams::new()
///     .with_corners(CornerColors::uniform(VertexColor::RED))
///     .with_subdivisions(1);
///
/// let mut recolorer = Recolorer::new();
/// let report = recolorer.apply(&mut vertices, &Rect::unit(), &params)?;
///
/// assert_eq!(report.final_triangles, 4);
/// assert!(vertices.iter().all(|v| v.color == VertexColor::RED));
/// # Ok::<(), mesh_corner_color::CornerColorError>(())
/// ```
#[derive(Debug, Default)]
pub struct Recolorer {
    scratch: Vec<Vertex>,
}

impl Recolorer {
    /// Create a pipeline with an empty scratch buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }

    /// Recolor a flat triangle list in place.
    ///
    /// With a degenerate `rect` (width or height not positive) the list is
    /// left exactly as given and the report is marked skipped. Otherwise the
    /// list is subdivided `params.subdivisions` times and every vertex color
    /// is multiplied by the corner gradient at its position.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving `vertices` untouched, if:
    /// - The vertex count is not a multiple of 3
    /// - The subdivision count exceeds [`MAX_SUBDIVISIONS`](crate::MAX_SUBDIVISIONS)
    pub fn apply(
        &mut self,
        vertices: &mut Vec<Vertex>,
        rect: &Rect,
        params: &CornerColorParams,
    ) -> CornerColorResult<RecolorReport> {
        // Validate input
        check_length(vertices.len())?;
        params.validate()?;

        let original_triangles = vertices.len() / 3;

        if rect.is_degenerate() {
            debug!(
                "Skipping corner color: degenerate rect {}x{}",
                rect.width, rect.height
            );
            return Ok(RecolorReport::skipped(original_triangles));
        }

        debug!(
            "Recoloring stream: {} triangles, {} subdivisions",
            original_triangles, params.subdivisions
        );

        subdivide_passes(vertices, params.subdivisions, &mut self.scratch);
        self.scratch.clear();

        recolor_vertices(vertices, rect, &params.corners);

        Ok(RecolorReport {
            original_triangles,
            final_triangles: vertices.len() / 3,
            subdivisions: params.subdivisions,
            recolored: true,
        })
    }

    /// Recolor a [`TriangleStream`] in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the subdivision count is out of range.
    pub fn apply_stream(
        &mut self,
        stream: &mut TriangleStream,
        rect: &Rect,
        params: &CornerColorParams,
    ) -> CornerColorResult<RecolorReport> {
        self.apply(stream.buffer_mut(), rect, params)
    }
}

/// Multiply every vertex color by the gradient at its position.
///
/// No subdivision happens here. `rect` must not be degenerate. All-white
/// corners leave every color as it is.
pub fn recolor_vertices(vertices: &mut [Vertex], rect: &Rect, corners: &CornerColors) {
    if corners.is_identity() {
        return;
    }
    for vertex in vertices {
        let gradient = corner_gradient(corners, &vertex.position, rect);
        vertex.color = vertex.color.multiply(gradient);
    }
}

/// Recolor a stream, returning the result as a new stream.
///
/// Convenience wrapper over [`Recolorer::apply_stream`] with a throwaway
/// scratch buffer.
///
/// # Errors
///
/// Returns an error if the subdivision count is out of range.
///
/// # Example
///
/// ```
/// use mesh_corner_color::{CornerColorParams, recolor};
/// use mesh_types::{Rect, TriangleStream, Vertex};
///
/// let mut stream = TriangleStream::new();
/// stream.push_triangle(
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// );
///
/// // Degenerate rect: stream passes through unchanged
/// let out = recolor(&stream, &Rect::new(0.0, 0.0, 0.0, 1.0), &CornerColorParams::new())?;
/// assert_eq!(out, stream);
/// # Ok::<(), mesh_corner_color::CornerColorError>(())
/// ```
pub fn recolor(
    stream: &TriangleStream,
    rect: &Rect,
    params: &CornerColorParams,
) -> CornerColorResult<TriangleStream> {
    let mut result = stream.clone();
    Recolorer::new().apply_stream(&mut result, rect, params)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CornerColorError;
    use mesh_types::VertexColor;

    fn make_quad() -> Vec<Vertex> {
        let bl = Vertex::from_coords(0.0, 0.0, 0.0);
        let tl = Vertex::from_coords(0.0, 10.0, 0.0);
        let tr = Vertex::from_coords(20.0, 10.0, 0.0);
        let br = Vertex::from_coords(20.0, 0.0, 0.0);
        vec![bl, tl, tr, tr, br, bl]
    }

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 20.0, 10.0)
    }

    #[test]
    fn test_recolor_malformed_stream() {
        let mut vertices = make_quad();
        vertices.pop();
        let before = vertices.clone();
        let result = Recolorer::new().apply(&mut vertices, &rect(), &CornerColorParams::new());
        assert!(matches!(
            result,
            Err(CornerColorError::MalformedStream { len: 5 })
        ));
        assert_eq!(vertices, before);
    }

    #[test]
    fn test_recolor_too_many_subdivisions() {
        let mut vertices = make_quad();
        let params = CornerColorParams::new().with_subdivisions(6);
        let result = Recolorer::new().apply(&mut vertices, &rect(), &params);
        assert!(matches!(
            result,
            Err(CornerColorError::InvalidSubdivisions { count: 6, max: 5 })
        ));
        assert_eq!(vertices, make_quad());
    }

    #[test]
    fn test_recolor_degenerate_rect() {
        let params = CornerColorParams::new()
            .with_corners(CornerColors::uniform(VertexColor::BLACK))
            .with_subdivisions(3);
        for rect in [
            Rect::new(0.0, 0.0, 0.0, 10.0),
            Rect::new(0.0, 0.0, 20.0, -1.0),
        ] {
            let mut vertices = make_quad();
            let report = Recolorer::new()
                .apply(&mut vertices, &rect, &params)
                .expect("degenerate rect is not an error");
            assert!(report.was_skipped());
            assert_eq!(report.final_triangles, 2);
            assert_eq!(vertices, make_quad());
        }
    }

    #[test]
    fn test_recolor_counts() {
        let mut recolorer = Recolorer::new();
        for n in 0..=3 {
            let mut vertices = make_quad();
            let params = CornerColorParams::new().with_subdivisions(n);
            let report = recolorer
                .apply(&mut vertices, &rect(), &params)
                .expect("recolor failed");
            assert_eq!(report.final_triangles, params.expected_triangles(2));
            assert_eq!(vertices.len(), report.final_triangles * 3);
            assert!(recolorer.scratch.is_empty());
        }
    }

    #[test]
    fn test_recolor_quad_corners() {
        let corners = CornerColors::new(
            VertexColor::RED,
            VertexColor::GREEN,
            VertexColor::BLUE,
            VertexColor::YELLOW,
        );
        let params = CornerColorParams::new()
            .with_corners(corners)
            .with_subdivisions(0);
        let mut vertices = make_quad();
        Recolorer::new()
            .apply(&mut vertices, &rect(), &params)
            .expect("recolor failed");

        assert_eq!(vertices[0].color, VertexColor::BLUE);
        assert_eq!(vertices[1].color, VertexColor::RED);
        assert_eq!(vertices[2].color, VertexColor::GREEN);
        assert_eq!(vertices[4].color, VertexColor::YELLOW);
    }

    #[test]
    fn test_recolor_keeps_tint() {
        let tint = VertexColor::new(200, 100, 50, 128);
        let mut vertices: Vec<Vertex> =
            make_quad().into_iter().map(|v| v.with_color(tint)).collect();
        let gray = VertexColor::new(128, 128, 128, 255);
        let params = CornerColorParams::new()
            .with_corners(CornerColors::uniform(gray))
            .with_subdivisions(1);
        Recolorer::new()
            .apply(&mut vertices, &rect(), &params)
            .expect("recolor failed");

        // Subdivision averages equal tints to the same tint
        let expected = tint.multiply(gray);
        assert!(vertices.iter().all(|v| v.color == expected));
    }

    #[test]
    fn test_recolor_vertices_white_is_identity() {
        let tint = VertexColor::new(200, 100, 50, 128);
        let mut vertices = vec![
            Vertex::from_coords(-500.0, 900.0, 0.0).with_color(tint),
            Vertex::from_coords(10.0, 5.0, 0.0).with_color(tint),
            Vertex::from_coords(1e6, -1e6, 0.0).with_color(tint),
        ];
        recolor_vertices(&mut vertices, &rect(), &CornerColors::default());
        assert!(vertices.iter().all(|v| v.color == tint));
    }

    #[test]
    fn test_recolor_free_fn() {
        let stream = TriangleStream::from_vertices(make_quad()).expect("valid stream");
        let params = CornerColorParams::new().with_subdivisions(2);
        let out = recolor(&stream, &rect(), &params).expect("recolor failed");
        assert_eq!(out.triangle_count(), 32);
        assert_eq!(stream.triangle_count(), 2);
    }
}
