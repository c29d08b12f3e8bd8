//! Non-indexed triangle list.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Vertex;

/// Errors raised when building a [`TriangleStream`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Vertex count is not a multiple of three.
    #[error("Triangle stream length {len} is not a multiple of 3")]
    MalformedLength {
        /// Offending vertex count.
        len: usize,
    },
}

/// A non-indexed triangle list.
///
/// Every consecutive triple `(v[3k], v[3k+1], v[3k+2])` is one triangle, so
/// the vertex count is always a multiple of three. Vertex order encodes
/// winding and must be preserved by every operation.
///
/// # Example
///
/// ```
/// use mesh_types::{TriangleStream, Vertex};
///
/// let stream = TriangleStream::from_vertices(vec![
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// ])?;
/// assert_eq!(stream.triangle_count(), 1);
///
/// assert!(TriangleStream::from_vertices(vec![Vertex::default()]).is_err());
/// # Ok::<(), mesh_types::StreamError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vertex>", into = "Vec<Vertex>"))]
pub struct TriangleStream {
    vertices: Vec<Vertex>,
}

impl TriangleStream {
    /// Create an empty stream.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Create an empty stream with room for `triangles` triangles.
    #[inline]
    #[must_use]
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Wrap a vertex list, checking that it forms whole triangles.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::MalformedLength`] if the vertex count is not
    /// a multiple of three.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Result<Self, StreamError> {
        check_length(vertices.len())?;
        Ok(Self { vertices })
    }

    /// Append one triangle.
    #[inline]
    pub fn push_triangle(&mut self, v0: Vertex, v1: Vertex, v2: Vertex) {
        self.vertices.extend([v0, v1, v2]);
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Check if the stream holds no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Borrow the vertices.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Borrow the backing buffer mutably.
    ///
    /// For passes that rebuild the list in place. The length invariant is
    /// the caller's to keep.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<Vertex> {
        &mut self.vertices
    }

    /// Iterate over triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex; 3]> {
        as_triangles(&self.vertices)
    }

    /// Remove all triangles, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Unwrap into the vertex list.
    #[inline]
    #[must_use]
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

impl TryFrom<Vec<Vertex>> for TriangleStream {
    type Error = StreamError;

    fn try_from(vertices: Vec<Vertex>) -> Result<Self, Self::Error> {
        Self::from_vertices(vertices)
    }
}

impl From<TriangleStream> for Vec<Vertex> {
    fn from(stream: TriangleStream) -> Self {
        stream.vertices
    }
}

/// Check that `len` vertices form whole triangles.
///
/// # Errors
///
/// Returns [`StreamError::MalformedLength`] if `len` is not a multiple of 3.
#[inline]
pub const fn check_length(len: usize) -> Result<(), StreamError> {
    if len % 3 == 0 {
        Ok(())
    } else {
        Err(StreamError::MalformedLength { len })
    }
}

/// View a flat vertex slice as triangles.
///
/// A trailing partial triangle is ignored.
pub fn as_triangles(vertices: &[Vertex]) -> impl Iterator<Item = &[Vertex; 3]> {
    vertices
        .chunks_exact(3)
        .filter_map(|chunk| <&[Vertex; 3]>::try_from(chunk).ok())
}
