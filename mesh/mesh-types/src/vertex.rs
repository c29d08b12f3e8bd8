//! Render vertex type.

use nalgebra::{Point3, Vector2, Vector3, Vector4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::VertexColor;

/// A vertex of a non-indexed UI triangle stream.
///
/// All attributes are stored by value; operations produce new vertices
/// rather than mutating shared ones. The tangent keeps its handedness in
/// `w`, as render vertex formats carry it.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, VertexColor};
///
/// let v = Vertex::from_coords(1.0, 2.0, 0.0).with_color(VertexColor::RED);
/// assert_eq!(v.position.x, 1.0);
/// assert_eq!(v.color, VertexColor::RED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Position in the surface's local space.
    pub position: Point3<f32>,

    /// Surface normal.
    pub normal: Vector3<f32>,

    /// Tangent (xyz direction, w handedness).
    pub tangent: Vector4<f32>,

    /// Primary texture coordinates.
    pub uv0: Vector2<f32>,

    /// Secondary texture coordinates.
    pub uv1: Vector2<f32>,

    /// Per-vertex tint.
    pub color: VertexColor,
}

impl Vertex {
    /// Create a white vertex at `position` facing the viewer (-Z normal).
    #[inline]
    #[must_use]
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            normal: -Vector3::z(),
            tangent: Vector4::new(1.0, 0.0, 0.0, -1.0),
            uv0: Vector2::zeros(),
            uv1: Vector2::zeros(),
            color: VertexColor::WHITE,
        }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.z, 3.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f32, y: f32, z: f32) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Replace the color.
    #[inline]
    #[must_use]
    pub const fn with_color(mut self, color: VertexColor) -> Self {
        self.color = color;
        self
    }

    /// Replace the primary texture coordinates.
    #[inline]
    #[must_use]
    pub fn with_uv0(mut self, u: f32, v: f32) -> Self {
        self.uv0 = Vector2::new(u, v);
        self
    }

    /// Replace the secondary texture coordinates.
    #[inline]
    #[must_use]
    pub fn with_uv1(mut self, u: f32, v: f32) -> Self {
        self.uv1 = Vector2::new(u, v);
        self
    }

    /// Component-wise midpoint of two vertices.
    ///
    /// Position, normal, tangent and both UV channels are averaged in
    /// floating point. The color uses [`VertexColor::average`], which
    /// truncates. The averaged normal is not renormalized.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Vertex, VertexColor};
    ///
    /// let a = Vertex::from_coords(0.0, 0.0, 0.0).with_color(VertexColor::new(1, 0, 0, 255));
    /// let b = Vertex::from_coords(2.0, 4.0, 0.0).with_color(VertexColor::new(2, 0, 0, 255));
    /// let m = Vertex::midpoint(&a, &b);
    /// assert_eq!(m.position.x, 1.0);
    /// assert_eq!(m.position.y, 2.0);
    /// assert_eq!(m.color.r, 1);
    /// ```
    #[must_use]
    pub fn midpoint(a: &Self, b: &Self) -> Self {
        Self {
            position: nalgebra::center(&a.position, &b.position),
            normal: (a.normal + b.normal) / 2.0,
            tangent: (a.tangent + b.tangent) / 2.0,
            uv0: (a.uv0 + b.uv0) / 2.0,
            uv1: (a.uv1 + b.uv1) / 2.0,
            color: a.color.average(b.color),
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new(Point3::origin())
    }
}

impl From<Point3<f32>> for Vertex {
    fn from(position: Point3<f32>) -> Self {
        Self::new(position)
    }
}

impl From<[f32; 3]> for Vertex {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}
