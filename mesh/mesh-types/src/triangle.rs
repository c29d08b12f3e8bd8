//! Triangle type for winding and area checks.

use nalgebra::{Point3, Vector3};

use crate::Vertex;

/// Orientation of a triangle projected onto the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise when viewed from +Z.
    CounterClockwise,
    /// Clockwise when viewed from +Z.
    Clockwise,
    /// Zero projected area.
    Degenerate,
}

/// A triangle with concrete vertex positions.
///
/// This is a utility type for geometric checks on a triangle stream. It
/// stores positions rather than full vertices.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3, Winding};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-6);
/// assert_eq!(tri.winding(), Winding::CounterClockwise);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f32>,
    /// Second vertex.
    pub v1: Point3<f32>,
    /// Third vertex.
    pub v2: Point3<f32>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from the positions of three stream vertices.
    #[inline]
    #[must_use]
    pub const fn from_vertices(vertices: &[Vertex; 3]) -> Self {
        Self::new(
            vertices[0].position,
            vertices[1].position,
            vertices[2].position,
        )
    }

    /// Compute the face normal without normalizing.
    ///
    /// The magnitude equals twice the triangle area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f32> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the area of the triangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f32 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Signed area of the XY projection.
    ///
    /// Positive for counter-clockwise, negative for clockwise.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(0.0, 2.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// );
    /// assert!((tri.signed_area_xy() + 2.0).abs() < 1e-6);
    /// ```
    #[inline]
    #[must_use]
    pub fn signed_area_xy(&self) -> f32 {
        self.normal_unnormalized().z * 0.5
    }

    /// Classify the winding of the XY projection.
    #[must_use]
    pub fn winding(&self) -> Winding {
        let area = self.signed_area_xy();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }
}
