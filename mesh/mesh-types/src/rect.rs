//! Axis-aligned 2D rectangle.

use nalgebra::{Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in a surface's local XY plane.
///
/// Stored as a minimum corner plus extents. Unlike [`Rect::from_min_max`],
/// [`Rect::new`] keeps the extents as given, so a rectangle with zero or
/// negative width or height can be represented; such a rectangle is
/// [degenerate](Rect::is_degenerate).
///
/// # Example
///
/// ```
/// use mesh_types::Rect;
///
/// let rect = Rect::new(-50.0, -25.0, 100.0, 50.0);
/// assert_eq!(rect.x_max(), 50.0);
/// assert_eq!(rect.y_max(), 25.0);
/// assert!(!rect.is_degenerate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x_min: f32,
    /// Bottom edge.
    pub y_min: f32,
    /// Extent along X.
    pub width: f32,
    /// Extent along Y.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its minimum corner and extents.
    #[inline]
    #[must_use]
    pub const fn new(x_min: f32, y_min: f32, width: f32, height: f32) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    /// Create a rectangle from two opposite corners.
    ///
    /// The corners are automatically corrected if min > max for any axis.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Rect;
    ///
    /// let rect = Rect::from_min_max([1.0, 1.0], [0.0, 0.0]);
    /// assert_eq!(rect, Rect::new(0.0, 0.0, 1.0, 1.0));
    /// ```
    #[must_use]
    pub fn from_min_max(min: [f32; 2], max: [f32; 2]) -> Self {
        let x_min = min[0].min(max[0]);
        let y_min = min[1].min(max[1]);
        Self::new(
            x_min,
            y_min,
            min[0].max(max[0]) - x_min,
            min[1].max(max[1]) - y_min,
        )
    }

    /// Unit rectangle spanning (0, 0) to (1, 1).
    #[inline]
    #[must_use]
    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn x_max(&self) -> f32 {
        self.x_min + self.width
    }

    /// Top edge.
    #[inline]
    #[must_use]
    pub fn y_max(&self) -> f32 {
        self.y_min + self.height
    }

    /// Check whether the rectangle has no usable area.
    ///
    /// True when width or height is zero, negative, or NaN.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        // Negated comparisons so NaN extents count as degenerate
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Map a position into rectangle-relative coordinates.
    ///
    /// `(x_min, y_min)` maps to `(0, 0)` and `(x_max, y_max)` to `(1, 1)`.
    /// Positions outside the rectangle are not clamped. Z is ignored.
    ///
    /// The result is meaningless for a degenerate rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Point3, Rect};
    ///
    /// let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    /// let uv = rect.normalize(&Point3::new(60.0, 30.0, 5.0));
    /// assert!((uv.x - 0.5).abs() < 1e-6);
    /// assert!((uv.y - 0.2).abs() < 1e-6);
    /// ```
    #[inline]
    #[must_use]
    pub fn normalize(&self, position: &Point3<f32>) -> Point2<f32> {
        Point2::new(
            (position.x - self.x_min) / self.width,
            (position.y - self.y_min) / self.height,
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degenerate_extents() {
        assert!(Rect::new(0.0, 0.0, 0.0, 1.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, 1.0, 0.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, -1.0, 1.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, 1.0, -3.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, f32::NAN, 1.0).is_degenerate());
        assert!(!Rect::unit().is_degenerate());
    }

    #[test]
    fn from_min_max_corrects_order() {
        let rect = Rect::from_min_max([4.0, -1.0], [-2.0, 3.0]);
        assert_relative_eq!(rect.x_min, -2.0);
        assert_relative_eq!(rect.y_min, -1.0);
        assert_relative_eq!(rect.width, 6.0);
        assert_relative_eq!(rect.height, 4.0);
    }

    #[test]
    fn normalize_corners() {
        let rect = Rect::new(-50.0, -25.0, 100.0, 50.0);
        let lo = rect.normalize(&Point3::new(-50.0, -25.0, 0.0));
        let hi = rect.normalize(&Point3::new(50.0, 25.0, 0.0));
        assert_relative_eq!(lo.x, 0.0);
        assert_relative_eq!(lo.y, 0.0);
        assert_relative_eq!(hi.x, 1.0);
        assert_relative_eq!(hi.y, 1.0);
    }

    #[test]
    fn normalize_extrapolates() {
        let rect = Rect::unit();
        let p = rect.normalize(&Point3::new(2.0, -1.0, 0.0));
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, -1.0);
        let q = rect.normalize(&Point3::new(1.0, 0.0, 7.0));
        assert_relative_eq!(q.x, 1.0);
        assert_relative_eq!(q.y, 0.0);
    }
}
