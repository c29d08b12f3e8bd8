//! Corner-color parameters.

use mesh_types::VertexColor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CornerColorError, CornerColorResult};

/// Largest supported number of subdivision passes.
///
/// Each pass multiplies the triangle count by 4, so five passes already
/// turn a two-triangle quad into 2048 triangles.
pub const MAX_SUBDIVISIONS: u32 = 5;

/// One corner of the bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Corner {
    /// Left edge, top edge.
    TopLeft,
    /// Right edge, top edge.
    TopRight,
    /// Left edge, bottom edge.
    BottomLeft,
    /// Right edge, bottom edge.
    BottomRight,
}

impl Corner {
    /// All corners in declaration order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];
}

/// Colors assigned to the four corners of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CornerColors {
    /// Top-left corner color.
    pub top_left: VertexColor,
    /// Top-right corner color.
    pub top_right: VertexColor,
    /// Bottom-left corner color.
    pub bottom_left: VertexColor,
    /// Bottom-right corner color.
    pub bottom_right: VertexColor,
}

impl CornerColors {
    /// Create from four corner colors.
    #[inline]
    #[must_use]
    pub const fn new(
        top_left: VertexColor,
        top_right: VertexColor,
        bottom_left: VertexColor,
        bottom_right: VertexColor,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Same color at every corner.
    #[inline]
    #[must_use]
    pub const fn uniform(color: VertexColor) -> Self {
        Self::new(color, color, color, color)
    }

    /// Color at `corner`.
    #[inline]
    #[must_use]
    pub const fn get(&self, corner: Corner) -> VertexColor {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Mutable access to the color at `corner`.
    #[inline]
    pub const fn get_mut(&mut self, corner: Corner) -> &mut VertexColor {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomLeft => &mut self.bottom_left,
            Corner::BottomRight => &mut self.bottom_right,
        }
    }

    /// Check whether every corner is opaque white, making recoloring a no-op.
    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        Corner::ALL.iter().all(|&c| self.get(c) == VertexColor::WHITE)
    }
}

impl Default for CornerColors {
    fn default() -> Self {
        Self::uniform(VertexColor::WHITE)
    }
}

/// Parameters for a recoloring pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CornerColorParams {
    /// Gradient corner colors.
    pub corners: CornerColors,

    /// Number of midpoint subdivision passes, in `0..=MAX_SUBDIVISIONS`.
    pub subdivisions: u32,
}

impl Default for CornerColorParams {
    fn default() -> Self {
        Self {
            corners: CornerColors::default(),
            subdivisions: 2,
        }
    }
}

impl CornerColorParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four corner colors.
    #[must_use]
    pub const fn with_corners(mut self, corners: CornerColors) -> Self {
        self.corners = corners;
        self
    }

    /// Set one corner color.
    #[must_use]
    pub const fn with_corner(mut self, corner: Corner, color: VertexColor) -> Self {
        *self.corners.get_mut(corner) = color;
        self
    }

    /// Set number of subdivision passes.
    ///
    /// Not validated here; see [`CornerColorParams::validate`].
    #[must_use]
    pub const fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Check that the subdivision count is in range.
    ///
    /// # Errors
    ///
    /// Returns [`CornerColorError::InvalidSubdivisions`] if the count
    /// exceeds [`MAX_SUBDIVISIONS`].
    pub const fn validate(&self) -> CornerColorResult<()> {
        check_subdivisions(self.subdivisions)
    }

    /// Calculate expected triangle count after subdivision.
    ///
    /// Each pass multiplies the triangle count by 4.
    #[must_use]
    pub const fn expected_triangles(&self, current_triangles: usize) -> usize {
        let mut triangles = current_triangles;
        let mut i = 0;
        while i < self.subdivisions {
            triangles *= 4;
            i += 1;
        }
        triangles
    }
}

/// Check a subdivision count against [`MAX_SUBDIVISIONS`].
///
/// # Errors
///
/// Returns [`CornerColorError::InvalidSubdivisions`] when out of range.
pub const fn check_subdivisions(count: u32) -> CornerColorResult<()> {
    if count > MAX_SUBDIVISIONS {
        Err(CornerColorError::InvalidSubdivisions {
            count,
            max: MAX_SUBDIVISIONS,
        })
    } else {
        Ok(())
    }
}
