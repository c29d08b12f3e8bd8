//! Summary of a recoloring pass.

// Triangle counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

/// What a recoloring pass did to a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecolorReport {
    /// Number of triangles handed in.
    pub original_triangles: usize,

    /// Number of triangles handed back.
    pub final_triangles: usize,

    /// Number of subdivision passes applied.
    pub subdivisions: u32,

    /// Whether vertex colors were rewritten.
    ///
    /// False when the pass was skipped, leaving the stream untouched.
    pub recolored: bool,
}

impl RecolorReport {
    /// Report for a stream that was passed through unchanged.
    #[must_use]
    pub const fn skipped(triangles: usize) -> Self {
        Self {
            original_triangles: triangles,
            final_triangles: triangles,
            subdivisions: 0,
            recolored: false,
        }
    }

    /// Get the triangle multiplication factor.
    #[must_use]
    pub fn triangle_ratio(&self) -> f64 {
        if self.original_triangles == 0 {
            1.0
        } else {
            self.final_triangles as f64 / self.original_triangles as f64
        }
    }

    /// Check if the pass was skipped.
    #[must_use]
    pub const fn was_skipped(&self) -> bool {
        !self.recolored
    }
}

impl std::fmt::Display for RecolorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.recolored {
            write!(
                f,
                "Corner color: {} → {} triangles ({:.1}x), {} subdivisions",
                self.original_triangles,
                self.final_triangles,
                self.triangle_ratio(),
                self.subdivisions
            )
        } else {
            write!(
                f,
                "Corner color: skipped, {} triangles unchanged",
                self.original_triangles
            )
        }
    }
}
