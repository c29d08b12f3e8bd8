//! Four-corner color gradients for UI triangle streams.
//!
//! This crate recolors a rectangular surface so each corner carries its own
//! color, blended bilinearly across the interior, while keeping whatever
//! tint the surface's vertices already had:
//!
//! - **Midpoint subdivision**: Splits each triangle into 4 so per-vertex
//!   interpolation approximates a smooth gradient
//! - **Corner gradient**: Bilinear blend of four corner colors at a vertex
//! - **Multiply blend**: Combines the gradient with the original vertex color
//!
//! The host supplies a non-indexed triangle list plus the surface rectangle
//! and gets the modified list back. Configuration changes are reported
//! through an [`InvalidationSink`]; recomputation is always host-driven.
//!
//! # Examples
//!
//! One-shot recoloring:
//!
//! ```
//! use mesh_corner_color::{CornerColorParams, CornerColors, recolor};
//! use mesh_types::{Rect, TriangleStream, Vertex, VertexColor};
//!
//! let mut stream = TriangleStream::new();
//! stream.push_triangle(
//!     Vertex::from_coords(0.0, 0.0, 0.0),
//!     Vertex::from_coords(100.0, 0.0, 0.0),
//!     Vertex::from_coords(0.0, 50.0, 0.0),
//! );
//!
//! let params = CornerColorParams::new()
//!     .with_corners(CornerColors::new(
//!         VertexColor::RED,
//!         VertexColor::GREEN,
//!         VertexColor::BLUE,
//!         VertexColor::YELLOW,
//!     ))
//!     .with_subdivisions(1);
//!
//! let out = recolor(&stream, &Rect::new(0.0, 0.0, 100.0, 50.0), &params)?;
//!
//! // 1 * 4^1 = 4 triangles
//! assert_eq!(out.triangle_count(), 4);
//! // Bottom-left vertex takes the bottom-left color
//! assert_eq!(out.vertices()[0].color, VertexColor::BLUE);
//! # Ok::<(), mesh_corner_color::CornerColorError>(())
//! ```
//!
//! Reusing buffers across frames:
//!
//! ```
//! use mesh_corner_color::{CornerColorParams, Recolorer};
//! use mesh_types::{Rect, Vertex};
//!
//! let mut recolorer = Recolorer::new();
//! let params = CornerColorParams::new().with_subdivisions(3);
//!
//! for _frame in 0..2 {
//!     let mut vertices = vec![Vertex::default(); 6];
//!     let report = recolorer.apply(&mut vertices, &Rect::unit(), &params)?;
//!     assert_eq!(report.final_triangles, 128); // 2 * 4^3
//! }
//! # Ok::<(), mesh_corner_color::CornerColorError>(())
//! ```

mod effect;
mod error;
mod gradient;
mod params;
mod recolor;
mod result;
mod subdivide;

pub use effect::{CornerColorEffect, IgnoreInvalidation, Invalidation, InvalidationSink};
pub use error::{CornerColorError, CornerColorResult};
pub use gradient::corner_gradient;
pub use params::{
    Corner, CornerColorParams, CornerColors, MAX_SUBDIVISIONS, check_subdivisions,
};
pub use recolor::{Recolorer, recolor, recolor_vertices};
pub use result::RecolorReport;
pub use subdivide::{subdivide_into, subdivide_passes, subdivide_stream};
