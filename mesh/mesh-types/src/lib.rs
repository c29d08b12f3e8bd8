//! Core vertex types for corner-color mesh effects.
//!
//! This crate provides the foundational types shared by the recoloring
//! pipeline:
//!
//! - [`Vertex`] - A render vertex with normal, tangent, two UV sets and color
//! - [`VertexColor`] - 8-bit RGBA color with truncating blend arithmetic
//! - [`TriangleStream`] - A non-indexed triangle list
//! - [`Triangle`] - A concrete triangle for winding and area checks
//! - [`Rect`] - Axis-aligned rectangle framing a surface
//!
//! # Layer 0 Crate
//!
//! This crate has no dependency on any UI toolkit or renderer. Hosts convert
//! their own vertex buffers into [`Vertex`] values and back.
//!
//! # Coordinate System
//!
//! Positions are `f32` in the surface's local space. X grows to the right
//! and Y grows upward; Z is carried along but ignored by 2D operations.
//!
//! Triangles are **counter-clockwise (CCW) when viewed from +Z** unless the
//! host says otherwise; operations never change the winding they are given.
//!
//! # Example
//!
//! ```
//! use mesh_types::{TriangleStream, Vertex, VertexColor};
//!
//! let mut stream = TriangleStream::new();
//! stream.push_triangle(
//!     Vertex::from_coords(0.0, 0.0, 0.0),
//!     Vertex::from_coords(1.0, 0.0, 0.0),
//!     Vertex::from_coords(0.0, 1.0, 0.0).with_color(VertexColor::RED),
//! );
//!
//! assert_eq!(stream.triangle_count(), 1);
//! assert!(!stream.is_empty());
//! ```

#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod color;
mod rect;
mod stream;
mod triangle;
mod vertex;

// Re-export core types
pub use color::VertexColor;
pub use rect::Rect;
pub use stream::{StreamError, TriangleStream, as_triangles, check_length};
pub use triangle::{Triangle, Winding};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3, Vector4};
