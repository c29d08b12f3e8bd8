//! Host-facing corner-color effect.

use mesh_types::{Rect, Vertex, VertexColor, check_length};
use tracing::trace;

use crate::error::CornerColorResult;
use crate::params::{Corner, CornerColorParams, CornerColors, check_subdivisions};
use crate::recolor::Recolorer;
use crate::result::RecolorReport;

/// Why previously produced output went stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// A corner color changed.
    Corner(Corner),
    /// The subdivision count changed.
    Subdivisions,
    /// The effect was enabled or disabled.
    Enabled,
}

/// Receiver for staleness notifications.
///
/// The effect never recomputes on its own. It reports changes here and the
/// host decides when to call [`CornerColorEffect::modify_mesh`] again.
pub trait InvalidationSink {
    /// Previously produced output is stale.
    fn invalidate(&self, reason: Invalidation);
}

impl<F> InvalidationSink for F
where
    F: Fn(Invalidation),
{
    fn invalidate(&self, reason: Invalidation) {
        self(reason);
    }
}

/// Sink that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreInvalidation;

impl InvalidationSink for IgnoreInvalidation {
    fn invalidate(&self, _reason: Invalidation) {}
}

/// Four-corner gradient effect attached to one host surface.
///
/// Holds the configuration, notifies the host through `S` whenever it
/// changes, and recolors the host's triangle stream on request.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
///
/// use mesh_corner_color::{Corner, CornerColorEffect, Invalidation};
/// use mesh_types::{Rect, Vertex, VertexColor};
///
/// let dirty = Cell::new(false);
/// let mut effect = CornerColorEffect::with_sink(|_: Invalidation| dirty.set(true));
///
/// effect.set_corner(Corner::TopLeft, VertexColor::RED);
/// assert!(dirty.get());
///
/// let mut vertices = vec![
///     Vertex::from_coords(0.0, 1.0, 0.0),
///     Vertex::from_coords(1.0, 1.0, 0.0),
///     Vertex::from_coords(0.0, 0.0, 0.0),
/// ];
/// let report = effect.modify_mesh(&mut vertices, &Rect::unit())?;
/// assert_eq!(report.final_triangles, 16); // default: 2 subdivisions
/// assert_eq!(vertices[0].color, VertexColor::RED);
/// # Ok::<(), mesh_corner_color::CornerColorError>(())
/// ```
#[derive(Debug)]
pub struct CornerColorEffect<S = IgnoreInvalidation> {
    params: CornerColorParams,
    enabled: bool,
    sink: S,
    recolorer: Recolorer,
}

impl Default for CornerColorEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl CornerColorEffect {
    /// Create an enabled effect with default parameters and no host sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(IgnoreInvalidation)
    }
}

impl<S: InvalidationSink> CornerColorEffect<S> {
    /// Create an enabled effect with default parameters reporting to `sink`.
    #[must_use]
    pub fn with_sink(sink: S) -> Self {
        Self {
            params: CornerColorParams::default(),
            enabled: true,
            sink,
            recolorer: Recolorer::new(),
        }
    }

    /// Current parameters.
    #[must_use]
    pub const fn params(&self) -> &CornerColorParams {
        &self.params
    }

    /// Color at `corner`.
    #[must_use]
    pub const fn corner(&self, corner: Corner) -> VertexColor {
        self.params.corners.get(corner)
    }

    /// Current subdivision count.
    #[must_use]
    pub const fn subdivisions(&self) -> u32 {
        self.params.subdivisions
    }

    /// Whether [`modify_mesh`](Self::modify_mesh) does anything.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set one corner color and invalidate.
    pub fn set_corner(&mut self, corner: Corner, color: VertexColor) {
        *self.params.corners.get_mut(corner) = color;
        self.notify(Invalidation::Corner(corner));
    }

    /// Set all four corner colors, invalidating once per corner.
    pub fn set_corners(&mut self, corners: CornerColors) {
        for corner in Corner::ALL {
            self.set_corner(corner, corners.get(corner));
        }
    }

    /// Set the subdivision count and invalidate.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSubdivisions`](crate::CornerColorError::InvalidSubdivisions)
    /// without changing anything if `count` exceeds
    /// [`MAX_SUBDIVISIONS`](crate::MAX_SUBDIVISIONS).
    pub fn set_subdivisions(&mut self, count: u32) -> CornerColorResult<()> {
        check_subdivisions(count)?;
        self.params.subdivisions = count;
        self.notify(Invalidation::Subdivisions);
        Ok(())
    }

    /// Replace all parameters, invalidating for every field.
    ///
    /// # Errors
    ///
    /// Returns an error without changing anything if `params` is invalid.
    pub fn set_params(&mut self, params: CornerColorParams) -> CornerColorResult<()> {
        params.validate()?;
        self.set_subdivisions(params.subdivisions)?;
        self.set_corners(params.corners);
        Ok(())
    }

    /// Enable or disable the effect and invalidate.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.notify(Invalidation::Enabled);
    }

    /// Recolor the host's triangle list in place.
    ///
    /// A disabled effect, like a degenerate `rect`, leaves a well-formed
    /// list untouched and reports the pass as skipped.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving `vertices` untouched, if the vertex count
    /// is not a multiple of 3.
    pub fn modify_mesh(
        &mut self,
        vertices: &mut Vec<Vertex>,
        rect: &Rect,
    ) -> CornerColorResult<RecolorReport> {
        check_length(vertices.len())?;
        if !self.enabled {
            return Ok(RecolorReport::skipped(vertices.len() / 3));
        }
        self.recolorer.apply(vertices, rect, &self.params)
    }

    fn notify(&self, reason: Invalidation) {
        trace!("Corner color invalidated: {:?}", reason);
        self.sink.invalidate(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CornerColorError;
    use std::cell::RefCell;

    fn triangle() -> Vec<Vertex> {
        vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_setters_notify() {
        let events = RefCell::new(Vec::new());
        let mut effect =
            CornerColorEffect::with_sink(|r: Invalidation| events.borrow_mut().push(r));

        effect.set_corner(Corner::BottomRight, VertexColor::BLUE);
        effect.set_subdivisions(4).expect("in range");
        effect.set_enabled(false);

        assert_eq!(
            *events.borrow(),
            vec![
                Invalidation::Corner(Corner::BottomRight),
                Invalidation::Subdivisions,
                Invalidation::Enabled,
            ]
        );
        assert_eq!(effect.corner(Corner::BottomRight), VertexColor::BLUE);
        assert_eq!(effect.subdivisions(), 4);
        assert!(!effect.is_enabled());
    }

    #[test]
    fn test_set_corners_notifies_each() {
        let count = RefCell::new(0);
        let mut effect = CornerColorEffect::with_sink(|_: Invalidation| *count.borrow_mut() += 1);
        effect.set_corners(CornerColors::uniform(VertexColor::GREEN));
        assert_eq!(*count.borrow(), 4);
        assert_eq!(effect.params().corners, CornerColors::uniform(VertexColor::GREEN));
    }

    #[test]
    fn test_invalid_subdivisions_rejected() {
        let count = RefCell::new(0);
        let mut effect = CornerColorEffect::with_sink(|_: Invalidation| *count.borrow_mut() += 1);
        let result = effect.set_subdivisions(6);
        assert!(matches!(
            result,
            Err(CornerColorError::InvalidSubdivisions { count: 6, .. })
        ));
        assert_eq!(effect.subdivisions(), 2);
        assert_eq!(*count.borrow(), 0);

        let result = effect.set_params(CornerColorParams::new().with_subdivisions(10));
        assert!(result.is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_disabled_passes_through() {
        let mut effect = CornerColorEffect::new();
        effect.set_corners(CornerColors::uniform(VertexColor::TRANSPARENT));
        effect.set_enabled(false);

        let mut vertices = triangle();
        let report = effect.modify_mesh(&mut vertices, &Rect::unit()).expect("valid");
        assert!(report.was_skipped());
        assert_eq!(vertices, triangle());
    }

    #[test]
    fn test_disabled_rejects_malformed_stream() {
        let mut effect = CornerColorEffect::new();
        effect.set_enabled(false);

        let mut vertices = vec![Vertex::default(); 5];
        let result = effect.modify_mesh(&mut vertices, &Rect::unit());
        assert!(matches!(
            result,
            Err(CornerColorError::MalformedStream { len: 5 })
        ));
        assert_eq!(vertices.len(), 5);
    }

    #[test]
    fn test_modify_mesh_repeatable() {
        let mut effect = CornerColorEffect::new();
        effect.set_corners(CornerColors::uniform(VertexColor::new(255, 0, 0, 255)));
        effect.set_subdivisions(1).expect("in range");

        let mut first = triangle();
        let mut second = triangle();
        effect.modify_mesh(&mut first, &Rect::unit()).expect("valid");
        effect.modify_mesh(&mut second, &Rect::unit()).expect("valid");
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
    }
}
