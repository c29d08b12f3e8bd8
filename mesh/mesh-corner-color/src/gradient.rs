//! Bilinear corner-color gradient.

use mesh_types::{Point2, Point3, Rect, VertexColor};

use crate::params::CornerColors;

impl CornerColors {
    /// Sample the gradient at rectangle-relative coordinates.
    ///
    /// `uv.x` runs from the left corners (0) to the right corners (1).
    /// `uv.y` runs from the bottom corners (0) to the top corners (1).
    /// Coordinates outside [0, 1] extrapolate; the result saturates at the
    /// 8-bit channel limits.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_corner_color::CornerColors;
    /// use mesh_types::{Point2, VertexColor};
    ///
    /// let corners = CornerColors::new(
    ///     VertexColor::RED,
    ///     VertexColor::GREEN,
    ///     VertexColor::BLUE,
    ///     VertexColor::YELLOW,
    /// );
    /// assert_eq!(corners.sample(Point2::new(0.0, 1.0)), VertexColor::RED);
    /// assert_eq!(corners.sample(Point2::new(1.0, 0.0)), VertexColor::YELLOW);
    /// ```
    #[must_use]
    pub fn sample(&self, uv: Point2<f32>) -> VertexColor {
        let (x, y) = (uv.x, uv.y);
        let tl = self.top_left.to_float();
        let tr = self.top_right.to_float();
        let bl = self.bottom_left.to_float();
        let br = self.bottom_right.to_float();

        let channel = |i: usize| {
            let top = tl[i] * (1.0 - x) + tr[i] * x;
            let bottom = bl[i] * (1.0 - x) + br[i] * x;
            top * y + bottom * (1.0 - y)
        };

        VertexColor::from_float(channel(0), channel(1), channel(2), channel(3))
    }
}

/// Gradient color at `position` within `rect`.
///
/// `rect` must not be degenerate; the orchestrator checks this before any
/// vertex reaches here.
#[inline]
#[must_use]
pub fn corner_gradient(corners: &CornerColors, position: &Point3<f32>, rect: &Rect) -> VertexColor {
    debug_assert!(!rect.is_degenerate(), "gradient sampled in degenerate rect");
    corners.sample(rect.normalize(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Corner;

    fn rgby() -> CornerColors {
        CornerColors::new(
            VertexColor::RED,
            VertexColor::GREEN,
            VertexColor::BLUE,
            VertexColor::YELLOW,
        )
    }

    #[test]
    fn corners_are_exact() {
        let corners = rgby();
        let rect = Rect::new(-10.0, 5.0, 20.0, 8.0);
        let at = |x: f32, y: f32| corner_gradient(&corners, &Point3::new(x, y, 0.0), &rect);

        assert_eq!(at(-10.0, 13.0), corners.get(Corner::TopLeft));
        assert_eq!(at(10.0, 13.0), corners.get(Corner::TopRight));
        assert_eq!(at(-10.0, 5.0), corners.get(Corner::BottomLeft));
        assert_eq!(at(10.0, 5.0), corners.get(Corner::BottomRight));
    }

    #[test]
    fn increasing_y_moves_toward_top() {
        let corners = CornerColors::new(
            VertexColor::WHITE,
            VertexColor::WHITE,
            VertexColor::BLACK,
            VertexColor::BLACK,
        );
        let low = corners.sample(Point2::new(0.5, 0.25));
        let high = corners.sample(Point2::new(0.5, 0.75));
        assert!(high.r > low.r);
        assert_eq!(high.a, 255);
    }

    #[test]
    fn center_blends_all_four() {
        let c = rgby().sample(Point2::new(0.5, 0.5));
        // r: (1 + 0 + 0 + 1) / 4, g: (0 + 1 + 0 + 1) / 4, b: 1 / 4
        assert_eq!(c, VertexColor::new(128, 128, 64, 255));
    }

    #[test]
    fn edge_midpoints() {
        let corners = rgby();
        assert_eq!(
            corners.sample(Point2::new(0.5, 0.0)),
            VertexColor::new(128, 128, 128, 255)
        );
        assert_eq!(
            corners.sample(Point2::new(0.0, 0.5)),
            VertexColor::new(128, 0, 128, 255)
        );
    }

    #[test]
    fn exact_halves_round_to_even() {
        let bottom = |left: u8, right: u8| {
            CornerColors::new(
                VertexColor::BLACK,
                VertexColor::BLACK,
                VertexColor::rgb(left, 0, 0),
                VertexColor::rgb(right, 0, 0),
            )
            .sample(Point2::new(0.5, 0.0))
            .r
        };
        // 0.5, 1.5, 2.5 and 128.5 steps
        assert_eq!(bottom(0, 1), 0);
        assert_eq!(bottom(0, 3), 2);
        assert_eq!(bottom(0, 5), 2);
        assert_eq!(bottom(2, 255), 128);
    }

    #[test]
    fn extrapolation_saturates() {
        let corners = CornerColors::new(
            VertexColor::WHITE,
            VertexColor::WHITE,
            VertexColor::BLACK,
            VertexColor::BLACK,
        );
        assert_eq!(corners.sample(Point2::new(0.5, 3.0)), VertexColor::WHITE);
        assert_eq!(corners.sample(Point2::new(0.5, -2.0)), VertexColor::BLACK);
    }

    #[test]
    fn uniform_is_constant() {
        let gray = VertexColor::new(90, 90, 90, 200);
        let corners = CornerColors::uniform(gray);
        for &(x, y) in &[(0.0, 0.0), (0.3, 0.7), (1.0, 0.5), (0.9, 0.1)] {
            assert_eq!(corners.sample(Point2::new(x, y)), gray);
        }
    }
}
