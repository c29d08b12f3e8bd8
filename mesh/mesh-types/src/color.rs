//! 8-bit RGBA vertex colors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
///
/// Channel arithmetic deliberately stays in integer space: averaging and
/// multiplying both truncate toward zero so results match 32-bit color
/// pipelines bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255).
    pub a: u8,
}

impl VertexColor {
    /// Create a new color from RGBA components.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let red = VertexColor::new(255, 0, 0, 255);
    /// assert_eq!(red.r, 255);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color from floating point values in [0, 1] range.
    ///
    /// Values are clamped to the valid range, then scaled and rounded to the
    /// nearest 8-bit step. Exact halves round to the even step.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let color = VertexColor::from_float(1.0, 0.5, 0.0, 2.0);
    /// assert_eq!(color, VertexColor::new(255, 128, 0, 255));
    /// ```
    #[inline]
    #[must_use]
    pub fn from_float(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
            a: unit_to_byte(a),
        }
    }

    /// Convert to floating point values in [0, 1] range.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let [r, g, b, a] = VertexColor::new(255, 0, 0, 255).to_float();
    /// assert!((r - 1.0).abs() < f32::EPSILON);
    /// assert!(g.abs() < f32::EPSILON);
    /// assert!(b.abs() < f32::EPSILON);
    /// assert!((a - 1.0).abs() < f32::EPSILON);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_float(self) -> [f32; 4] {
        self.channels().map(|c| f32::from(c) / 255.0)
    }

    /// Channels as an array in RGBA order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a color from an RGBA channel array.
    #[inline]
    #[must_use]
    pub const fn from_channels([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }

    /// Average two colors channel by channel.
    ///
    /// Each channel is `(c1 + c2) / 2` with truncation, so the result is
    /// biased downward by at most one step.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let a = VertexColor::new(1, 10, 255, 0);
    /// let b = VertexColor::new(2, 11, 254, 1);
    /// assert_eq!(a.average(b), VertexColor::new(1, 10, 254, 0));
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // (255 + 255) / 2 fits in u8
    pub fn average(self, other: Self) -> Self {
        let avg = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
        Self {
            r: avg(self.r, other.r),
            g: avg(self.g, other.g),
            b: avg(self.b, other.b),
            a: avg(self.a, other.a),
        }
    }

    /// Multiply blend: `c1 * c2 / 255` per channel, truncated.
    ///
    /// White is the identity and black (with zero alpha) annihilates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let tint = VertexColor::new(200, 100, 50, 255);
    /// assert_eq!(tint.multiply(VertexColor::WHITE), tint);
    /// assert_eq!(tint.multiply(VertexColor::TRANSPARENT), VertexColor::TRANSPARENT);
    /// assert_eq!(tint.multiply(VertexColor::new(128, 128, 128, 128)).r, 100);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // 255 * 255 / 255 fits in u8
    pub fn multiply(self, other: Self) -> Self {
        let mul = |x: u8, y: u8| (u16::from(x) * u16::from(y) / 255) as u8;
        Self {
            r: mul(self.r, other.r),
            g: mul(self.g, other.g),
            b: mul(self.b, other.b),
            a: mul(self.a, other.a),
        }
    }

    /// Fully transparent black (0, 0, 0, 0).
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black (0, 0, 0, 255).
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white (255, 255, 255, 255).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
}

impl Default for VertexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for VertexColor {
    fn from(channels: [u8; 4]) -> Self {
        Self::from_channels(channels)
    }
}

impl From<VertexColor> for [u8; 4] {
    fn from(color: VertexColor) -> Self {
        color.channels()
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Truncation and sign loss are safe: values are clamped to [0.0, 1.0] before * 255.0
fn unit_to_byte(value: f32) -> u8 {
    // NaN clamps to NaN and casts to 0
    (value.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8
}
