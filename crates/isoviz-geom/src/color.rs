//! RGBA color with multiplicative shading support.

use serde::{Deserialize, Serialize};

/// An RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from its four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the r/g/b channels by `factor`, clamping each result to
    /// `[0, 1]`. Alpha is never scaled.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// The channels as a packed `[r, g, b, a]` array.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    /// Opaque red, the fallback used for boxes with no tag data.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_exact_channels() {
        let c = Color::new(0.5, 0.2, 0.8, 1.0);
        let scaled = c.scaled(1.15);
        assert!((scaled.r - 0.575).abs() < 1e-6);
        assert!((scaled.g - 0.23).abs() < 1e-6);
        assert!((scaled.b - 0.92).abs() < 1e-6);
        assert_eq!(scaled.a, 1.0);
    }

    #[test]
    fn test_scaled_clamps_to_one() {
        let c = Color::new(0.8, 1.0, 0.0, 0.5);
        let scaled = c.scaled(2.0);
        assert_eq!(scaled.r, 1.0);
        assert_eq!(scaled.g, 1.0);
        assert_eq!(scaled.b, 0.0);
        assert_eq!(scaled.a, 0.5);
    }

    #[test]
    fn test_scaled_zero_factor_is_black() {
        let c = Color::new(0.3, 0.6, 0.9, 0.7);
        let scaled = c.scaled(0.0);
        assert_eq!(scaled, Color::new(0.0, 0.0, 0.0, 0.7));
    }

    #[test]
    fn test_scaled_inverse_round_trip() {
        let c = Color::new(0.5, 0.2, 0.8, 1.0);
        let back = c.scaled(1.15).scaled(1.0 / 1.15);
        assert!((back.r - c.r).abs() < 1e-6);
        assert!((back.g - c.g).abs() < 1e-6);
        assert!((back.b - c.b).abs() < 1e-6);
        assert_eq!(back.a, c.a);
    }
}
