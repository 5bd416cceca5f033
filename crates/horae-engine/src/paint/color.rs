/// Straight-alpha RGBA color.
///
/// Invariant:
/// - all channels live in `[0, 1]`; `rgb` is NOT premultiplied by `a`.
///
/// The CPU rasterizer composites with coverage-weighted source-over, which
/// wants straight alpha so edge coverage and color opacity can be combined
/// into a single blend factor per pixel.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    ///
    /// This is the preferred constructor for colors coming from hex literals.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a color from sRGB `f32` components in `[0, 1]`.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Returns the same color with its alpha scaled by `opacity`.
    ///
    /// Mirrors the usual element-opacity semantics: the color keeps its hue
    /// and becomes more see-through.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { a: (self.a * opacity).clamp(0.0, 1.0), ..self }
    }

    /// Returns the color as packed RGBA bytes.
    #[inline]
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}
