/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Gradient interpolation and compositing both operate on this type.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha RGBA bytes, rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// Component-wise scale of all four channels.
    #[inline]
    pub fn scale(self, k: f32) -> Self {
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    /// Linear interpolation between two premultiplied colors.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<Argb> for Color {
    fn from(c: Argb) -> Self {
        let f = |v: u8| v as f32 / 255.0;
        Color::from_straight(f(c.red()), f(c.green()), f(c.blue()), f(c.alpha()))
    }
}

/// Packed straight-alpha color, `0xAARRGGBB`.
///
/// Shimmer configurations are expressed with these, matching how hosts
/// usually store theme colors.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const TRANSPARENT: Argb = Argb(0);

    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Replaces the alpha byte.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((alpha as u32) << 24 | (self.0 & 0x00FF_FFFF))
    }

    /// Replaces the alpha byte from a `[0, 1]` fraction.
    ///
    /// Out-of-range input is clamped; the fraction is truncated, so `0.3`
    /// maps to `76` (`0x4C`).
    #[inline]
    pub fn with_alpha_f32(self, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        self.with_alpha((alpha * 255.0) as u8)
    }

    /// Keeps this color's alpha and takes the RGB channels of `rgb`.
    #[inline]
    pub const fn with_rgb_of(self, rgb: Argb) -> Self {
        Self((self.0 & 0xFF00_0000) | (rgb.0 & 0x00FF_FFFF))
    }
}

impl From<u32> for Argb {
    fn from(v: u32) -> Self {
        Argb(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_channels() {
        let c = Argb(0x4CFF_8010);
        assert_eq!(c.alpha(), 0x4C);
        assert_eq!(c.red(), 0xFF);
        assert_eq!(c.green(), 0x80);
        assert_eq!(c.blue(), 0x10);
        assert_eq!(Argb::new(0x4C, 0xFF, 0x80, 0x10), c);
    }

    #[test]
    fn alpha_fraction_truncates_and_clamps() {
        assert_eq!(Argb::WHITE.with_alpha_f32(0.3).alpha(), 76);
        assert_eq!(Argb::WHITE.with_alpha_f32(1.0).alpha(), 255);
        assert_eq!(Argb::WHITE.with_alpha_f32(4.0).alpha(), 255);
        assert_eq!(Argb::WHITE.with_alpha_f32(-1.0).alpha(), 0);
        assert_eq!(Argb::WHITE.with_alpha_f32(f32::NAN).alpha(), 0);
    }

    #[test]
    fn with_rgb_of_keeps_alpha() {
        let base = Argb(0x4CFF_FFFF);
        assert_eq!(base.with_rgb_of(Argb(0xFF12_3456)), Argb(0x4C12_3456));
    }

    #[test]
    fn argb_to_premul() {
        let c: Color = Argb(0x80FF_0000).into();
        let a = 128.0 / 255.0;
        assert!((c.a - a).abs() < 1e-6);
        assert!((c.r - a).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn rgba8_round_trip() {
        let c: Color = Argb(0xFF20_4060).into();
        assert_eq!(c.to_rgba8(), [0x20, 0x40, 0x60, 0xFF]);
    }
}
