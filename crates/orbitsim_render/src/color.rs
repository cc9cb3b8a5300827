//! 8-bit RGBA pixel type and blending

use bytemuck::{Pod, Zeroable};
use orbitsim_core::Material;

/// One canvas pixel
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Create a new color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert from float components in 0.0-1.0 (clamped)
    pub fn from_f32(c: [f32; 4]) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(q(c[0]), q(c[1]), q(c[2]), q(c[3]))
    }

    /// Alpha as 0.0-1.0
    #[inline]
    pub fn alpha(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Composite `self` over `dst` (source-over)
    pub fn over(self, dst: Self) -> Self {
        let sa = self.alpha();
        if sa >= 1.0 {
            return self;
        }
        if sa <= 0.0 {
            return dst;
        }

        let da = dst.alpha();
        let out_a = sa + da * (1.0 - sa);
        let channel = |s: u8, d: u8| {
            let s = s as f32 / 255.0;
            let d = d as f32 / 255.0;
            let c = (s * sa + d * da * (1.0 - sa)) / out_a;
            (c * 255.0).round() as u8
        };

        Self::new(
            channel(self.r, dst.r),
            channel(self.g, dst.g),
            channel(self.b, dst.b),
            (out_a * 255.0).round() as u8,
        )
    }
}

impl From<Material> for Rgba {
    fn from(m: Material) -> Self {
        Self::from_f32(m.base_color)
    }
}
