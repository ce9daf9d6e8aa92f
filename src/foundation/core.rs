use crate::foundation::math::mul_div255_u8;

pub use kurbo::{Affine, Point, Vec2};

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        let a16 = u16::from(a);
        Self {
            r: mul_div255_u8(u16::from(r), a16),
            g: mul_div255_u8(u16::from(g), a16),
            b: mul_div255_u8(u16::from(b), a16),
            a,
        }
    }

    /// Undo premultiplication. Fully transparent pixels map to transparent black.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let a = u32::from(self.a);
        let unpremul = |c: u8| (((u32::from(c) * 255) + (a / 2)) / a).min(255) as u8;
        [unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a]
    }

    /// `true` when every colour channel is `<= a`.
    pub fn is_valid(self) -> bool {
        self.r <= self.a && self.g <= self.a && self.b <= self.a
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub(crate) fn from_slice(px: &[u8]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
