pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Clamp `value` into `[0, max]`.
#[inline]
pub(crate) fn clamp_max(value: i32, max: i32) -> i32 {
    value.clamp(0, max.max(0))
}

/// Round half up, saturating at the `i32` range.
#[inline]
pub(crate) fn round_to_int(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Scale an 8-bit channel by an alpha scale in `0..=256` (256 is opaque).
#[inline]
pub(crate) fn scale_by_alpha256(c: u8, scale: u16) -> u8 {
    ((u32::from(c) * u32::from(scale.min(256))) >> 8) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
