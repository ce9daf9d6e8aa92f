use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn clamp_max_clamps_both_ends() {
    assert_eq!(clamp_max(-3, 7), 0);
    assert_eq!(clamp_max(4, 7), 4);
    assert_eq!(clamp_max(9, 7), 7);
    assert_eq!(clamp_max(5, -1), 0);
}

#[test]
fn round_to_int_rounds_half_up() {
    assert_eq!(round_to_int(127.5), 128);
    assert_eq!(round_to_int(127.49), 127);
    assert_eq!(round_to_int(-0.5), 0);
    assert_eq!(round_to_int(-0.51), -1);
}

#[test]
fn alpha_scale_256_is_identity() {
    for c in [0u8, 1, 128, 255] {
        assert_eq!(scale_by_alpha256(c, 256), c);
    }
    assert_eq!(scale_by_alpha256(255, 128), 127);
    assert_eq!(scale_by_alpha256(255, 0), 0);
}
