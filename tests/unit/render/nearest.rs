use super::*;
use crate::foundation::core::{Affine, Vec2};
use crate::source::pixmap::Pixmap;

fn ramp(width: u32) -> Pixmap {
    let mut pm = Pixmap::new(width, 1).unwrap();
    for x in 0..width {
        let v = (x * 50) as u8;
        pm.set_pixel(x, 0, Rgba8Premul::new(v, v, v, 255));
    }
    pm
}

#[test]
fn tile_modes_wrap_as_expected() {
    let clamp: Vec<i64> = (-3..7).map(|v| tile(v, 4, TileMode::Clamp)).collect();
    assert_eq!(clamp, vec![0, 0, 0, 0, 1, 2, 3, 3, 3, 3]);
    let repeat: Vec<i64> = (-3..7).map(|v| tile(v, 4, TileMode::Repeat)).collect();
    assert_eq!(repeat, vec![1, 2, 3, 0, 1, 2, 3, 0, 1, 2]);
    let mirror: Vec<i64> = (-3..7).map(|v| tile(v, 4, TileMode::Mirror)).collect();
    assert_eq!(mirror, vec![2, 1, 0, 0, 1, 2, 3, 3, 2, 1]);
}

#[test]
fn identity_copies_source() {
    let src = ramp(4);
    let filter = NearestFilter::new(&RenderState::new(Affine::IDENTITY));
    let mut out = [Rgba8Premul::transparent(); 4];
    filter.filter_span(&src, 0, 0, &mut out);
    for (x, px) in out.iter().enumerate() {
        assert_eq!(*px, src.pixel(x as u32, 0));
    }
}

#[test]
fn repeat_tiling_wraps_past_the_right_edge() {
    let src = ramp(3);
    let state = RenderState::new(Affine::translate(Vec2::new(2.0, 0.0)))
        .with_tile_modes(TileMode::Repeat, TileMode::Clamp);
    let filter = NearestFilter::new(&state);
    let mut out = [Rgba8Premul::transparent(); 3];
    filter.filter_span(&src, 0, 0, &mut out);
    assert_eq!(out, [src.pixel(2, 0), src.pixel(0, 0), src.pixel(1, 0)]);
}

#[test]
fn partial_alpha_scale_is_applied() {
    let src = Pixmap::filled(1, 1, Rgba8Premul::new(255, 128, 0, 255)).unwrap();
    let state = RenderState::new(Affine::IDENTITY).with_alpha_scale(128);
    let filter = NearestFilter::new(&state);
    let mut out = [Rgba8Premul::transparent(); 1];
    filter.filter_span(&src, 0, 0, &mut out);
    assert_eq!(out[0], Rgba8Premul::new(127, 64, 0, 127));
    assert!(out[0].is_valid());
}

struct Unreadable;

impl PixelSource for Unreadable {
    fn width(&self) -> u32 {
        0
    }

    fn height(&self) -> u32 {
        2
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        panic!("read ({x}, {y}) from an empty source");
    }
}

#[test]
fn empty_source_yields_transparent_without_reading() {
    for mode in [TileMode::Clamp, TileMode::Repeat, TileMode::Mirror] {
        let state = RenderState::new(Affine::IDENTITY).with_tile_modes(mode, mode);
        let filter = NearestFilter::new(&state);
        let mut out = [Rgba8Premul::new(1, 1, 1, 1); 3];
        filter.filter_span(&Unreadable, 0, 0, &mut out);
        assert!(out.iter().all(|px| *px == Rgba8Premul::transparent()));
    }
}
