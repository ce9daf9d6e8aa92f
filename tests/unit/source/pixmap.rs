use super::*;

#[test]
fn new_pixmap_is_transparent() {
    let pm = Pixmap::new(3, 2).unwrap();
    assert_eq!(pm.data().len(), 24);
    assert_eq!(pm.pixel(2, 1), Rgba8Premul::transparent());
}

#[test]
fn zero_sized_pixmaps_are_rejected() {
    assert!(Pixmap::new(0, 4).is_err());
    assert!(Pixmap::new(4, 0).is_err());
}

#[test]
fn wrong_length_is_rejected() {
    let err = Pixmap::from_premul_rgba8(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, ResampleError::Validation(_)));
}

#[test]
fn non_premultiplied_bytes_are_rejected() {
    assert!(Pixmap::from_premul_rgba8(1, 1, vec![200, 0, 0, 100]).is_err());
    assert!(Pixmap::from_premul_rgba8(1, 1, vec![100, 0, 0, 100]).is_ok());
}

#[test]
fn pixel_addressing_is_row_major() {
    let mut pm = Pixmap::new(4, 3).unwrap();
    let c = Rgba8Premul::new(1, 2, 3, 4);
    pm.set_pixel(3, 1, c);
    assert_eq!(pm.pixel(3, 1), c);
    assert_eq!(&pm.data()[(4 + 3) * 4..(4 + 3) * 4 + 4], &[1, 2, 3, 4]);
    assert_eq!(pm.rows_mut().count(), 3);
}

#[test]
fn straight_conversion_premultiplies_and_back() {
    let pm = Pixmap::from_straight_rgba8(1, 1, &[255, 0, 0, 128]).unwrap();
    assert_eq!(pm.pixel(0, 0), Rgba8Premul::new(128, 0, 0, 128));
    assert_eq!(pm.to_straight_rgba8(), vec![255, 0, 0, 128]);
}

#[test]
fn filled_sets_every_pixel() {
    let c = Rgba8Premul::new(9, 8, 7, 200);
    let pm = Pixmap::filled(5, 4, c).unwrap();
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(pm.pixel(x, y), c);
        }
    }
}

#[test]
fn into_data_hands_back_the_premultiplied_bytes() {
    let c = Rgba8Premul::new(10, 20, 30, 40);
    let pm = Pixmap::filled(2, 1, c).unwrap();
    assert_eq!(pm.into_data(), vec![10, 20, 30, 40, 10, 20, 30, 40]);
}
