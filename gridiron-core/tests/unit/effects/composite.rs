use super::*;

#[test]
fn over_opaque_src_alpha_0_is_noop() {
    let dst = Rgb([10, 20, 30]);
    assert_eq!(over_opaque(dst, Rgba([255, 255, 255, 0])), dst);
}

#[test]
fn over_opaque_src_opaque_replaces_dst() {
    assert_eq!(
        over_opaque(Rgb([0, 0, 0]), Rgba([255, 0, 0, 255])),
        Rgb([255, 0, 0])
    );
}

#[test]
fn over_opaque_half_alpha_mixes() {
    let out = over_opaque(Rgb([0, 0, 0]), Rgba([255, 255, 255, 128]));
    assert_eq!(out, Rgb([128, 128, 128]));
}

#[test]
fn over_straight_onto_transparent_returns_src() {
    let src = Rgba([100, 110, 120, 200]);
    assert_eq!(over_straight(Rgba([0, 0, 0, 0]), src), src);
}

#[test]
fn over_straight_keeps_src_color_on_opaque_src() {
    let dst = Rgba([255, 255, 255, 255]);
    let src = Rgba([1, 2, 3, 255]);
    assert_eq!(over_straight(dst, src), src);
}

#[test]
fn over_straight_partial_over_opaque_is_opaque() {
    let out = over_straight(Rgba([255, 255, 255, 255]), Rgba([0, 0, 0, 128]));
    assert_eq!(out[3], 255);
    assert!(out[0] > 120 && out[0] < 135);
}

#[test]
fn paste_clips_negative_and_overflowing_offsets() {
    let mut canvas = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
    let sprite = RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 255]));

    paste(&mut canvas, &sprite, -2, -2);
    assert_eq!(canvas.get_pixel(0, 0), &Rgb([9, 9, 9]));
    assert_eq!(canvas.get_pixel(1, 1), &Rgb([0, 0, 0]));

    paste(&mut canvas, &sprite, 3, 3);
    assert_eq!(canvas.get_pixel(3, 3), &Rgb([9, 9, 9]));

    // Entirely outside: nothing happens, no panic.
    paste(&mut canvas, &sprite, 100, -100);
}

#[test]
fn paste_centered_aligns_sprite_center() {
    let mut canvas = RgbImage::from_pixel(9, 9, Rgb([0, 0, 0]));
    let sprite = RgbaImage::from_pixel(3, 3, Rgba([7, 7, 7, 255]));
    paste_centered(&mut canvas, &sprite, 4, 4);
    assert_eq!(canvas.get_pixel(3, 3), &Rgb([7, 7, 7]));
    assert_eq!(canvas.get_pixel(5, 5), &Rgb([7, 7, 7]));
    assert_eq!(canvas.get_pixel(2, 2), &Rgb([0, 0, 0]));
}
