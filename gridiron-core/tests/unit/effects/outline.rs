use super::*;

const QUALITIES: [OutlineQuality; 3] = [
    OutlineQuality::Crisp,
    OutlineQuality::Sprite,
    OutlineQuality::DieCut,
];

fn dot_image(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    img.put_pixel(size / 2, size / 2, Rgba([10, 20, 30, 255]));
    img
}

fn square_image(size: u32, inset: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for y in inset..size - inset {
        for x in inset..size - inset {
            img.put_pixel(x, y, Rgba([200, 30, 60, 255]));
        }
    }
    // Antialiased edge pixel.
    img.put_pixel(inset, inset, Rgba([200, 30, 60, 90]));
    img
}

#[test]
fn output_dimensions_match_input() {
    let img = square_image(40, 10);
    for q in QUALITIES {
        let out = add_outline(&img, 4, Rgb8::WHITE, q).unwrap();
        assert_eq!(out.dimensions(), img.dimensions());
    }
}

#[test]
fn fully_transparent_input_stays_transparent() {
    let img = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 0]));
    for q in QUALITIES {
        let out = add_outline(&img, 5, Rgb8::WHITE, q).unwrap();
        assert!(out.pixels().all(|p| p[3] == 0), "{q:?}");
    }
}

#[test]
fn outline_strictly_contains_silhouette_and_keeps_original_pixels() {
    let img = square_image(48, 14);
    for q in QUALITIES {
        let out = add_outline(&img, 6, Rgb8::WHITE, q).unwrap();

        let before = img.pixels().filter(|p| p[3] > 0).count();
        let after = out.pixels().filter(|p| p[3] > 0).count();
        assert!(after > before, "{q:?}: {after} <= {before}");

        for (src, dst) in img.pixels().zip(out.pixels()) {
            if src[3] > 0 {
                assert_eq!(src, dst, "{q:?} altered an original pixel");
            }
        }
    }
}

#[test]
fn outline_uses_requested_color() {
    let img = square_image(32, 10);
    let out = add_outline(&img, 3, Rgb8::new(1, 2, 3), OutlineQuality::Crisp).unwrap();
    let px = out.get_pixel(8, 16);
    assert_eq!(px.0, [1, 2, 3, 255]);
}

#[test]
fn crisp_is_euclidean_and_hard_edged() {
    let img = dot_image(21);
    let out = add_outline(&img, 3, Rgb8::WHITE, OutlineQuality::Crisp).unwrap();
    let a = |dx: i32, dy: i32| out.get_pixel((10 + dx) as u32, (10 + dy) as u32)[3];

    assert_eq!(a(3, 0), 255);
    assert_eq!(a(0, -3), 255);
    assert_eq!(a(2, 2), 255); // 8 <= 9
    assert_eq!(a(3, 1), 0); // 10 > 9
    assert_eq!(a(4, 0), 0);

    assert!(out.pixels().all(|p| p[3] == 0 || p[3] == 255));
}

#[test]
fn sprite_grows_a_square() {
    let img = dot_image(21);
    let out = add_outline(&img, 2, Rgb8::WHITE, OutlineQuality::Sprite).unwrap();
    let a = |dx: i32, dy: i32| out.get_pixel((10 + dx) as u32, (10 + dy) as u32)[3];

    assert_eq!(a(2, 2), 255);
    assert_eq!(a(-2, 2), 255);
    assert_eq!(a(3, 0), 0);
    let covered = out.pixels().filter(|p| p[3] > 0).count();
    assert_eq!(covered, 25);
}

#[test]
fn sprite_thickness_one_matches_eight_neighbourhood() {
    let img = dot_image(9);
    let out = add_outline(&img, 1, Rgb8::WHITE, OutlineQuality::Sprite).unwrap();
    assert_eq!(out.pixels().filter(|p| p[3] > 0).count(), 9);
}

#[test]
fn die_cut_has_soft_outer_edge() {
    let img = square_image(64, 20);
    let out = add_outline(&img, 9, Rgb8::WHITE, OutlineQuality::DieCut).unwrap();
    let partial = out
        .pixels()
        .zip(img.pixels())
        .filter(|(o, i)| i[3] == 0 && o[3] > 0 && o[3] < 255)
        .count();
    assert!(partial > 0);
    // Right next to the edge the sticker border is solid.
    assert_eq!(out.get_pixel(19, 32)[3], 255);
}

#[test]
fn zero_thickness_is_passthrough() {
    let img = square_image(20, 5);
    let out = add_outline(&img, 0, Rgb8::WHITE, OutlineQuality::Crisp).unwrap();
    assert_eq!(out, img);
}

#[test]
fn squared_distance_matches_brute_force() {
    let (w, h) = (13u32, 9u32);
    let mut mask = vec![false; (w * h) as usize];
    for &(x, y) in &[(1u32, 1u32), (11, 2), (6, 7)] {
        mask[(y * w + x) as usize] = true;
    }
    let d = squared_distance(&mask, w, h);
    for y in 0..h {
        for x in 0..w {
            let brute = [(1i32, 1i32), (11, 2), (6, 7)]
                .iter()
                .map(|&(px, py)| {
                    let dx = x as i32 - px;
                    let dy = y as i32 - py;
                    (dx * dx + dy * dy) as f64
                })
                .fold(f64::INFINITY, f64::min);
            assert_eq!(d[(y * w + x) as usize], brute, "({x},{y})");
        }
    }
}
