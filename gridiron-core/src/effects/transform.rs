use image::{RgbaImage, imageops::FilterType};

/// Downscale so the width is at most `max_width`, preserving aspect ratio (truncating).
///
/// Images already narrow enough are returned unchanged.
pub fn fit_width(img: RgbaImage, max_width: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w <= max_width || w == 0 {
        return img;
    }
    let ratio = f64::from(max_width) / f64::from(w);
    let nw = ((f64::from(w) * ratio) as u32).max(1);
    let nh = ((f64::from(h) * ratio) as u32).max(1);
    image::imageops::resize(&img, nw, nh, FilterType::Lanczos3)
}

/// Thumbnail semantics: bound both sides by `max_size`, preserve aspect, never upscale.
pub fn thumbnail(img: RgbaImage, max_size: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let max_size = max_size.max(1);
    if (w <= max_size && h <= max_size) || w == 0 || h == 0 {
        return img;
    }
    let ratio = (f64::from(max_size) / f64::from(w)).min(f64::from(max_size) / f64::from(h));
    let nw = ((f64::from(w) * ratio).round() as u32).clamp(1, max_size);
    let nh = ((f64::from(h) * ratio).round() as u32).clamp(1, max_size);
    image::imageops::resize(&img, nw, nh, FilterType::Lanczos3)
}

/// Rotate counter-clockwise by `degrees`, growing the canvas so nothing is clipped.
///
/// Uncovered pixels are transparent. Sampling is bilinear on premultiplied values so
/// transparent neighbours do not darken the silhouette edge.
pub fn rotate_expand(img: &RgbaImage, degrees: f64) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 || degrees.rem_euclid(360.0) == 0.0 {
        return img.clone();
    }

    let theta = degrees.to_radians();
    let (s, c) = theta.sin_cos();
    let (wf, hf) = (f64::from(w), f64::from(h));
    let out_w = ((wf * c.abs() + hf * s.abs()) - 1e-9).ceil().max(1.0) as u32;
    let out_h = ((wf * s.abs() + hf * c.abs()) - 1e-9).ceil().max(1.0) as u32;

    let src = premultiplied(img);
    let (scx, scy) = (wf / 2.0, hf / 2.0);
    let (ocx, ocy) = (f64::from(out_w) / 2.0, f64::from(out_h) / 2.0);

    let mut out = RgbaImage::new(out_w, out_h);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let ox = f64::from(x) + 0.5 - ocx;
        let oy = f64::from(y) + 0.5 - ocy;
        let sx = c * ox - s * oy + scx - 0.5;
        let sy = s * ox + c * oy + scy - 0.5;
        *px = unpremultiply(sample_bilinear(&src, w, h, sx, sy));
    }
    out
}

/// Cut a `width`×`height` window out of the middle of `img`.
pub fn center_crop(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let width = width.min(img.width());
    let height = height.min(img.height());
    let left = (img.width() - width) / 2;
    let top = (img.height() - height) / 2;
    image::imageops::crop_imm(img, left, top, width, height).to_image()
}

fn premultiplied(img: &RgbaImage) -> Vec<[f32; 4]> {
    img.pixels()
        .map(|p| {
            let a = f32::from(p[3]) / 255.0;
            [
                f32::from(p[0]) * a,
                f32::from(p[1]) * a,
                f32::from(p[2]) * a,
                f32::from(p[3]),
            ]
        })
        .collect()
}

fn sample_bilinear(src: &[[f32; 4]], w: u32, h: u32, x: f64, y: f64) -> [f32; 4] {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = (x - x0) as f32;
    let fy = (y - y0) as f32;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let fetch = |xi: i64, yi: i64| -> [f32; 4] {
        if xi < 0 || yi < 0 || xi >= i64::from(w) || yi >= i64::from(h) {
            return [0.0; 4];
        }
        src[(yi as usize) * (w as usize) + xi as usize]
    };

    let p00 = fetch(x0, y0);
    let p10 = fetch(x0 + 1, y0);
    let p01 = fetch(x0, y0 + 1);
    let p11 = fetch(x0 + 1, y0 + 1);

    let mut out = [0.0f32; 4];
    for i in 0..4 {
        let top = p00[i] * (1.0 - fx) + p10[i] * fx;
        let bottom = p01[i] * (1.0 - fx) + p11[i] * fx;
        out[i] = top * (1.0 - fy) + bottom * fy;
    }
    out
}

fn unpremultiply(p: [f32; 4]) -> image::Rgba<u8> {
    let a = p[3].clamp(0.0, 255.0);
    if a < 0.5 {
        return image::Rgba([0, 0, 0, 0]);
    }
    let k = 255.0 / a;
    let ch = |v: f32| (v * k).round().clamp(0.0, 255.0) as u8;
    image::Rgba([ch(p[0]), ch(p[1]), ch(p[2]), a.round() as u8])
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transform.rs"]
mod tests;
