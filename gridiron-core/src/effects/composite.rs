use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::foundation::math::mul_div255_u8;

/// Blend a straight-alpha source pixel over an opaque destination pixel.
pub fn over_opaque(dst: Rgb<u8>, src: Rgba<u8>) -> Rgb<u8> {
    let sa = u16::from(src[3]);
    match sa {
        0 => dst,
        255 => Rgb([src[0], src[1], src[2]]),
        _ => {
            let inv = 255 - sa;
            let mut out = [0u8; 3];
            for (i, o) in out.iter_mut().enumerate() {
                let sc = mul_div255_u8(u16::from(src[i]), sa);
                let dc = mul_div255_u8(u16::from(dst[i]), inv);
                *o = sc.saturating_add(dc);
            }
            Rgb(out)
        }
    }
}

/// Porter-Duff "over" for two straight-alpha pixels.
pub fn over_straight(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let da = u32::from(dst[3]);
    // Alphas scaled to 0..=65025 to keep the divisions exact enough.
    let da_eff = da * (255 - sa);
    let out_a = sa * 255 + da_eff;
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * da_eff;
        out[i] = ((num + out_a / 2) / out_a).min(255) as u8;
    }
    out[3] = ((out_a + 127) / 255).min(255) as u8;
    Rgba(out)
}

/// Alpha-composite `sprite` onto `canvas` with its top-left corner at `(x, y)`.
///
/// Parts of the sprite outside the canvas are clipped; negative offsets are allowed.
pub fn paste(canvas: &mut RgbImage, sprite: &RgbaImage, x: i64, y: i64) {
    let (cw, ch) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let (sw, sh) = (i64::from(sprite.width()), i64::from(sprite.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + sw).min(cw);
    let y1 = (y + sh).min(ch);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for cy in y0..y1 {
        for cx in x0..x1 {
            let src = *sprite.get_pixel((cx - x) as u32, (cy - y) as u32);
            if src[3] == 0 {
                continue;
            }
            let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
            *dst = over_opaque(*dst, src);
        }
    }
}

/// Paste `sprite` so its center lands on `(cx, cy)`.
pub fn paste_centered(canvas: &mut RgbImage, sprite: &RgbaImage, cx: i64, cy: i64) {
    let x = cx - i64::from(sprite.width()) / 2;
    let y = cy - i64::from(sprite.height()) / 2;
    paste(canvas, sprite, x, y);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
