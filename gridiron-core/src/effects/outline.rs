use image::{Rgba, RgbaImage};

use crate::{
    effects::{blur::blur_plane8, composite::over_straight},
    foundation::{core::Rgb8, error::WallpaperResult},
};

/// Alpha level (out of 255) above which the blurred die-cut mask counts as covered.
pub const DIE_CUT_THRESHOLD: u8 = 10;

const EDT_INF: f64 = 1e20;
const DIE_CUT_AA_SIGMA: f32 = 0.75;

/// How the opaque silhouette is grown into an outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutlineQuality {
    /// Exact Euclidean dilation; hard edge, no halo. Suited to hero logos and small icons.
    #[default]
    Crisp,
    /// 8-connected single-pixel expansion per unit of thickness (square structuring element).
    Sprite,
    /// Gaussian-blurred mask (sigma = thickness / 3) thresholded at [`DIE_CUT_THRESHOLD`],
    /// with a ~1px antialiased outer edge. Reads as a vinyl sticker border.
    DieCut,
}

/// Draw a solid outline of `color` around the non-transparent silhouette of `img`.
///
/// The output has the input's dimensions. The outline only covers pixels that are fully
/// transparent in the input, so every input pixel with alpha > 0 is returned unchanged.
pub fn add_outline(
    img: &RgbaImage,
    thickness: u32,
    color: Rgb8,
    quality: OutlineQuality,
) -> WallpaperResult<RgbaImage> {
    let (w, h) = img.dimensions();
    let mask: Vec<bool> = img.pixels().map(|p| p[3] > 0).collect();
    if thickness == 0 || !mask.iter().any(|&m| m) {
        return Ok(img.clone());
    }

    let coverage = outline_coverage(&mask, w, h, thickness, quality)?;

    let mut out = RgbaImage::new(w, h);
    for (i, (dst, src)) in out.pixels_mut().zip(img.pixels()).enumerate() {
        let a = if mask[i] { 0 } else { coverage[i] };
        let stroke = Rgba([color.r, color.g, color.b, a]);
        *dst = if a == 0 { *src } else { over_straight(stroke, *src) };
    }
    Ok(out)
}

/// Per-pixel outline alpha (0..=255) for the grown mask, including the mask itself.
pub(crate) fn outline_coverage(
    mask: &[bool],
    width: u32,
    height: u32,
    thickness: u32,
    quality: OutlineQuality,
) -> WallpaperResult<Vec<u8>> {
    let grown = match quality {
        OutlineQuality::Crisp => {
            let limit = f64::from(thickness) * f64::from(thickness);
            squared_distance(mask, width, height)
                .into_iter()
                .map(|d| if d <= limit { 255 } else { 0 })
                .collect()
        }
        OutlineQuality::Sprite => square_dilate(mask, width, height, thickness),
        OutlineQuality::DieCut => die_cut(mask, width, height, thickness)?,
    };
    Ok(grown)
}

/// Exact squared Euclidean distance to the nearest `true` pixel (separable parabola envelope).
fn squared_distance(mask: &[bool], width: u32, height: u32) -> Vec<f64> {
    let (w, h) = (width as usize, height as usize);
    let mut grid: Vec<f64> = mask
        .iter()
        .map(|&m| if m { 0.0 } else { EDT_INF })
        .collect();

    let n = w.max(h);
    let mut f = vec![0.0f64; n];
    let mut d = vec![0.0f64; n];
    let mut v = vec![0usize; n];
    let mut z = vec![0.0f64; n + 1];

    for x in 0..w {
        for y in 0..h {
            f[y] = grid[y * w + x];
        }
        edt_1d(&f[..h], &mut d[..h], &mut v, &mut z);
        for y in 0..h {
            grid[y * w + x] = d[y];
        }
    }
    for y in 0..h {
        let row = &mut grid[y * w..(y + 1) * w];
        f[..w].copy_from_slice(row);
        edt_1d(&f[..w], &mut d[..w], &mut v, &mut z);
        row.copy_from_slice(&d[..w]);
    }
    grid
}

fn edt_1d(f: &[f64], d: &mut [f64], v: &mut [usize], z: &mut [f64]) {
    let n = f.len();
    if n == 0 {
        return;
    }
    let mut k = 0usize;
    v[0] = 0;
    z[0] = f64::NEG_INFINITY;
    z[1] = f64::INFINITY;

    for q in 1..n {
        let qf = q as f64;
        loop {
            let p = v[k];
            let pf = p as f64;
            let s = ((f[q] + qf * qf) - (f[p] + pf * pf)) / (2.0 * (qf - pf));
            // z[0] is -inf, so this never pops past the first parabola.
            if s <= z[k] && k > 0 {
                k -= 1;
                continue;
            }
            k += 1;
            v[k] = q;
            z[k] = s;
            z[k + 1] = f64::INFINITY;
            break;
        }
    }

    k = 0;
    for (q, out) in d.iter_mut().enumerate() {
        while z[k + 1] < q as f64 {
            k += 1;
        }
        let dq = q as f64 - v[k] as f64;
        *out = dq * dq + f[v[k]];
    }
}

/// Chessboard dilation: equivalent to repeating an 8-direction one-pixel offset union
/// `radius` times, done as two linear passes.
fn square_dilate(mask: &[bool], width: u32, height: u32, radius: u32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut rows = vec![false; mask.len()];
    let mut line = Vec::with_capacity(w.max(h));

    for y in 0..h {
        line.clear();
        line.extend_from_slice(&mask[y * w..(y + 1) * w]);
        for (x, hit) in dilate_line(&line, radius).into_iter().enumerate() {
            rows[y * w + x] = hit;
        }
    }

    let mut out = vec![0u8; mask.len()];
    for x in 0..w {
        line.clear();
        line.extend((0..h).map(|y| rows[y * w + x]));
        for (y, hit) in dilate_line(&line, radius).into_iter().enumerate() {
            if hit {
                out[y * w + x] = 255;
            }
        }
    }
    out
}

fn dilate_line(line: &[bool], radius: u32) -> Vec<bool> {
    let radius = radius as usize;
    let n = line.len();
    let mut dist = vec![usize::MAX; n];

    let mut last: Option<usize> = None;
    for i in 0..n {
        if line[i] {
            last = Some(i);
        }
        if let Some(l) = last {
            dist[i] = i - l;
        }
    }
    last = None;
    for i in (0..n).rev() {
        if line[i] {
            last = Some(i);
        }
        if let Some(l) = last {
            dist[i] = dist[i].min(l - i);
        }
    }
    dist.into_iter().map(|d| d <= radius).collect()
}

fn die_cut(mask: &[bool], width: u32, height: u32, thickness: u32) -> WallpaperResult<Vec<u8>> {
    let plane: Vec<u8> = mask.iter().map(|&m| if m { 255 } else { 0 }).collect();
    let sigma = (thickness as f32 / 3.0).max(0.5);
    let blurred = blur_plane8(&plane, width, height, thickness.max(1), sigma)?;

    let hard: Vec<u8> = blurred
        .iter()
        .zip(mask)
        .map(|(&b, &m)| if m || b > DIE_CUT_THRESHOLD { 255 } else { 0 })
        .collect();

    // Soften only the outer edge; covered pixels stay fully covered.
    let soft = blur_plane8(&hard, width, height, 2, DIE_CUT_AA_SIGMA)?;
    Ok(hard
        .iter()
        .zip(soft)
        .map(|(&hv, sv)| hv.max(sv))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/outline.rs"]
mod tests;
