use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use rayon::prelude::*;

/// Value noise: a random lattice with one sample every `cell` pixels, bilinearly
/// interpolated and min-max normalized to `[0, 1]`.
///
/// The lattice is drawn from `seed`, so equal arguments give equal fields.
pub(crate) fn value_noise(width: u32, height: u32, cell: u32, seed: u64) -> Vec<f64> {
    let (w, h) = (width as usize, height as usize);
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let cell = cell.max(1) as usize;
    let grid_w = w / cell + 2;
    let grid_h = h / cell + 2;

    let mut rng = StdRng::seed_from_u64(seed);
    let lattice: Vec<f64> = (0..grid_w * grid_h).map(|_| rng.r#gen::<f64>()).collect();

    let mut field = vec![0.0f64; w * h];
    field.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let gy = y as f64 / cell as f64;
        let y0 = gy as usize;
        let sy = gy - y0 as f64;
        for (x, out) in row.iter_mut().enumerate() {
            let gx = x as f64 / cell as f64;
            let x0 = gx as usize;
            let sx = gx - x0 as f64;

            let at = |gx: usize, gy: usize| lattice[gy * grid_w + gx];
            let n0 = at(x0, y0) * (1.0 - sx) + at(x0 + 1, y0) * sx;
            let n1 = at(x0, y0 + 1) * (1.0 - sx) + at(x0 + 1, y0 + 1) * sx;
            *out = n0 * (1.0 - sy) + n1 * sy;
        }
    });

    let (lo, hi) = field
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;
    if span <= f64::EPSILON {
        field.iter_mut().for_each(|v| *v = 0.0);
    } else {
        field.par_iter_mut().for_each(|v| *v = (*v - lo) / span);
    }
    field
}

#[cfg(test)]
#[path = "../../tests/unit/background/noise.rs"]
mod tests;
