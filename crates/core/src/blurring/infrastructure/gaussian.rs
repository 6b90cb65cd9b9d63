use ndarray::{Array3, ArrayView3, Axis};

/// Precompute a normalized 1D Gaussian kernel spanning `-half..=half`.
pub fn gaussian_kernel_1d(half: usize, sigma: f32) -> Vec<f32> {
    if half == 0 || sigma <= 0.0 {
        return vec![1.0];
    }
    let sigma = sigma as f64;
    let mut kernel_f64: Vec<f64> = (0..=2 * half)
        .map(|i| {
            let x = i as f64 - half as f64;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel_f64.iter().sum();
    for v in &mut kernel_f64 {
        *v /= sum;
    }
    kernel_f64.iter().map(|&v| v as f32).collect()
}

/// Premultiplied float surface shaped `[row, column, channel]`.
pub fn premultiply(pixels: ArrayView3<'_, u8>) -> Array3<f32> {
    let mut surface = pixels.mapv(|v| v as f32);
    for mut px in surface.lanes_mut(Axis(2)) {
        let scale = px[3] / 255.0;
        for c in 0..3 {
            px[c] *= scale;
        }
    }
    surface
}

/// Convert a premultiplied surface back to straight-alpha RGBA bytes.
pub fn unpremultiply(surface: &Array3<f32>) -> Vec<u8> {
    let mut out = Vec::with_capacity(surface.len());
    for px in surface.lanes(Axis(2)) {
        let a = px[3].round().clamp(0.0, 255.0);
        if a <= 0.0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        let scale = 255.0 / px[3].max(f32::EPSILON);
        for c in 0..3 {
            out.push((px[c] * scale).round().clamp(0.0, 255.0) as u8);
        }
        out.push(a as u8);
    }
    out
}

/// Convolve every lane along `axis` with `kernel`.
///
/// Samples past either end count as zero (transparent black), so with
/// premultiplied input the borders fade out instead of smearing edge pixels.
pub fn blur_axis_transparent(surface: &mut Array3<f32>, axis: Axis, kernel: &[f32]) {
    if kernel.len() <= 1 {
        return;
    }
    let half = (kernel.len() / 2) as isize;
    let mut line: Vec<f32> = Vec::new();

    for mut lane in surface.lanes_mut(axis) {
        line.clear();
        line.extend(lane.iter().copied());
        let n = line.len() as isize;
        for (i, out) in lane.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (k, &w) in kernel.iter().enumerate() {
                let s = i as isize + k as isize - half;
                if s >= 0 && s < n {
                    sum += line[s as usize] * w;
                }
            }
            *out = sum;
        }
    }
}

/// Separable Gaussian blur: horizontal pass, then vertical pass.
pub fn separable_gaussian_blur_transparent(surface: &mut Array3<f32>, kernel: &[f32]) {
    blur_axis_transparent(surface, Axis(1), kernel);
    blur_axis_transparent(surface, Axis(0), kernel);
}
