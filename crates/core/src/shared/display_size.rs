/// Size at which an image is shown inside `bounds`.
///
/// Images that already fit keep their size (never upscaled). Larger images
/// shrink uniformly until both sides fit. Sides never drop below one pixel.
pub fn fit_within(image: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (w, h) = image;
    let (max_w, max_h) = bounds;
    if w == 0 || h == 0 {
        return (0, 0);
    }
    if w <= max_w && h <= max_h {
        return (w, h);
    }

    let scale = (max_w as f64 / w as f64).min(max_h as f64 / h as f64);
    let fitted_w = ((w as f64 * scale).floor() as u32).clamp(1, max_w.max(1));
    let fitted_h = ((h as f64 * scale).floor() as u32).clamp(1, max_h.max(1));
    (fitted_w, fitted_h)
}
