use image::{Rgba, RgbaImage};

use crate::model::Rect;

/// Fill and outline of a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub fill: Rgba<u8>,
    pub border: Rgba<u8>,
    /// Outline thickness, drawn inside the rectangle.
    pub border_width: u32,
    pub corner_radius: u32,
}

/// Returns true if the pixel at local `(lx, ly)` falls inside a `w x h` box
/// with corners rounded by `radius`. Pixels are sampled at their centers.
pub fn inside_rounded(lx: u32, ly: u32, w: u32, h: u32, radius: u32) -> bool {
    if lx >= w || ly >= h {
        return false;
    }
    if radius == 0 {
        return true;
    }
    let r = radius.min(w / 2).min(h / 2) as f32;
    let px = lx as f32 + 0.5;
    let py = ly as f32 + 0.5;
    let cx = px.clamp(r, w as f32 - r);
    let cy = py.clamp(r, h as f32 - r);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}

/// Draw a filled card covering `rect` with a solid inset outline.
/// Pixels outside the rounded corners are left untouched.
pub fn draw_card(canvas: &mut RgbaImage, rect: Rect, style: &CardStyle) {
    let (cw, ch) = canvas.dimensions();
    let bw = style.border_width;
    let r = style.corner_radius;
    let inner_w = rect.w.saturating_sub(bw.saturating_mul(2));
    let inner_h = rect.h.saturating_sub(bw.saturating_mul(2));
    let inner_r = r.saturating_sub(bw);

    for ly in 0..rect.h {
        for lx in 0..rect.w {
            let (x, y) = (rect.x + lx, rect.y + ly);
            if x >= cw || y >= ch || !inside_rounded(lx, ly, rect.w, rect.h, r) {
                continue;
            }
            let face = lx >= bw
                && ly >= bw
                && inside_rounded(lx - bw, ly - bw, inner_w, inner_h, inner_r);
            canvas.put_pixel(x, y, if face { style.fill } else { style.border });
        }
    }
}

/// Composite `color` scaled by `coverage` over the pixel at `(x, y)`
/// (straight alpha, source-over). Out-of-bounds coordinates are ignored.
pub fn blend_coverage(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: u8) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let sa = coverage as u32 * color[3] as u32 / 255;
    if sa == 0 {
        return;
    }
    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    let da = dst[3] as u32 * (255 - sa) / 255;
    let out_a = sa + da;
    for i in 0..3 {
        dst[i] = ((color[i] as u32 * sa + dst[i] as u32 * da) / out_a) as u8;
    }
    dst[3] = out_a as u8;
}
