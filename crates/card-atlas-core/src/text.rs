use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::draw::blend_coverage;
use crate::font::{Glyph, GlyphSource};

/// Ink extent of laid-out text relative to its top-left anchor.
/// `x1`/`y1` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl InkBounds {
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0).max(0) as u32
    }
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0).max(0) as u32
    }
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1) as f32 / 2.0,
            (self.y0 + self.y1) as f32 / 2.0,
        )
    }
}

struct PlacedGlyph {
    x: i32,
    y: i32,
    glyph: Glyph,
}

/// Lays out `text` with its top-left at the origin. Lines are split on `\n`
/// and stacked `line_height + spacing` apart.
fn layout(font: &dyn GlyphSource, text: &str, spacing: f32) -> Vec<PlacedGlyph> {
    let mut placed = Vec::new();
    let advance_y = font.line_height() + spacing;
    for (i, line) in text.split('\n').enumerate() {
        let baseline = (i as f32 * advance_y + font.ascent()).round() as i32;
        let mut pen = 0.0f32;
        for ch in line.chars() {
            let Some(glyph) = font.glyph(ch) else {
                debug!(?ch, "glyph not available in font; skipped");
                continue;
            };
            let x = pen.round() as i32 + glyph.left;
            let y = baseline + glyph.top;
            pen += glyph.advance;
            placed.push(PlacedGlyph { x, y, glyph });
        }
    }
    placed
}

/// Bounding box of the inked pixels of `text`, or `None` when nothing would
/// be drawn (empty text or no supported glyphs).
pub fn measure_text(font: &dyn GlyphSource, text: &str, spacing: f32) -> Option<InkBounds> {
    layout(font, text, spacing)
        .iter()
        .filter_map(|p| {
            let (x0, y0, x1, y1) = p.glyph.ink_extent()?;
            Some(InkBounds {
                x0: p.x + x0 as i32,
                y0: p.y + y0 as i32,
                x1: p.x + x1 as i32,
                y1: p.y + y1 as i32,
            })
        })
        .reduce(|a, b| InkBounds {
            x0: a.x0.min(b.x0),
            y0: a.y0.min(b.y0),
            x1: a.x1.max(b.x1),
            y1: a.y1.max(b.y1),
        })
}

/// Draws `text` with its layout origin at `(x, y)`.
pub fn draw_text(
    canvas: &mut RgbaImage,
    font: &dyn GlyphSource,
    x: i32,
    y: i32,
    text: &str,
    spacing: f32,
    color: Rgba<u8>,
) {
    for p in layout(font, text, spacing) {
        let g = &p.glyph;
        for gy in 0..g.height {
            for gx in 0..g.width {
                let c = g.coverage[(gy * g.width + gx) as usize];
                if c > 0 {
                    blend_coverage(canvas, x + p.x + gx as i32, y + p.y + gy as i32, color, c);
                }
            }
        }
    }
}

/// Draws `text` so its ink box is centered on `(cx, cy)`.
/// Returns the canvas-space ink box, or `None` if nothing was drawn.
pub fn draw_text_centered(
    canvas: &mut RgbaImage,
    font: &dyn GlyphSource,
    cx: f32,
    cy: f32,
    text: &str,
    spacing: f32,
    color: Rgba<u8>,
) -> Option<InkBounds> {
    let bounds = measure_text(font, text, spacing)?;
    let (bx, by) = bounds.center();
    let ox = (cx - bx).round() as i32;
    let oy = (cy - by).round() as i32;
    draw_text(canvas, font, ox, oy, text, spacing, color);
    Some(InkBounds {
        x0: bounds.x0 + ox,
        y0: bounds.y0 + oy,
        x1: bounds.x1 + ox,
        y1: bounds.y1 + oy,
    })
}
