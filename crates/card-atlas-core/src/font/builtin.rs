use super::{Glyph, GlyphSource};

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;

// --- 5x7 bitmap glyphs: each row is 5 bits (MSB left) ---
const GLYPHS: &[(char, [u8; 7])] = &[
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('\u{2660}', [0b00100, 0b01110, 0b11111, 0b11111, 0b11111, 0b00100, 0b01110]),
    ('\u{2663}', [0b01110, 0b01110, 0b10101, 0b11111, 0b10101, 0b00100, 0b01110]),
    ('\u{2665}', [0b00000, 0b01010, 0b11111, 0b11111, 0b01110, 0b00100, 0b00000]),
    ('\u{2666}', [0b00100, 0b01110, 0b01110, 0b11111, 0b01110, 0b01110, 0b00100]),
];

/// Embedded 5x7 bitmap font scaled by an integer factor.
///
/// Covers the rank labels and the four suit symbols. Pixels are either fully
/// inked or empty, so drawn text carries the exact ink color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFont {
    scale: u32,
}

impl BuiltinFont {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    /// Scale whose line height is closest to `px`.
    pub fn for_pixel_size(px: f32) -> Self {
        let scale = (px / GLYPH_H as f32).round();
        Self::new(if scale.is_finite() { scale as u32 } else { 1 })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn supports(ch: char) -> bool {
        GLYPHS.iter().any(|(c, _)| *c == ch)
    }
}

impl GlyphSource for BuiltinFont {
    fn ascent(&self) -> f32 {
        (GLYPH_H * self.scale) as f32
    }

    fn line_height(&self) -> f32 {
        (GLYPH_H * self.scale) as f32
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        let (_, rows) = GLYPHS.iter().find(|(c, _)| *c == ch)?;
        let s = self.scale;
        let (w, h) = (GLYPH_W * s, GLYPH_H * s);
        let mut coverage = vec![0u8; (w * h) as usize];
        for (row_i, row) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if (row >> (GLYPH_W - 1 - col)) & 1 == 0 {
                    continue;
                }
                for dy in 0..s {
                    let y = row_i as u32 * s + dy;
                    let start = (y * w + col * s) as usize;
                    coverage[start..start + s as usize].fill(255);
                }
            }
        }
        Some(Glyph {
            left: 0,
            top: -(h as i32),
            width: w,
            height: h,
            advance: ((GLYPH_W + 1) * s) as f32,
            coverage,
        })
    }
}
