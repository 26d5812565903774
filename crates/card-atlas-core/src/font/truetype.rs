use std::path::Path;

use fontdue::{Font, FontSettings};

use super::{Glyph, GlyphSource};
use crate::error::{CardAtlasError, Result};

/// TTF/OTF/TTC font rasterized with `fontdue` at a fixed pixel size.
#[derive(Clone)]
pub struct TrueTypeFont {
    font: Font,
    px: f32,
    ascent: f32,
    line_height: f32,
}

impl TrueTypeFont {
    /// Loads a font file. Collections (`.ttc`) use their first face.
    pub fn open(path: &Path, px: f32) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, px)
    }

    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| CardAtlasError::Font(e.to_string()))?;
        Ok(Self::sized(font, px))
    }

    /// Same face at another pixel size.
    pub fn with_size(&self, px: f32) -> Self {
        Self::sized(self.font.clone(), px)
    }

    fn sized(font: Font, px: f32) -> Self {
        // fonts without hhea metrics fall back to the em box
        let (ascent, line_height) = match font.horizontal_line_metrics(px) {
            Some(m) => (m.ascent, m.ascent - m.descent),
            None => (px, px),
        };
        Self {
            font,
            px,
            ascent,
            line_height,
        }
    }

    pub fn pixel_size(&self) -> f32 {
        self.px
    }
}

impl GlyphSource for TrueTypeFont {
    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        if self.font.lookup_glyph_index(ch) == 0 {
            return None;
        }
        let (metrics, coverage) = self.font.rasterize(ch, self.px);
        Some(Glyph {
            left: metrics.xmin,
            top: -(metrics.ymin + metrics.height as i32),
            width: metrics.width as u32,
            height: metrics.height as u32,
            advance: metrics.advance_width,
            coverage,
        })
    }
}
