use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::model::FontOrigin;

pub mod builtin;
pub mod truetype;

pub use builtin::BuiltinFont;
pub use truetype::TrueTypeFont;

/// A rasterized glyph: 8-bit coverage plus placement relative to the pen.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Offset of the bitmap's left edge from the pen x.
    pub left: i32,
    /// Offset of the bitmap's top edge from the baseline (negative is up).
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// Horizontal pen advance in pixels.
    pub advance: f32,
    /// Row-major coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

impl Glyph {
    /// Tight box `(x0, y0, x1, y1)` around non-zero coverage, bitmap-relative,
    /// exclusive on the far edges. `None` for a blank glyph.
    pub fn ink_extent(&self) -> Option<(u32, u32, u32, u32)> {
        let mut ext: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.coverage[(y * self.width + x) as usize] == 0 {
                    continue;
                }
                ext = Some(match ext {
                    None => (x, y, x + 1, y + 1),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
                });
            }
        }
        ext
    }

    pub fn is_blank(&self) -> bool {
        self.ink_extent().is_none()
    }
}

/// Source of glyph bitmaps at a fixed pixel size.
///
/// Implementations return `None` for characters they cannot draw; callers
/// skip those.
pub trait GlyphSource {
    /// Distance from a line's top to its baseline.
    fn ascent(&self) -> f32;
    /// Height of one line, excluding extra spacing.
    fn line_height(&self) -> f32;
    fn glyph(&self, ch: char) -> Option<Glyph>;
}

/// The two fonts a sheet is drawn with.
pub struct FontSet {
    pub corner: Box<dyn GlyphSource>,
    pub center: Box<dyn GlyphSource>,
    pub origin: FontOrigin,
}

impl FontSet {
    /// Built-in bitmap fonts sized to approximate `corner_px` / `center_px`.
    pub fn builtin(corner_px: f32, center_px: f32) -> Self {
        Self {
            corner: Box::new(BuiltinFont::for_pixel_size(corner_px)),
            center: Box::new(BuiltinFont::for_pixel_size(center_px)),
            origin: FontOrigin::Builtin,
        }
    }

    /// Both sizes loaded from one font file.
    pub fn from_file(path: &Path, corner_px: f32, center_px: f32) -> crate::error::Result<Self> {
        let corner = TrueTypeFont::open(path, corner_px)?;
        let center = corner.with_size(center_px);
        Ok(Self {
            corner: Box::new(corner),
            center: Box::new(center),
            origin: FontOrigin::File(path.to_path_buf()),
        })
    }
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet").field("origin", &self.origin).finish()
    }
}

/// First candidate path that exists on this machine.
pub fn probe_candidates(candidates: &[PathBuf]) -> Option<&Path> {
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|p| p.exists())
}

/// Resolves the corner and center fonts. Never fails: when no candidate
/// exists, or the chosen one cannot be parsed, the built-in bitmap font is
/// used and a warning is logged.
pub fn resolve_fonts(candidates: &[PathBuf], corner_px: f32, center_px: f32) -> FontSet {
    let Some(path) = probe_candidates(candidates) else {
        warn!(
            candidates = candidates.len(),
            "no suitable font found; falling back to built-in font (suit glyphs may be degraded)"
        );
        return FontSet::builtin(corner_px, center_px);
    };
    match FontSet::from_file(path, corner_px, center_px) {
        Ok(set) => {
            info!(font = %path.display(), "using font");
            set
        }
        Err(e) => {
            warn!(font = %path.display(), error = %e, "falling back to built-in font (suit glyphs may be degraded)");
            FontSet::builtin(corner_px, center_px)
        }
    }
}
