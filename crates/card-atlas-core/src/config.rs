use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::{COLUMNS, ROWS, SuitColor};

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "content/images/cards_sheet.png";

/// Font files probed in order; the first one that exists wins.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Apple Symbols.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\seguisym.ttf",
];

/// Rendering parameters of the card sheet.
/// Key notes:
///   - `width`/`height` are the canvas size; the 13x4 grid is fixed
///   - colors are straight-alpha RGBA
///   - `font_candidates` are only probed, never required
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtlasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Where the PNG is written.
    pub output_path: PathBuf,
    /// Also write `<stem>.json` with the card frames next to the PNG.
    #[serde(default = "default_write_layout")]
    pub write_layout: bool,

    /// Card face color.
    pub card_fill: [u8; 4],
    /// Card outline color.
    pub border_color: [u8; 4],
    /// Outline thickness, drawn inside the cell.
    pub border_width: u32,
    /// Radius of the rounded card corners (0 = square).
    pub corner_radius: u32,

    /// Ink of spades and clubs.
    pub ink_black: [u8; 4],
    /// Ink of hearts and diamonds.
    pub ink_red: [u8; 4],

    /// Pixel size of the corner label font.
    pub corner_font_px: f32,
    /// Pixel size of the centered suit glyph.
    pub center_font_px: f32,
    /// Offset of the corner label from the cell's top-left corner.
    pub label_inset: u32,
    /// Extra pixels between the two label lines.
    pub line_spacing: f32,

    #[serde(default = "default_font_candidates")]
    pub font_candidates: Vec<PathBuf>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            write_layout: default_write_layout(),
            card_fill: [255, 255, 255, 255],
            border_color: [50, 50, 50, 255],
            border_width: 2,
            corner_radius: 6,
            ink_black: [0, 0, 0, 255],
            ink_red: [200, 0, 0, 255],
            corner_font_px: 30.0,
            center_font_px: 70.0,
            label_inset: 5,
            line_spacing: 4.0,
            font_candidates: default_font_candidates(),
        }
    }
}

impl AtlasConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - Dimensions are zero or smaller than the grid
    /// - The border or corner radius would not fit the smallest cell
    /// - A font size is not a positive finite number
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::CardAtlasError;

        if self.width == 0 || self.height == 0 {
            return Err(CardAtlasError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.width < COLUMNS || self.height < ROWS {
            return Err(CardAtlasError::InvalidConfig(format!(
                "canvas {}x{} is smaller than the {}x{} grid",
                self.width, self.height, COLUMNS, ROWS
            )));
        }

        // floor division makes every cell at least this large
        let min_cell = (self.width / COLUMNS).min(self.height / ROWS);
        if self.border_width.saturating_mul(2) >= min_cell {
            return Err(CardAtlasError::InvalidConfig(format!(
                "border_width ({}) * 2 leaves no card face in a {}px cell",
                self.border_width, min_cell
            )));
        }
        if self.corner_radius.saturating_mul(2) > min_cell {
            return Err(CardAtlasError::InvalidConfig(format!(
                "corner_radius ({}) * 2 exceeds the {}px cell",
                self.corner_radius, min_cell
            )));
        }

        for (name, px) in [
            ("corner_font_px", self.corner_font_px),
            ("center_font_px", self.center_font_px),
        ] {
            if !px.is_finite() || px <= 0.0 {
                return Err(CardAtlasError::InvalidConfig(format!(
                    "{name} must be a positive size, got {px}"
                )));
            }
        }
        if !self.line_spacing.is_finite() || self.line_spacing < 0.0 {
            return Err(CardAtlasError::InvalidConfig(format!(
                "line_spacing must be >= 0, got {}",
                self.line_spacing
            )));
        }

        Ok(())
    }

    /// RGBA ink for a suit color.
    pub fn ink(&self, color: SuitColor) -> [u8; 4] {
        match color {
            SuitColor::Black => self.ink_black,
            SuitColor::Red => self.ink_red,
        }
    }

    /// Path of the JSON layout written next to the PNG.
    pub fn layout_path(&self) -> PathBuf {
        self.output_path.with_extension("json")
    }

    /// Create a fluent builder for `AtlasConfig`.
    pub fn builder() -> AtlasConfigBuilder {
        AtlasConfigBuilder::new()
    }
}

fn default_write_layout() -> bool {
    true
}
fn default_font_candidates() -> Vec<PathBuf> {
    DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect()
}

/// Builder for `AtlasConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct AtlasConfigBuilder {
    cfg: AtlasConfig,
}

impl AtlasConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: AtlasConfig::default(),
        }
    }
    pub fn with_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = w;
        self.cfg.height = h;
        self
    }
    pub fn output_path(mut self, v: impl Into<PathBuf>) -> Self {
        self.cfg.output_path = v.into();
        self
    }
    pub fn write_layout(mut self, v: bool) -> Self {
        self.cfg.write_layout = v;
        self
    }
    pub fn card_fill(mut self, v: [u8; 4]) -> Self {
        self.cfg.card_fill = v;
        self
    }
    pub fn border(mut self, color: [u8; 4], width: u32) -> Self {
        self.cfg.border_color = color;
        self.cfg.border_width = width;
        self
    }
    pub fn corner_radius(mut self, v: u32) -> Self {
        self.cfg.corner_radius = v;
        self
    }
    pub fn inks(mut self, black: [u8; 4], red: [u8; 4]) -> Self {
        self.cfg.ink_black = black;
        self.cfg.ink_red = red;
        self
    }
    pub fn font_sizes(mut self, corner_px: f32, center_px: f32) -> Self {
        self.cfg.corner_font_px = corner_px;
        self.cfg.center_font_px = center_px;
        self
    }
    pub fn label_inset(mut self, v: u32) -> Self {
        self.cfg.label_inset = v;
        self
    }
    pub fn line_spacing(mut self, v: f32) -> Self {
        self.cfg.line_spacing = v;
        self
    }
    pub fn font_candidates<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.cfg.font_candidates = paths.into_iter().map(Into::into).collect();
        self
    }
    pub fn build(self) -> AtlasConfig {
        self.cfg
    }
}
