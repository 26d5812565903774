use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use tracing::{debug, info, instrument};

use crate::config::AtlasConfig;
use crate::draw::{CardStyle, draw_card};
use crate::error::Result;
use crate::font::{FontSet, resolve_fonts};
use crate::grid::GridLayout;
use crate::model::{CARD_COUNT, COLUMNS, CardFrame, CardSheet, ROWS, SheetMeta};
use crate::text::{draw_text, draw_text_centered};

/// Rendered sheet: the RGBA canvas and its layout record.
pub struct AtlasOutput {
    pub sheet: CardSheet,
    pub rgba: RgbaImage,
}

#[instrument(skip_all)]
/// Renders the card sheet described by `cfg`, resolving fonts from
/// `cfg.font_candidates` (falling back to the built-in font).
pub fn render_atlas(cfg: &AtlasConfig) -> Result<AtlasOutput> {
    cfg.validate()?;
    let fonts = resolve_fonts(&cfg.font_candidates, cfg.corner_font_px, cfg.center_font_px);
    render_with_fonts(cfg, &fonts)
}

/// Renders the card sheet with already-resolved fonts.
///
/// Notes:
/// - Output is deterministic for a given config and font set.
/// - Pixels outside the rounded card corners stay fully transparent.
pub fn render_with_fonts(cfg: &AtlasConfig, fonts: &FontSet) -> Result<AtlasOutput> {
    cfg.validate()?;

    let grid = GridLayout::new(cfg.width, cfg.height);
    let mut canvas = RgbaImage::from_pixel(cfg.width, cfg.height, Rgba([0, 0, 0, 0]));
    let style = CardStyle {
        fill: Rgba(cfg.card_fill),
        border: Rgba(cfg.border_color),
        border_width: cfg.border_width,
        corner_radius: cfg.corner_radius,
    };
    let inset = cfg.label_inset as i32;
    let mut frames = Vec::with_capacity(CARD_COUNT);

    for cell in grid.cells() {
        let card = cell.card;
        let rect = cell.rect;
        let ink = Rgba(cfg.ink(card.suit.color()));

        draw_card(&mut canvas, rect, &style);
        draw_text(
            &mut canvas,
            fonts.corner.as_ref(),
            rect.x as i32 + inset,
            rect.y as i32 + inset,
            &card.corner_label(),
            cfg.line_spacing,
            ink,
        );

        let (cx, cy) = rect.center();
        let glyph = card.suit.glyph().to_string();
        if draw_text_centered(
            &mut canvas,
            fonts.center.as_ref(),
            cx,
            cy,
            &glyph,
            cfg.line_spacing,
            ink,
        )
        .is_none()
        {
            debug!(card = %card, "center glyph has no ink in this font");
        }

        frames.push(CardFrame {
            key: card.key(),
            rank: card.rank.label().to_string(),
            suit: card.suit,
            column: cell.column,
            row: cell.row,
            frame: rect,
        });
    }

    let image = cfg
        .output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let meta = SheetMeta {
        schema_version: "1".into(),
        app: "card-atlas".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        image,
        format: "RGBA8888".into(),
        size: (cfg.width, cfg.height),
        columns: COLUMNS,
        rows: ROWS,
        font: fonts.origin.clone(),
    };

    Ok(AtlasOutput {
        sheet: CardSheet { frames, meta },
        rgba: canvas,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Writes the PNG to `cfg.output_path` (and the JSON layout when
/// `cfg.write_layout` is set), creating missing directories.
pub fn write_atlas(out: &AtlasOutput, cfg: &AtlasConfig) -> Result<()> {
    ensure_parent_dir(&cfg.output_path)?;
    out.rgba
        .save_with_format(&cfg.output_path, ImageFormat::Png)?;
    info!(png_path = %cfg.output_path.display(), "wrote card sheet");

    if cfg.write_layout {
        let json_path = cfg.layout_path();
        let json = serde_json::to_string_pretty(&crate::export::to_json_hash(&out.sheet))?;
        fs::write(&json_path, json)?;
        info!(json_path = %json_path.display(), frames = out.sheet.frames.len(), "wrote layout");
    }
    Ok(())
}

/// Renders and writes the sheet in one step.
pub fn generate_atlas(cfg: &AtlasConfig) -> Result<AtlasOutput> {
    let out = render_atlas(cfg)?;
    write_atlas(&out, cfg)?;
    Ok(out)
}
