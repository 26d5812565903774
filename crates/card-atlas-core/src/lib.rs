//! Core library for rendering a playing-card texture atlas.
//!
//! - Grid: 13 columns (A..K) x 4 rows (spades, clubs, hearts, diamonds), cell bounds floored from proportional offsets
//! - Fonts: first existing candidate file (via `fontdue`), else an embedded 5x7 bitmap font
//! - Pipeline: `render_atlas` returns the RGBA sheet + layout; `write_atlas` saves PNG and JSON
//!
//! Quick example:
//! ```ignore
//! use card_atlas_core::{AtlasConfig, generate_atlas};
//! # fn main() -> anyhow::Result<()> {
//! let out = generate_atlas(&AtlasConfig::default())?;
//! println!("cards: {}", out.sheet.frames.len());
//! # Ok(()) }
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod font;
pub mod grid;
pub mod model;
pub mod pipeline;
pub mod text;

pub use config::*;
pub use error::*;
pub use export::*;
pub use grid::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `card_atlas_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{AtlasConfig, AtlasConfigBuilder};
    pub use crate::font::{BuiltinFont, FontSet, GlyphSource, TrueTypeFont, resolve_fonts};
    pub use crate::grid::{Cell, GridLayout};
    pub use crate::model::{
        COLUMNS, Card, CardFrame, CardSheet, FontOrigin, ROWS, Rank, Rect, SheetMeta, Suit,
        SuitColor,
    };
    pub use crate::{AtlasOutput, generate_atlas, render_atlas, render_with_fonts, write_atlas};
}
