use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of grid columns (one per rank).
pub const COLUMNS: u32 = 13;
/// Number of grid rows (one per suit).
pub const ROWS: u32 = 4;
/// Total number of cards on the sheet.
pub const CARD_COUNT: usize = (COLUMNS * ROWS) as usize;

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
    /// Returns true if the pixel `(px, py)` lies inside `self`.
    pub fn contains_point(&self, px: u32, py: u32) -> bool {
        self.w > 0
            && self.h > 0
            && px >= self.x
            && py >= self.y
            && px <= self.right()
            && py <= self.bottom()
    }
    /// Center of the rectangle in continuous pixel space.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }
}

/// Ink family of a suit. The actual RGBA values live in `AtlasConfig`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuitColor {
    Black,
    Red,
}

/// Card suits in row order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    /// Row order of the sheet: Spades, Clubs, Hearts, Diamonds.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    /// Row index in the atlas grid.
    pub fn row(self) -> u32 {
        match self {
            Suit::Spades => 0,
            Suit::Clubs => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }

    pub fn from_row(row: u32) -> Option<Suit> {
        Suit::ALL.get(row as usize).copied()
    }

    pub fn glyph(self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Clubs => '\u{2663}',
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
        }
    }

    pub fn color(self) -> SuitColor {
        match self {
            Suit::Spades | Suit::Clubs => SuitColor::Black,
            Suit::Hearts | Suit::Diamonds => SuitColor::Red,
        }
    }

    /// One-letter code used in card keys (`S`, `C`, `H`, `D`).
    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
        }
    }
}

/// Card ranks in column order (Ace low).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Column index in the atlas grid.
    pub fn column(self) -> u32 {
        self as u32
    }

    pub fn from_column(column: u32) -> Option<Rank> {
        Rank::ALL.get(column as usize).copied()
    }

    /// Corner label text.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Card at grid position `(column, row)`, if it is on the sheet.
    pub fn at(column: u32, row: u32) -> Option<Card> {
        Some(Card::new(Rank::from_column(column)?, Suit::from_row(row)?))
    }

    /// Metadata key: rank label followed by the suit letter (`AS`, `10H`).
    pub fn key(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.letter())
    }

    /// Two-line corner label: rank over suit glyph.
    pub fn corner_label(&self) -> String {
        format!("{}\n{}", self.rank.label(), self.suit.glyph())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.glyph())
    }
}

/// Where the fonts used for a sheet came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum FontOrigin {
    /// A font file found among the configured candidates.
    File(std::path::PathBuf),
    /// The embedded bitmap fallback.
    Builtin,
}

/// One card placed on the sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFrame {
    /// Card key, e.g. `QH`.
    pub key: String,
    pub rank: String,
    pub suit: Suit,
    pub column: u32,
    pub row: u32,
    /// Cell rectangle within the sheet.
    pub frame: Rect,
}

/// Sheet-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMeta {
    /// Schema version of the JSON layout; current: "1".
    pub schema_version: String,
    pub app: String,
    pub version: String,
    /// File name of the PNG this layout describes.
    pub image: String,
    pub format: String,
    pub size: (u32, u32),
    pub columns: u32,
    pub rows: u32,
    pub font: FontOrigin,
}

/// Layout record of a rendered sheet: one frame per card plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSheet {
    pub frames: Vec<CardFrame>,
    pub meta: SheetMeta,
}

impl CardSheet {
    /// Looks up a frame by its card key.
    pub fn frame(&self, key: &str) -> Option<&CardFrame> {
        self.frames.iter().find(|f| f.key == key)
    }

    /// Frame at grid position `(column, row)`.
    pub fn frame_at(&self, column: u32, row: u32) -> Option<&CardFrame> {
        self.frames
            .iter()
            .find(|f| f.column == column && f.row == row)
    }
}
