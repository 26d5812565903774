use crate::model::{COLUMNS, Card, ROWS, Rect};

/// Proportional 13x4 division of a canvas.
///
/// Boundaries are `floor(i * extent / count)`, so consecutive cells share an
/// edge and the grid covers the canvas exactly. Cell widths may differ by one
/// pixel when the extent is not a multiple of the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub width: u32,
    pub height: u32,
}

/// A grid cell and the card it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
    pub card: Card,
    pub rect: Rect,
}

#[inline]
fn boundary(index: u32, extent: u32, count: u32) -> u32 {
    ((index as u64 * extent as u64) / count as u64) as u32
}

impl GridLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel rectangle of cell `(column, row)`. Indices past the grid are clamped.
    pub fn cell_rect(&self, column: u32, row: u32) -> Rect {
        let column = column.min(COLUMNS - 1);
        let row = row.min(ROWS - 1);
        let x0 = boundary(column, self.width, COLUMNS);
        let x1 = boundary(column + 1, self.width, COLUMNS);
        let y0 = boundary(row, self.height, ROWS);
        let y1 = boundary(row + 1, self.height, ROWS);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// All cells, row-major (suit by suit, ranks left to right).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..ROWS).flat_map(move |row| {
            (0..COLUMNS).filter_map(move |column| {
                let card = Card::at(column, row)?;
                Some(Cell {
                    column,
                    row,
                    card,
                    rect: self.cell_rect(column, row),
                })
            })
        })
    }

    /// Grid position of the cell containing pixel `(px, py)`.
    pub fn locate(&self, px: u32, py: u32) -> Option<(u32, u32)> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let column = (0..COLUMNS).find(|&c| px < boundary(c + 1, self.width, COLUMNS))?;
        let row = (0..ROWS).find(|&r| py < boundary(r + 1, self.height, ROWS))?;
        Some((column, row))
    }
}
