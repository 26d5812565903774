use card_atlas_core::prelude::*;

fn sheet_grid() -> GridLayout {
    GridLayout::new(1024, 1024)
}

#[test]
fn cells_follow_floored_boundaries() {
    let g = sheet_grid();
    for r in 0..ROWS {
        for c in 0..COLUMNS {
            let rect = g.cell_rect(c, r);
            assert!(rect.w > 0 && rect.h > 0, "empty cell ({c}, {r})");
            assert_eq!(rect.x, c * 1024 / 13);
            assert_eq!(rect.y, r * 1024 / 4);
            assert_eq!(rect.right(), (c + 1) * 1024 / 13 - 1);
            assert_eq!(rect.bottom(), (r + 1) * 1024 / 4 - 1);
        }
    }
}

#[test]
fn adjacent_cells_share_edges_without_gaps() {
    let g = sheet_grid();
    for r in 0..ROWS {
        for c in 0..COLUMNS - 1 {
            let left = g.cell_rect(c, r);
            let right = g.cell_rect(c + 1, r);
            assert_eq!(left.right() + 1, right.x, "gap/overlap at column {c}, row {r}");
            assert_eq!(left.y, right.y);
            assert_eq!(left.h, right.h);
        }
    }
    for c in 0..COLUMNS {
        for r in 0..ROWS - 1 {
            let top = g.cell_rect(c, r);
            let bottom = g.cell_rect(c, r + 1);
            assert_eq!(top.bottom() + 1, bottom.y, "gap/overlap at column {c}, row {r}");
            assert_eq!(top.x, bottom.x);
            assert_eq!(top.w, bottom.w);
        }
    }
}

#[test]
fn grid_covers_the_canvas_exactly() {
    for (w, h) in [(1024, 1024), (1000, 999), (13, 4)] {
        let g = GridLayout::new(w, h);
        let area: u64 = g.cells().map(|c| c.rect.w as u64 * c.rect.h as u64).sum();
        assert_eq!(area, w as u64 * h as u64, "{w}x{h}");
        assert_eq!(g.cell_rect(0, 0).x, 0);
        assert_eq!(g.cell_rect(0, 0).y, 0);
        assert_eq!(g.cell_rect(COLUMNS - 1, ROWS - 1).right(), w - 1);
        assert_eq!(g.cell_rect(COLUMNS - 1, ROWS - 1).bottom(), h - 1);
    }
}

#[test]
fn cells_map_rows_to_suits_and_columns_to_ranks() {
    let cells: Vec<Cell> = sheet_grid().cells().collect();
    assert_eq!(cells.len(), 52);

    let suits = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];
    let labels = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];
    for cell in &cells {
        assert_eq!(cell.card.suit, suits[cell.row as usize]);
        assert_eq!(cell.card.rank.label(), labels[cell.column as usize]);
    }
    // row-major: a full row of spades comes first
    assert!(cells[..13].iter().all(|c| c.row == 0));
    assert_eq!(cells[9].card.key(), "10S");
    assert_eq!(cells[51].card.key(), "KD");
}

#[test]
fn locate_finds_the_owning_cell() {
    let g = sheet_grid();
    for cell in g.cells() {
        let r = cell.rect;
        for (px, py) in [(r.x, r.y), (r.right(), r.bottom()), (r.x, r.bottom())] {
            assert_eq!(g.locate(px, py), Some((cell.column, cell.row)));
        }
    }
    assert_eq!(g.locate(1024, 0), None);
    assert_eq!(g.locate(0, 1024), None);
}
