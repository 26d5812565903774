use card_atlas_core::prelude::*;

#[test]
fn card_keys_and_labels() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).key(), "AS");
    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).key(), "10H");
    assert_eq!(Card::new(Rank::Queen, Suit::Clubs).key(), "QC");
    assert_eq!(
        Card::new(Rank::King, Suit::Diamonds).corner_label(),
        "K\n\u{2666}"
    );
    assert_eq!(Card::new(Rank::Seven, Suit::Spades).to_string(), "7\u{2660}");
}

#[test]
fn grid_positions_round_trip_through_cards() {
    for row in 0..ROWS {
        for column in 0..COLUMNS {
            let card = Card::at(column, row).expect("on sheet");
            assert_eq!(card.rank.column(), column);
            assert_eq!(card.suit.row(), row);
        }
    }
    assert!(Card::at(COLUMNS, 0).is_none());
    assert!(Card::at(0, ROWS).is_none());
}

#[test]
fn suit_colors() {
    assert_eq!(Suit::Spades.color(), SuitColor::Black);
    assert_eq!(Suit::Clubs.color(), SuitColor::Black);
    assert_eq!(Suit::Hearts.color(), SuitColor::Red);
    assert_eq!(Suit::Diamonds.color(), SuitColor::Red);

    let cfg = AtlasConfig::default();
    assert_eq!(cfg.ink(SuitColor::Black), [0, 0, 0, 255]);
    assert_eq!(cfg.ink(SuitColor::Red), [200, 0, 0, 255]);
}

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(78, 256, 79, 256);
    assert_eq!(r.right(), 156);
    assert_eq!(r.bottom(), 511);
    assert!(r.contains_point(78, 256));
    assert!(r.contains_point(156, 511));
    assert!(!r.contains_point(157, 300));
    assert_eq!(r.center(), (117.5, 384.0));
}
