//! Pieces module tests - catalog shapes, colors and sizes

use std::collections::HashSet;

use block_puzzle::core::pieces::{get_cell_count, get_color, get_dimensions, get_shape};
use block_puzzle::types::{PieceType, PIECE_TYPE_COUNT};

// ============== Catalog Tests ==============

#[test]
fn test_catalog_has_fifteen_types() {
    assert_eq!(PieceType::ALL.len(), PIECE_TYPE_COUNT);
    let ids: HashSet<u8> = PieceType::ALL.iter().map(|p| p.id()).collect();
    assert_eq!(ids.len(), PIECE_TYPE_COUNT);
}

#[test]
fn test_cell_counts() {
    let expected = [
        (PieceType::I, 4),
        (PieceType::O, 4),
        (PieceType::T, 4),
        (PieceType::S, 4),
        (PieceType::Z, 4),
        (PieceType::J, 4),
        (PieceType::L, 4),
        (PieceType::Dot, 1),
        (PieceType::Line2, 2),
        (PieceType::Line3, 3),
        (PieceType::Line5, 5),
        (PieceType::Corner, 3),
        (PieceType::BigCorner, 5),
        (PieceType::Square3, 9),
        (PieceType::Rect2x3, 6),
    ];
    for (piece, cells) in expected {
        assert_eq!(get_cell_count(piece), cells, "{piece}");
    }
}

#[test]
fn test_cell_count_matches_shape() {
    for piece in PieceType::ALL {
        let shape = get_shape(piece);
        assert_eq!(shape.filled_offsets().count() as u32, get_cell_count(piece));
    }
}

#[test]
fn test_dimensions() {
    assert_eq!(get_dimensions(PieceType::I), (1, 4));
    assert_eq!(get_dimensions(PieceType::Line5), (1, 5));
    assert_eq!(get_dimensions(PieceType::BigCorner), (3, 3));
    assert_eq!(get_dimensions(PieceType::Rect2x3), (2, 3));
    assert_eq!(get_dimensions(PieceType::Dot), (1, 1));
}

// ============== Shape Tests ==============

#[test]
fn test_every_shape_fills_its_bounding_box_edges() {
    // A normalized shape has at least one filled cell on its first row and
    // first column, otherwise the anchor would sit outside the piece bounds.
    for piece in PieceType::ALL {
        let shape = get_shape(piece);
        let offsets: Vec<_> = shape.filled_offsets().collect();
        assert!(offsets.iter().any(|&(r, _)| r == 0), "{piece} top row empty");
        assert!(offsets.iter().any(|&(_, c)| c == 0), "{piece} left column empty");
        assert!(offsets.iter().all(|&(r, c)| r < shape.rows() && c < shape.cols()));
    }
}

#[test]
fn test_corner_shapes() {
    let corner = get_shape(PieceType::Corner);
    assert!(corner.is_filled(0, 0));
    assert!(!corner.is_filled(0, 1));
    assert!(corner.is_filled(1, 1));

    let big = get_shape(PieceType::BigCorner);
    assert!(big.is_filled(2, 2));
    assert!(!big.is_filled(0, 1));
}

#[test]
fn test_colors_are_distinct() {
    let colors: HashSet<_> = PieceType::ALL.iter().map(|&p| get_color(p)).collect();
    assert_eq!(colors.len(), PIECE_TYPE_COUNT);
}

#[test]
fn test_names_round_trip() {
    for piece in PieceType::ALL {
        assert_eq!(PieceType::from_str(piece.as_str()), Some(piece));
        assert_eq!(PieceType::from_id(piece.id()), Some(piece));
    }
    assert_eq!(PieceType::from_str("BIG_CORNER"), Some(PieceType::BigCorner));
    assert_eq!(PieceType::from_str("hexomino"), None);
}
