//! Tests for named board positions.

use hotseat_engine::{Board, GameEngine, Position};

#[test]
fn test_position_index_round_trip() {
    assert_eq!(Position::TopLeft.index(), 0);
    assert_eq!(Position::Center.index(), 4);
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number(" 4 "), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("bottom-left"), Some(Position::BottomLeft));
    assert_eq!(Position::from_label_or_number("nowhere"), None);
}

#[test]
fn test_offset_clamps_at_edges() {
    assert_eq!(Position::Center.offset(-1, 0), Position::TopCenter);
    assert_eq!(Position::Center.offset(0, 1), Position::MiddleRight);
    assert_eq!(Position::TopLeft.offset(-1, -1), Position::TopLeft);
    assert_eq!(Position::BottomRight.offset(1, 0), Position::BottomRight);
}

#[test]
fn test_available_filters_occupied() {
    assert_eq!(Position::available(&Board::new()).len(), 9);

    let mut engine = GameEngine::new();
    engine.apply_move(0).unwrap();
    engine.apply_move(4).unwrap();
    let available = Position::available(engine.state().board());
    assert_eq!(available.len(), 7);
    assert!(!available.contains(&Position::TopLeft));
    assert!(!available.contains(&Position::Center));
    assert!(available.contains(&Position::BottomRight));
}
