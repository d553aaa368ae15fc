use proptest::prelude::*;
use sinkfleet::{Command, Coordinate, GameError};

fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

#[test]
fn test_parse_corners_and_case() {
    let a1 = c("a1");
    assert_eq!((a1.row(), a1.col()), (0, 0));
    assert_eq!(a1, c("A1"));

    let j10 = c("J10");
    assert_eq!((j10.row(), j10.col()), (9, 9));
    assert_eq!(j10.to_string(), "J10");
    assert_eq!(j10.row_letter(), 'J');
    assert_eq!(j10.col_number(), 10);
}

#[test]
fn test_parse_leading_zero_normalizes() {
    assert_eq!(c("A05"), c("A5"));
    assert_eq!(c("a05").to_string(), "A5");
}

#[test]
fn test_parse_rejects_malformed() {
    for raw in [
        "", "A", "K5", "k5", "A0", "A00", "A11", "A100", "5A", "A-1", "A+1", "AA", "A 1", "é1",
        "SHOW", "J 10",
    ] {
        assert_eq!(
            Coordinate::parse(raw),
            Err(GameError::InvalidCoordinate(raw.to_string())),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_command_parse() {
    assert_eq!(Command::parse("SHOW"), Ok(Command::Show));
    assert_eq!(Command::parse("show"), Ok(Command::Show));
    assert_eq!(Command::parse("b7"), Ok(Command::Fire(c("B7"))));
    assert!(matches!(
        Command::parse("SHOWS"),
        Err(GameError::InvalidCoordinate(_))
    ));
}

#[test]
fn test_new_out_of_range() {
    assert_eq!(
        Coordinate::new(10, 0),
        Err(GameError::OutOfRange { row: 10, col: 0 })
    );
    assert_eq!(
        Coordinate::new(3, 10),
        Err(GameError::OutOfRange { row: 3, col: 10 })
    );
    assert!(Coordinate::from_index(100).is_err());
}

#[test]
fn test_all_covers_board_in_order() {
    let all: Vec<_> = Coordinate::all().collect();
    assert_eq!(all.len(), 100);
    assert_eq!(all[0], c("A1"));
    assert_eq!(all[10], c("B1"));
    assert_eq!(all[99], c("J10"));
    for (i, coord) in all.iter().enumerate() {
        assert_eq!(coord.index(), i);
        assert_eq!(Coordinate::from_index(i).unwrap(), *coord);
    }
}

#[test]
fn test_serializes_as_string() {
    assert_eq!(serde_json::to_string(&c("B7")).unwrap(), "\"B7\"");
    let back: Coordinate = serde_json::from_str("\"j10\"").unwrap();
    assert_eq!(back, c("J10"));
    assert!(serde_json::from_str::<Coordinate>("\"K1\"").is_err());
}

proptest! {
    #[test]
    fn valid_coordinates_parse(row in 0..10usize, col in 1..=10usize, lower in any::<bool>()) {
        let letter = (b'A' + row as u8) as char;
        let letter = if lower { letter.to_ascii_lowercase() } else { letter };
        let raw = format!("{}{}", letter, col);
        let coord = Coordinate::parse(&raw).unwrap();
        prop_assert_eq!(coord.row(), row);
        prop_assert_eq!(coord.col(), col - 1);
        prop_assert_eq!(coord.to_string(), raw.to_ascii_uppercase());
    }

    #[test]
    fn rows_outside_a_to_j_fail(row in "[K-Zk-z]", col in 1..=10usize) {
        let raw = format!("{}{}", row, col);
        prop_assert!(Coordinate::parse(&raw).is_err());
    }

    #[test]
    fn columns_outside_range_fail(row in "[A-J]", col in 11..100usize) {
        let raw = format!("{}{}", row, col);
        prop_assert!(Coordinate::parse(&raw).is_err());
    }

    #[test]
    fn wrong_lengths_fail(raw in "[A-Ja-j][0-9]{3,6}|[A-Ja-j]?") {
        prop_assert!(Coordinate::parse(&raw).is_err());
    }
}
