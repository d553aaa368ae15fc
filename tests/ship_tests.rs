use sinkfleet::{Coordinate, Ship};

fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

#[test]
fn test_new_holds_all_coordinates() {
    let ship = Ship::new(4, ["A1", "A2", "A3", "A4"].map(c));
    assert_eq!(ship.length(), 4);
    assert_eq!(ship.remaining().len(), 4);
    let cells: Vec<_> = ship.remaining().iter().collect();
    assert_eq!(cells, vec![c("A1"), c("A2"), c("A3"), c("A4")]);
    assert!(!ship.is_sunk());
}

#[test]
fn test_remove_hit_coordinate_once() {
    let mut ship = Ship::new(4, ["B2", "C2", "D2", "E2"].map(c));
    assert!(ship.remove_hit_coordinate(c("C2")));
    assert_eq!(ship.remaining().len(), 3);
    assert!(!ship.remaining().contains(c("C2")));

    // second removal is a no-op
    assert!(!ship.remove_hit_coordinate(c("C2")));
    assert_eq!(ship.remaining().len(), 3);

    // coordinate that never belonged to the ship
    assert!(!ship.remove_hit_coordinate(c("J10")));
    assert_eq!(ship.remaining().len(), 3);
}

#[test]
fn test_sunk_after_last_segment() {
    let mut ship = Ship::new(4, ["A1", "A2", "A3", "A4"].map(c));
    for raw in ["A1", "A2", "A3"] {
        ship.remove_hit_coordinate(c(raw));
        assert!(!ship.is_sunk());
    }
    assert!(ship.remove_hit_coordinate(c("A4")));
    assert!(ship.is_sunk());
    assert_eq!(ship.length(), 4);
}
