use armada::{GameError, Ship, ShipKind};

#[test]
fn test_shape_must_match_length() {
    let err = Ship::new(ShipKind::Battleship, [(0, 0), (0, 1), (0, 2)]).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidShipShape { kind: ShipKind::Battleship, cells: 3 }
    );

    // duplicate coordinates collapse and fail the same check
    let err = Ship::new(ShipKind::Destroyer, [(3, 3), (3, 3)]).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidShipShape { kind: ShipKind::Destroyer, cells: 1 }
    );

    // off-grid cells are never part of a ship
    let err = Ship::new(ShipKind::Destroyer, [(9, 9), (9, 10)]).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidShipShape { kind: ShipKind::Destroyer, cells: 1 }
    );
}

#[test]
fn test_occupies_and_cells() {
    let ship = Ship::new(ShipKind::Cruiser, [(4, 4), (4, 5), (4, 6)]).unwrap();
    assert!(ship.occupies((4, 5)));
    assert!(!ship.occupies((5, 4)));
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(4, 4), (4, 5), (4, 6)]);
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.kind().name(), "Cruiser");
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(ShipKind::Cruiser, [(4, 4), (4, 5), (4, 6)]).unwrap();
    assert!(!ship.is_sunk());
    assert!(ship.register_hit((4, 4)));
    assert!(!ship.register_hit((0, 0)));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit((4, 5)));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit((4, 6)));
    assert!(ship.is_sunk());
    // re-hitting a cell changes nothing
    assert!(ship.register_hit((4, 4)));
    assert!(ship.is_sunk());
}

#[test]
fn test_submarine_sinks_on_first_hit() {
    let mut ship = Ship::new(ShipKind::Submarine, [(7, 2)]).unwrap();
    assert!(ship.register_hit((7, 2)));
    assert!(ship.is_sunk());
}
