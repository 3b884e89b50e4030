//! End-to-end placement and removal scenarios on small grids.

use plotgrid_core::{AreaId, AreaTag, PlaceError, Pos, RemoveError};
use plotgrid_engine::{GridConfig, GridRegistry, Placement, RegionChange, SharedGrid};
use plotgrid_space::SpotSpec;
use plotgrid_test_utils::{assert_invariants, fixtures, occupied_positions};

fn p(x: i32, y: i32) -> Pos {
    Pos::new(x, y)
}

fn shape(area: &plotgrid_engine::Area<&'static str>) -> Vec<Pos> {
    let mut v: Vec<Pos> = area.positions().collect();
    v.sort();
    v
}

fn two_by_two() -> GridRegistry<&'static str> {
    GridRegistry::with_spots(fixtures::square(2))
}

#[test]
fn neighbouring_fire_tiles_share_an_area() {
    let mut g = two_by_two();
    g.place(p(0, 0), "h1", AreaTag::Fire).unwrap();
    assert_eq!(g.area_count(), 1);
    assert_eq!(shape(&g.areas()[0]), vec![p(0, 0)]);

    g.place(p(1, 0), "h2", AreaTag::Fire).unwrap();
    assert_eq!(g.area_count(), 1);
    assert_eq!(shape(&g.areas()[0]), vec![p(0, 0), p(1, 0)]);
    assert_invariants(&g);
}

#[test]
fn bridge_joins_two_singletons() {
    let mut g = two_by_two();
    g.place(p(0, 0), "h1", AreaTag::Fire).unwrap();
    g.place(p(1, 1), "h2", AreaTag::Fire).unwrap();
    assert_eq!(g.area_count(), 2);
    assert!(g.areas().iter().all(|a| a.len() == 1));

    let placed = g.place(p(1, 0), "h3", AreaTag::Fire).unwrap();
    assert!(matches!(placed, Placement::Merged { .. }));
    assert_eq!(g.area_count(), 1);
    assert_eq!(g.areas()[0].len(), 3);
    assert_invariants(&g);
}

#[test]
fn chain_splits_when_middle_is_removed() {
    let mut g = GridRegistry::with_spots(fixtures::line(4));
    for (x, h) in ["a", "b", "c", "d"].into_iter().enumerate() {
        g.place(p(x as i32, 0), h, AreaTag::Water).unwrap();
    }
    assert_eq!(g.area_count(), 1);
    assert_eq!(g.areas()[0].len(), 4);

    let removal = g.remove(p(1, 0)).unwrap();
    assert_eq!(removal.handle, "b");
    assert_eq!(removal.parts(), 2);
    let mut shapes: Vec<Vec<Pos>> = g.areas().iter().map(shape).collect();
    shapes.sort();
    assert_eq!(shapes, vec![vec![p(0, 0)], vec![p(2, 0), p(3, 0)]]);
    assert_invariants(&g);
}

#[test]
fn lone_tile_removal_leaves_nothing() {
    let config = GridConfig::new(SpotSpec::Coords(vec![p(5, 5)]));
    let mut g: GridRegistry<&str> = GridRegistry::new(config).unwrap();
    g.place(p(5, 5), "only", AreaTag::Grass).unwrap();

    let removal = g.remove(p(5, 5)).unwrap();
    assert!(removal.vanished());
    assert_eq!(g.area_count(), 0);
    assert!(!g.is_occupied(p(5, 5)));
    assert_eq!(g.remove(p(5, 5)).unwrap_err(), RemoveError::NotFound { pos: p(5, 5) });
}

#[test]
fn out_of_bounds_placement_never_mutates() {
    let mut g = two_by_two();
    g.place(p(0, 0), "h1", AreaTag::Fire).unwrap();
    let before = occupied_positions(&g);
    for pos in [p(-1, 0), p(2, 0), p(0, 2), p(100, -100)] {
        assert_eq!(
            g.place(pos, "stray", AreaTag::Fire),
            Err(PlaceError::IllegalPosition { pos })
        );
    }
    assert_eq!(occupied_positions(&g), before);
    assert_eq!(g.area_count(), 1);
    assert_eq!(g.metrics().rejected_illegal, 4);
}

#[test]
fn ring_splits_only_after_second_cut() {
    let n = 4;
    let mut g = GridRegistry::with_spots(fixtures::square(n));
    for pos in fixtures::ring(n) {
        g.place(pos, "wall", AreaTag::Grass).unwrap();
    }
    assert_eq!(g.area_count(), 1);

    // A loop survives one cut.
    let first = g.remove(p(0, 0)).unwrap();
    assert_eq!(first.change, RegionChange::Intact { area: AreaId(1) });

    let second = g.remove(p(3, 3)).unwrap();
    assert_eq!(second.parts(), 2);
    assert_invariants(&g);
}

#[test]
fn holes_are_not_legal_spots() {
    let spec = SpotSpec::Without {
        base: Box::new(SpotSpec::grid(3, 3)),
        holes: Box::new(SpotSpec::Coords(vec![p(1, 1)])),
    };
    let mut g: GridRegistry<&str> = GridRegistry::new(GridConfig::new(spec)).unwrap();
    assert!(g.place(p(1, 1), "x", AreaTag::Fire).is_err());
    for pos in fixtures::ring(3) {
        g.place(pos, "x", AreaTag::Fire).unwrap();
    }
    assert_eq!(g.area_count(), 1);
    assert!(g.frontier().is_empty());
    assert_invariants(&g);
}

#[test]
fn shared_grid_matches_direct_use() {
    let shared = SharedGrid::new(two_by_two());
    shared.place(p(0, 0), "h1", AreaTag::Fire).unwrap();
    shared.place(p(1, 1), "h2", AreaTag::Fire).unwrap();
    shared.place(p(1, 0), "h3", AreaTag::Fire).unwrap();
    shared.read(|g| assert_invariants(g)).unwrap();
    assert_eq!(shared.read(|g| g.area_count()).unwrap(), 1);
}
