//! Test utilities for PlotGrid development.
//!
//! Provides standard spot-set shapes ([`fixtures`]) and the structural
//! checks every registry must pass after any sequence of calls
//! ([`check_invariants`], [`assert_invariants`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::IndexSet;
use plotgrid_core::Pos;
use plotgrid_engine::GridRegistry;
use plotgrid_space::components;

/// Every occupied position, in area order.
pub fn occupied_positions<H>(registry: &GridRegistry<H>) -> IndexSet<Pos> {
    registry.tiles().map(|(pos, _)| pos).collect()
}

/// Check the area invariants, returning the first violation found.
///
/// - no area is empty;
/// - every member is a legal spot;
/// - no position belongs to two areas;
/// - area ids are unique;
/// - each area is a single 4-connected component;
/// - no two same-tag areas touch orthogonally (areas are maximal).
pub fn check_invariants<H>(registry: &GridRegistry<H>) -> Result<(), String> {
    let mut seen_ids = IndexSet::new();
    let mut owner: indexmap::IndexMap<Pos, usize> = indexmap::IndexMap::new();

    for (i, area) in registry.areas().iter().enumerate() {
        if area.is_empty() {
            return Err(format!("{} is empty", area.id()));
        }
        if !seen_ids.insert(area.id()) {
            return Err(format!("{} appears twice", area.id()));
        }
        for pos in area.positions() {
            if !registry.is_legal(pos) {
                return Err(format!("{} holds illegal spot {pos}", area.id()));
            }
            if let Some(prev) = owner.insert(pos, i) {
                return Err(format!(
                    "{pos} held by both {} and {}",
                    registry.areas()[prev].id(),
                    area.id()
                ));
            }
        }
        let members: IndexSet<Pos> = area.positions().collect();
        let parts = components(&members).len();
        if parts != 1 {
            return Err(format!("{} has {parts} components", area.id()));
        }
    }

    for (i, area) in registry.areas().iter().enumerate() {
        for pos in area.positions() {
            for n in pos.neighbours() {
                let Some(&j) = owner.get(&n) else { continue };
                let other = &registry.areas()[j];
                if j != i && other.tag() == area.tag() {
                    return Err(format!(
                        "{} and {} share tag {} and touch at {pos}/{n}",
                        area.id(),
                        other.id(),
                        area.tag()
                    ));
                }
            }
        }
    }

    if owner.len() != registry.occupied_count() {
        return Err(format!(
            "occupied_count {} disagrees with {} members",
            registry.occupied_count(),
            owner.len()
        ));
    }
    Ok(())
}

/// Panic with a descriptive message if any area invariant is violated.
pub fn assert_invariants<H>(registry: &GridRegistry<H>) {
    if let Err(violation) = check_invariants(registry) {
        panic!("area invariant violated: {violation}");
    }
}
