//! Declarative descriptions of the playable grid.

use crate::error::SpaceError;
use crate::spots::SpotSet;
use plotgrid_core::Pos;

/// Describes a set of legal spots.
///
/// Compiled once into a [`SpotSet`] with [`compile`](SpotSpec::compile).
/// Every variant yields spots in a deterministic order: rectangles and
/// diamonds row by row (`y` ascending, then `x` ascending), explicit
/// lists in the order given.
#[derive(Clone, Debug, PartialEq)]
pub enum SpotSpec {
    /// Axis-aligned rectangle, both corners inclusive.
    Rect {
        /// Minimum corner.
        min: Pos,
        /// Maximum corner.
        max: Pos,
    },
    /// All positions within Manhattan distance `radius` of `center`.
    Diamond {
        /// Center position.
        center: Pos,
        /// Maximum Manhattan distance (inclusive).
        radius: u32,
    },
    /// Explicit list of positions. Duplicates are collapsed.
    Coords(Vec<Pos>),
    /// Union of several shapes, in first-seen order.
    Union(Vec<SpotSpec>),
    /// `base` with every spot of `holes` removed.
    Without {
        /// Shape to start from.
        base: Box<SpotSpec>,
        /// Shape to cut out.
        holes: Box<SpotSpec>,
    },
}

impl SpotSpec {
    /// Upper bound on the number of spots a single shape may describe.
    pub const MAX_SPOTS: u64 = 1 << 24;

    /// Shorthand for a `width` x `height` rectangle anchored at the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use plotgrid_space::SpotSpec;
    ///
    /// let spots = SpotSpec::grid(4, 3).compile().unwrap();
    /// assert_eq!(spots.len(), 12);
    /// ```
    pub fn grid(width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self::Rect {
            min: Pos::ORIGIN,
            max: Pos::new(w - 1, h - 1),
        }
    }

    /// Compile into a spot set.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if the result has no spots.
    pub fn compile(&self) -> Result<SpotSet, SpaceError> {
        let mut out = SpotSet::with_capacity(self.size_hint());
        self.compile_into(&mut out)?;
        if out.is_empty() {
            return Err(SpaceError::EmptySpace);
        }
        Ok(out)
    }

    /// Upper estimate of the compiled size; `0` past [`MAX_SPOTS`](Self::MAX_SPOTS),
    /// where compilation fails anyway.
    fn size_hint(&self) -> usize {
        let cells = match self {
            Self::Rect { min, max } => {
                let w = (i64::from(max.x) - i64::from(min.x) + 1).max(0) as u64;
                let h = (i64::from(max.y) - i64::from(min.y) + 1).max(0) as u64;
                w.saturating_mul(h)
            }
            Self::Diamond { radius, .. } => diamond_cells(*radius),
            Self::Coords(coords) => coords.len() as u64,
            Self::Union(parts) => parts
                .iter()
                .fold(0u64, |acc, p| acc.saturating_add(p.size_hint() as u64)),
            Self::Without { base, .. } => base.size_hint() as u64,
        };
        if cells > Self::MAX_SPOTS {
            return 0;
        }
        usize::try_from(cells).unwrap_or(0)
    }

    fn compile_into(&self, out: &mut SpotSet) -> Result<(), SpaceError> {
        match self {
            Self::Rect { min, max } => compile_rect(*min, *max, out),
            Self::Diamond { center, radius } => compile_diamond(*center, *radius, out),
            Self::Coords(coords) => {
                check_limit(out.len() as u64 + coords.len() as u64)?;
                out.extend(coords.iter().copied());
                Ok(())
            }
            Self::Union(parts) => {
                for part in parts {
                    part.compile_into(out)?;
                }
                Ok(())
            }
            Self::Without { base, holes } => {
                base.compile_into(out)?;
                let mut cut = SpotSet::new();
                holes.compile_into(&mut cut)?;
                for pos in cut.iter() {
                    out.remove(pos);
                }
                Ok(())
            }
        }
    }
}

fn check_limit(requested: u64) -> Result<(), SpaceError> {
    if requested > SpotSpec::MAX_SPOTS {
        return Err(SpaceError::TooManySpots {
            requested,
            max: SpotSpec::MAX_SPOTS,
        });
    }
    Ok(())
}

fn compile_rect(min: Pos, max: Pos, out: &mut SpotSet) -> Result<(), SpaceError> {
    if min.x > max.x || min.y > max.y {
        return Err(SpaceError::InvalidRect { min, max });
    }
    let width = (i64::from(max.x) - i64::from(min.x) + 1) as u64;
    let height = (i64::from(max.y) - i64::from(min.y) + 1) as u64;
    check_limit((out.len() as u64).saturating_add(width.saturating_mul(height)))?;
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            out.insert(Pos::new(x, y));
        }
    }
    Ok(())
}

// 2r^2 + 2r + 1 cells.
fn diamond_cells(radius: u32) -> u64 {
    let r = u64::from(radius);
    r.saturating_mul(r)
        .saturating_mul(2)
        .saturating_add(2 * r + 1)
}

fn compile_diamond(center: Pos, radius: u32, out: &mut SpotSet) -> Result<(), SpaceError> {
    check_limit((out.len() as u64).saturating_add(diamond_cells(radius)))?;

    let r = i64::from(radius);
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    for dy in -r..=r {
        let span = r - dy.abs();
        for dx in -span..=span {
            // Cells that fall off the i32 plane are skipped.
            if let (Ok(x), Ok(y)) = (i32::try_from(cx + dx), i32::try_from(cy + dy)) {
                out.insert(Pos::new(x, y));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_row_major_and_inclusive() {
        let s = SpotSpec::Rect {
            min: Pos::new(0, 0),
            max: Pos::new(1, 1),
        }
        .compile()
        .unwrap();
        assert_eq!(
            s.iter().collect::<Vec<_>>(),
            vec![
                Pos::new(0, 0),
                Pos::new(1, 0),
                Pos::new(0, 1),
                Pos::new(1, 1)
            ]
        );
    }

    #[test]
    fn inverted_rect_is_rejected() {
        let err = SpotSpec::Rect {
            min: Pos::new(3, 0),
            max: Pos::new(1, 5),
        }
        .compile()
        .unwrap_err();
        assert_eq!(
            err,
            SpaceError::InvalidRect {
                min: Pos::new(3, 0),
                max: Pos::new(1, 5)
            }
        );
    }

    #[test]
    fn oversized_rect_is_rejected_before_allocating() {
        let err = SpotSpec::Rect {
            min: Pos::new(i32::MIN, i32::MIN),
            max: Pos::new(i32::MAX, i32::MAX),
        }
        .compile()
        .unwrap_err();
        assert!(matches!(err, SpaceError::TooManySpots { .. }));
    }

    #[test]
    fn diamond_cell_count() {
        let s = SpotSpec::Diamond {
            center: Pos::new(5, 5),
            radius: 2,
        }
        .compile()
        .unwrap();
        // 1 + 3 + 5 + 3 + 1
        assert_eq!(s.len(), 13);
        assert!(s.iter().all(|p| p.manhattan(Pos::new(5, 5)) <= 2));
    }

    #[test]
    fn diamond_radius_zero_is_single_spot() {
        let s = SpotSpec::Diamond {
            center: Pos::new(-1, 7),
            radius: 0,
        }
        .compile()
        .unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![Pos::new(-1, 7)]);
    }

    #[test]
    fn diamond_at_plane_edge_skips_unrepresentable_cells() {
        let s = SpotSpec::Diamond {
            center: Pos::new(i32::MAX, 0),
            radius: 1,
        }
        .compile()
        .unwrap();
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn union_keeps_first_seen_order() {
        let s = SpotSpec::Union(vec![
            SpotSpec::Coords(vec![Pos::new(9, 9), Pos::new(0, 0)]),
            SpotSpec::Coords(vec![Pos::new(0, 0), Pos::new(1, 0)]),
        ])
        .compile()
        .unwrap();
        assert_eq!(
            s.iter().collect::<Vec<_>>(),
            vec![Pos::new(9, 9), Pos::new(0, 0), Pos::new(1, 0)]
        );
    }

    #[test]
    fn without_cuts_holes() {
        let s = SpotSpec::Without {
            base: Box::new(SpotSpec::grid(3, 3)),
            holes: Box::new(SpotSpec::Coords(vec![Pos::new(1, 1), Pos::new(7, 7)])),
        }
        .compile()
        .unwrap();
        assert_eq!(s.len(), 8);
        assert!(!s.contains(Pos::new(1, 1)));
    }

    #[test]
    fn everything_cut_is_empty_space() {
        let err = SpotSpec::Without {
            base: Box::new(SpotSpec::grid(1, 1)),
            holes: Box::new(SpotSpec::grid(1, 1)),
        }
        .compile()
        .unwrap_err();
        assert_eq!(err, SpaceError::EmptySpace);
    }

    #[test]
    fn empty_coords_is_empty_space() {
        assert_eq!(
            SpotSpec::Coords(vec![]).compile().unwrap_err(),
            SpaceError::EmptySpace
        );
    }

    #[test]
    fn size_hint_matches_simple_shapes() {
        assert_eq!(SpotSpec::grid(4, 3).size_hint(), 12);
        let diamond = SpotSpec::Diamond {
            center: Pos::ORIGIN,
            radius: 2,
        };
        assert_eq!(diamond.size_hint(), 13);
        let union = SpotSpec::Union(vec![SpotSpec::grid(2, 2), diamond]);
        assert_eq!(union.size_hint(), 17);
        let compiled = union.compile().unwrap();
        assert!(compiled.len() <= union.size_hint());
    }

    #[test]
    fn size_hint_is_zero_for_oversized_or_inverted_shapes() {
        let huge = SpotSpec::Rect {
            min: Pos::new(i32::MIN, i32::MIN),
            max: Pos::new(i32::MAX, i32::MAX),
        };
        assert_eq!(huge.size_hint(), 0);
        let inverted = SpotSpec::Rect {
            min: Pos::new(3, 0),
            max: Pos::new(1, 5),
        };
        assert_eq!(inverted.size_hint(), 0);
    }
}
