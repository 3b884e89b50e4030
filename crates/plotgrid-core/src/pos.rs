//! Integer grid positions and the 4-connected neighbourhood.

use std::fmt;

/// Unit offsets of the four orthogonal neighbours: up, down, left, right.
///
/// Diagonals are deliberately absent; two tiles touching only at a corner
/// are not adjacent.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// A cell on the integer plane.
///
/// Used as a hash key everywhere in the engine. The derived ordering is
/// row-major on `(x, y)` and exists only so that tests and diagnostics can
/// sort positions; the engine never depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl Pos {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    /// Create a position from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    ///
    /// Uses wrapping arithmetic so that positions at the edge of the `i32`
    /// range never panic; such neighbours simply never match a legal spot.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The four orthogonal neighbours in the order up, down, left, right.
    ///
    /// # Examples
    ///
    /// ```
    /// use plotgrid_core::Pos;
    ///
    /// let n = Pos::new(2, 3).neighbours();
    /// assert_eq!(n[0], Pos::new(2, 4));
    /// assert_eq!(n[3], Pos::new(3, 3));
    /// ```
    pub const fn neighbours(self) -> [Pos; 4] {
        let [(ux, uy), (dx, dy), (lx, ly), (rx, ry)] = ORTHOGONAL_OFFSETS;
        [
            self.offset(ux, uy),
            self.offset(dx, dy),
            self.offset(lx, ly),
            self.offset(rx, ry),
        ]
    }

    /// Whether `other` is one of the four orthogonal neighbours of `self`.
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }

    /// Manhattan (L1) distance.
    pub fn manhattan(self, other: Pos) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx + dy
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Pos> for (i32, i32) {
    fn from(p: Pos) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
