//! Standard spot-set shapes.
//!
//! - [`line`]: a horizontal 1-wide strip.
//! - [`square`]: an `n` x `n` block at the origin.
//! - [`plus`]: a cell and its four orthogonal neighbours.
//! - [`ring`]: the border of a square, which splits in interesting ways.

use plotgrid_core::Pos;
use plotgrid_space::{SpotSet, SpotSpec};

/// `len` spots along `y = 0`, starting at the origin.
pub fn line(len: u32) -> SpotSet {
    compiled(SpotSpec::grid(len, 1))
}

/// An `n` x `n` block anchored at the origin.
pub fn square(n: u32) -> SpotSet {
    compiled(SpotSpec::grid(n, n))
}

/// `center` followed by its neighbours in up, down, left, right order.
pub fn plus(center: Pos) -> Vec<Pos> {
    let mut out = vec![center];
    out.extend(center.neighbours());
    out
}

/// The border cells of an `n` x `n` square at the origin.
pub fn ring(n: u32) -> Vec<Pos> {
    let n = i32::try_from(n).unwrap_or(i32::MAX);
    let mut out = Vec::new();
    for y in 0..n {
        for x in 0..n {
            if x == 0 || y == 0 || x == n - 1 || y == n - 1 {
                out.push(Pos::new(x, y));
            }
        }
    }
    out
}

fn compiled(spec: SpotSpec) -> SpotSet {
    match spec.compile() {
        Ok(spots) => spots,
        Err(e) => panic!("fixture shape failed to compile: {e}"),
    }
}
