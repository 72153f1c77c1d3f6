//! Direction and distance primitives for classifying moves
//!
//! Both inputs are whole numbers of squares, so every value the movement
//! rules compare against (0, ±1, ±2, ±0.5, 1, √2, √5) comes out of IEEE
//! division and square root exactly. Exact `==` comparison on the results is
//! therefore sound; keep positions in square units, never fractional pixels.

use crate::Square;

/// Distance of one orthogonal step, in square units
pub const STEP: f64 = 1.0;

/// Distance of one diagonal step, in square units
pub const DIAGONAL_STEP: f64 = core::f64::consts::SQRT_2;

/// Slope of the line from `from` to `to`
///
/// Rank grows downward, so a move toward rank 0 on growing files has a
/// negative gradient. Two squares on the same file have no finite slope and
/// yield [`f64::INFINITY`].
///
/// ```
/// # use board::{geometry, Square};
/// let a1 = "a1".parse::<Square>().unwrap();
/// assert_eq!(geometry::gradient(a1, "h1".parse().unwrap()), 0.0);
/// assert_eq!(geometry::gradient(a1, "a5".parse().unwrap()), f64::INFINITY);
/// assert_eq!(geometry::gradient(a1, "d4".parse().unwrap()), -1.0);
/// ```
pub fn gradient(from: Square, to: Square) -> f64 {
    let rise = to.rank() as f64 - from.rank() as f64;
    let run = to.file() as f64 - from.file() as f64;
    if run == 0.0 {
        f64::INFINITY
    } else {
        rise / run
    }
}

/// Euclidean distance between two squares, in square units
pub fn distance(from: Square, to: Square) -> f64 {
    let files = to.file() as i32 - from.file() as i32;
    let ranks = to.rank() as i32 - from.rank() as i32;
    ((files * files + ranks * ranks) as f64).sqrt()
}

/// Distance of a knight's leap (the (2, 1) offset), in square units
///
/// Computed with the same operations as [`distance`] so the knight rule's
/// equality comparison is exact.
pub fn knight_leap() -> f64 {
    5.0_f64.sqrt()
}
