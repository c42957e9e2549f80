//! Axial hex coordinates and the discrete geometric queries over them.
//!
//! See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
//!
//! Constraint: `q + r + s == 0`

use crate::direction::{Diagonal, Direction};
use crate::float::FloatHex;
use log::trace;
use parse_display::{Display, FromStr};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Axial hex coordinate.
///
/// Two components are stored; the third cube component is always derived as
/// [`Hex::s`], so the constraint `q + r + s == 0` holds for every value that
/// can be constructed. Equality and hashing are structural on `(q, r)`.
///
/// `Hex` is plain data: every transformation returns a new value, and all
/// queries are pure functions, so concurrent use needs no synchronization.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
#[display("Hex({q}, {r})")]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ZERO: Hex = Hex::new(0, 0);

    // The six unit vectors, one per displacing `Direction`.
    pub const RIGHT: Hex = Hex::new(1, 0);
    pub const RIGHT_DOWN: Hex = Hex::new(1, -1);
    pub const RIGHT_UP: Hex = Hex::new(0, 1);
    pub const LEFT: Hex = Hex::new(-1, 0);
    pub const LEFT_DOWN: Hex = Hex::new(0, -1);
    pub const LEFT_UP: Hex = Hex::new(-1, 1);

    /// Magic-value sentinel meaning "no valid hex".
    ///
    /// Queries which can fail return `Option<Hex>` instead, but the sentinel
    /// remains available for callers that need to store a "nothing" value
    /// in a plain `Hex` slot. Arithmetic on `INVALID` is meaningless; check
    /// [`Hex::is_valid`] before computing with untrusted values.
    pub const INVALID: Hex = Hex::new(i32::MIN, i32::MIN);

    /// Smallest coordinate pair that is not the [`Hex::INVALID`] sentinel.
    pub const MIN: Hex = Hex::new(i32::MIN + 1, i32::MIN + 1);
    /// Largest representable coordinate pair.
    pub const MAX: Hex = Hex::new(i32::MAX, i32::MAX);

    pub const fn new(q: i32, r: i32) -> Hex {
        Hex { q, r }
    }

    /// The derived third cube component, `-q - r`.
    ///
    /// Wrapping arithmetic so that the sentinel values near `i32::MIN` have a
    /// defined (if meaningless) component instead of overflowing.
    pub const fn s(self) -> i32 {
        self.q.wrapping_neg().wrapping_sub(self.r)
    }

    /// `false` only for the [`Hex::INVALID`] sentinel.
    pub fn is_valid(self) -> bool {
        self != Hex::INVALID
    }

    /// Scale both components by `k`.
    pub const fn scale(self, k: i32) -> Hex {
        Hex::new(self.q * k, self.r * k)
    }

    /// Hex grid distance from the origin: `(|q| + |r| + |s|) / 2`.
    ///
    /// `i32::MIN` has no absolute value, so any coordinate containing it
    /// (notably [`Hex::INVALID`]) short-circuits to `i32::MAX`.
    pub fn length(self) -> i32 {
        if self.q == i32::MIN || self.r == i32::MIN || self.s() == i32::MIN {
            return i32::MAX;
        }
        let sum =
            self.q.abs() as i64 + self.r.abs() as i64 + self.s().abs() as i64;
        (sum / 2).min(i32::MAX as i64) as i32
    }

    /// Number of single-hex steps separating `self` from `to`.
    pub fn distance(self, to: Hex) -> i32 {
        (self - to).length()
    }

    /// Rotate 60 degrees about the origin.
    ///
    /// Cube-coordinate rotation is a cyclic permutation of `(q, r, s)` with
    /// sign flips, so this is exact integer arithmetic; no rounding involved.
    pub fn rotate(self, clockwise: bool) -> Hex {
        if clockwise {
            Hex::new(-self.r, -self.s())
        } else {
            Hex::new(-self.s(), -self.q)
        }
    }

    /// Rotate 60 degrees about `center`: translate to the origin, rotate,
    /// translate back.
    pub fn rotate_around(self, center: Hex, clockwise: bool) -> Hex {
        center + (self - center).rotate(clockwise)
    }

    /// The neighboring hex in the given direction.
    pub fn neighbor(self, direction: Direction) -> Hex {
        self + direction.offset()
    }

    /// The hex two steps away across the given diagonal.
    pub fn diagonal_neighbor(self, diagonal: Diagonal) -> Hex {
        self + diagonal.offset()
    }

    /// The six hexes at range 1, ordered by [`Direction::ALL`].
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        Direction::iter().map(move |direction| self.neighbor(direction))
    }

    /// The displacing direction whose unit vector matches `self - to`
    /// normalized by its grid length, or [`Direction::Zero`] when the hexes
    /// coincide or the normalized vector matches no unit (numerical
    /// fallback; this never panics).
    pub fn direction_to(self, to: Hex) -> Direction {
        let vector = self - to;
        let length = vector.length();
        if length == 0 {
            return Direction::Zero;
        }

        let normalized = FloatHex::new(
            vector.q as f32 / length as f32,
            vector.r as f32 / length as f32,
        )
        .round();
        trace!("normalized direction vector: {}", normalized);

        Direction::iter()
            .find(|direction| direction.offset() == normalized)
            .unwrap_or(Direction::Zero)
    }

    /// All hexes within `range` steps of `self`.
    ///
    /// Uses the double-bounded loop over cube coordinates, which enumerates
    /// exactly the hexagonal disk of the given radius: `3n^2 + 3n + 1` hexes,
    /// no duplicates. A negative range yields an empty collection.
    pub fn hex_range(self, range: i32, exclude_center: bool) -> Vec<Hex> {
        let mut in_range = Vec::new();

        for r in -range..=range {
            let lo = (-range).max(-r - range);
            let hi = range.min(-r + range);

            for q in lo..=hi {
                if exclude_center && q == 0 && r == 0 {
                    continue;
                }
                in_range.push(self + Hex::new(q, r));
            }
        }

        in_range
    }

    /// All hexes reachable from `self` in at most `range` steps, stepping
    /// only onto hexes absent from `blocked`.
    ///
    /// Breadth-first flood fill: each fringe is built strictly from the
    /// previous fringe's unvisited, unblocked neighbors. The returned list is
    /// in discovery order and always starts with `self`, whether or not
    /// `self` itself is blocked. Steps are unweighted; there is no
    /// terrain-cost model.
    pub fn reachable(self, range: i32, blocked: &HashSet<Hex>) -> Vec<Hex> {
        let mut in_order = vec![self];
        let mut visited: HashSet<Hex> = in_order.iter().copied().collect();
        let mut fringe = vec![self];

        for _ in 1..=range {
            let mut next_fringe = Vec::new();

            for hex in fringe {
                for neighbor in hex.neighbors() {
                    if blocked.contains(&neighbor) || !visited.insert(neighbor)
                    {
                        continue;
                    }
                    in_order.push(neighbor);
                    next_fringe.push(neighbor);
                }
            }

            fringe = next_fringe;
        }

        in_order
    }

    /// Find an unblocked hex close to `self`, for correcting a placement that
    /// landed on an occupied cell.
    ///
    /// Returns `None` when `self` is not blocked: no correction is needed, so
    /// there is nothing to report. (Callers wanting "self or the closest free
    /// hex" must check membership themselves first.)
    ///
    /// Otherwise, disks of increasing radius up to `max_range` are searched;
    /// the first radius with unblocked candidates wins, and ties among the
    /// nearest candidates are broken uniformly at random using the supplied
    /// generator. Pass a seeded generator for reproducible results. `None`
    /// when every disk up to `max_range` is fully blocked.
    pub fn closest_valid_neighbor<R: Rng + ?Sized>(
        self,
        blocked: &HashSet<Hex>,
        max_range: i32,
        rng: &mut R,
    ) -> Option<Hex> {
        if !blocked.contains(&self) {
            return None;
        }

        for radius in 1..=max_range {
            let mut candidates: Vec<Hex> = self
                .hex_range(radius, false)
                .into_iter()
                .filter(|hex| !blocked.contains(hex))
                .collect();
            if candidates.is_empty() {
                continue;
            }

            // shuffle first; the stable sort then preserves the random order
            // among equidistant candidates
            candidates.shuffle(rng);
            candidates.sort_by_key(|hex| self.distance(*hex));
            return candidates.first().copied();
        }

        None
    }

    /// The straight line of hexes from `self` to `to`, inclusive.
    ///
    /// Interpolates the cube coordinates in `1 / distance` steps and rounds
    /// each sample back onto the lattice, yielding exactly `distance + 1`
    /// hexes including both endpoints. Two adjacent samples may round to the
    /// same hex.
    pub fn line_to(self, to: Hex) -> Vec<Hex> {
        let distance = self.distance(to);
        let step = 1.0 / distance.max(1) as f32;

        (0..=distance)
            .map(|i| self.lerp(to, step * i as f32).round())
            .collect()
    }

    /// Walk `distance` steps in a fixed direction, returning the
    /// `distance + 1` hexes visited, starting with `self`.
    pub fn extend_line(self, direction: Direction, distance: i32) -> Vec<Hex> {
        let offset = direction.offset();
        let mut path = vec![self];
        let mut cursor = self;

        for _ in 0..distance {
            cursor = cursor + offset;
            path.push(cursor);
        }

        path
    }

    /// [`Hex::extend_line`] with the step count taken from the distance
    /// to `to`.
    pub fn extend_line_to(self, direction: Direction, to: Hex) -> Vec<Hex> {
        self.extend_line(direction, self.distance(to))
    }

    /// Rotation-free linear interpolation toward `to`. `t` is clamped
    /// to `[0, 1]`.
    fn lerp(self, to: Hex, t: f32) -> FloatHex {
        fn lerp(a: i32, b: i32, t: f32) -> f32 {
            a as f32 * (1.0 - t) + b as f32 * t
        }

        let t = t.max(0.0).min(1.0);
        FloatHex::new(lerp(self.q, to.q, t), lerp(self.r, to.r, t))
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl AddAssign for Hex {
    fn add_assign(&mut self, rhs: Hex) {
        *self = *self + rhs;
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl SubAssign for Hex {
    fn sub_assign(&mut self, rhs: Hex) {
        *self = *self - rhs;
    }
}

impl Add<Direction> for Hex {
    type Output = Hex;

    fn add(self, rhs: Direction) -> Hex {
        self.neighbor(rhs)
    }
}

impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, rhs: i32) -> Hex {
        self.scale(rhs)
    }
}

/// Component-wise scale by an integer pair.
impl Mul<(i32, i32)> for Hex {
    type Output = Hex;

    fn mul(self, rhs: (i32, i32)) -> Hex {
        Hex::new(self.q * rhs.0, self.r * rhs.1)
    }
}
