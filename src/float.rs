//! Floating-point cube coordinates and the rounding algorithm that snaps
//! them back onto the integer lattice.
//!
//! `FloatHex` exists transiently: it is built while interpolating between two
//! [`Hex`] values or while converting a continuous pixel/world position, and
//! is immediately reduced back to a [`Hex`] with [`FloatHex::round`]. It is
//! never useful as persistent state.

use crate::coordinate::Hex;
use log::warn;
use parse_display::Display;
use thiserror::Error;

/// The three components of a cube coordinate did not sum to zero.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cube coordinate components must sum to 0, but summed to {sum}")]
pub struct CubeSumError {
    pub sum: f32,
}

/// A continuous cube coordinate.
///
/// The third component is derived, mirroring [`Hex`], but floating-point
/// drift means `q + r + s` only approximately vanishes. Drift is expected
/// and tolerated: the default constructor logs a warning rather than
/// failing. Use [`FloatHex::try_new`] when drift should be a hard error
/// (mostly useful in tests), and [`FloatHex::from_cube`] when all three
/// components come from the caller and a nonzero sum indicates a
/// programming error.
#[derive(Clone, Copy, Debug, PartialEq, Display)]
#[display("FloatHex({q}, {r})")]
pub struct FloatHex {
    pub q: f32,
    pub r: f32,
}

impl FloatHex {
    /// Construct from two axial components, deriving the third.
    ///
    /// Logs a warning if the derived component fails to close the cube sum;
    /// the value is still returned, since float drift is not fatal.
    pub fn new(q: f32, r: f32) -> FloatHex {
        let hex = FloatHex { q, r };
        let sum = q + r + hex.s();
        if sum != 0.0 {
            warn!("float inaccuracy: q + r + s should be 0 but was {}", sum);
        }
        hex
    }

    /// Strict variant of [`FloatHex::new`]: drift in the cube sum is an
    /// error instead of a warning.
    pub fn try_new(q: f32, r: f32) -> Result<FloatHex, CubeSumError> {
        let hex = FloatHex { q, r };
        let sum = q + r + hex.s();
        if sum != 0.0 {
            return Err(CubeSumError { sum });
        }
        Ok(hex)
    }

    /// Construct from all three cube components.
    ///
    /// The caller asserts the components describe a cube coordinate, so a
    /// nonzero sum is a programming error and fails loudly.
    pub fn from_cube(q: f32, r: f32, s: f32) -> Result<FloatHex, CubeSumError> {
        let sum = q + r + s;
        if sum != 0.0 {
            return Err(CubeSumError { sum });
        }
        Ok(FloatHex { q, r })
    }

    /// The derived third cube component, `-q - r`.
    pub fn s(self) -> f32 {
        -self.q - self.r
    }

    /// Snap to the nearest integer cube coordinate.
    ///
    /// `q` and `r` are rounded independently, which may leave the lattice;
    /// whichever component moved furthest is then recomputed from the
    /// residuals so the result satisfies `q + r + s == 0` exactly. This is
    /// the standard cube-rounding method; rounding each axis naively does
    /// not preserve the invariant.
    pub fn round(self) -> Hex {
        let grid_q = self.q.round();
        let grid_r = self.r.round();
        let remainder_q = self.q - grid_q;
        let remainder_r = self.r - grid_r;

        if remainder_q.abs() >= remainder_r.abs() {
            let fixup = (remainder_q + 0.5 * remainder_r).round();
            Hex::new((grid_q + fixup) as i32, grid_r as i32)
        } else {
            let fixup = (remainder_r + 0.5 * remainder_q).round();
            Hex::new(grid_q as i32, (grid_r + fixup) as i32)
        }
    }
}

impl From<Hex> for FloatHex {
    fn from(hex: Hex) -> FloatHex {
        FloatHex::new(hex.q as f32, hex.r as f32)
    }
}
