//! Conversions between hex space and the cell, world, and pixel/GUI spaces.
//!
//! Three continuous/discrete boundaries are supported, each with a forward
//! and an inverse mapping that round-trip exactly for any representable hex:
//!
//! - **cell space**: offset row/column integers with an "odd-row-right"
//!   shove, for engine tilemap grids;
//! - **world space**: a ground plane parameterized by hex width and
//!   circumradius ([`WorldLayout`]);
//! - **pixel space**: the standard axial-to-pixel trigonometric mapping,
//!   parameterized by size, spacing, and origin ([`PixelLayout`]), plus a
//!   GUI variant with the vertical axis flipped.
//!
//! The inverse continuous mappings go through [`FloatHex`] and round.

use crate::coordinate::Hex;
use crate::float::FloatHex;
use serde::{Deserialize, Serialize};

impl Hex {
    /// Convert to offset cell coordinates.
    ///
    /// Odd rows are shoved right by half a cell, and the cell y axis points
    /// opposite to `r`. The parity test uses a bitwise AND so that negative
    /// rows floor toward negative infinity, matching the inverse exactly;
    /// a naive modulo would not.
    pub const fn to_cell(self) -> (i32, i32) {
        (self.q + (self.r - (self.r & 1)) / 2, -self.r)
    }

    /// Inverse of [`Hex::to_cell`].
    pub const fn from_cell(x: i32, y: i32) -> Hex {
        Hex::new(x - (-y - (-y & 1)) / 2, -y)
    }
}

/// Geometry of a hex grid laid out on a continuous ground plane.
///
/// Caller-supplied configuration, not persisted state: `hex_width` is the
/// horizontal extent of one hex, `circumradius` the center-to-vertex radius.
/// Rows are squashed vertically to `circumradius * 1.5` because adjacent
/// rows interlock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldLayout {
    pub hex_width: f32,
    pub circumradius: f32,
}

impl WorldLayout {
    /// Map a hex to its center on the ground plane, as an `(x, z)` pair.
    /// Odd rows are indented horizontally by half a hex width.
    pub fn hex_to_world(&self, hex: Hex) -> (f32, f32) {
        let indent = if hex.r % 2 == 0 {
            0.0
        } else {
            self.hex_width * 0.5
        };
        let squash = self.circumradius * 1.5;

        let x = (hex.q as f32 + (hex.r - (hex.r & 1)) as f32 / 2.0)
            * self.hex_width
            + indent;
        (x, -(hex.r as f32) * squash)
    }

    /// Map an `(x, z)` ground-plane position back to the containing hex.
    ///
    /// The row is recovered first, since the horizontal indent depends
    /// on its parity.
    pub fn world_to_hex(&self, x: f32, z: f32) -> Hex {
        let squash = self.circumradius * 1.5;
        let r = (-z / squash).round() as i32;

        let indent = if r % 2 == 0 { 0.0 } else { self.hex_width * 0.5 };
        let q = ((x - indent) / self.hex_width).round() as i32
            - (r - (r & 1)) / 2;

        Hex::new(q, r)
    }
}

/// Geometry of a hex grid rendered in pixel space.
///
/// `size` is the hex circumradius in pixels, `spacing` an additional integer
/// gap per axis, `origin` the pixel position of the grid's origin hex. All
/// caller-supplied; nothing here is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelLayout {
    pub size: f32,
    pub spacing: (i32, i32),
    pub origin: (f32, f32),
}

impl PixelLayout {
    /// Map a hex to its center pixel: the standard axial-to-pixel formulas
    /// `x = (size + spacing.x)(sqrt(3) q + sqrt(3)/2 r)`,
    /// `y = (size + spacing.y)(3/2 r)`, offset by the origin.
    pub fn hex_to_pixel(&self, hex: Hex) -> (f32, f32) {
        let sqrt3 = 3.0_f32.sqrt();
        let x = (self.size + self.spacing.0 as f32)
            * (sqrt3 * hex.q as f32 + sqrt3 / 2.0 * hex.r as f32);
        let y = (self.size + self.spacing.1 as f32) * (1.5 * hex.r as f32);

        (x + self.origin.0, y + self.origin.1)
    }

    /// Map a pixel position back to the containing hex, rounding through
    /// [`FloatHex`].
    pub fn pixel_to_hex(&self, pixel: (f32, f32)) -> Hex {
        let sqrt3 = 3.0_f32.sqrt();
        let x = pixel.0 - self.origin.0;
        let y = pixel.1 - self.origin.1;

        // recover the row first; the q term must subtract r/2 after its own
        // spacing is divided out, or unequal spacings skew the result
        let r = (2.0 / 3.0 * y) / (self.size + self.spacing.1 as f32);
        let q = (sqrt3 / 3.0 * x) / (self.size + self.spacing.0 as f32) - r / 2.0;

        FloatHex::new(q, r).round()
    }

    /// [`PixelLayout::hex_to_pixel`] with the vertical axis flipped, for GUI
    /// coordinate systems where y grows downward.
    pub fn hex_to_gui(&self, hex: Hex) -> (f32, f32) {
        let (x, y) = self.hex_to_pixel(hex);
        (x, -y)
    }

    /// Inverse of [`PixelLayout::hex_to_gui`]: un-flip the vertical axis,
    /// then invert the pixel mapping.
    pub fn gui_to_hex(&self, pixel: (f32, f32)) -> Hex {
        self.pixel_to_hex((pixel.0, -pixel.1))
    }
}
