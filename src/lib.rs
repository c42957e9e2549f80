//! Hexagonal grid geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/).
//!
//! The crate is built around two value types:
//!
//! - [`Hex`]: an exact integer coordinate in axial/cube space. This is the
//!   canonical identity of a grid cell, and all discrete geometric queries
//!   (distance, rotation, neighbors, ranges, reachability, line tracing)
//!   operate on it.
//! - [`FloatHex`]: a transient floating-point cube coordinate, produced while
//!   interpolating or while converting from a continuous space, and
//!   immediately reduced back to a [`Hex`] via [`FloatHex::round`].
//!
//! Coordinates satisfy the cube constraint `q + r + s == 0`; the third
//! component is always derived, never stored. Every operation is a pure
//! function of its inputs, so values can be freely shared across threads.
//!
//! Conversions to and from engine-grid cells, world space, and pixel/GUI
//! space live in the [`layout`] module. The pixel and world mappings are
//! parameterized by caller-supplied geometry ([`PixelLayout`],
//! [`WorldLayout`]); none of it is persisted state.

pub mod coordinate;
pub mod direction;
pub mod float;
pub mod layout;

pub use coordinate::Hex;
pub use direction::{Diagonal, Direction};
pub use float::{CubeSumError, FloatHex};
pub use layout::{PixelLayout, WorldLayout};
