// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-point constants.
//!
//! Public constants define the boundary convention: radians and results are
//! integers scaled by `10^18`. The crate-private constants describe the
//! internal 30-bit turn and the bit layout used to address the quarter-wave
//! table.

/// `1.0` in the `10^18`-scaled result convention.
pub const ONE: i128 = 1_000_000_000_000_000_000;

/// `π` scaled by `10^18` (truncated).
pub const PI: u128 = 3_141_592_653_589_793_238;

/// One full turn (`2π`) scaled by `10^18`.
pub const TWO_PI: u128 = 2 * PI;

/// A quarter turn (`π/2`) scaled by `10^18`.
pub const PI_OVER_TWO: u128 = PI / 2;

/// Internal angle units per full turn (`2^30`).
pub(crate) const ANGLES_IN_CYCLE: u128 = 1 << 30;

/// Set for the second half of the turn (quadrants 3 and 4): output is negated.
pub(crate) const QUADRANT_HIGH_MASK: u32 = 1 << 29;

/// Set for quadrants 2 and 4: the table index is mirrored.
pub(crate) const QUADRANT_LOW_MASK: u32 = 1 << 28;

/// Width of the table-index field.
pub(crate) const INDEX_WIDTH: u32 = 8;

/// Width of the interpolation field.
pub(crate) const INTERP_WIDTH: u32 = 16;

/// The index field sits directly below the two quadrant bits.
pub(crate) const INDEX_OFFSET: u32 = 28 - INDEX_WIDTH;

/// The interpolation field sits directly below the index field.
pub(crate) const INTERP_OFFSET: u32 = INDEX_OFFSET - INTERP_WIDTH;

/// Peak table amplitude (`2^31 - 1`), i.e. the internal representation of `1.0`.
pub(crate) const AMPLITUDE: i64 = (1 << 31) - 1;
