// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Splits a 30-bit turn into quadrant flags and quarter-wave table coordinates.
//!
//! Bit layout of the turn (most significant first):
//!
//! ```text
//!  29   28   27 ........ 20   19 ............. 4   3 .. 0
//! [neg][mir][   index (8)  ][   interp (16)     ][ unused ]
//! ```

use crate::consts::{
    INDEX_OFFSET, INDEX_WIDTH, INTERP_OFFSET, INTERP_WIDTH, QUADRANT_HIGH_MASK, QUADRANT_LOW_MASK,
};
use crate::table::SIN_QTR_SEGMENTS;

const INDEX_MASK: u32 = (1 << INDEX_WIDTH) - 1;
const INTERP_MASK: u32 = (1 << INTERP_WIDTH) - 1;

/// Table coordinates and quadrant flags for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct QuadrantSplit {
    /// Lower table index of the interpolation pair (already mirrored).
    pub index: u8,
    /// Position between `index` and `index + 1`, in units of `2^-16`.
    pub interp: u16,
    /// Quadrants 1 and 3: the quarter wave is rising.
    pub is_odd_quadrant: bool,
    /// Quadrants 3 and 4: the result is negated.
    pub is_negative_quadrant: bool,
}

impl QuadrantSplit {
    /// Resolves `turn` (in `[0, 2^30)`) into table coordinates.
    ///
    /// Outside the odd quadrants the index is mirrored to `255 - index`, using
    /// `sin(π - θ) = sin(θ)` so that only the first quarter wave is stored.
    #[inline]
    pub(crate) fn resolve(turn: u32) -> Self {
        let is_odd_quadrant = (turn & QUADRANT_LOW_MASK) == 0;
        let is_negative_quadrant = (turn & QUADRANT_HIGH_MASK) != 0;

        // Masked fields fit their target widths.
        #[allow(clippy::cast_possible_truncation)]
        let mut index = ((turn >> INDEX_OFFSET) & INDEX_MASK) as u8;
        #[allow(clippy::cast_possible_truncation)]
        let interp = ((turn >> INTERP_OFFSET) & INTERP_MASK) as u16;

        if !is_odd_quadrant {
            #[allow(clippy::cast_possible_truncation)]
            let last = (SIN_QTR_SEGMENTS - 1) as u8;
            index = last - index;
        }

        Self {
            index,
            interp,
            is_odd_quadrant,
            is_negative_quadrant,
        }
    }
}
