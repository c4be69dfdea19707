// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Range reduction from `10^18`-scaled radians onto the internal 30-bit turn.

use crate::consts::{ANGLES_IN_CYCLE, TWO_PI};

/// Maps `angle` (radians × `10^18`, any magnitude) to `[0, 2^30)`.
///
/// Computes `floor(2^30 * (angle mod TWO_PI) / TWO_PI)`. The reduced angle is
/// below `2^63`, so the product stays below `2^93` and cannot overflow `u128`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_turn(angle: u128) -> u32 {
    // Safe: `angle % TWO_PI < TWO_PI`, so the quotient is below `2^30`.
    (ANGLES_IN_CYCLE * (angle % TWO_PI) / TWO_PI) as u32
}
