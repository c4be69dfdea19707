// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic `sin`/`cos` over `10^18`-scaled radians.
//!
//! Strategy:
//! - range-reduce to `[0, TWO_PI)` and map onto a 30-bit turn
//! - split the turn into quadrant flags, an 8-bit table index and a 16-bit fraction
//! - linearly interpolate between adjacent quarter-wave samples
//! - apply quadrant symmetries and rescale from `2^31 - 1` to `10^18`
//!
//! Every step is integer arithmetic, so results are bit-identical across
//! platforms and toolchains.

use crate::consts::{PI_OVER_TWO, TWO_PI};
use crate::interp::{interpolate, rescale};
use crate::quadrant::QuadrantSplit;
use crate::turn::to_turn;

/// Sine of `angle` (radians × `10^18`), scaled by `10^18`.
///
/// Total over `u128`: any angle is first reduced modulo [`TWO_PI`]. The result
/// always lies in `[-10^18, 10^18]`; its absolute error against the exact sine
/// stays below `10^13`.
///
/// ```
/// use fixed_trig::{sin, ONE, PI, PI_OVER_TWO};
///
/// assert_eq!(sin(0), 0);
/// assert_eq!(sin(PI_OVER_TWO), ONE);
/// assert_eq!(sin(PI + PI_OVER_TWO), -ONE);
/// ```
pub fn sin(angle: u128) -> i128 {
    let split = QuadrantSplit::resolve(to_turn(angle));
    rescale(interpolate(split))
}

/// Cosine of `angle` (radians × `10^18`), scaled by `10^18`.
///
/// Computed as `sin(angle + PI_OVER_TWO)`. The angle is reduced modulo
/// [`TWO_PI`] before the phase shift is added, so the addition cannot overflow
/// even for angles near `u128::MAX`. Whenever `angle + PI_OVER_TWO` is
/// representable the result is identical to `sin(angle + PI_OVER_TWO)`.
///
/// ```
/// use fixed_trig::{cos, ONE, PI};
///
/// assert_eq!(cos(0), ONE);
/// assert_eq!(cos(PI), -ONE);
/// assert!((-ONE..=ONE).contains(&cos(u128::MAX)));
/// ```
pub fn cos(angle: u128) -> i128 {
    sin(angle % TWO_PI + PI_OVER_TWO)
}

/// Returns `(sin(angle), cos(angle))`.
#[inline]
pub fn sin_cos(angle: u128) -> (i128, i128) {
    (sin(angle), cos(angle))
}
