// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Signed-angle entry points.
//!
//! Exact symmetry is enforced by reducing `|angle|` and applying the sign at
//! the end. Reducing a negative angle directly would land near the top of the
//! turn, take a different interpolation path, and break `sin(-x) == -sin(x)`
//! by a few units.

use crate::trig::{cos, sin};

/// Sine of a signed `angle` (radians × `10^18`), scaled by `10^18`.
///
/// `sin_signed(-x) == -sin_signed(x)` holds bit-for-bit.
pub fn sin_signed(angle: i128) -> i128 {
    let s = sin(angle.unsigned_abs());
    if angle.is_negative() {
        -s
    } else {
        s
    }
}

/// Cosine of a signed `angle` (radians × `10^18`), scaled by `10^18`.
///
/// `cos_signed(-x) == cos_signed(x)` holds bit-for-bit.
pub fn cos_signed(angle: i128) -> i128 {
    cos(angle.unsigned_abs())
}
