// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Quarter-wave interpolation and rescaling to the `10^18` convention.

use crate::consts::{AMPLITUDE, INTERP_WIDTH, ONE};
use crate::quadrant::QuadrantSplit;
use crate::table::SIN_QTR_TABLE;

/// Returns the table pair `(entry[index], entry[index + 1])`.
///
/// The table has `u8::MAX + 2` entries, so both reads are in bounds for any `index`.
#[inline]
fn sin_qtr_pair(index: u8) -> (u32, u32) {
    let i = usize::from(index);
    (SIN_QTR_TABLE[i], SIN_QTR_TABLE[i + 1])
}

/// Linearly interpolates the quarter wave and applies the quadrant sign.
///
/// The result lies in `[-(2^31 - 1), 2^31 - 1]`.
#[inline]
pub(crate) fn interpolate(split: QuadrantSplit) -> i64 {
    let (x1, x2) = sin_qtr_pair(split.index);

    // The table is non-decreasing, so `x2 - x1` cannot underflow.
    let delta = u64::from(x2 - x1);
    let approx = (delta * u64::from(split.interp)) >> INTERP_WIDTH;

    let magnitude = if split.is_odd_quadrant {
        u64::from(x1) + approx
    } else {
        u64::from(x2) - approx
    };

    // Safe: `magnitude <= x2 <= 2^31 - 1`.
    #[allow(clippy::cast_possible_wrap)]
    let value = magnitude as i64;
    if split.is_negative_quadrant {
        -value
    } else {
        value
    }
}

/// Rescales an interpolated value from amplitude `2^31 - 1` to `10^18`.
///
/// Integer division truncates toward zero; that is the rounding policy.
#[inline]
pub(crate) fn rescale(value: i64) -> i128 {
    i128::from(value) * ONE / i128::from(AMPLITUDE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SIN_QTR_SEGMENTS;

    #[test]
    fn table_is_monotonic_non_decreasing() {
        for pair in SIN_QTR_TABLE.windows(2) {
            assert!(pair[1] >= pair[0], "table decreases at {pair:?}");
        }
    }

    #[test]
    fn table_spans_zero_to_full_amplitude() {
        assert_eq!(SIN_QTR_TABLE.len(), SIN_QTR_SEGMENTS + 1);
        assert_eq!(SIN_QTR_TABLE[0], 0);
        assert_eq!(i64::from(SIN_QTR_TABLE[SIN_QTR_SEGMENTS]), AMPLITUDE);
        // sin(π/4) = √2/2
        assert_eq!(SIN_QTR_TABLE[SIN_QTR_SEGMENTS / 2], 0x5a82_7999);
    }

    #[test]
    fn rising_quarter_interpolates_from_lower_entry() {
        let split = QuadrantSplit {
            index: 10,
            interp: 0x8000,
            is_odd_quadrant: true,
            is_negative_quadrant: false,
        };
        let (x1, x2) = sin_qtr_pair(10);
        let expected = i64::from(x1) + (i64::from(x2 - x1) >> 1);
        assert_eq!(interpolate(split), expected);
    }

    #[test]
    fn falling_quarter_interpolates_from_upper_entry() {
        let split = QuadrantSplit {
            index: 10,
            interp: 0x8000,
            is_odd_quadrant: false,
            is_negative_quadrant: true,
        };
        let (x1, x2) = sin_qtr_pair(10);
        let expected = i64::from(x2) - (i64::from(x2 - x1) >> 1);
        assert_eq!(interpolate(split), -expected);
    }

    #[test]
    fn interpolation_never_exceeds_amplitude() {
        for index in 0..=u8::MAX {
            for interp in [0, 1, 0x7fff, u16::MAX] {
                for is_odd_quadrant in [false, true] {
                    let value = interpolate(QuadrantSplit {
                        index,
                        interp,
                        is_odd_quadrant,
                        is_negative_quadrant: false,
                    });
                    assert!((0..=AMPLITUDE).contains(&value));
                }
            }
        }
    }

    #[test]
    fn rescale_maps_amplitude_onto_one_and_truncates_toward_zero() {
        assert_eq!(rescale(0), 0);
        assert_eq!(rescale(AMPLITUDE), ONE);
        assert_eq!(rescale(-AMPLITUDE), -ONE);
        // 1 * 10^18 / (2^31 - 1) = 465661287.52...
        assert_eq!(rescale(1), 465_661_287);
        assert_eq!(rescale(-1), -465_661_287);
    }
}
