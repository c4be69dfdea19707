// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use fixed_trig::{cos, sin, sin_cos, ONE, PI, PI_OVER_TWO, TWO_PI};

/// Worst-case absolute error against an exact sine, in `10^18` units (1e-5).
const MAX_ABS_ERROR: f64 = 1.0e13;

fn oracle_sin_cos(angle: u128) -> (f64, f64) {
    let radians = angle as f64 / 1.0e18;
    (libm::sin(radians) * 1.0e18, libm::cos(radians) * 1.0e18)
}

fn assert_in_range(value: i128, context: &str) {
    assert!(
        (-ONE..=ONE).contains(&value),
        "{context}: {value} outside [-1e18, 1e18]"
    );
}

#[test]
fn test_cardinal_angles_golden() {
    // (angle, expected_sin, expected_cos)
    let vectors: &[(u128, i128, i128)] = &[
        (0, 0, ONE),
        (PI_OVER_TWO, ONE, 0),
        (PI, 0, -ONE),
        (PI + PI_OVER_TWO, -ONE, 0),
        (TWO_PI, 0, ONE),
    ];

    for &(angle, expected_sin, expected_cos) in vectors {
        assert_eq!(sin(angle), expected_sin, "sin mismatch for angle={angle}");
        assert_eq!(cos(angle), expected_cos, "cos mismatch for angle={angle}");
    }
}

#[test]
fn test_known_angles_golden() {
    // Pinned outputs of the current table + interpolation; any change here is
    // a determinism break for recorded replays.
    //
    // (angle, expected_sin, expected_cos)
    let vectors: &[(u128, i128, i128)] = &[
        // PI/6
        (PI / 6, 499_997_878_680_004_681, 866_021_797_929_900_604),
        // PI/4
        (PI / 4, 707_106_714_466_170_740, 707_106_847_179_637_685),
        // PI/3
        (PI / 3, 866_021_750_898_110_564, 499_997_960_170_729_998),
        // 1 rad
        (ONE as u128, 841_470_572_092_323_830, 540_302_087_804_443_243),
        // 2 rad
        (2 * ONE as u128, 909_296_636_427_425_144, -416_146_387_074_210_861),
        // 5PI/4
        (5 * PI / 4, -707_106_714_466_170_740, -707_106_847_179_637_685),
        // 10 rad
        (10 * ONE as u128, -544_019_152_197_995_759, -839_068_555_198_176_091),
    ];

    for &(angle, expected_sin, expected_cos) in vectors {
        assert_eq!(sin(angle), expected_sin, "sin mismatch for angle={angle}");
        assert_eq!(cos(angle), expected_cos, "cos mismatch for angle={angle}");
    }
}

#[test]
fn test_error_budget_against_libm_oracle() {
    let mut max_abs: f64 = 0.0;
    let mut worst_angle: u128 = 0;

    let steps: u128 = 65_536;
    for i in 0..=steps {
        let angle = 4 * PI * i / steps;
        let (s, c) = sin_cos(angle);
        let (s_ref, c_ref) = oracle_sin_cos(angle);

        let abs = ((s as f64) - s_ref).abs().max(((c as f64) - c_ref).abs());
        if abs > max_abs {
            max_abs = abs;
            worst_angle = angle;
        }
    }

    assert!(
        max_abs <= MAX_ABS_ERROR,
        "abs-error budget exceeded: max_abs={max_abs:e} budget={MAX_ABS_ERROR:e} worst_angle={worst_angle}"
    );
}

#[test]
fn test_outputs_stay_in_range() {
    let step = TWO_PI / 10_007;
    let mut angle = 0;
    while angle <= 3 * TWO_PI {
        let (s, c) = sin_cos(angle);
        assert_in_range(s, "sin");
        assert_in_range(c, "cos");
        angle += step;
    }
}

#[test]
fn test_second_half_of_turn_is_negative() {
    let step = PI / 997;
    for i in 1..997 {
        let angle = PI + i * step;
        assert!(sin(angle) < 0, "sin({angle}) should be negative");
    }
}

#[test]
fn test_periodicity_is_exact() {
    let step = TWO_PI / 4_099;
    for i in 0..4_099 {
        let angle = i * step + 17;
        assert_eq!(sin(angle), sin(angle + TWO_PI));
        assert_eq!(sin(angle), sin(angle + 1_000 * TWO_PI));
        assert_eq!(cos(angle), cos(angle + TWO_PI));
    }
}

#[test]
fn test_cos_is_phase_shifted_sin() {
    let step = TWO_PI / 4_099;
    for i in 0..(3 * 4_099) {
        let angle = i * step + 3;
        assert_eq!(cos(angle), sin(angle + PI_OVER_TWO));
    }
}

#[test]
fn test_supplementary_angles_are_symmetric() {
    // sin(PI - x) and sin(x) read the same table segment from opposite ends;
    // they differ only by fraction quantization.
    const TOLERANCE: i128 = 1_000_000_000_000;

    let steps = 20_000;
    for i in 0..=steps {
        let angle = PI_OVER_TWO * i / steps;
        let diff = (sin(PI - angle) - sin(angle)).abs();
        assert!(diff <= TOLERANCE, "asymmetry {diff} at angle={angle}");
    }
}

#[test]
fn test_monotonic_over_first_two_quadrants() {
    let steps = 10_007;

    let mut prev = sin(0);
    for i in 1..=steps {
        let s = sin(PI_OVER_TWO * i / steps);
        assert!(s >= prev, "sin decreased on [0, PI/2] at step {i}");
        prev = s;
    }

    let mut prev = sin(PI_OVER_TWO);
    for i in 1..=steps {
        let s = sin(PI_OVER_TWO + PI_OVER_TWO * i / steps);
        assert!(s <= prev, "sin increased on [PI/2, PI] at step {i}");
        prev = s;
    }
}

#[test]
fn test_cos_tolerates_maximum_angles() {
    for k in 0..1_024 {
        let angle = u128::MAX - k;
        let c = cos(angle);
        assert_in_range(c, "cos near u128::MAX");
        assert_eq!(c, sin(angle % TWO_PI + PI_OVER_TWO));
        assert_in_range(sin(angle), "sin near u128::MAX");
    }
}
