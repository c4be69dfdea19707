// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared inputs for the fixed-trig benchmarks.

use fixed_trig::TWO_PI;

/// Returns `n` angles spread evenly over `[0, turns * TWO_PI)`.
///
/// Spreading across several turns exercises range reduction as well as all
/// four quadrants. The span saturates at `u128::MAX` for `turns` beyond
/// `u128::MAX / TWO_PI`; each angle is computed as `q * i + r * i / n` so no
/// intermediate product overflows.
pub fn spread_angles(n: usize, turns: u128) -> Vec<u128> {
    let n_u128 = (n as u128).max(1);
    let span = turns.saturating_mul(TWO_PI);
    let (q, r) = (span / n_u128, span % n_u128);
    (0..n as u128).map(|i| q * i + r * i / n_u128).collect()
}
