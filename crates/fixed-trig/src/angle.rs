// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed fixed-point angle.

use thiserror::Error;

use crate::consts;
use crate::trig;

/// Non-negative angle in radians scaled by `10^18`.
///
/// A thin wrapper over the raw `u128` accepted by [`sin`](crate::sin) and
/// [`cos`](crate::cos), for APIs that should not mix angles with other
/// fixed-point quantities.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle(u128);

/// Errors produced when constructing an [`Angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AngleError {
    /// The raw value was negative; use [`sin_signed`](crate::sin_signed) for signed angles.
    #[error("negative angle: {0}")]
    Negative(i128),
}

impl Angle {
    /// Zero radians.
    pub const ZERO: Self = Self(0);

    /// A quarter turn.
    pub const PI_OVER_TWO: Self = Self(consts::PI_OVER_TWO);

    /// Half a turn.
    pub const PI: Self = Self(consts::PI);

    /// A full turn.
    pub const TWO_PI: Self = Self(consts::TWO_PI);

    /// Wraps a raw radians × `10^18` value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw radians × `10^18` value.
    #[must_use]
    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Returns the equivalent angle in `[0, TWO_PI)`.
    #[must_use]
    pub const fn reduced(self) -> Self {
        Self(self.0 % consts::TWO_PI)
    }

    /// Adds two angles modulo one full turn. The result is reduced and the
    /// addition never overflows.
    #[must_use]
    pub const fn wrapping_add(self, other: Self) -> Self {
        Self((self.0 % consts::TWO_PI + other.0 % consts::TWO_PI) % consts::TWO_PI)
    }

    /// See [`sin`](crate::sin).
    pub fn sin(self) -> i128 {
        trig::sin(self.0)
    }

    /// See [`cos`](crate::cos).
    pub fn cos(self) -> i128 {
        trig::cos(self.0)
    }

    /// See [`sin_cos`](crate::sin_cos).
    pub fn sin_cos(self) -> (i128, i128) {
        trig::sin_cos(self.0)
    }
}

impl From<u128> for Angle {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

impl From<Angle> for u128 {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

impl TryFrom<i128> for Angle {
    type Error = AngleError;

    fn try_from(raw: i128) -> Result<Self, Self::Error> {
        u128::try_from(raw)
            .map(Self)
            .map_err(|_| AngleError::Negative(raw))
    }
}
