// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fixed-trig: deterministic integer-only `sin`/`cos`.
//!
//! Angles are radians scaled by `10^18`; results are scaled by `10^18` and lie
//! in `[-10^18, 10^18]`. The approximation is a quarter-wave lookup table with
//! linear interpolation, evaluated entirely in integer arithmetic so that
//! lockstep simulations and replay logs agree bit-for-bit on every platform.
//!
//! ```
//! use fixed_trig::{cos, sin, ONE, PI, PI_OVER_TWO};
//!
//! assert_eq!(sin(PI_OVER_TWO), ONE);
//! assert_eq!(cos(PI), -ONE);
//! assert_eq!(cos(PI / 3), sin(PI / 3 + PI_OVER_TWO));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn
)]

/// Fixed-point constants (`ONE`, `PI`, `TWO_PI`, `PI_OVER_TWO`).
pub mod consts;

mod angle;
mod interp;
mod quadrant;
mod signed;
mod table;
mod trig;
mod turn;

pub use angle::{Angle, AngleError};
pub use consts::{ONE, PI, PI_OVER_TWO, TWO_PI};
pub use signed::{cos_signed, sin_signed};
pub use trig::{cos, sin, sin_cos};
