// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian day counting and the rotation epoch constants.
//!
//! | Constant | Meaning | Value |
//! |----------|---------|-------|
//! | [`EPOCH_UNIX_DAYS`] | 0001-01-01 in days relative to 1970-01-01 | −719 162 |
//! | [`EPOCH_UNIX_MS`] | 0001-01-01T00:00:00Z in Unix milliseconds | −62 135 596 800 000 |
//! | [`SIDEREAL_DAY`] | one rotation | 86 164 s |
//! | [`UNIX_EPOCH_ROTATIONS`] | rotations completed at 1970-01-01T00:00:00Z | ≈ 721 131.758 |
//!
//! All values are derived from [`days_from_civil`] at compile time rather
//! than copied from tables.

use qtty::{Seconds, Simplify};

/// Days since 1970-01-01 of the proleptic Gregorian date `year-month-day`.
///
/// Howard Hinnant's `days_from_civil`; valid for every `i64` year that does
/// not overflow. `month` is 1–12, `day` is 1–31 (not range-checked).
pub const fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let m = month as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let mp = if m > 2 { m - 3 } else { m + 9 }; // March-based month [0, 11]
    let doy = (153 * mp + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Milliseconds in one civil (solar) day.
pub const DAY_MS: i64 = 86_400_000;

/// Milliseconds in one sidereal day (23 h 56 m 4 s).
pub const SIDEREAL_DAY_MS: i64 = 86_164_000;

/// One sidereal day: the duration of exactly one rotation.
pub const SIDEREAL_DAY: Seconds = Seconds::new(SIDEREAL_DAY_MS as f64 / 1_000.0);

/// Day number of the rotation epoch (0001-01-01) relative to the Unix epoch.
pub const EPOCH_UNIX_DAYS: i64 = days_from_civil(1, 1, 1);

/// The rotation epoch (0001-01-01T00:00:00Z) in Unix milliseconds.
pub const EPOCH_UNIX_MS: i64 = EPOCH_UNIX_DAYS * DAY_MS;

/// Rotations completed between the rotation epoch and 1970-01-01T00:00:00Z.
///
/// Adding this to `(t − unix_epoch) / SIDEREAL_DAY` yields the same count as
/// measuring from year 1 directly.
pub const UNIX_EPOCH_ROTATIONS: f64 = (-EPOCH_UNIX_MS) as f64 / SIDEREAL_DAY_MS as f64;

/// Number of sidereal rotations contained in an elapsed duration.
#[inline]
pub fn rotations_in(elapsed: Seconds) -> f64 {
    (elapsed / SIDEREAL_DAY).simplify().value()
}

/// Elapsed duration of `rotations` sidereal rotations.
#[inline]
pub fn span_of(rotations: f64) -> Seconds {
    Seconds::new(rotations * SIDEREAL_DAY.value())
}
