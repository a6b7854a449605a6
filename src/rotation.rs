// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Cumulative sidereal rotation count.
//!
//! [`Rotations`] is the core type of the crate. It stores a single `f64`:
//! the number of sidereal days (86 164 s each) elapsed since
//! 0001-01-01T00:00:00Z on the proleptic Gregorian calendar. The value is
//! always finite and non-negative; every constructor validates it.
//!
//! Conversions from a timestamp work at millisecond resolution and round the
//! count to six fractional digits, so `1 ms ≈ 1.16 × 10⁻⁸` rotations never
//! survives the rounding while one second (≈ 1.16 × 10⁻⁵) always does.

use chrono::{DateTime, Utc};
use qtty::Seconds;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Sub;

use crate::calendar::{rotations_in, span_of, EPOCH_UNIX_MS};
use crate::error::{Result, RotationError};

/// Scale applied before rounding to six fractional digits.
const MICRO: f64 = 1_000_000.0;

/// Round half away from zero at the sixth fractional digit.
#[inline]
pub fn round_micro(value: f64) -> f64 {
    (value * MICRO).round() / MICRO
}

/// Number of sidereal rotations since 0001-01-01T00:00:00Z.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rotations(f64);

impl Rotations {
    /// The epoch itself.
    pub const ZERO: Self = Self(0.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Validate a raw count.
    ///
    /// Fails with [`RotationError::InvalidRotations`] when `value` is
    /// negative, NaN or infinite. The value is kept as given (no rounding).
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(RotationError::InvalidRotations { value })
        }
    }

    /// Rotation count at a Unix timestamp in milliseconds, rounded to six
    /// fractional digits.
    pub fn from_unix_millis(millis: i64) -> Result<Self> {
        if millis < EPOCH_UNIX_MS {
            return Err(RotationError::InvalidDate {
                input: format!("{millis} ms precedes 0001-01-01T00:00:00Z"),
            });
        }
        let elapsed = millis
            .checked_sub(EPOCH_UNIX_MS)
            .ok_or_else(|| RotationError::InvalidDate {
                input: format!("{millis} ms is out of range"),
            })?;
        let elapsed = Seconds::new(elapsed as f64 / 1_000.0);
        Ok(Self(round_micro(rotations_in(elapsed))))
    }

    /// Rotation count at `datetime`. Sub-millisecond precision is discarded.
    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Result<Self> {
        Self::from_unix_millis(datetime.timestamp_millis())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying count.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Unix timestamp in milliseconds, rounded to the nearest millisecond.
    pub fn to_unix_millis(&self) -> Result<i64> {
        let millis = (EPOCH_UNIX_MS as f64 + span_of(self.0).value() * 1_000.0).round();
        if millis.is_finite() && millis >= i64::MIN as f64 && millis <= i64::MAX as f64 {
            Ok(millis as i64)
        } else {
            Err(RotationError::InvalidRotations { value: self.0 })
        }
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Fails when the instant falls outside chrono's representable range.
    pub fn to_utc(&self) -> Result<DateTime<Utc>> {
        let millis = self.to_unix_millis()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or(RotationError::InvalidRotations { value: self.0 })
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for Rotations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format::format_rotations(self.0))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

impl Serialize for Rotations {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Rotations {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Self::new(v).map_err(serde::de::Error::custom)
    }
}

// ── Arithmetic / conversions ──────────────────────────────────────────────

impl Sub for Rotations {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl TryFrom<f64> for Rotations {
    type Error = RotationError;
    #[inline]
    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<DateTime<Utc>> for Rotations {
    type Error = RotationError;
    #[inline]
    fn try_from(datetime: DateTime<Utc>) -> Result<Self> {
        Self::from_utc(datetime)
    }
}

impl From<Rotations> for f64 {
    #[inline]
    fn from(rotations: Rotations) -> Self {
        rotations.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
