// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date ↔ rotation conversion bound to a [`Clock`].
//!
//! Only [`RotationCalculator::current_rotations`] and
//! [`RotationCalculator::snapshot`] read the clock; every other operation is
//! a pure function of its arguments and may be called arbitrarily often.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, RotationError};
use crate::format::{format_date_time, format_rotations, DisplayFormat};
use crate::rotation::Rotations;

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as
/// midnight UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| RotationError::InvalidDate {
            input: input.to_string(),
        })
}

/// Everything the live counter shows for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub at: DateTime<Utc>,
    pub rotations: Rotations,
    pub formatted_rotations: String,
    pub formatted_date_time: String,
}

/// Converts between instants and cumulative sidereal rotations.
#[derive(Debug, Clone, Default)]
pub struct RotationCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl RotationCalculator<SystemClock> {
    /// Calculator reading the wall clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> RotationCalculator<C> {
    /// Calculator reading `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Rotations completed at `datetime`, rounded to six decimals.
    ///
    /// Fails with [`RotationError::InvalidDate`] for instants before
    /// 0001-01-01T00:00:00Z.
    pub fn rotations_from_date(&self, datetime: DateTime<Utc>) -> Result<Rotations> {
        let rotations = Rotations::from_utc(datetime)?;
        debug!(%datetime, rotations = rotations.value(), "date to rotations");
        Ok(rotations)
    }

    /// Like [`rotations_from_date`](Self::rotations_from_date) for textual
    /// input; unparseable text fails with [`RotationError::InvalidDate`].
    pub fn rotations_from_str(&self, input: &str) -> Result<Rotations> {
        self.rotations_from_date(parse_timestamp(input)?)
    }

    /// Instant at which `rotations` rotations are complete.
    ///
    /// Fails with [`RotationError::InvalidRotations`] when the count is
    /// negative, NaN, infinite, or beyond chrono's date range.
    pub fn date_from_rotations(&self, rotations: f64) -> Result<DateTime<Utc>> {
        let datetime = Rotations::new(rotations)?.to_utc()?;
        debug!(rotations, %datetime, "rotations to date");
        Ok(datetime)
    }

    /// Rotations completed at the clock's current reading.
    ///
    /// A clock set before year 1 yields [`Rotations::ZERO`].
    pub fn current_rotations(&self) -> Rotations {
        self.rotations_at_or_zero(self.clock.now())
    }

    fn rotations_at_or_zero(&self, now: DateTime<Utc>) -> Rotations {
        self.rotations_from_date(now).unwrap_or_else(|err| {
            warn!(%now, error = %err, "clock precedes the rotation epoch");
            Rotations::ZERO
        })
    }

    /// `"1,234,567.123456 回転"`.
    pub fn format_rotations(&self, rotations: f64) -> String {
        format_rotations(rotations)
    }

    /// Current instant, count and their rendered forms.
    ///
    /// The rotation text follows `format`; the date is broken down in UTC.
    pub fn snapshot(&self, format: DisplayFormat) -> Snapshot {
        let at = self.clock.now();
        let rotations = self.rotations_at_or_zero(at);
        Snapshot {
            at,
            rotations,
            formatted_rotations: format!(
                "{} {}",
                format.format_rotation(rotations.value()),
                crate::format::ROTATION_UNIT
            ),
            formatted_date_time: format_date_time(&at),
        }
    }
}
