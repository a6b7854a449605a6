// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text rendering for rotation counts and calendar breakdowns.
//!
//! Numbers use `,` as the thousands separator and `.` as the decimal mark,
//! the same grouping Japanese locale formatting produces.

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::rotation::round_micro;

/// Unit appended to a fully formatted rotation count.
pub const ROTATION_UNIT: &str = "回転";

/// Fractional digits shown by [`format_rotations`].
pub const FRACTION_DIGITS: usize = 6;

const WEEKDAYS_SHORT: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Insert a `,` between every group of three integer digits.
///
/// Accepts an optional leading sign and an optional fractional part, which
/// is copied through untouched. Non-numeric text (`NaN`, `inf`) is returned
/// unchanged.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_string();
    }

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(frac_part);
    grouped
}

/// Grouped count with exactly six decimals (half away from zero), without
/// the unit.
pub fn format_decimal(rotations: f64) -> String {
    let rounded = round_micro(rotations);
    group_thousands(&format!("{rounded:.prec$}", prec = FRACTION_DIGITS))
}

/// Grouped count rounded to the nearest whole rotation (half away from zero).
pub fn format_nearest(rotations: f64) -> String {
    group_thousands(&format!("{:.0}", rotations.round()))
}

/// Grouped count of completed rotations (floor).
pub fn format_completed(rotations: f64) -> String {
    group_thousands(&format!("{:.0}", rotations.floor()))
}

/// `1234567.1234567` → `"1,234,567.123457 回転"`.
pub fn format_rotations(rotations: f64) -> String {
    format!("{} {}", format_decimal(rotations), ROTATION_UNIT)
}

/// How the live counter renders a rotation count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// Completed rotations only: `1,234,567`.
    #[default]
    Integer,
    /// Six decimals: `1,234,567.123456`.
    Decimal,
}

impl DisplayFormat {
    /// The other format.
    pub fn toggled(self) -> Self {
        match self {
            Self::Integer => Self::Decimal,
            Self::Decimal => Self::Integer,
        }
    }

    /// Render `rotations` in this format (no unit).
    pub fn format_rotation(self, rotations: f64) -> String {
        match self {
            Self::Integer => format_completed(rotations),
            Self::Decimal => format_decimal(rotations),
        }
    }
}

impl std::fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
        })
    }
}

/// Short Japanese weekday for `0` (Sunday) – `6` (Saturday), `?` otherwise.
pub fn weekday_short(day_of_week: usize) -> &'static str {
    WEEKDAYS_SHORT.get(day_of_week).copied().unwrap_or("?")
}

/// `2025年8月7日（木）12時34分56秒`, read in the zone carried by `datetime`.
pub fn format_date_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String {
    format!(
        "{}年{}月{}日（{}）{}時{}分{}秒",
        datetime.year(),
        datetime.month(),
        datetime.day(),
        weekday_short(datetime.weekday().num_days_from_sunday() as usize),
        datetime.hour(),
        datetime.minute(),
        datetime.second(),
    )
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
pub fn format_iso_date_time(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}
