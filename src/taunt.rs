// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Taunt phrases: an instant spelled out down to the second, followed by the
//! rotation count at that instant.
//!
//! ```text
//! いつ？2025年1月5日日曜日？1時2分3秒？地球が1,000回転したとき！
//! ```

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::calculator::RotationCalculator;
use crate::clipboard::{copy_with_fallback, Clipboard, CommandClipboard, Osc52Clipboard};
use crate::clock::Clock;
use crate::format::format_nearest;
use crate::rotation::Rotations;

/// Full Japanese weekday names, Sunday first.
pub const WEEKDAYS_JA: [&str; 7] = [
    "日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日",
];

/// Returned for a day-of-week index outside `0..7`.
pub const WEEKDAY_PLACEHOLDER: &str = "曜日";

/// Weekday name for `0` (Sunday) – `6` (Saturday).
pub fn weekday_name(day_of_week: usize) -> &'static str {
    WEEKDAYS_JA
        .get(day_of_week)
        .copied()
        .unwrap_or(WEEKDAY_PLACEHOLDER)
}

/// Zone in which a taunt reads the calendar breakdown.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TauntZone {
    Utc,
    #[default]
    Local,
}

/// A generated phrase with the inputs that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Taunt {
    pub phrase: String,
    pub timestamp: DateTime<Utc>,
    pub rotations: Rotations,
}

/// Builds taunt phrases and copies them to the clipboard.
#[derive(Debug)]
pub struct TauntGenerator {
    primary: Box<dyn Clipboard>,
    fallback: Box<dyn Clipboard>,
}

impl Default for TauntGenerator {
    /// Platform clipboard tool, falling back to OSC 52 on stdout.
    fn default() -> Self {
        Self::new(
            Box::new(CommandClipboard::platform()),
            Box::new(Osc52Clipboard::stdout()),
        )
    }
}

impl TauntGenerator {
    pub fn new(primary: Box<dyn Clipboard>, fallback: Box<dyn Clipboard>) -> Self {
        Self { primary, fallback }
    }

    /// Phrase for `datetime` with the count rounded to the nearest rotation.
    ///
    /// Date and time fields are read in `datetime`'s own zone.
    pub fn generate_taunt<Tz: TimeZone>(
        &self,
        datetime: &DateTime<Tz>,
        rotations: Rotations,
    ) -> String {
        self.generate_taunt_with_formatted_rotations(datetime, &format_nearest(rotations.value()))
    }

    /// Phrase for `datetime` with a caller-formatted count.
    pub fn generate_taunt_with_formatted_rotations<Tz: TimeZone>(
        &self,
        datetime: &DateTime<Tz>,
        formatted_rotations: &str,
    ) -> String {
        format!(
            "いつ？{}年{}月{}日{}？{}時{}分{}秒？地球が{}回転したとき！",
            datetime.year(),
            datetime.month(),
            datetime.day(),
            weekday_name(datetime.weekday().num_days_from_sunday() as usize),
            datetime.hour(),
            datetime.minute(),
            datetime.second(),
            formatted_rotations,
        )
    }

    /// Taunt for the calculator's current instant.
    pub fn taunt_now<C: Clock>(
        &self,
        calculator: &RotationCalculator<C>,
        zone: TauntZone,
    ) -> Taunt {
        let timestamp = calculator.clock().now();
        self.taunt_at(calculator, timestamp, zone)
    }

    /// Taunt for `timestamp`; a pre-epoch timestamp counts as zero rotations.
    pub fn taunt_at<C: Clock>(
        &self,
        calculator: &RotationCalculator<C>,
        timestamp: DateTime<Utc>,
        zone: TauntZone,
    ) -> Taunt {
        let rotations = calculator
            .rotations_from_date(timestamp)
            .unwrap_or(Rotations::ZERO);
        let phrase = match zone {
            TauntZone::Utc => self.generate_taunt(&timestamp, rotations),
            TauntZone::Local => self.generate_taunt(&timestamp.with_timezone(&Local), rotations),
        };
        Taunt {
            phrase,
            timestamp,
            rotations,
        }
    }

    /// Copy `text`, trying the primary clipboard then the fallback.
    ///
    /// Never fails: every error is logged and reported as `false`.
    pub fn copy_to_clipboard(&self, text: &str) -> bool {
        copy_with_fallback(self.primary.as_ref(), self.fallback.as_ref(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::ClipboardError;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct Recorder {
        ok: bool,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Clipboard for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            self.log.lock().unwrap().push(text.to_string());
            if self.ok {
                Ok(())
            } else {
                Err(ClipboardError::NoBackend)
            }
        }
    }

    fn generator(primary_ok: bool, fallback_ok: bool) -> (TauntGenerator, Recorder, Recorder) {
        let primary = Recorder {
            ok: primary_ok,
            log: Arc::default(),
        };
        let fallback = Recorder {
            ok: fallback_ok,
            log: Arc::default(),
        };
        let generator = TauntGenerator::new(Box::new(primary.clone()), Box::new(fallback.clone()));
        (generator, primary, fallback)
    }

    #[test]
    fn exact_template() {
        let (taunt, _, _) = generator(true, true);
        let dt = Utc.with_ymd_and_hms(2025, 1, 5, 1, 2, 3).unwrap();
        let phrase = taunt.generate_taunt(&dt, Rotations::new(1_000.0).unwrap());
        assert_eq!(
            phrase,
            "いつ？2025年1月5日日曜日？1時2分3秒？地球が1,000回転したとき！"
        );
        assert!(phrase.contains("2025年1月5日"));
        assert!(phrase.contains("時2分3秒"));
        assert!(phrase.contains("1,000回転"));
    }

    #[test]
    fn rotations_are_rounded_not_truncated() {
        let (taunt, _, _) = generator(true, true);
        let dt = Utc.with_ymd_and_hms(2025, 8, 6, 12, 34, 56).unwrap();
        let up = taunt.generate_taunt(&dt, Rotations::new(741_493.901_119).unwrap());
        assert!(up.ends_with("地球が741,494回転したとき！"));
        let down = taunt.generate_taunt(&dt, Rotations::new(741_493.4).unwrap());
        assert!(down.ends_with("地球が741,493回転したとき！"));
    }

    #[test]
    fn breakdown_follows_zone() {
        let (taunt, _, _) = generator(true, true);
        let jst = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
        let dt = Utc
            .with_ymd_and_hms(2025, 1, 4, 16, 2, 3)
            .unwrap()
            .with_timezone(&jst);
        let phrase = taunt.generate_taunt(&dt, Rotations::new(1_000.0).unwrap());
        assert!(phrase.starts_with("いつ？2025年1月5日日曜日？1時2分3秒？"));
    }

    #[test]
    fn preformatted_rotations() {
        let (taunt, _, _) = generator(true, true);
        let dt = Utc.with_ymd_and_hms(2025, 8, 9, 23, 59, 59).unwrap();
        assert_eq!(
            taunt.generate_taunt_with_formatted_rotations(&dt, "741,497.123456"),
            "いつ？2025年8月9日土曜日？23時59分59秒？地球が741,497.123456回転したとき！"
        );
    }

    #[test]
    fn weekday_names() {
        assert_eq!(weekday_name(0), "日曜日");
        assert_eq!(weekday_name(3), "水曜日");
        assert_eq!(weekday_name(6), "土曜日");
        assert_eq!(weekday_name(7), WEEKDAY_PLACEHOLDER);
    }

    #[test]
    fn taunt_now_uses_calculator_clock() {
        let (taunt, _, _) = generator(true, true);
        let now = Utc.with_ymd_and_hms(2025, 1, 5, 1, 2, 3).unwrap();
        let calc = RotationCalculator::with_clock(FixedClock(now));
        let result = taunt.taunt_now(&calc, TauntZone::Utc);
        assert_eq!(result.timestamp, now);
        assert_eq!(result.rotations, calc.rotations_from_date(now).unwrap());
        assert!(result.phrase.starts_with("いつ？2025年1月5日日曜日？1時2分3秒？"));
    }

    #[test]
    fn local_zone_reads_local_fields() {
        let (taunt, _, _) = generator(true, true);
        let at = Utc.with_ymd_and_hms(2025, 1, 4, 23, 30, 0).unwrap();
        let calc = RotationCalculator::with_clock(FixedClock(at));
        let rotations = calc.rotations_from_date(at).unwrap();

        let result = taunt.taunt_at(&calc, at, TauntZone::Local);
        let expected = taunt.generate_taunt(&at.with_timezone(&Local), rotations);
        assert_eq!(result.phrase, expected);
        assert_eq!(result.rotations, rotations);
        assert_eq!(TauntZone::default(), TauntZone::Local);
    }

    #[test]
    fn copy_primary_success() {
        let (taunt, primary, fallback) = generator(true, true);
        assert!(taunt.copy_to_clipboard("phrase"));
        assert_eq!(primary.log.lock().unwrap().len(), 1);
        assert!(fallback.log.lock().unwrap().is_empty());
    }

    #[test]
    fn copy_falls_back() {
        let (taunt, primary, fallback) = generator(false, true);
        assert!(taunt.copy_to_clipboard("phrase"));
        assert_eq!(primary.log.lock().unwrap().len(), 1);
        assert_eq!(fallback.log.lock().unwrap().as_slice(), ["phrase".to_string()]);
    }

    #[test]
    fn copy_reports_total_failure() {
        let (taunt, _, fallback) = generator(false, false);
        assert!(!taunt.copy_to_clipboard("phrase"));
        assert_eq!(fallback.log.lock().unwrap().len(), 1);
    }
}
