// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Earth Rotation Counter
//!
//! Counts how many times the Earth has turned on its axis since
//! 0001-01-01T00:00:00Z, taking one rotation to be one sidereal day of
//! exactly 86 164 s (23 h 56 m 4 s). No ΔT, leap seconds, or other
//! astronomical refinements are applied.
//!
//! # Core types
//!
//! - [`Rotations`] — validated, non-negative rotation count.
//! - [`RotationCalculator`] — date ↔ rotation conversion bound to a [`Clock`].
//! - [`TauntGenerator`] — taunt phrases and clipboard copy.
//! - [`Clipboard`] — capability implemented by [`CommandClipboard`] and
//!   [`Osc52Clipboard`].
//! - [`DisplayFormat`] — integer or six-decimal rendering of a count.
//!
//! # Constants
//!
//! | Constant | Value |
//! |----------|-------|
//! | [`SIDEREAL_DAY_MS`] | 86 164 000 ms |
//! | [`EPOCH_UNIX_MS`] | −62 135 596 800 000 ms (0001-01-01T00:00:00Z) |
//! | [`UNIX_EPOCH_ROTATIONS`] | ≈ 721 131.758 rotations at 1970-01-01T00:00:00Z |
//!
//! # Quick example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use earth_rotation::{format_rotations, RotationCalculator};
//!
//! let calc = RotationCalculator::new();
//! let t = Utc.with_ymd_and_hms(2025, 8, 6, 12, 34, 56).unwrap();
//! let r = calc.rotations_from_date(t).unwrap();
//! assert_eq!(format_rotations(r.value()), "741,493.901119 回転");
//! ```

pub mod calculator;
pub mod calendar;
pub mod cli;
pub mod clipboard;
pub mod clock;
pub mod config;
mod error;
pub mod format;
mod rotation;
pub mod taunt;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calculator::{parse_timestamp, RotationCalculator, Snapshot};
pub use calendar::{
    days_from_civil, EPOCH_UNIX_MS, SIDEREAL_DAY, SIDEREAL_DAY_MS, UNIX_EPOCH_ROTATIONS,
};
pub use clipboard::{
    copy_with_fallback, Clipboard, ClipboardCommand, CommandClipboard, Osc52Clipboard,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ClipboardError, Result, RotationError};
pub use format::{format_date_time, format_iso_date_time, format_rotations, DisplayFormat};
pub use rotation::{round_micro, Rotations};
pub use taunt::{weekday_name, Taunt, TauntGenerator, TauntZone};
