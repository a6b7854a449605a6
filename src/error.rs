// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for rotation conversion and clipboard access.

use thiserror::Error;

/// Invalid input handed to a rotation conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    /// The timestamp could not be parsed or lies before the rotation epoch.
    #[error("無効な日時が指定されました: {input}")]
    InvalidDate { input: String },

    /// The rotation count is negative, NaN, infinite, or maps outside the
    /// representable date range.
    #[error("無効な回転数が指定されました: {value}")]
    InvalidRotations { value: f64 },
}

/// Failure of a single clipboard backend.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard backend available")]
    NoBackend,

    #[error("clipboard I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard command `{command}` exited with {status}")]
    Status { command: String, status: std::process::ExitStatus },
}

pub type Result<T> = std::result::Result<T, RotationError>;
