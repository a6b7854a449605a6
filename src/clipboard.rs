// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clipboard capability.
//!
//! Two backends implement [`Clipboard`]:
//!
//! | Backend | Mechanism |
//! |---------|-----------|
//! | [`CommandClipboard`] | pipes the text into a platform tool (`pbcopy`, `wl-copy`, …) |
//! | [`Osc52Clipboard`] | emits an OSC 52 escape so the terminal sets its clipboard |
//!
//! [`copy_with_fallback`] tries a primary backend, then a fallback, and
//! reduces the outcome to a `bool`. Errors are logged, never returned.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::ClipboardError;

/// Something that can place text on a clipboard.
pub trait Clipboard: fmt::Debug {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Copy `text`.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Try `primary`, then `fallback`. `true` when either succeeded.
pub fn copy_with_fallback(primary: &dyn Clipboard, fallback: &dyn Clipboard, text: &str) -> bool {
    match primary.copy(text) {
        Ok(()) => {
            debug!(backend = primary.name(), "copied to clipboard");
            return true;
        }
        Err(err) => warn!(backend = primary.name(), error = %err, "clipboard copy failed"),
    }
    match fallback.copy(text) {
        Ok(()) => {
            debug!(backend = fallback.name(), "copied to clipboard");
            true
        }
        Err(err) => {
            warn!(backend = fallback.name(), error = %err, "fallback clipboard copy failed");
            false
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CommandClipboard
// ═══════════════════════════════════════════════════════════════════════════

/// A clipboard tool invocation that reads the text from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for ClipboardCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Platform clipboard through the first installed command-line tool.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    candidates: Vec<ClipboardCommand>,
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::platform()
    }
}

impl CommandClipboard {
    /// Tools tried in order for the current platform.
    pub fn platform() -> Self {
        let candidates = if cfg!(target_os = "macos") {
            vec![ClipboardCommand::new("pbcopy", &[])]
        } else if cfg!(windows) {
            vec![ClipboardCommand::new("clip.exe", &[])]
        } else {
            vec![
                ClipboardCommand::new("wl-copy", &[]),
                ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
                ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
                ClipboardCommand::new("clip.exe", &[]),
            ]
        };
        Self { candidates }
    }

    /// Explicit candidate list.
    pub fn with_commands(candidates: Vec<ClipboardCommand>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[ClipboardCommand] {
        &self.candidates
    }

    fn run(command: &ClipboardCommand, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            // A tool that exits early closes the pipe; its exit status decides.
            match stdin.write_all(text.as_bytes()) {
                Err(err) if err.kind() != io::ErrorKind::BrokenPipe => {
                    let _ = child.wait();
                    return Err(err.into());
                }
                _ => {}
            }
        }
        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Status {
                command: command.to_string(),
                status,
            })
        }
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        "command"
    }

    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        for command in &self.candidates {
            match Self::run(command, text) {
                Err(ClipboardError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                    debug!(%command, "clipboard tool not installed");
                }
                other => return other,
            }
        }
        Err(ClipboardError::NoBackend)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Osc52Clipboard
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal clipboard via the OSC 52 "set selection" escape sequence.
pub struct Osc52Clipboard {
    writer: Mutex<Box<dyn Write + Send>>,
    attached: bool,
}

impl fmt::Debug for Osc52Clipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Osc52Clipboard")
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl Osc52Clipboard {
    /// Writes to stdout; refuses to copy when stdout is not a terminal.
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            attached: io::stdout().is_terminal(),
        }
    }

    /// Writes the escape sequence to `writer` unconditionally.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            attached: true,
        }
    }

    /// The escape sequence that sets the system clipboard to `text`.
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl Clipboard for Osc52Clipboard {
    fn name(&self) -> &str {
        "osc52"
    }

    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.attached {
            return Err(ClipboardError::NoBackend);
        }
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("clipboard writer poisoned"))?;
        writer.write_all(Self::sequence(text).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
