// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels for the modlog facade.
//!
//! Levels are totally ordered by numeric rank, `Debug` lowest. The rank is
//! stable and part of the wire-adjacent surface: [`Level::raw`] and
//! [`Level::from_raw`] convert to and from it, and [`level_name`] maps any
//! raw value to a display name, with out-of-range values mapping to the
//! empty string rather than an error.

/// An ordered severity level.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Detailed diagnostics, off by default.
    Debug = 1,
    /// Routine operational messages.
    Info = 2,
    /// Suspicious condition, execution continues.
    Warn = 3,
    /// Operation failed.
    Error = 4,
    /// The system cannot continue normally.
    Critical = 5,
}

impl Level {
    /// The display name used in rendered log lines.
    ///
    /// Note `Warn` renders as `"WARNING"`, which log-scraping consumers
    /// depend on.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// The numeric rank of this level.
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Converts a numeric rank back to a level.
    pub const fn from_raw(raw: u8) -> Option<Level> {
        match raw {
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            5 => Some(Level::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a raw rank to its display name.
///
/// Out-of-range values map to `""`; an unknown rank is a defensive default,
/// not a fault.
pub const fn level_name(raw: u8) -> &'static str {
    match Level::from_raw(raw) {
        Some(level) => level.name(),
        None => "",
    }
}
