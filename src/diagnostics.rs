// SPDX-License-Identifier: MIT OR Apache-2.0

//! Counters for log statements lost on the failure path.
//!
//! Logging is best-effort and may never disturb the caller, so the only
//! trace of a failed statement is a counter: a value whose `Display` impl
//! returned an error, or an output stream that refused the write, shows up
//! here instead of panicking or being silently forgotten. Operators can
//! poll [`dropped_records`] to tell "nothing logged" apart from "logging
//! is failing".
//!
//! Truncated messages are not counted; truncation emits and is accepted
//! behavior.

use std::sync::atomic::{AtomicU64, Ordering};

static DROPPED_RECORDS: AtomicU64 = AtomicU64::new(0);

/// Records one dropped log statement.
pub(crate) fn note_dropped() {
    DROPPED_RECORDS.fetch_add(1, Ordering::Relaxed);
}

/// The number of log statements dropped on the failure path since process
/// start.
pub fn dropped_records() -> u64 {
    DROPPED_RECORDS.load(Ordering::Relaxed)
}
