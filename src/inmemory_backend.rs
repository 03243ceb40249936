// SPDX-License-Identifier: MIT OR Apache-2.0

//! An in-memory backend for tests and adversarial environments.
//!
//! [`InMemoryBackend`] captures rendered messages in memory instead of
//! writing them anywhere, which makes it the backend of choice for unit
//! tests that assert on log output, or for environments where stdout is
//! redirected or unavailable.
//!
//! It implements the same [`Backend`] contract as the bound backend; tests
//! construct one directly and feed it records through the trait:
//!
//! ```
//! use modlog::{Backend, InMemoryBackend, Level, LogFlags, LogRecord};
//!
//! let backend = InMemoryBackend::new();
//! let mut record = LogRecord::new(Level::Warn, LogFlags::empty(), "svc", "svc.rs", 3, "run");
//! record.log("something suspicious");
//! backend.log_record(record);
//!
//! assert!(backend.drain().contains("something suspicious"));
//! ```

use crate::backend::Backend;
use crate::log_record::LogRecord;
use std::sync::Mutex;

/// A backend that stores each record's message in a `Vec<String>`.
///
/// Thread-safe; all access to the captured messages goes through one
/// internal mutex.
#[derive(Debug)]
pub struct InMemoryBackend {
    messages: Mutex<Vec<String>>,
}

// Boilerplate notes: Clone is omitted on purpose; a capture buffer is a
// unique resource and duplicating it would split captures between copies.
// Equality and hashing over mutex state are not meaningful.

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    /// An empty capture buffer.
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Returns all captured messages joined with newlines and clears the
    /// buffer.
    pub fn drain(&self) -> String {
        let mut messages = match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let drained = messages.join("\n");
        messages.clear();
        drained
    }

    /// The number of records captured since the last drain.
    pub fn len(&self) -> usize {
        match self.messages.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Backend for InMemoryBackend {
    fn log_record(&self, record: LogRecord) {
        let message = record.to_string();
        let mut messages = match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message);
    }

    fn flush(&self) {
        // Nothing buffered beyond the capture vector itself.
    }
}
