// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reference backend: one line per record to standard output.
//!
//! The message is rendered into a fixed 200-byte stack buffer first, so one
//! log statement costs one bounded render plus one locked write regardless
//! of how large the formatted values turn out to be. Messages that do not
//! fit are truncated (at a UTF-8 boundary) and still emitted; truncation
//! is accepted behavior, not a failure.
//!
//! The emitted line layout is a compatibility contract for log-scraping
//! consumers:
//!
//! ```text
//! <LEVEL_NAME> [<module> <function> <file>:<line>] : <message>
//! ```
//!
//! Output-stream write failures are counted into
//! [`diagnostics`](crate::diagnostics) and otherwise swallowed; nothing on
//! this path may disturb the calling application.

use crate::backend::Backend;
use crate::log_record::LogRecord;
use std::fmt::{self, Write as _};
use std::io::Write as _;

/// Capacity of the per-call message buffer, including the reserved byte.
///
/// One byte is reserved in the C tradition of the terminator, so the
/// longest emitted message is `MESSAGE_CAPACITY - 1` bytes.
pub const MESSAGE_CAPACITY: usize = 200;

/// A stack buffer that accepts `fmt::Write` and truncates instead of
/// failing when full.
struct MessageBuffer {
    buf: [u8; MESSAGE_CAPACITY],
    len: usize,
    truncated: bool,
}

impl MessageBuffer {
    const fn new() -> Self {
        Self {
            buf: [0; MESSAGE_CAPACITY],
            len: 0,
            truncated: false,
        }
    }

    fn as_str(&self) -> &str {
        // Writes only land on char boundaries, so this cannot fail; the
        // empty string is the defensive fallback.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    #[cfg(test)]
    fn truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let remaining = (MESSAGE_CAPACITY - 1) - self.len;
        if s.len() <= remaining {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
        } else {
            let mut cut = remaining;
            while cut > 0 && !s.is_char_boundary(cut) {
                cut -= 1;
            }
            self.buf[self.len..self.len + cut].copy_from_slice(&s.as_bytes()[..cut]);
            self.len += cut;
            self.truncated = true;
        }
        Ok(())
    }
}

/// Renders the full output line for one record.
pub(crate) fn render_line(record: &LogRecord) -> String {
    let mut message = MessageBuffer::new();
    for part in record.parts() {
        // MessageBuffer never errors; it truncates.
        let _ = message.write_str(part);
    }
    format!(
        "{} [{} {} {}:{}] : {}",
        record.level().name(),
        record.module(),
        record.function(),
        record.file(),
        record.line(),
        message.as_str()
    )
}

/// The console backend bound by the `backend-console` feature.
#[derive(Debug, Clone)]
pub struct ConsoleBackend {}

// Boilerplate notes: zero-sized, so Copy/PartialEq/Eq/Hash are all trivially
// correct and implemented; Default mirrors new(). Display is not meaningful
// for a backend.

impl Copy for ConsoleBackend {}

impl PartialEq for ConsoleBackend {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ConsoleBackend {}

impl std::hash::Hash for ConsoleBackend {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBackend {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Backend for ConsoleBackend {
    fn log_record(&self, record: LogRecord) {
        let line = render_line(&record);
        let mut lock = std::io::stdout().lock();
        let wrote = lock
            .write_all(line.as_bytes())
            .and_then(|_| lock.write_all(b"\n"));
        if wrote.is_err() {
            crate::diagnostics::note_dropped();
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::{MESSAGE_CAPACITY, MessageBuffer, render_line};
    use crate::flags::LogFlags;
    use crate::level::Level;
    use crate::log_record::LogRecord;
    use std::fmt::Write as _;

    #[test]
    fn line_layout_matches_the_contract() {
        let mut record =
            LogRecord::new(Level::Info, LogFlags::empty(), "svc", "svc.c", 42, "run");
        record.log_owned(format!("{}", 3));
        record.log(" items");
        assert_eq!(render_line(&record), "INFO [svc run svc.c:42] : 3 items");
    }

    #[test]
    fn empty_module_name_still_renders() {
        let record = LogRecord::new(Level::Error, LogFlags::empty(), "", "lib.rs", 1, "f");
        assert_eq!(render_line(&record), "ERROR [ f lib.rs:1] : ");
    }

    #[test]
    fn over_long_messages_truncate_and_still_render() {
        let mut record =
            LogRecord::new(Level::Warn, LogFlags::empty(), "m", "m.rs", 9, "f");
        record.log_owned("x".repeat(MESSAGE_CAPACITY * 2));
        let line = render_line(&record);
        let message = line.rsplit(" : ").next().unwrap();
        assert_eq!(message.len(), MESSAGE_CAPACITY - 1);
        assert!(line.starts_with("WARNING [m f m.rs:9] : "));
    }

    #[test]
    fn buffer_fills_to_exactly_capacity_minus_one() {
        let mut buffer = MessageBuffer::new();
        buffer.write_str(&"a".repeat(MESSAGE_CAPACITY - 1)).unwrap();
        assert!(!buffer.truncated());
        assert_eq!(buffer.as_str().len(), MESSAGE_CAPACITY - 1);

        buffer.write_str("b").unwrap();
        assert!(buffer.truncated());
        assert_eq!(buffer.as_str().len(), MESSAGE_CAPACITY - 1);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut buffer = MessageBuffer::new();
        buffer.write_str(&"a".repeat(MESSAGE_CAPACITY - 2)).unwrap();
        // A two-byte char cannot fit in the single remaining byte.
        buffer.write_str("é").unwrap();
        assert!(buffer.truncated());
        assert_eq!(buffer.as_str().len(), MESSAGE_CAPACITY - 2);
        assert!(buffer.as_str().is_char_boundary(buffer.as_str().len()));
    }

    #[test]
    fn writes_after_truncation_are_ignored() {
        let mut buffer = MessageBuffer::new();
        buffer.write_str(&"a".repeat(MESSAGE_CAPACITY)).unwrap();
        buffer.write_str("never lands").unwrap();
        assert_eq!(buffer.as_str().len(), MESSAGE_CAPACITY - 1);
    }

    #[test]
    fn multi_part_messages_join_without_separators() {
        let mut record =
            LogRecord::new(Level::Debug, LogFlags::empty(), "m", "m.rs", 2, "f");
        record.log("one");
        record.log("two");
        assert!(render_line(&record).ends_with(" : onetwo"));
    }
}
