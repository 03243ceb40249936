// SPDX-License-Identifier: MIT OR Apache-2.0

//! A toy greeting provider, used to exercise the logging facade.
//!
//! [`Greeter`] fills a caller-provided byte buffer with a configured
//! greeting, truncated to the buffer's capacity minus one and always
//! NUL-terminated. This is the fixed-buffer string contract common on embedded
//! targets. The message is bound at compile time through the const
//! constructors; there is no runtime configuration.

/// The greeting used when none is configured.
pub const DEFAULT_GREETING: &str = "Hello World";

/// Fills caller-provided buffers with a fixed greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greeter {
    message: &'static str,
}

impl Greeter {
    /// A greeter with [`DEFAULT_GREETING`].
    pub const fn new() -> Self {
        Self {
            message: DEFAULT_GREETING,
        }
    }

    /// A greeter with a custom compile-time message.
    pub const fn with_message(message: &'static str) -> Self {
        Self { message }
    }

    /// The configured greeting.
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Copies the greeting into `buffer`, NUL-terminated.
    ///
    /// At most `buffer.len() - 1` payload bytes are written, followed by a
    /// terminating `0`; a greeting that does not fit is truncated, not an
    /// error. Returns the number of payload bytes written.
    ///
    /// An empty buffer cannot hold the terminator; passing one is a caller
    /// bug surfaced by `debug_assert!`, and nothing is written.
    pub fn fill(&self, buffer: &mut [u8]) -> usize {
        debug_assert!(!buffer.is_empty(), "greeting buffer must hold at least the terminator");
        if buffer.is_empty() {
            return 0;
        }
        let payload = self.message.as_bytes();
        let written = payload.len().min(buffer.len() - 1);
        buffer[..written].copy_from_slice(&payload[..written]);
        buffer[written] = 0;
        written
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_GREETING, Greeter};

    #[test]
    fn fills_the_default_greeting() {
        let mut buffer = [0xFFu8; 32];
        let written = Greeter::new().fill(&mut buffer);
        assert_eq!(written, DEFAULT_GREETING.len());
        assert_eq!(&buffer[..written], DEFAULT_GREETING.as_bytes());
        assert_eq!(buffer[written], 0);
    }

    #[test]
    fn custom_messages_bind_at_construction() {
        let greeter = Greeter::with_message("Hei Verden");
        assert_eq!(greeter.message(), "Hei Verden");

        let mut buffer = [0u8; 32];
        let written = greeter.fill(&mut buffer);
        assert_eq!(&buffer[..written], b"Hei Verden");
    }

    #[test]
    fn never_writes_past_capacity_minus_one() {
        let greeter = Greeter::new();
        for capacity in 1..=DEFAULT_GREETING.len() + 4 {
            let mut buffer = vec![0xFFu8; capacity];
            let written = greeter.fill(&mut buffer);

            assert!(written <= capacity - 1);
            assert_eq!(buffer[written], 0, "terminator at capacity {capacity}");
            assert_eq!(&buffer[..written], &DEFAULT_GREETING.as_bytes()[..written]);
            // Bytes past the terminator are untouched.
            for &byte in &buffer[written + 1..] {
                assert_eq!(byte, 0xFF);
            }
        }
    }

    #[test]
    fn capacity_one_writes_only_the_terminator() {
        let mut buffer = [0xFFu8; 1];
        let written = Greeter::new().fill(&mut buffer);
        assert_eq!(written, 0);
        assert_eq!(buffer[0], 0);
    }
}
