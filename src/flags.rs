// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opaque per-scope routing bits.

use bitflags::bitflags;

bitflags! {
    /// An opaque bitmask forwarded to the enablement policy and the backend.
    ///
    /// The facade assigns no meaning to any bit; consumers carve up the bit
    /// space by their own convention (subsystem routing, redaction classes,
    /// and so on) and interpret it in a custom policy or backend.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LogFlags: u32 {
        const _ = !0;
    }
}

impl Default for LogFlags {
    fn default() -> Self {
        LogFlags::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::LogFlags;

    #[test]
    fn all_bits_are_representable() {
        let flags = LogFlags::from_bits_retain(0xDEAD_BEEF);
        assert_eq!(flags.bits(), 0xDEAD_BEEF);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(LogFlags::default(), LogFlags::empty());
        assert_eq!(LogFlags::empty().bits(), 0);
    }
}
