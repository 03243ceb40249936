// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-module logging configuration.
//!
//! A [`LogScope`] is the typed replacement for the classic
//! define-before-include configuration of C logging facades: every module
//! that logs declares one (via [`log_scope!`](crate::log_scope)) before its
//! first log statement, binding a module name, a verbosity threshold, a
//! flags bitmask, and an enablement policy. The binding is a `static`
//! resolved per module, so two modules with different declarations are
//! fully isolated and there is no runtime configuration state at all.
//!
//! Unconfigured options silently take their defaults: module name `""`,
//! threshold [`DEFAULT_LEVEL`], empty flags, [`threshold_policy`].

use crate::flags::LogFlags;
use crate::level::Level;

/// The baseline verbosity threshold for scopes that do not pin their own.
///
/// `Info` unless the `verbose-defaults` feature lowers it to `Debug`.
#[cfg(feature = "verbose-defaults")]
pub const DEFAULT_LEVEL: Level = Level::Debug;
#[cfg(not(feature = "verbose-defaults"))]
pub const DEFAULT_LEVEL: Level = Level::Info;

/// An enablement decision function.
///
/// Called as `(statement level, scope threshold, scope module, scope
/// flags)`. Must be pure: the facade evaluates it fresh on every statement
/// and assumes the answer is fixed per call site.
pub type EnablePolicy = fn(Level, Level, &str, LogFlags) -> bool;

/// The default policy: enabled iff `level >= threshold`.
pub fn threshold_policy(level: Level, threshold: Level, _module: &str, _flags: LogFlags) -> bool {
    level >= threshold
}

/// The configuration binding for one module.
///
/// Const-constructible so it can live in a `static`; the builder methods
/// are `const fn` and consume `self`, which keeps a declaration a single
/// expression:
///
/// ```
/// use modlog::{Level, LogScope};
///
/// static SCOPE: LogScope = LogScope::new("storage").with_min_level(Level::Debug);
/// assert!(SCOPE.enabled(Level::Debug));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogScope {
    module: &'static str,
    min_level: Level,
    flags: LogFlags,
    policy: EnablePolicy,
}

// Boilerplate notes: Clone/Copy are cheap (two words plus a fn pointer) and
// let call sites pass scopes by value. PartialEq is omitted on purpose; it
// would compare the policy fn pointer, which is not meaningful.

impl LogScope {
    /// A scope with the given module name and all other options defaulted.
    pub const fn new(module: &'static str) -> Self {
        Self {
            module,
            min_level: DEFAULT_LEVEL,
            flags: LogFlags::empty(),
            policy: threshold_policy,
        }
    }

    /// Overrides the verbosity threshold for this scope.
    pub const fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    /// Overrides the flags bitmask for this scope.
    pub const fn with_flags(mut self, flags: LogFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replaces the enablement policy for this scope.
    ///
    /// The replacement fully substitutes for [`threshold_policy`]; it may
    /// ignore the threshold entirely, route on module names, or interpret
    /// flag bits, without any change to the facade.
    pub const fn with_policy(mut self, policy: EnablePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether a statement at `level` is enabled in this scope.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        (self.policy)(level, self.min_level, self.module, self.flags)
    }

    /// The module name attached to every record from this scope.
    pub const fn module(&self) -> &'static str {
        self.module
    }

    /// The verbosity threshold the policy is consulted with.
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// The flags forwarded to the policy and the backend.
    pub const fn flags(&self) -> LogFlags {
        self.flags
    }
}

impl Default for LogScope {
    /// The all-defaults scope: anonymous module, [`DEFAULT_LEVEL`]
    /// threshold, empty flags, [`threshold_policy`].
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LEVEL, LogScope, threshold_policy};
    use crate::flags::LogFlags;
    use crate::level::Level;

    #[test]
    fn defaults_resolve_silently() {
        let scope = LogScope::default();
        assert_eq!(scope.module(), "");
        assert_eq!(scope.min_level(), DEFAULT_LEVEL);
        assert_eq!(scope.flags(), LogFlags::empty());
    }

    #[test]
    fn threshold_policy_splits_exactly_at_the_threshold() {
        let levels = [
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Critical,
        ];
        for threshold in levels {
            for level in levels {
                assert_eq!(
                    threshold_policy(level, threshold, "", LogFlags::empty()),
                    level >= threshold,
                    "level {level:?} against threshold {threshold:?}"
                );
            }
        }
    }

    #[test]
    fn min_level_override_gates_enablement() {
        let chatty = LogScope::new("chatty").with_min_level(Level::Debug);
        let quiet = LogScope::new("quiet").with_min_level(Level::Error);

        assert!(chatty.enabled(Level::Debug));
        assert!(!quiet.enabled(Level::Warn));
        assert!(quiet.enabled(Level::Error));
    }

    #[test]
    fn custom_policy_fully_replaces_the_threshold_rule() {
        fn flag_gate(_: Level, _: Level, _: &str, flags: LogFlags) -> bool {
            flags.bits() & 0x1 != 0
        }

        let off = LogScope::new("m").with_policy(flag_gate);
        let on = LogScope::new("m")
            .with_policy(flag_gate)
            .with_flags(LogFlags::from_bits_retain(0x1));

        // The statement level no longer matters at all.
        assert!(!off.enabled(Level::Critical));
        assert!(on.enabled(Level::Debug));
    }

    #[test]
    fn scopes_can_live_in_statics() {
        static SCOPE: LogScope = LogScope::new("static").with_min_level(Level::Warn);
        assert!(!SCOPE.enabled(Level::Info));
        assert!(SCOPE.enabled(Level::Warn));
    }
}
