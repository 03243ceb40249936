// SPDX-License-Identifier: MIT OR Apache-2.0

//! Support layer for the logging macros.
//!
//! The procedural macros in `modlog_proc` expand to calls into this module:
//! [`record_pre`] builds a [`LogRecord`] from the call site's scope and
//! location, [`Formatter`] writes the compile-time-parsed message into it,
//! and [`record_post`] hands the finished record to the bound backend. None
//! of these are meant to be called by hand, but they are ordinary public
//! functions (re-exported under `modlog::hidden`) so the expansion has
//! nothing magic in it.
//!
//! The declarative macros that bind configuration live here too:
//! [`log_scope!`](crate::log_scope) declares the per-module configuration
//! static the expansions resolve, and [`log_enabled!`](crate::log_enabled)
//! exposes the same enablement answer the expansions use.

use crate::backend::Backend;
use crate::log_record::LogRecord;
use crate::level::Level;
use crate::scope::LogScope;

/// Declares the logging configuration for the current module.
///
/// Every module that uses the logging macros must have a scope binding in
/// scope named `__MODLOG_SCOPE`, and this macro declares it. It must appear
/// before the first log statement of the module (in item position), the
/// analog of configuring a C logging facade before including its header.
/// Forgetting it is a compile error about `__MODLOG_SCOPE` not being found.
///
/// # Forms
///
/// ```
/// // All defaults: anonymous module, DEFAULT_LEVEL threshold, no flags.
/// mod plain {
///     modlog::log_scope!();
/// }
///
/// // Named module, everything else defaulted.
/// mod named {
///     modlog::log_scope!("net");
/// }
///
/// // Full control through the const builders.
/// mod tuned {
///     modlog::log_scope!(
///         modlog::LogScope::new("net")
///             .with_min_level(modlog::Level::Debug)
///             .with_flags(modlog::LogFlags::from_bits_retain(0x4))
///     );
/// }
/// ```
///
/// A submodule that should share its parent's configuration imports the
/// binding instead of declaring its own:
///
/// ```
/// mod outer {
///     modlog::log_scope!("outer");
///
///     mod inner {
///         #[allow(unused_imports)]
///         use super::__MODLOG_SCOPE;
///     }
/// }
/// ```
///
/// Each declaration is its own binding; modules configured differently are
/// fully isolated from each other.
#[macro_export]
macro_rules! log_scope {
    () => {
        $crate::log_scope!($crate::LogScope::new(""));
    };
    ($module:literal) => {
        $crate::log_scope!($crate::LogScope::new($module));
    };
    ($scope:expr) => {
        #[doc(hidden)]
        #[allow(unused)]
        pub(crate) static __MODLOG_SCOPE: $crate::LogScope = $scope;
    };
}

/// Returns whether a statement at the given level would be emitted from
/// the current module's scope.
///
/// Evaluates the same predicate the logging macros gate on, so callers can
/// skip expensive preparation work:
///
/// ```
/// modlog::log_scope!("report");
///
/// # fn build_expensive_summary() -> &'static str { "" }
/// if modlog::log_enabled!(modlog::Level::Debug) {
///     let summary = build_expensive_summary();
///     modlog::log_debug!("{summary}", summary = summary);
/// }
/// ```
#[macro_export]
macro_rules! log_enabled {
    ($level:expr) => {
        __MODLOG_SCOPE.enabled($level)
    };
}

/// Captures the name of the enclosing function.
///
/// There is no `function!()` in the standard library; this uses the type
/// name of a local item to recover the enclosing path, then keeps the last
/// segment. Inside a closure the segment is `{{closure}}`.
#[macro_export]
macro_rules! function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// Writes the compile-time-parsed message into a record.
///
/// The macro expansion alternates [`write_literal`](Self::write_literal)
/// for the fixed fragments of the format string and
/// [`write_val`](Self::write_val) for the `{key}` values.
pub struct Formatter<'a> {
    record: &'a mut LogRecord,
}

impl<'a> Formatter<'a> {
    #[inline]
    pub fn new(record: &'a mut LogRecord) -> Self {
        Self { record }
    }

    /// Appends a literal fragment of the format string.
    #[inline]
    pub fn write_literal(&mut self, s: &str) {
        self.record.log(s);
    }

    /// Renders one `{key}` value into the record.
    ///
    /// Rendering is fallible by contract: a `Display` impl may return
    /// `fmt::Error`. That marks the record malformed, so it will be counted
    /// and dropped by [`record_post`] instead of emitted, and never
    /// panics or reaches the caller.
    #[inline]
    pub fn write_val<V: std::fmt::Display>(&mut self, value: V) {
        use std::fmt::Write;
        let mut rendered = String::new();
        if write!(rendered, "{}", value).is_err() {
            self.record.mark_malformed();
            return;
        }
        self.record.log_owned(rendered);
    }
}

/// Builds the record for one enabled log statement.
///
/// Metadata comes from two places: the module's scope contributes the
/// module name and flags, the expansion contributes the file, line, and
/// enclosing function captured at the call site.
pub fn record_pre(
    level: Level,
    scope: &LogScope,
    file: &'static str,
    line: u32,
    function: &'static str,
) -> LogRecord {
    LogRecord::new(level, scope.flags(), scope.module(), file, line, function)
}

/// Hands a finished record to the bound backend.
///
/// Malformed records (a value failed to render) are counted into
/// [`diagnostics`](crate::diagnostics) and dropped here; nothing on this
/// path returns an error or panics.
pub fn record_post(record: LogRecord) {
    if record.is_malformed() {
        crate::diagnostics::note_dropped();
        return;
    }
    crate::backend::backend().log_record(record);
}
