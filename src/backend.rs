// SPDX-License-Identifier: MIT OR Apache-2.0

//! The backend dispatch contract and the build's single bound backend.
//!
//! Exactly one backend is bound per build, selected by a cargo feature and
//! resolved to a concrete type at compile time. There is no runtime
//! registration and no virtual dispatch: [`backend()`] returns a
//! `&'static` of the concrete [`BoundBackend`] type, so every dispatch
//! monomorphizes to a direct call. Building with no backend feature is a
//! compile error rather than a silently log-less binary.

use crate::log_record::LogRecord;
use std::fmt::Debug;

/// The contract any backend must satisfy to render and emit records.
pub trait Backend: Debug + Send + Sync {
    /// Renders and emits one record.
    ///
    /// Must be best-effort: failures are counted or swallowed inside the
    /// backend, never panicked or returned. Ordering between concurrent
    /// callers is whatever the backend's output primitive provides.
    fn log_record(&self, record: LogRecord);

    /// Pushes any buffered output out, e.g. before process exit.
    fn flush(&self);
}

/// The backend type this build is bound to.
#[cfg(feature = "backend-console")]
pub type BoundBackend = crate::console_backend::ConsoleBackend;

#[cfg(feature = "backend-console")]
static BACKEND: BoundBackend = BoundBackend::new();

#[cfg(not(feature = "backend-console"))]
compile_error!("no log backend bound: enable the `backend-console` feature");

/// The build's bound backend.
#[inline]
pub fn backend() -> &'static BoundBackend {
    &BACKEND
}
