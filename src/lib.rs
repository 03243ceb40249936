//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# modlog

modlog is a module-scoped, compile-time-configurable logging facade.

# The problem

General-purpose logging crates resolve their configuration at runtime: a
global max level, a registered logger, filter strings parsed from the
environment. On small targets that is cost and surface you do not want.
What you want is the classic embedded facade contract: every compilation
unit decides *at build time* what it is called, how verbose it is, and which
routing bits it carries, and a disabled statement costs nothing at all.

modlog keeps that contract, with Rust's tools instead of preprocessor text
substitution: the per-unit configuration is a typed const value, the
backend is bound per build by a cargo feature (no registration, no virtual
dispatch), and format strings are checked at compile time.

# The facade

Five statement macros, one per severity level:

| Macro           | Level    | Rendered name |
|-----------------|----------|---------------|
| `log_debug!`    | Debug    | `DEBUG`       |
| `log_info!`     | Info     | `INFO`        |
| `log_warn!`     | Warn     | `WARNING`     |
| `log_error!`    | Error    | `ERROR`       |
| `log_critical!` | Critical | `CRITICAL`    |

Every module that logs declares its configuration once, before its first
statement:

```rust
modlog::log_scope!(
    modlog::LogScope::new("net").with_min_level(modlog::Level::Debug)
);

fn accept(peer: &str) {
    modlog::log_info!("accepted {peer}", peer = peer);
}
```

A statement whose level does not pass the scope's policy is a strict no-op:
the value expressions on the right-hand side of each `key=value` argument
are never evaluated. Enablement is a pure function of the scope's constants,
replaceable per scope via [`LogScope::with_policy`].

# The backend

One backend is bound per build ([`Backend`] implemented by
[`BoundBackend`](crate::BoundBackend), selected by feature). The default
`backend-console` binding renders into a fixed 200-byte buffer and writes

```text
<LEVEL_NAME> [<module> <function> <file>:<line>] : <message>
```

to stdout, one line per record. Over-long messages truncate and still
emit. Nothing on the logging path panics or returns an error to the
caller; statements lost to genuine failures are counted in
[`diagnostics::dropped_records`].

# Testing

[`InMemoryBackend`] captures messages for assertions, the same pattern as
the console binding but into a drainable buffer:

```rust
use modlog::{Backend, InMemoryBackend, Level, LogFlags, LogRecord};

let backend = InMemoryBackend::new();
let mut record = LogRecord::new(Level::Info, LogFlags::empty(), "t", "t.rs", 1, "demo");
record.log("captured");
backend.log_record(record);
assert_eq!(backend.drain(), "captured");
```
*/

mod backend;
mod console_backend;
pub mod diagnostics;
mod flags;
pub mod greeting;
mod inmemory_backend;
mod level;
mod log_record;
mod macros;
mod scope;

pub use backend::{Backend, BoundBackend, backend};
pub use console_backend::{ConsoleBackend, MESSAGE_CAPACITY};
pub use flags::LogFlags;
pub use greeting::Greeter;
pub use inmemory_backend::InMemoryBackend;
pub use level::{Level, level_name};
pub use log_record::LogRecord;
pub use scope::{DEFAULT_LEVEL, EnablePolicy, LogScope, threshold_policy};

pub use modlog_proc::{log_critical, log_debug, log_error, log_info, log_warn, mformat};

#[doc(hidden)]
pub mod hidden {
    pub use crate::macros::{Formatter, record_post, record_pre};
}

extern crate self as modlog;
