//SPDX-License-Identifier: MIT OR Apache-2.0

//! # modlog procedural macros
//!
//! This crate provides the per-level logging macros for the modlog facade,
//! generating the enablement check and formatter calls at compile time.
//!
//! ## Architecture
//!
//! Every macro expands to the same three-phase pattern:
//! 1. **Gate**: the whole statement sits behind
//!    `__MODLOG_SCOPE.enabled(level)`, so a disabled statement evaluates
//!    nothing, including the value expressions.
//! 2. **Pre-phase**: `modlog::hidden::record_pre()` builds a `LogRecord`
//!    carrying the scope's module name and flags plus the call site's file,
//!    line, and enclosing function name.
//! 3. **Format + post-phase**: the format string's `{key}` placeholders
//!    become `Formatter::write_literal()`/`write_val()` calls, then
//!    `modlog::hidden::record_post()` hands the record to the bound backend.
//!
//! `__MODLOG_SCOPE` is resolved at the call site; it is declared by
//! `modlog::log_scope!` in each module that logs. Forgetting the
//! declaration is a compile error about `__MODLOG_SCOPE` not being found.
//!
//! ## Usage Example
//!
//! ```ignore
//! // This macro call:
//! // modlog::log_info!("user {name} has {count} items", name="alice", count=42);
//!
//! // Expands to approximately:
//! // {
//! //     if __MODLOG_SCOPE.enabled(modlog::Level::Info) {
//! //         let mut record = modlog::hidden::record_pre(
//! //             modlog::Level::Info, &__MODLOG_SCOPE,
//! //             file!(), line!(), modlog::function_path!());
//! //         let mut formatter = modlog::hidden::Formatter::new(&mut record);
//! //         formatter.write_literal("user ");
//! //         formatter.write_val("alice");
//! //         formatter.write_literal(" has ");
//! //         formatter.write_val(42);
//! //         formatter.write_literal(" items");
//! //         modlog::hidden::record_post(record);
//! //     }
//! // }
//! ```

use proc_macro::TokenStream;
use std::collections::VecDeque;

mod parser;

use parser::format_impl;

fn expand_level(input: TokenStream, level: &str) -> TokenStream {
    let mut input: VecDeque<_> = input.into_iter().collect();
    let plan = format_impl(&mut input, "formatter");
    let src = format!(
        r#"
        {{
            if __MODLOG_SCOPE.enabled(modlog::Level::{level}) {{
                let mut record = modlog::hidden::record_pre(
                    modlog::Level::{level},
                    &__MODLOG_SCOPE,
                    file!(),
                    line!(),
                    modlog::function_path!(),
                );
                let mut formatter = modlog::hidden::Formatter::new(&mut record);
                {expand}
                modlog::hidden::record_post(record);
            }}
        }}
    "#,
        level = level,
        expand = plan.output
    );
    src.parse().unwrap()
}

/// Low-level macro expanding a format string into formatter calls.
///
/// `mformat!(formatter, "text {key}", key=value)` expands to
/// `formatter.write_literal("text ")` / `formatter.write_val(value)` call
/// sequences against any object with those two methods. The per-level log
/// macros build on the same expansion; `mformat!` is exposed for advanced
/// uses and for testing the expansion itself.
#[proc_macro]
pub fn mformat(input: TokenStream) -> TokenStream {
    let mut collect: VecDeque<_> = input.into_iter().collect();

    let formatter = match collect.pop_front() {
        Some(proc_macro::TokenTree::Ident(i)) => i.to_string(),
        _ => {
            return r#"compile_error!("mformat!() must be called with a formatter ident")"#
                .parse()
                .unwrap();
        }
    };
    match collect.pop_front() {
        Some(proc_macro::TokenTree::Punct(p)) if p.as_char() == ',' => {}
        _ => {
            return r#"compile_error!("expected ',' after the formatter ident")"#
                .parse()
                .unwrap();
        }
    }

    format_impl(&mut collect, &formatter).output
}

/// Emits a debug-level log statement.
///
/// ```ignore
/// modlog::log_scope!("net");
/// modlog::log_debug!("connecting to {peer}", peer=addr);
/// ```
#[proc_macro]
pub fn log_debug(input: TokenStream) -> TokenStream {
    expand_level(input, "Debug")
}

/// Emits an info-level log statement.
///
/// ```ignore
/// modlog::log_scope!("net");
/// modlog::log_info!("listening on {port}", port=8080);
/// ```
#[proc_macro]
pub fn log_info(input: TokenStream) -> TokenStream {
    expand_level(input, "Info")
}

/// Emits a warn-level log statement.
///
/// ```ignore
/// modlog::log_scope!("net");
/// modlog::log_warn!("retrying after {err}", err=e);
/// ```
#[proc_macro]
pub fn log_warn(input: TokenStream) -> TokenStream {
    expand_level(input, "Warn")
}

/// Emits an error-level log statement.
///
/// ```ignore
/// modlog::log_scope!("net");
/// modlog::log_error!("handshake failed: {err}", err=e);
/// ```
#[proc_macro]
pub fn log_error(input: TokenStream) -> TokenStream {
    expand_level(input, "Error")
}

/// Emits a critical-level log statement.
///
/// ```ignore
/// modlog::log_scope!("net");
/// modlog::log_critical!("out of descriptors: {used}/{max}", used=u, max=m);
/// ```
#[proc_macro]
pub fn log_critical(input: TokenStream) -> TokenStream {
    expand_level(input, "Critical")
}
