// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests of the facade macros against declared scopes.

use modlog::Level;

modlog::log_scope!(modlog::LogScope::new("facade").with_min_level(modlog::Level::Debug));

mod quiet {
    // Only critical statements pass in this module.
    modlog::log_scope!(
        modlog::LogScope::new("quiet").with_min_level(modlog::Level::Critical)
    );

    /// Logs below the threshold with a side-effecting value expression and
    /// reports whether the expression ran.
    pub fn probe_disabled_statement() -> bool {
        let mut evaluated = false;
        modlog::log_info!("{value}", value = {
            evaluated = true;
            42
        });
        evaluated
    }

    pub fn debug_enabled() -> bool {
        modlog::log_enabled!(modlog::Level::Debug)
    }
}

mod chatty {
    modlog::log_scope!(
        modlog::LogScope::new("chatty").with_min_level(modlog::Level::Debug)
    );

    pub fn debug_enabled() -> bool {
        modlog::log_enabled!(modlog::Level::Debug)
    }
}

#[test]
fn log_enabled_reflects_this_scope() {
    assert!(modlog::log_enabled!(Level::Debug));
    assert!(modlog::log_enabled!(Level::Critical));
}

#[test]
fn disabled_statements_do_not_evaluate_their_arguments() {
    assert!(!quiet::probe_disabled_statement());
}

#[test]
fn enabled_statements_do_evaluate_their_arguments() {
    let mut evaluated = false;
    modlog::log_info!("{value}", value = {
        evaluated = true;
        42
    });
    assert!(evaluated);
}

#[test]
fn sibling_modules_are_isolated() {
    // Same crate, same build, different per-module bindings.
    assert!(chatty::debug_enabled());
    assert!(!quiet::debug_enabled());
}

#[test]
fn statements_at_every_level_compile_and_run() {
    modlog::log_debug!("debug from {who}", who = "facade");
    modlog::log_info!("info from {who}", who = "facade");
    modlog::log_warn!("warn from {who}", who = "facade");
    modlog::log_error!("error from {who}", who = "facade");
    modlog::log_critical!("critical from {who}", who = "facade");
}
